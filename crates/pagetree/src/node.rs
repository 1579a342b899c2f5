//! Output route nodes and their hidden metadata
//!
//! A [`RouteNode`] has the public shape a client-side router consumes:
//! `path`, optional `children`, optional loader handle. Compiler metadata
//! lives in a private [`RouteMeta`] slot that serialization skips and
//! equality ignores, so it can never leak into the route objects.

use serde::{Deserialize, Serialize};

/// What produced a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Path container for a literal or parameter directory
    #[default]
    Directory,
    /// Route group, optionally backed by the group's layout
    Group,
    /// Inner node backed by a non-group directory's layout
    Layout,
    /// Directory's index file
    Index,
    /// Ordinary page file
    Leaf,
}

/// Per-node metadata for downstream generators
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub(crate) source_path: String,
    pub(crate) full_path: String,
    pub(crate) is_sync: Option<bool>,
    pub(crate) kind: NodeKind,
    pub(crate) segment: Option<String>,
    /// Discovery ordinal, used as the stable tie-break when sequencing
    pub(crate) order: usize,
}

impl RouteMeta {
    /// Virtual path of the backing file, or of the directory for pure wrappers
    pub fn source_path(&self) -> &str {
        &self.source_path
    }

    /// Absolute URL path implied by the node's position
    pub fn full_path(&self) -> &str {
        &self.full_path
    }

    /// Effective sync flag after propagation; `None` when nothing decided it
    pub fn is_sync(&self) -> Option<bool> {
        self.is_sync
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Raw directory or file name the node came from, e.g. `(main)` or `[id]`
    pub fn segment(&self) -> Option<&str> {
        self.segment.as_deref()
    }
}

/// One route in the compiled tree
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode<H> {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<RouteNode<H>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader_handle: Option<H>,
    #[serde(skip)]
    meta: RouteMeta,
}

impl<H> RouteNode<H> {
    pub(crate) fn new(path: impl Into<String>, loader_handle: Option<H>, meta: RouteMeta) -> Self {
        Self {
            path: path.into(),
            children: None,
            loader_handle,
            meta,
        }
    }

    pub(crate) fn with_children(mut self, children: Vec<RouteNode<H>>) -> Self {
        self.children = Some(children);
        self
    }

    pub(crate) fn meta_mut(&mut self) -> &mut RouteMeta {
        &mut self.meta
    }

    pub fn meta(&self) -> &RouteMeta {
        &self.meta
    }

    /// Children as a slice (empty when the node has no `children` field)
    pub fn child_nodes(&self) -> &[RouteNode<H>] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Name used when listing siblings: the group name for groups, `path` otherwise
    pub fn display_name(&self) -> &str {
        match (self.meta.kind, self.meta.segment()) {
            (NodeKind::Group, Some(segment)) => segment,
            _ => self.path.as_str(),
        }
    }

    /// Pre-order walk over this node and its descendants with their depth
    ///
    /// ```
    /// use pagetree::{compile, CompileOptions};
    ///
    /// let compiled = compile([("./pages/add/index", ())], &CompileOptions::default()).unwrap();
    /// let full_paths: Vec<&str> = compiled.roots[0]
    ///     .walk()
    ///     .map(|(_, node)| node.meta().full_path())
    ///     .collect();
    /// assert_eq!(full_paths, vec!["/add", "/add/"]);
    /// ```
    pub fn walk(&self) -> Walk<'_, H> {
        Walk {
            stack: vec![(0, self)],
        }
    }

    /// Borrowed view that serializes the route shape together with its metadata
    pub fn manifest(&self) -> ManifestNode<'_, H> {
        ManifestNode {
            path: &self.path,
            full_path: &self.meta.full_path,
            source_path: &self.meta.source_path,
            kind: self.meta.kind,
            is_sync: self.meta.is_sync,
            loader_handle: self.loader_handle.as_ref(),
            children: self
                .children
                .as_ref()
                .map(|children| children.iter().map(RouteNode::manifest).collect()),
        }
    }
}

// Equality compares the public route shape only.
impl<H: PartialEq> PartialEq for RouteNode<H> {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.children == other.children
            && self.loader_handle == other.loader_handle
    }
}

impl<H: Eq> Eq for RouteNode<H> {}

/// Lazy pre-order iterator returned by [`RouteNode::walk`]
pub struct Walk<'a, H> {
    stack: Vec<(usize, &'a RouteNode<H>)>,
}

impl<'a, H> Iterator for Walk<'a, H> {
    type Item = (usize, &'a RouteNode<H>);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack
            .extend(node.child_nodes().iter().rev().map(|child| (depth + 1, child)));
        Some((depth, node))
    }
}

/// Serializable route node including metadata
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestNode<'a, H> {
    pub path: &'a str,
    pub full_path: &'a str,
    pub source_path: &'a str,
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sync: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader_handle: Option<&'a H>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<ManifestNode<'a, H>>>,
}
