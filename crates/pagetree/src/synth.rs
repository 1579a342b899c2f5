//! Node synthesis: directory records → route nodes
//!
//! Per directory:
//! - group: one node at `path = ""`, backed by the layout if there is one
//! - otherwise: a wrapper at `path = label`; with a layout, an inner node at
//!   `path = ""` backed by it becomes the wrapper's only child and takes the
//!   remaining children
//! - index file: a `path = ""` node among the children
//! - regular files and child directories: siblings among the children
//!
//! The root directory's wrapper is elided: its children are the forest.

use crate::index::{DirectoryRecord, FileRef, ROOT};
use crate::node::{NodeKind, RouteMeta, RouteNode};

struct Synthesizer<H> {
    records: Vec<Option<DirectoryRecord<H>>>,
}

fn file_node<H>(file: FileRef<H>, path: &str, kind: NodeKind, full_path: String) -> RouteNode<H> {
    let meta = RouteMeta {
        source_path: file.source_path,
        full_path,
        is_sync: Some(file.is_sync),
        kind,
        segment: Some(file.segment.name),
        order: file.order,
    };
    RouteNode::new(path, Some(file.handle), meta)
}

fn layout_node<H>(layout: FileRef<H>, full_path: &str, children: Vec<RouteNode<H>>) -> RouteNode<H> {
    file_node(layout, "", NodeKind::Layout, full_path.to_string()).with_children(children)
}

impl<H> Synthesizer<H> {
    /// Index node, leaf nodes and child directory nodes of one directory
    fn contents(&mut self, record: &mut DirectoryRecord<H>) -> Vec<RouteNode<H>> {
        let mut nodes = Vec::with_capacity(record.leaves.len() + record.children.len() + 1);

        if let Some(index) = record.index.take() {
            let full_path = format!("{}/", record.full_path);
            nodes.push(file_node(index, "", NodeKind::Index, full_path));
        }

        for leaf in record.leaves.drain(..) {
            let path = leaf.segment.label.clone();
            let full_path = format!("{}/{}", record.full_path, path);
            nodes.push(file_node(leaf, &path, NodeKind::Leaf, full_path));
        }

        let children = std::mem::take(&mut record.children);
        nodes.extend(children.into_iter().filter_map(|id| self.directory(id)));
        nodes
    }

    fn directory(&mut self, id: usize) -> Option<RouteNode<H>> {
        let mut record = self.records.get_mut(id)?.take()?;
        let segment = record.segment.clone()?;
        let children = self.contents(&mut record);

        let node = if segment.is_group() {
            let meta = RouteMeta {
                source_path: record.source_path.clone(),
                full_path: record.full_path.clone(),
                is_sync: None,
                kind: NodeKind::Group,
                segment: Some(segment.name.clone()),
                order: record.order,
            };
            let (handle, meta) = match record.layout.take() {
                Some(layout) => (
                    Some(layout.handle),
                    RouteMeta {
                        source_path: layout.source_path,
                        is_sync: Some(layout.is_sync),
                        ..meta
                    },
                ),
                None => (None, meta),
            };
            RouteNode::new("", handle, meta).with_children(children)
        } else {
            let body = match record.layout.take() {
                Some(layout) => vec![layout_node(layout, &record.full_path, children)],
                None => children,
            };
            let meta = RouteMeta {
                source_path: record.source_path,
                full_path: record.full_path,
                is_sync: None,
                kind: NodeKind::Directory,
                segment: Some(segment.name),
                order: record.order,
            };
            RouteNode::new(segment.label, None, meta).with_children(body)
        };

        Some(node)
    }

    fn root(&mut self) -> Vec<RouteNode<H>> {
        let Some(mut root) = self.records.get_mut(ROOT).and_then(Option::take) else {
            return Vec::new();
        };
        let children = self.contents(&mut root);

        match root.layout.take() {
            Some(layout) => vec![layout_node(layout, &root.full_path, children)],
            None => children,
        }
    }
}

/// Converts finished directory records into the unordered route forest
pub(crate) fn synthesize<H>(records: Vec<DirectoryRecord<H>>) -> Vec<RouteNode<H>> {
    let mut synthesizer = Synthesizer {
        records: records.into_iter().map(Some).collect(),
    };
    synthesizer.root()
}
