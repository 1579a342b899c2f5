//! # Pagetree
//!
//! Compiles a flat set of discovered page files into the nested route
//! configuration tree a client-side router consumes.
//!
//! ## Path Grammar
//!
//! - Static segments (`about`)
//! - Route groups (`(main)`), which add no path
//! - Dynamic parameters (`[id]` → `:id`)
//! - Catch-all parameters (`[...slug]` → `*slug`)
//! - `layout` and `index` base names for a directory's layout and default child
//! - A `.sync` suffix before the extension for synchronously loaded pages
//!
//! ## Pipeline
//!
//! 1. Parse every virtual path ([`segment`])
//! 2. Build the implicit directory tree, including directories that only
//!    exist because something lives below them
//! 3. Synthesize route nodes per directory
//! 4. Propagate the sync flag bottom-up
//! 5. Order siblings at every level
//!
//! `compile` is a pure function of its inputs. It keeps no state between
//! calls and either returns a complete tree or an error.
//!
//! ## Example
//!
//! ```
//! use pagetree::{compile, CompileOptions};
//!
//! let pages = [
//!     ("./pages/add/layout", "add-layout"),
//!     ("./pages/add/index", "add-index"),
//!     ("./pages/preview", "preview"),
//! ];
//! let compiled = compile(pages, &CompileOptions::default()).unwrap();
//!
//! let add = &compiled.roots[0];
//! assert_eq!(add.path, "add");
//! let layout = &add.child_nodes()[0];
//! assert_eq!(layout.loader_handle, Some("add-layout"));
//! assert_eq!(layout.meta().full_path(), "/add");
//! assert_eq!(layout.child_nodes()[0].meta().full_path(), "/add/");
//! ```

use tracing::{debug, trace};

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod index;
mod node;
mod options;
pub mod path;
pub mod segment;
mod sequence;
mod sync;
mod synth;

pub use error::{CompileError, ParseError, RoleCollision};
pub use node::{ManifestNode, NodeKind, RouteMeta, RouteNode, Walk};
pub use options::{CompileOptions, GroupOrder, DEFAULT_EXTENSIONS, DEFAULT_VIRTUAL_ROOT};
pub use segment::{classify_segment, parse_virtual_path, Segment, SegmentKind, SpecialRole};

use index::DirectoryIndex;

/// Output of one [`compile`] call
#[derive(Debug, Clone)]
pub struct CompiledRoutes<H> {
    /// Ordered root-level routes
    pub roots: Vec<RouteNode<H>>,
    /// Special-role collisions resolved while indexing, in discovery order
    pub collisions: Vec<RoleCollision>,
}

impl<H> CompiledRoutes<H> {
    /// Pre-order walk over every node of every root
    pub fn walk(&self) -> impl Iterator<Item = (usize, &RouteNode<H>)> {
        self.roots.iter().flat_map(RouteNode::walk)
    }
}

/// Compiles page files into an ordered route forest
///
/// `entries` pairs each virtual path (e.g. `./pages/(main)/settings/profile.sync`)
/// with an opaque loader handle. Entries are sorted by their normalized path
/// before indexing, so the result does not depend on the order the caller
/// yields them in; "discovery order" means that sorted order.
///
/// # Errors
///
/// Returns [`CompileError::Parse`] for the first path that cannot be parsed.
/// No partial tree is returned.
pub fn compile<H, I, K>(entries: I, options: &CompileOptions) -> Result<CompiledRoutes<H>, CompileError>
where
    I: IntoIterator<Item = (K, H)>,
    K: AsRef<str>,
{
    let mut parsed = entries
        .into_iter()
        .map(|(path, handle)| {
            parse_virtual_path(path.as_ref(), options).map(|entry| (entry, handle))
        })
        .collect::<Result<Vec<_>, _>>()?;

    parsed.sort_by(|(a, _), (b, _)| {
        a.relative
            .cmp(&b.relative)
            .then_with(|| a.source_path.cmp(&b.source_path))
    });

    debug!(entries = parsed.len(), root = %options.virtual_root, "compiling page tree");

    let mut index = DirectoryIndex::new(&options.virtual_root);
    for (entry, handle) in parsed {
        trace!(path = %entry.source_path, role = ?entry.leaf.role, sync = entry.leaf.is_sync, "indexing page");
        index.insert(entry, handle);
    }
    let (records, collisions) = index.finish();

    let mut roots = synth::synthesize(records);
    sync::propagate(&mut roots);
    sequence::sequence(&mut roots, &options.group_order);

    debug!(
        roots = roots.len(),
        collisions = collisions.len(),
        "page tree compiled"
    );

    Ok(CompiledRoutes { roots, collisions })
}
