//! Path grammar for page files
//!
//! - `name` → literal segment
//! - `(name)` → route group, contributes no path
//! - `[name]` → dynamic parameter `:name`
//! - `[...name]` → catch-all `*name`
//! - base name `layout` / `index` → the directory's layout / index file
//! - `.sync` before the extension → load synchronously

pub mod parser;
pub mod pattern;

pub use parser::{
    parse_virtual_path, split_base_name, LeafEntry, ParsedEntry, SpecialRole, SYNC_MARKER,
};
pub use pattern::{classify_segment, Segment, SegmentKind};
