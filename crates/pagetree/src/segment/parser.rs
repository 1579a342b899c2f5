//! Virtual path parsing into page entries
//!
//! Pure functional parser: one virtual path string → one [`ParsedEntry`].

use crate::path::relative_components;
use crate::{CompileOptions, ParseError};

use super::pattern::{classify_segment, Segment};

/// Suffix on a file's base name that requests synchronous loading
pub const SYNC_MARKER: &str = ".sync";

/// Special meaning of a page file's base name inside its directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialRole {
    /// `layout`: wraps the directory's other routes
    Layout,
    /// `index`: rendered at the directory's own path
    Index,
    /// Any other base name: an ordinary leaf route
    Regular,
}

impl SpecialRole {
    fn from_base_name(base: &str) -> Self {
        match base {
            "layout" => SpecialRole::Layout,
            "index" => SpecialRole::Index,
            _ => SpecialRole::Regular,
        }
    }
}

/// The file component of a parsed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeafEntry {
    /// Base name classified as a segment (sync marker and extension removed)
    pub segment: Segment,
    pub role: SpecialRole,
    pub is_sync: bool,
}

/// One page file, split into the directories leading to it and the file itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    /// The virtual path exactly as given
    pub source_path: String,
    /// Components below the root joined with `/`; the canonical sort key
    pub relative: String,
    pub ancestors: Vec<Segment>,
    pub leaf: LeafEntry,
}

/// Splits a file name into its base name and sync flag
///
/// A trailing `.ext` is removed only when `ext` is one of `extensions`
/// (a leading `.` on the configured names is ignored). Then a trailing
/// `.sync` marks synchronous loading. Any other dotted suffix belongs to the
/// base name, so `v1.2` stays `v1.2`.
///
/// # Examples
///
/// ```
/// use pagetree::segment::split_base_name;
///
/// let extensions = ["tsx", "jsx"];
/// assert_eq!(split_base_name("profile.sync", &extensions), ("profile", true));
/// assert_eq!(split_base_name("profile.sync.tsx", &extensions), ("profile", true));
/// assert_eq!(split_base_name("layout.tsx", &extensions), ("layout", false));
/// assert_eq!(split_base_name("v1.2", &extensions), ("v1.2", false));
/// assert_eq!(split_base_name("[...slug]", &extensions), ("[...slug]", false));
/// ```
pub fn split_base_name<'a, S: AsRef<str>>(file_name: &'a str, extensions: &[S]) -> (&'a str, bool) {
    let is_extension = |ext: &str| {
        ext != "sync"
            && extensions
                .iter()
                .any(|known| known.as_ref().trim_start_matches('.') == ext)
    };
    let stem = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && is_extension(ext) => stem,
        _ => file_name,
    };

    match stem.strip_suffix(SYNC_MARKER) {
        Some(base) if !base.is_empty() => (base, true),
        _ => (stem, false),
    }
}

/// Parses a virtual page path (pure function)
///
/// `options.virtual_root` is the shared prefix of all virtual paths (e.g.
/// `./pages`) and is not part of the route tree. `options.extensions` lists
/// the file extensions stripped from the leaf.
///
/// # Examples
///
/// ```
/// use pagetree::segment::{parse_virtual_path, SegmentKind, SpecialRole};
/// use pagetree::CompileOptions;
///
/// let options = CompileOptions::default();
/// let entry = parse_virtual_path("./pages/(main)/settings/profile.sync", &options).unwrap();
/// assert_eq!(entry.ancestors.len(), 2);
/// assert_eq!(entry.ancestors[0].kind, SegmentKind::Group);
/// assert_eq!(entry.leaf.segment.label, "profile");
/// assert_eq!(entry.leaf.role, SpecialRole::Regular);
/// assert!(entry.leaf.is_sync);
/// ```
///
/// # Errors
///
/// Empty or leafless paths, malformed or unsupported segments anywhere in
/// the path, and route groups used as file names.
pub fn parse_virtual_path(path: &str, options: &CompileOptions) -> Result<ParsedEntry, ParseError> {
    let components = relative_components(path, &options.virtual_root)?;
    let (file_name, directories) = components
        .split_last()
        .ok_or_else(|| ParseError::MissingLeaf {
            path: path.to_string(),
        })?;

    let ancestors = directories
        .iter()
        .map(|name| classify_segment(name))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.in_path(path))?;

    let (base, is_sync) = split_base_name(file_name, options.extensions.as_slice());
    let segment = classify_segment(base).map_err(|e| e.in_path(path))?;
    let role = SpecialRole::from_base_name(base);

    if segment.is_group() {
        return Err(ParseError::GroupLeaf {
            path: path.to_string(),
            segment: file_name.to_string(),
        });
    }

    Ok(ParsedEntry {
        source_path: path.to_string(),
        relative: components.join("/"),
        ancestors,
        leaf: LeafEntry {
            segment,
            role,
            is_sync,
        },
    })
}
