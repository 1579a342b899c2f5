//! Segment classification for page path components
//!
//! Pure functional parsing of one directory or file name into a typed segment.
//! All functions are **pure**: same input → same output, no side effects.

use crate::ParseError;

/// Kind of a single path component
///
/// # Examples
///
/// ```
/// use pagetree::segment::{classify_segment, SegmentKind};
///
/// assert_eq!(classify_segment("about").unwrap().kind, SegmentKind::Literal);
/// assert_eq!(classify_segment("(main)").unwrap().kind, SegmentKind::Group);
/// assert_eq!(classify_segment("[id]").unwrap().kind, SegmentKind::Dynamic);
/// assert_eq!(classify_segment("[...slug]").unwrap().kind, SegmentKind::CatchAll);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Static text: `about`
    Literal,
    /// Route group: `(main)`, contributes no path
    Group,
    /// Dynamic parameter: `[id]` → `:id`
    Dynamic,
    /// Catch-all parameter: `[...slug]` → `*slug`
    CatchAll,
}

/// A classified path component
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Component as it appears on disk, e.g. `[id]`
    pub name: String,
    /// Route label: `about`, `main` (group inner name), `:id`, `*slug`
    pub label: String,
    /// How the component is interpreted
    pub kind: SegmentKind,
}

impl Segment {
    fn new(name: &str, label: impl Into<String>, kind: SegmentKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.into(),
            kind,
        }
    }

    pub fn is_group(&self) -> bool {
        self.kind == SegmentKind::Group
    }

    /// What this segment adds to a route path: nothing for groups, the label otherwise
    pub fn route_path(&self) -> &str {
        if self.is_group() {
            ""
        } else {
            &self.label
        }
    }
}

fn has_brackets(s: &str) -> bool {
    s.contains('[') || s.contains(']')
}

fn has_parens(s: &str) -> bool {
    s.contains('(') || s.contains(')')
}

/// Classifies a path component into a segment (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Group**: `(name)`
/// 2. **Catch-all**: `[...name]`
/// 3. **Dynamic**: `[name]`
/// 4. **Literal**: any other text not starting or ending with a bracket or parenthesis
///
/// Parentheses combined with brackets (`([id])`, `[(id)]`) are rejected as
/// unsupported. Empty wrappers (`()`, `[]`, `[...]`), nested brackets
/// (`[[...slug]]`) and unbalanced wrappers are rejected as malformed.
///
/// # Examples
///
/// ```
/// use pagetree::segment::classify_segment;
///
/// assert_eq!(classify_segment("[id]").unwrap().label, ":id");
/// assert_eq!(classify_segment("[...slug]").unwrap().label, "*slug");
/// assert_eq!(classify_segment("(main)").unwrap().label, "main");
/// assert!(classify_segment("([id])").is_err());
/// ```
pub fn classify_segment(segment: &str) -> Result<Segment, ParseError> {
    let malformed = || ParseError::MalformedSegment {
        path: segment.to_string(),
        segment: segment.to_string(),
    };
    let unsupported = || ParseError::UnsupportedSegment {
        path: segment.to_string(),
        segment: segment.to_string(),
    };

    if segment.is_empty() || segment == ".." {
        return Err(malformed());
    }

    if let Some(inner) = segment.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        return match inner {
            "" => Err(malformed()),
            _ if has_brackets(inner) => Err(unsupported()),
            _ if has_parens(inner) => Err(malformed()),
            _ => Ok(Segment::new(segment, inner, SegmentKind::Group)),
        };
    }

    if let Some(inner) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if has_parens(inner) {
            return Err(unsupported());
        }
        if has_brackets(inner) {
            return Err(malformed());
        }
        return match inner.strip_prefix("...") {
            Some("") => Err(malformed()),
            Some(name) => Ok(Segment::new(segment, format!("*{}", name), SegmentKind::CatchAll)),
            None if inner.is_empty() => Err(malformed()),
            None => Ok(Segment::new(segment, format!(":{}", inner), SegmentKind::Dynamic)),
        };
    }

    let wrapper_chars = ['(', ')', '[', ']'];
    if segment.starts_with(wrapper_chars) || segment.ends_with(wrapper_chars) {
        return Err(malformed());
    }

    Ok(Segment::new(segment, segment, SegmentKind::Literal))
}
