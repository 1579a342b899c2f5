//! Error taxonomy for page tree compilation
//!
//! Parse failures are fatal and abort the whole `compile` call. Role
//! collisions are resolved by policy and reported back to the caller as
//! diagnostics rather than errors.

use std::fmt;

use thiserror::Error;

use crate::segment::SpecialRole;

/// A virtual page path that cannot be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The path string is empty or whitespace
    #[error("virtual path is empty")]
    Empty,

    /// The path names a directory, not a file
    #[error("virtual path `{path}` has no file component")]
    MissingLeaf { path: String },

    /// Unbalanced or empty brackets/parentheses, or a `..` component
    #[error("malformed segment `{segment}` in `{path}`")]
    MalformedSegment { path: String, segment: String },

    /// Parentheses combined with brackets, e.g. `([id])`
    #[error("unsupported segment `{segment}` in `{path}`: a route group cannot also be a parameter")]
    UnsupportedSegment { path: String, segment: String },

    /// A route group used as a page file name, e.g. `(main).tsx`
    #[error("route group `{segment}` in `{path}` cannot be a page file")]
    GroupLeaf { path: String, segment: String },
}

impl ParseError {
    /// Re-targets the error at the full virtual path it was found in
    ///
    /// Segment classification only sees one component, so the parser uses
    /// this to attach the complete path before surfacing the error.
    pub fn in_path(self, full: &str) -> Self {
        let path = full.to_string();
        match self {
            ParseError::Empty => ParseError::Empty,
            ParseError::MissingLeaf { .. } => ParseError::MissingLeaf { path },
            ParseError::MalformedSegment { segment, .. } => {
                ParseError::MalformedSegment { path, segment }
            }
            ParseError::UnsupportedSegment { segment, .. } => {
                ParseError::UnsupportedSegment { path, segment }
            }
            ParseError::GroupLeaf { segment, .. } => ParseError::GroupLeaf { path, segment },
        }
    }
}

/// Failure of a whole compile call; no partial tree is ever returned
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("invalid page path: {0}")]
    Parse(#[from] ParseError),
}

/// Two files claimed the same special role in one directory
///
/// The `.sync` variant is kept over the plain one. Between two files of the
/// same sync-ness, the one whose virtual path sorts last is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleCollision {
    /// Virtual path of the directory both files live in
    pub directory: String,
    pub role: SpecialRole,
    /// Virtual path of the file that backs the node
    pub kept: String,
    /// Virtual path of the file that was dropped
    pub discarded: String,
}

impl fmt::Display for RoleCollision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self.role {
            SpecialRole::Layout => "layout",
            SpecialRole::Index => "index",
            SpecialRole::Regular => "page",
        };
        write!(
            f,
            "{} has two {} files: using `{}`, ignoring `{}`",
            self.directory, role, self.kept, self.discarded
        )
    }
}
