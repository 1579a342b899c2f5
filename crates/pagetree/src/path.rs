//! Virtual path utilities for normalization and splitting
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

use crate::ParseError;

/// Checks whether a virtual path is already in canonical form
///
/// Canonical means: no backslashes, no `//`, no `/./` components.
///
/// # Examples
///
/// ```
/// use pagetree::path::is_canonical;
///
/// assert!(is_canonical("./pages/about"));
/// assert!(is_canonical("pages/users/[id].tsx"));
///
/// assert!(!is_canonical(".\\pages\\about"));
/// assert!(!is_canonical("./pages//about"));
/// assert!(!is_canonical("./pages/./about"));
/// ```
pub fn is_canonical(path: &str) -> bool {
    !path.contains('\\') && !path.contains("//") && !path.contains("/./")
}

/// Normalizes a virtual path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// - Backslashes: `.\pages\about` → `./pages/about`
/// - Double slashes: `./pages//about` → `./pages/about`
/// - Inner dot components: `./pages/./about` → `./pages/about`
///
/// A leading `./` and a trailing `/` are preserved; the parser gives both meaning.
///
/// # Examples
///
/// ```
/// use pagetree::path::normalize_virtual_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_virtual_path("./pages/about"), Cow::Borrowed(_)));
/// assert_eq!(normalize_virtual_path(".\\pages\\about"), "./pages/about");
/// assert_eq!(normalize_virtual_path("./pages//a/./b/"), "./pages/a/b/");
/// ```
pub fn normalize_virtual_path(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let unified = path.replace('\\', "/");
    let leading = if unified.starts_with("./") {
        "./"
    } else if unified.starts_with('/') {
        "/"
    } else {
        ""
    };
    let trailing = if unified.len() > 1 && unified.ends_with('/') {
        "/"
    } else {
        ""
    };

    let body = unified
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .collect::<Vec<_>>()
        .join("/");

    if body.is_empty() {
        Cow::Owned(leading.to_string())
    } else {
        Cow::Owned(format!("{}{}{}", leading, body, trailing))
    }
}

fn strip_current_dir(path: &str) -> &str {
    match path {
        "." => "",
        _ => path.strip_prefix("./").unwrap_or(path),
    }
}

/// Splits a virtual path into its components below `root`
///
/// `root` is the prefix every discovered page shares (e.g. `./pages`). A
/// leading `./` on either side is ignored when matching the root. Paths that
/// do not start with it are taken as already relative.
///
/// # Errors
///
/// - [`ParseError::Empty`] for an empty path
/// - [`ParseError::MissingLeaf`] when the path names a directory (trailing
///   `/`, or nothing left below the root)
///
/// # Examples
///
/// ```
/// use pagetree::path::relative_components;
///
/// let parts = relative_components("./pages/(main)/settings/profile.sync", "./pages").unwrap();
/// assert_eq!(parts, vec!["(main)", "settings", "profile.sync"]);
///
/// assert!(relative_components("./pages/", "./pages").is_err());
/// ```
pub fn relative_components(path: &str, root: &str) -> Result<Vec<String>, ParseError> {
    if path.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let missing_leaf = || ParseError::MissingLeaf {
        path: path.to_string(),
    };

    let normalized = normalize_virtual_path(path);
    if normalized.ends_with('/') {
        return Err(missing_leaf());
    }

    // `./pages/x` and `pages/x` name the same file
    let body = strip_current_dir(&normalized);
    let root = normalize_virtual_path(root);
    let root = strip_current_dir(root.trim_end_matches('/'));
    let below_root = if root.is_empty() {
        body
    } else if body == root {
        return Err(missing_leaf());
    } else {
        body.strip_prefix(root)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(body)
    };

    let components: Vec<String> = below_root
        .trim_start_matches("./")
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
        .map(str::to_string)
        .collect();

    if components.is_empty() {
        return Err(missing_leaf());
    }

    Ok(components)
}

/// Joins a directory's virtual path with one more component
pub fn join_virtual(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), name)
    }
}
