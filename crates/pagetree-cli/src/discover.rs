//! Page file discovery on disk
//!
//! Walks the pages directory and turns every matching file into the
//! `(virtual path, handle)` pair `pagetree::compile` takes. The handle is the
//! file's path on disk, written with `/` separators.

use std::path::Path;

use anyhow::{Context, Result};
use glob::Pattern;
use pagetree::path::join_virtual;
use pagetree::CompileOptions;
use walkdir::WalkDir;

use crate::config::PagesConfig;

/// A page file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    /// Virtual root joined with the path below the pages directory
    pub virtual_path: String,
    /// Path on disk
    pub handle: String,
}

fn compile_ignores(patterns: &[String]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|raw| {
            Pattern::new(raw).with_context(|| format!("Invalid ignore pattern: {:?}", raw))
        })
        .collect()
}

/// Collects page files below `root`, sorted by virtual path
///
/// Only files carrying one of `options.extensions` are pages.
pub fn discover(root: &Path, pages: &PagesConfig, options: &CompileOptions) -> Result<Vec<PageFile>> {
    if !root.is_dir() {
        anyhow::bail!("Pages directory not found: {:?}", root);
    }

    let ignores = compile_ignores(&pages.ignore)?;
    let mut found = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {:?}", root))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path
            .strip_prefix(root)?
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        if !options.has_page_extension(&relative) {
            continue;
        }
        if ignores.iter().any(|pattern| pattern.matches(&relative)) {
            tracing::trace!(path = %relative, "ignored");
            continue;
        }

        found.push(PageFile {
            virtual_path: join_virtual(&options.virtual_root, &relative),
            handle: path.to_string_lossy().replace('\\', "/"),
        });
    }

    found.sort_by(|a, b| a.virtual_path.cmp(&b.virtual_path));
    tracing::debug!(count = found.len(), root = ?root, "discovered page files");
    Ok(found)
}
