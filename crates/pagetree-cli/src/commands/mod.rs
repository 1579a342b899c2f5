pub mod build;
pub mod routes;

use std::path::Path;

use anyhow::{Context, Result};
use pagetree::CompiledRoutes;

use crate::config::Config;
use crate::discover::discover;

/// Loads the config, discovers page files and compiles them
///
/// `pages.dir` is resolved against the config file's directory.
pub(crate) fn compile_project(config_path: &Path) -> Result<(Config, CompiledRoutes<String>)> {
    let config = Config::load(config_path)?;
    let pages_dir = Config::base_dir(config_path).join(&config.pages.dir);
    let files = discover(&pages_dir, &config.pages, &config.routing)?;

    let compiled = pagetree::compile(
        files.into_iter().map(|file| (file.virtual_path, file.handle)),
        &config.routing,
    )
    .context("Failed to compile page tree")?;

    for collision in &compiled.collisions {
        tracing::warn!("{}", collision);
    }

    Ok((config, compiled))
}
