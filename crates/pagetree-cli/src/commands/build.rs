use anyhow::{Context, Result};
use colored::Colorize;
use pagetree::{CompiledRoutes, RouteNode};
use std::fs;
use std::path::{Path, PathBuf};

use super::compile_project;
use crate::config::Config;

/// Pretty JSON of the route tree, optionally with per-node metadata
fn render(compiled: &CompiledRoutes<String>, include_meta: bool) -> Result<String> {
    let json = if include_meta {
        let manifest: Vec<_> = compiled.roots.iter().map(RouteNode::manifest).collect();
        serde_json::to_string_pretty(&manifest)?
    } else {
        serde_json::to_string_pretty(&compiled.roots)?
    };
    Ok(json)
}

/// `--out` as given, otherwise `output.path` relative to the config file
fn output_path(config_path: &Path, config: &Config, out: Option<&Path>) -> PathBuf {
    match out {
        Some(out) => out.to_path_buf(),
        None => Config::base_dir(config_path).join(&config.output.path),
    }
}

pub fn execute(config_path: &Path, out: Option<&Path>, meta: bool) -> Result<()> {
    let (config, compiled) = compile_project(config_path)?;

    let target = output_path(config_path, &config, out);
    let include_meta = meta || config.output.include_meta;
    let json = render(&compiled, include_meta)?;

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {:?}", parent))?;
    }
    fs::write(&target, json).with_context(|| format!("Failed to write {:?}", target))?;

    println!(
        "{} Wrote {} root routes to {}",
        "✓".green(),
        compiled.roots.len(),
        target.display().to_string().cyan()
    );
    if include_meta {
        println!("  {}", "with node metadata".dimmed());
    }

    Ok(())
}
