use anyhow::Result;
use colored::Colorize;
use pagetree::{NodeKind, RouteNode};
use std::path::Path;

use super::compile_project;

fn describe(node: &RouteNode<String>) -> String {
    let meta = node.meta();
    let name = match meta.kind() {
        NodeKind::Group => node.display_name().magenta().to_string(),
        NodeKind::Layout => "(layout)".blue().to_string(),
        NodeKind::Index => "(index)".blue().to_string(),
        NodeKind::Directory | NodeKind::Leaf => node.path.bold().to_string(),
    };
    let full_path = if meta.full_path().is_empty() {
        "/".to_string()
    } else {
        meta.full_path().to_string()
    };

    let mut line = format!("{}  {}", name, full_path.cyan());
    if meta.is_sync() == Some(true) {
        line.push_str(&format!("  {}", "sync".green()));
    }
    if node.loader_handle.is_some() {
        line.push_str(&format!("  {}", meta.source_path().dimmed()));
    }
    line
}

pub fn execute(config_path: &Path) -> Result<()> {
    let (config, compiled) = compile_project(config_path)?;

    println!("{}", "Route tree".green().bold());
    println!("Pages: {}", config.pages.dir.cyan());
    println!();

    let mut count = 0;
    for (depth, node) in compiled.walk() {
        println!("{}{}", "  ".repeat(depth + 1), describe(node));
        if node.loader_handle.is_some() {
            count += 1;
        }
    }

    println!();
    println!("{} {} routes backed by page files", "✓".green(), count);
    Ok(())
}
