// File: src/config.rs
// Purpose: Project configuration parsing from pagetree.toml

use anyhow::{Context, Result};
use pagetree::CompileOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "pagetree.toml";

/// Project configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pages: PagesConfig,

    /// Options handed to `pagetree::compile` as-is
    #[serde(default)]
    pub routing: CompileOptions,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where page files are discovered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Directory scanned for page files, relative to the config file (default: "pages")
    #[serde(default = "default_pages_dir")]
    pub dir: String,

    /// Glob patterns, matched against paths relative to `dir`, to skip
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// Where `pagetree build` writes its JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file, relative to the config file
    #[serde(default = "default_output_path")]
    pub path: String,

    #[serde(default = "default_false")]
    pub include_meta: bool,
}

// Default values
fn default_pages_dir() -> String {
    "pages".to_string()
}

fn default_output_path() -> String {
    "routes.json".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            dir: default_pages_dir(),
            ignore: Vec::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            include_meta: false,
        }
    }
}

impl Config {
    /// Directory that relative paths in the config are resolved against
    pub fn base_dir(path: &Path) -> &Path {
        path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Load configuration from a pagetree.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing or empty file means defaults
        if !path.exists() {
            tracing::debug!(path = ?path, "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }
}
