mod commands;
mod config;
mod discover;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(name = "pagetree")]
#[command(version, about = "Pagetree - compile page files into a nested route tree", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the compiled route tree
    Routes {
        /// Path to the project config file
        #[arg(short, long, default_value = config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },

    /// Write the compiled route tree as JSON
    Build {
        /// Path to the project config file
        #[arg(short, long, default_value = config::DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Output file (overrides `output.path` from the config)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Include fullPath, sourcePath, kind and isSync for every node
        #[arg(long)]
        meta: bool,
    },
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Routes { config } => {
            commands::routes::execute(&config)?;
        }
        Commands::Build { config, out, meta } => {
            commands::build::execute(&config, out.as_deref(), meta)?;
        }
    }

    Ok(())
}
