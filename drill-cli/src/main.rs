//! # drill
//!
//! Command-line companion for the drill exercises.
//!
//! ## Commands
//!
//! - `topics`: List the curriculum
//! - `demo`: Run a topic's functions on sample inputs
//! - `test`: Run the test suite, per topic, and tally the results
//! - `progress`: Classify every topic and compare with the last run
//!
//! ## Example
//!
//! ```bash
//! # What is there to learn?
//! drill topics
//!
//! # See the text analysis functions in action
//! drill demo text
//!
//! # Run only the sorting tests
//! drill test --topic sorting
//!
//! # Check overall progress
//! drill progress
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod runner;

use commands::{demo, progress, test, topics};
use config::DrillConfig;

/// Command-line companion for the drill exercises.
#[derive(Parser, Debug)]
#[command(name = "drill")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults to ./drill.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data directory for storing progress history
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every topic
    Topics,

    /// Run a topic's functions on sample inputs
    Demo {
        /// Topic id, e.g. `text`
        topic: String,
    },

    /// Run the tests and report pass/fail counts
    Test {
        /// Only run this topic's tests
        #[arg(long, short)]
        topic: Option<String>,
    },

    /// Show progress through the curriculum
    Progress,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Topics => {
            topics::run();
        }
        Commands::Demo { topic } => {
            demo::run(&topic)?;
        }
        Commands::Test { topic } => {
            let config = DrillConfig::load(cli.config.as_deref()).await?;
            test::run(&config, topic.as_deref()).await?;
        }
        Commands::Progress => {
            let config = DrillConfig::load(cli.config.as_deref()).await?;
            let data_dir = match cli.data_dir {
                Some(dir) => dir,
                None => default_data_dir()?,
            };
            progress::run(&config, &data_dir).await?;
        }
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the level chosen by `--verbose`.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
}

/// Get the default data directory for drill.
fn default_data_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("io", "ydun", "drill")
        .context("Could not determine home directory")?;
    Ok(dirs.data_dir().to_path_buf())
}
