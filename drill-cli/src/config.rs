//! Configuration and progress history for drill.
//!
//! Configuration is loaded from a TOML file (default: `drill.toml`).
//! Progress history is JSON in the data directory.

use anyhow::{Context, Result};
use drill_types::{TestTally, Topic};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "drill.toml";

/// Root configuration for drill.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DrillConfig {
    /// How the test suite is launched.
    #[serde(default)]
    pub runner: RunnerConfig,
    /// Where progress history is kept.
    #[serde(default)]
    pub progress: ProgressConfig,
}

/// Test runner configuration.
///
/// The topic's module filter is appended to `args` on every run.
#[derive(Debug, Clone, Deserialize)]
pub struct RunnerConfig {
    /// Program to launch (default: cargo).
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before the topic filter.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    /// Working directory for the program (default: current directory).
    pub workdir: Option<PathBuf>,
}

/// Progress tracking configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressConfig {
    /// History file name, relative to the data directory.
    #[serde(default = "default_history_file")]
    pub history_file: String,
}

fn default_program() -> String {
    "cargo".to_string()
}

fn default_args() -> Vec<String> {
    ["test", "-p", "drill-core", "--lib", "--"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_history_file() -> String {
    "progress.json".to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            workdir: None,
        }
    }
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            history_file: default_history_file(),
        }
    }
}

impl DrillConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `drill.toml` in the working
    /// directory is used if present, and defaults otherwise.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path).await
                } else {
                    tracing::debug!("no {DEFAULT_CONFIG_FILE}, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a TOML file.
    pub async fn from_file(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), program = %config.runner.program, "loaded config");
        Ok(config)
    }
}

/// Result of one topic in a saved progress run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    /// The topic.
    pub topic: Topic,
    /// Its pass/fail counts.
    pub tally: TestTally,
}

/// One `drill progress` run, as saved in the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// When the run finished (Unix seconds).
    pub recorded_at: u64,
    /// Per-topic results in curriculum order.
    pub topics: Vec<TopicRecord>,
}

impl ProgressRecord {
    /// Create a record stamped with the current time.
    pub fn new(topics: Vec<TopicRecord>) -> Self {
        Self {
            recorded_at: unix_now(),
            topics,
        }
    }

    /// Sum of every topic's tally.
    pub fn total(&self) -> TestTally {
        self.topics.iter().fold(TestTally::default(), |mut acc, r| {
            acc += r.tally;
            acc
        })
    }

    /// The saved tally for `topic`, if it was part of the run.
    pub fn tally_for(&self, topic: Topic) -> Option<TestTally> {
        self.topics.iter().find(|r| r.topic == topic).map(|r| r.tally)
    }

    /// Load the last saved run; `None` if nothing was saved yet.
    pub async fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read progress history {}", path.display()))?;
        let record = serde_json::from_str(&contents)
            .with_context(|| format!("Invalid progress history {}", path.display()))?;
        Ok(Some(record))
    }

    /// Save this run, creating the parent directory if needed.
    pub async fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .context("Failed to create data directory")?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, contents)
            .await
            .context("Failed to save progress history")?;
        tracing::debug!(path = %path.display(), "saved progress history");
        Ok(())
    }
}

/// Seconds since the Unix epoch; zero if the clock is before it.
fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
