//! Configuration loading.
//!
//! Settings are resolved in order of precedence:
//! - command-line flags, or their environment variables (`BRDOC_OUTPUT`,
//!   `BRDOC_LOG`), both read by clap
//! - `config.json` in the platform config directory
//! - built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::output::OutputFormat;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the output format.
pub const OUTPUT_ENV: &str = "BRDOC_OUTPUT";

/// Environment variable overriding the log level.
pub const LOG_ENV: &str = "BRDOC_LOG";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("com", "brdocs", "brdoc")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format.
    #[serde(default)]
    pub output: OutputFormat,

    /// Log filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config from disk, or the defaults when there is no file.
    pub fn load() -> Result<Self> {
        let path = config_dir()?.join(CONFIG_FILE);

        if path.exists() {
            Self::from_path(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Read config from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;

        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot check on its own.
    pub fn validate(&self) -> Result<(), CliError> {
        if self.log_level.trim().is_empty() {
            return Err(CliError::Config("log_level is empty".to_string()));
        }

        EnvFilter::try_new(&self.log_level).map_err(|err| {
            CliError::Config(format!("log_level: invalid filter '{}': {err}", self.log_level))
        })?;

        Ok(())
    }
}
