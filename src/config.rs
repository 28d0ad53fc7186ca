//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/brewlog/brewlog.toml`
//! 3. Environment variables: `BREWLOG_*` prefix

use std::path::PathBuf;

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};

/// Effective settings for the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Currency symbol prefixed to prices in report output
    pub currency: String,
    /// Scenario file used when a command gets no path argument
    pub scenario_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "$".to_string(),
            scenario_file: None,
        }
    }
}

impl Settings {
    /// Path of the global config file, if a home directory is available.
    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "brewlog").map(|dirs| dirs.config_dir().join("brewlog.toml"))
    }

    /// Load settings with layered precedence. Unset keys fall back to the
    /// compiled defaults via `serde(default)`.
    pub fn load() -> ApplicationResult<Self> {
        let mut builder = Config::builder();
        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(File::from(global).required(false));
        }
        builder
            .add_source(Environment::with_prefix("BREWLOG"))
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(|e| ApplicationError::Config {
                message: e.to_string(),
            })
    }
}
