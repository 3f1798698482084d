// SPDX-License-Identifier: MIT
//
// Configuration file for the tincture command line.
//
// Stored as TOML at `<config dir>/tincture/config.toml`
// (`~/.config/tincture/config.toml` on Linux). Every section and key is
// optional; anything left out takes its default. Command-line flags are
// applied on top after loading.
//
//   [output]
//   format = "json"
//
//   [harmony]
//   count = 7
//
//   [accessibility]
//   large_text = true
//
//   [logging]
//   level = "debug"

use std::fs;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_NAME: &str = "tincture";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default number of colors for the count-driven commands.
pub const DEFAULT_COUNT: usize = 5;

/// Where the config file lives when `--config` is not given.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE_NAME))
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// ─── Sections ───────────────────────────────────────────────────────────────

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, human-readable lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonyConfig {
    /// Colors per monochromatic/analogous harmony, tint/shade list, or blend.
    pub count: usize,
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self { count: DEFAULT_COUNT }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessibilityConfig {
    /// Judge contrast against the large-text thresholds.
    pub large_text: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "warn".to_owned() }
    }
}

/// The whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub harmony: HarmonyConfig,
    pub accessibility: AccessibilityConfig,
    pub logging: LoggingConfig,
}

// ─── Loading ────────────────────────────────────────────────────────────────

impl Config {
    /// Load from an explicit path. The file must exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from the standard location, or defaults when there is no file.
    pub fn load_default() -> Result<Self, ConfigError> {
        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
