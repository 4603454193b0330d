//! TOML configuration loading.
//!
//! Precedence: defaults → config file → CLI flags (applied by the binary).
//! A missing config file is not an error; a file that exists but cannot be
//! read or parsed is.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::{ReorderConfig, DEFAULT_MAX_SCROLL_SPEED};
use crate::model::EdgeInsets;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists (or was explicitly requested) but could not be read.
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the expected schema.
    #[error("Failed to parse config file {path:?}: {message}")]
    Parse {
        /// Path that failed to parse.
        path: PathBuf,
        /// TOML parser error message.
        message: String,
    },
}

/// Raw config-file schema; every field optional so partial files work.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigFile {
    /// Autoscroll speed cap, content units per second.
    pub max_scroll_speed: Option<f64>,
    /// Uniform autoscroll edge margin; omitted = half proxy extent.
    pub scroll_margin: Option<f64>,
    /// Demo grid rows.
    pub rows: Option<u16>,
    /// Demo grid columns.
    pub cols: Option<u16>,
    /// Number of empty slots seeded into the demo grid.
    pub empty_slots: Option<u16>,
    /// Log file destination.
    pub log_file_path: Option<PathBuf>,
}

/// Fully-resolved configuration after merging defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Autoscroll speed cap.
    pub max_scroll_speed: f64,
    /// Uniform autoscroll edge margin override.
    pub scroll_margin: Option<f64>,
    /// Demo grid rows.
    pub rows: u16,
    /// Demo grid columns.
    pub cols: u16,
    /// Empty slots seeded into the demo grid.
    pub empty_slots: u16,
    /// Log file destination.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            max_scroll_speed: DEFAULT_MAX_SCROLL_SPEED,
            scroll_margin: None,
            rows: 6,
            cols: 8,
            empty_slots: 3,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// The controller-facing slice of this configuration.
    pub fn reorder(&self) -> ReorderConfig {
        ReorderConfig {
            max_scroll_speed: self.max_scroll_speed,
            scroll_edge_insets: self.scroll_margin.map(EdgeInsets::uniform),
        }
    }
}

/// Platform default config path: `<config dir>/gridshift/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gridshift").join("config.toml"))
}

/// Platform default log path: `<local data dir>/gridshift/gridshift.log`,
/// falling back to the system temp directory.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("gridshift")
        .join("gridshift.log")
}

/// Load the config file.
///
/// An explicit path must exist — failures surface as [`ConfigError::Read`].
/// With no explicit path the platform default location is probed and a
/// missing file yields `Ok(None)`.
pub fn load_config(explicit: Option<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    match explicit {
        Some(path) => parse_file(&path).map(Some),
        None => match default_config_path() {
            Some(path) if path.exists() => parse_file(&path).map(Some),
            _ => Ok(None),
        },
    }
}

fn parse_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Merge an optional config file over the defaults.
pub fn merge_config(file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let Some(file) = file else {
        return defaults;
    };
    ResolvedConfig {
        max_scroll_speed: file.max_scroll_speed.unwrap_or(defaults.max_scroll_speed),
        scroll_margin: file.scroll_margin.or(defaults.scroll_margin),
        rows: file.rows.unwrap_or(defaults.rows),
        cols: file.cols.unwrap_or(defaults.cols),
        empty_slots: file.empty_slots.unwrap_or(defaults.empty_slots),
        log_file_path: file.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides on top of a resolved configuration.
///
/// `None` means the flag was not given; the config-file/default value
/// stands.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    rows: Option<u16>,
    cols: Option<u16>,
    empty_slots: Option<u16>,
    max_scroll_speed: Option<f64>,
) -> ResolvedConfig {
    if let Some(rows) = rows {
        config.rows = rows;
    }
    if let Some(cols) = cols {
        config.cols = cols;
    }
    if let Some(empty_slots) = empty_slots {
        config.empty_slots = empty_slots;
    }
    if let Some(speed) = max_scroll_speed {
        config.max_scroll_speed = speed;
    }
    config
}

// ===== Tests =====

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
