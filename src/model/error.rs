//! Error types for the gridshift shell.
//!
//! The interaction core itself never returns errors: rejected operations are
//! boolean results, unresolvable geometry and stale events are silent no-ops
//! (see the controller docs). The `thiserror` taxonomy here covers the shell
//! around the core — configuration loading, logging setup, and the terminal
//! demo — composed via `From` conversions so `?` propagates cleanly.

use thiserror::Error;

use crate::config::loader::ConfigError;
use crate::logging::LoggingError;

/// Top-level error for the demo binary.
///
/// All shell failure modes convert into this type via `#[from]`, so the
/// binary's `main` can bubble everything with `?` and report once.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file could not be read or parsed.
    ///
    /// A *missing* config file is not an error (defaults apply); this fires
    /// only when a file exists but cannot be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Tracing subscriber setup failed.
    #[error("Logging setup failed: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal I/O failure from the crossterm/ratatui layer.
    ///
    /// Without a working terminal the demo cannot run; the caller should
    /// restore the terminal state and exit.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn app_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken");
        let app_err: AppError = io_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Terminal error"));
        assert!(msg.contains("pipe broken"));
    }

    #[test]
    fn app_error_from_logging_error() {
        let app_err: AppError = LoggingError::SubscriberAlreadySet.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Logging setup failed"));
    }

    #[test]
    fn app_error_from_config_error() {
        let cfg_err = ConfigError::Parse {
            path: std::path::PathBuf::from("/tmp/gridshift.toml"),
            message: "expected value".to_string(),
        };
        let app_err: AppError = cfg_err.into();
        let msg = app_err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("gridshift.toml"));
    }
}
