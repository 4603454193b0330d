//! Configuration module.

pub mod loader;

pub use loader::{apply_cli_overrides, load_config, merge_config, ConfigFile, ResolvedConfig};

use crate::model::EdgeInsets;

/// Default maximum autoscroll speed, in content units per second.
pub const DEFAULT_MAX_SCROLL_SPEED: f64 = 500.0;

/// Tuning knobs for the interaction controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReorderConfig {
    /// Autoscroll speed cap, in content units per second.
    pub max_scroll_speed: f64,

    /// Edge margins that arm autoscroll.
    ///
    /// `None` derives the margins from the proxy element: half its extent
    /// on each axis.
    pub scroll_edge_insets: Option<EdgeInsets>,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            max_scroll_speed: DEFAULT_MAX_SCROLL_SPEED,
            scroll_edge_insets: None,
        }
    }
}
