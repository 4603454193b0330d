//! Grid cell styling configuration.
//!
//! Provides distinct looks for occupied slots, empty slots, and the
//! floating proxy.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== GridStyles =====

/// Styling for the demo grid's cell kinds.
pub struct GridStyles {
    item_style: Style,
    empty_slot_style: Style,
    proxy_style: Style,
    chrome_style: Style,
}

impl GridStyles {
    /// Create a new GridStyles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create a new GridStyles with specified color configuration.
    ///
    /// If colors are disabled, all styles fall back to modifiers only.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                item_style: Style::default().fg(Color::Cyan),
                empty_slot_style: Style::default().fg(Color::DarkGray),
                proxy_style: Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                chrome_style: Style::default().fg(Color::Gray),
            }
        } else {
            Self {
                item_style: Style::default(),
                empty_slot_style: Style::default().add_modifier(Modifier::DIM),
                proxy_style: Style::default().add_modifier(Modifier::BOLD),
                chrome_style: Style::default(),
            }
        }
    }

    /// Style for an occupied slot's cell.
    pub fn item_style(&self) -> Style {
        self.item_style
    }

    /// Style for an empty slot's outline.
    pub fn empty_slot_style(&self) -> Style {
        self.empty_slot_style
    }

    /// Style for the floating proxy.
    pub fn proxy_style(&self) -> Style {
        self.proxy_style
    }

    /// Style for the title and hint lines.
    pub fn chrome_style(&self) -> Style {
        self.chrome_style
    }
}

impl Default for GridStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====
