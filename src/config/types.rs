use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub state: StateConfig,
}

/// How the host adapter reports orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OrientationMode {
    /// Derive from terminal geometry.
    #[default]
    Auto,
    Portrait,
    Landscape,
}

/// Screen and rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub orientation: OrientationMode,
    /// Height/width ratio of a terminal cell, used by `auto` mode (default: 2.0).
    #[serde(default = "default_cell_aspect")]
    pub cell_aspect: f32,
    /// Prefix for prices in the detail pane (default: "$").
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Idle redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// Selection persistence between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Restore the previous selection on start and save it on exit (default: true).
    #[serde(default = "default_restore")]
    pub restore: bool,
    /// State file override. Defaults to the platform state directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_cell_aspect() -> f32 {
    2.0
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_restore() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            orientation: OrientationMode::default(),
            cell_aspect: default_cell_aspect(),
            currency_symbol: default_currency_symbol(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            restore: default_restore(),
            path: None,
        }
    }
}
