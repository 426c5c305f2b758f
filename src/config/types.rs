use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::charts::{BarMetric, ColorBy, SplitBy};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the tip records come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// CSV file to load. The bundled sample is used when unset.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Event loop and control settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval of the event loop in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Amount one key press moves a bill-range handle (default: 1.0).
    #[serde(default = "default_bill_step")]
    pub bill_step: f64,
}

/// Initial display options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub scatter_color: ColorBy,
    #[serde(default)]
    pub show_size: bool,
    #[serde(default)]
    pub split_by: SplitBy,
    #[serde(default)]
    pub bar_metric: BarMetric,
    /// Overlay per-day visit counts on the bar chart (default: true).
    #[serde(default = "default_true")]
    pub show_day_count: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file for the interactive dashboard.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_bill_step() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            bill_step: default_bill_step(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scatter_color: ColorBy::default(),
            show_size: false,
            split_by: SplitBy::default(),
            bar_metric: BarMetric::default(),
            show_day_count: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
