use serde::Serialize;

use crate::charts::{BarMetric, ColorBy, SplitBy};
use crate::config::DisplayConfig;
use crate::ui::mvi::UiState;

/// Per-chart presentation choices. They never affect the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayOptions {
    pub scatter_color: ColorBy,
    pub show_size: bool,
    pub split_by: SplitBy,
    pub bar_metric: BarMetric,
    pub show_day_count: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for DisplayOptions {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            scatter_color: config.scatter_color,
            show_size: config.show_size,
            split_by: config.split_by,
            bar_metric: config.bar_metric,
            show_day_count: config.show_day_count,
        }
    }
}

impl UiState for DisplayOptions {}
