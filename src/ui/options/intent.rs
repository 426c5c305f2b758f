use crate::charts::{BarMetric, ColorBy, SplitBy};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsIntent {
    CycleScatterColor,
    ToggleSize,
    CycleSplit,
    CycleMetric,
    ToggleDayCount,
    SetScatterColor(ColorBy),
    SetSplit(SplitBy),
    SetMetric(BarMetric),
}

impl Intent for OptionsIntent {}
