use std::collections::BTreeSet;

use crate::data::{Day, MealTime};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum FilterIntent {
    /// Replace the bill range. Clamped to the dataset bounds.
    SetBillRange { min: f64, max: f64 },
    /// Move the lower handle. It stops at the upper handle.
    NudgeMin { delta: f64 },
    /// Move the upper handle. It stops at the lower handle.
    NudgeMax { delta: f64 },
    ToggleTime(MealTime),
    ToggleDay(Day),
    SetTimes(BTreeSet<MealTime>),
    SetDays(BTreeSet<Day>),
    /// Full bill range, both meal times, all four days.
    Reset,
}

impl Intent for FilterIntent {}
