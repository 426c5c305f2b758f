use serde::Serialize;
use std::collections::BTreeSet;

use crate::data::{Day, MealTime, Record};

/// Closed bill-amount interval `[min, max]`.
///
/// Construction orders the endpoints, so `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BillRange {
    min: f64,
    max: f64,
}

impl BillRange {
    /// A NaN endpoint takes the value of the other one.
    pub fn new(a: f64, b: f64) -> Self {
        let (a, b) = match (a.is_nan(), b.is_nan()) {
            (true, false) => (b, b),
            (false, true) => (a, a),
            _ => (a, b),
        };
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// `[min, max]` clamped to `bounds`. A NaN endpoint is replaced by the
    /// matching end of `bounds`.
    pub fn within(min: f64, max: f64, bounds: BillRange) -> Self {
        let min = if min.is_nan() { bounds.min } else { min };
        let max = if max.is_nan() { bounds.max } else { max };
        Self::new(min, max).clamp_to(bounds)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Intersect with `bounds`. Falls back to a degenerate range at the
    /// nearest bound when the two intervals do not overlap. A NaN endpoint
    /// snaps to the matching end of `bounds`.
    pub fn clamp_to(&self, bounds: BillRange) -> Self {
        let pin = |value: f64, fallback: f64| {
            if value.is_nan() {
                fallback
            } else {
                value.clamp(bounds.min, bounds.max)
            }
        };
        Self::new(pin(self.min, bounds.min), pin(self.max, bounds.max))
    }
}

impl Default for BillRange {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }
}

/// User-selected constraints applied to the dataset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilterState {
    pub bill_range: BillRange,
    pub times: BTreeSet<MealTime>,
    pub days: BTreeSet<Day>,
    /// Full bill range of the loaded dataset. Reset restores `bill_range` to it.
    #[serde(skip)]
    pub bounds: BillRange,
}

impl FilterState {
    /// Default filters for a dataset whose bills span `bounds`.
    pub fn new(bounds: BillRange) -> Self {
        Self {
            bill_range: bounds,
            times: MealTime::ALL.into_iter().collect(),
            days: Day::ALL.into_iter().collect(),
            bounds,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.bill_range.contains(record.total_bill)
            && self.times.contains(&record.time)
            && self.days.contains(&record.day)
    }

    pub fn is_default(&self) -> bool {
        *self == Self::new(self.bounds)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(BillRange::default())
    }
}
