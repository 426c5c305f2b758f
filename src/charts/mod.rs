//! Display adapters.
//!
//! Each adapter is a read-only function of the derived view (plus the
//! current display options) that returns a chart specification. How the
//! specification is drawn is the renderer's business.

pub mod bar;
pub mod density;
pub mod lowess;
pub mod scatter;
pub mod table;

pub use bar::{aggregate_by_day, BarChartSpec, BarMetric, DayBar, DayBars};
pub use density::{tip_distribution, DensitySeries, DistributionSpec};
pub use scatter::{scatter_plot, ColorBy, ScatterGroup, ScatterPoint, ScatterSpec};
pub use table::{table_rows, TABLE_COLUMNS};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::data::Record;
use crate::view::DerivedView;

/// Categorical column used to split records into groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SplitBy {
    Sex,
    Smoker,
    #[default]
    Day,
    Time,
}

impl SplitBy {
    pub const ALL: [SplitBy; 4] = [SplitBy::Sex, SplitBy::Smoker, SplitBy::Day, SplitBy::Time];

    pub fn column(self) -> &'static str {
        match self {
            SplitBy::Sex => "sex",
            SplitBy::Smoker => "smoker",
            SplitBy::Day => "day",
            SplitBy::Time => "time",
        }
    }

    pub fn label(self, record: &Record) -> &'static str {
        match self {
            SplitBy::Sex => record.sex.as_str(),
            SplitBy::Smoker => record.smoker_label(),
            SplitBy::Day => record.day.as_str(),
            SplitBy::Time => record.time.as_str(),
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// Split the view by `split`, keeping groups in order of first appearance.
pub(crate) fn group_by_first_appearance(
    view: &DerivedView,
    split: SplitBy,
) -> Vec<(&'static str, Vec<&Record>)> {
    let mut groups: Vec<(&'static str, Vec<&Record>)> = Vec::new();
    for record in view {
        let label = split.label(record);
        match groups.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, members)) => members.push(record),
            None => groups.push((label, vec![record])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Day, MealTime, Sex};

    fn record(day: Day) -> Record {
        Record {
            total_bill: 10.0,
            tip: 1.0,
            sex: Sex::Female,
            smoker: false,
            day,
            time: MealTime::Dinner,
            size: 2,
        }
    }

    #[test]
    fn groups_keep_first_appearance_order() {
        let view: DerivedView = [Day::Sun, Day::Thur, Day::Sun, Day::Sat]
            .into_iter()
            .map(record)
            .collect();
        let groups = group_by_first_appearance(&view, SplitBy::Day);
        let labels: Vec<_> = groups.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, vec!["Sun", "Thur", "Sat"]);
        assert_eq!(groups[0].1.len(), 2);
    }

    #[test]
    fn split_cycles_through_all_columns() {
        let mut split = SplitBy::Sex;
        for _ in 0..SplitBy::ALL.len() {
            split = split.next();
        }
        assert_eq!(split, SplitBy::Sex);
    }
}
