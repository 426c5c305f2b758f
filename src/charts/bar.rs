use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::data::Day;
use crate::view::DerivedView;

pub const PLACEHOLDER_MESSAGE: &str = "No data to display with the current filters";
pub const DAY_AXIS_TITLE: &str = "Day of week";

/// Per-day aggregate plotted by the bar chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum BarMetric {
    /// Sum of tips.
    #[default]
    #[serde(rename = "total")]
    #[value(name = "total")]
    TotalTip,
    /// Mean tip.
    #[serde(rename = "mean")]
    #[value(name = "mean")]
    MeanTip,
    /// Mean of tip / bill, in percent.
    #[serde(rename = "percent")]
    #[value(name = "percent")]
    MeanTipPercent,
}

impl BarMetric {
    pub const ALL: [BarMetric; 3] = [
        BarMetric::TotalTip,
        BarMetric::MeanTip,
        BarMetric::MeanTipPercent,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BarMetric::TotalTip => "Total tips",
            BarMetric::MeanTip => "Mean tip",
            BarMetric::MeanTipPercent => "Tip percentage",
        }
    }

    pub fn axis_title(self) -> &'static str {
        match self {
            BarMetric::TotalTip => "Total tips (€)",
            BarMetric::MeanTip => "Mean tip (€)",
            BarMetric::MeanTipPercent => "Mean tip percentage (%)",
        }
    }

    /// Format an aggregate of this metric for display.
    pub fn format(self, value: f64) -> String {
        match self {
            BarMetric::TotalTip | BarMetric::MeanTip => format!("€{value:.2}"),
            BarMetric::MeanTipPercent => format!("{value:.1}%"),
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBar {
    pub day: Day,
    pub value: f64,
    /// Number of records for the day, present when the visit overlay is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visits: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBars {
    pub metric: BarMetric,
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    /// One bar per day present in the view, Thur through Sun.
    pub rows: Vec<DayBar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BarChartSpec {
    Placeholder { message: &'static str },
    Bars(DayBars),
}

impl BarChartSpec {
    pub fn rows(&self) -> &[DayBar] {
        match self {
            BarChartSpec::Placeholder { .. } => &[],
            BarChartSpec::Bars(bars) => &bars.rows,
        }
    }
}

#[derive(Default)]
struct DayAccumulator {
    tip_sum: f64,
    percent_sum: f64,
    count: usize,
}

/// Group the view by day and aggregate `metric` for each day.
pub fn aggregate_by_day(view: &DerivedView, metric: BarMetric, show_day_count: bool) -> BarChartSpec {
    if view.is_empty() {
        return BarChartSpec::Placeholder {
            message: PLACEHOLDER_MESSAGE,
        };
    }

    // BTreeMap iterates in `Day` order, which is the week order.
    let mut per_day: BTreeMap<Day, DayAccumulator> = BTreeMap::new();
    for record in view {
        let acc = per_day.entry(record.day).or_default();
        acc.tip_sum += record.tip;
        acc.percent_sum += record.tip_ratio() * 100.0;
        acc.count += 1;
    }

    let rows = per_day
        .into_iter()
        .map(|(day, acc)| {
            let n = acc.count as f64;
            let value = match metric {
                BarMetric::TotalTip => acc.tip_sum,
                BarMetric::MeanTip => acc.tip_sum / n,
                BarMetric::MeanTipPercent => acc.percent_sum / n,
            };
            DayBar {
                day,
                value,
                visits: show_day_count.then_some(acc.count),
            }
        })
        .collect();

    BarChartSpec::Bars(DayBars {
        metric,
        title: format!("{} by day of week", metric.label()),
        x_title: DAY_AXIS_TITLE,
        y_title: metric.axis_title(),
        rows,
    })
}
