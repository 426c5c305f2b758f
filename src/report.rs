//! Headless rendering of the derived views for `--report`.

use serde::Serialize;
use std::fmt;

use crate::charts::{aggregate_by_day, BarChartSpec, BarMetric};
use crate::data::{Dataset, Record};
use crate::stats::SummaryStats;
use crate::view::{derive_view, FilterState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub filters: FilterState,
    pub summary: SummaryStats,
    pub bar: BarChartSpec,
    pub rows: Vec<Record>,
}

impl Report {
    pub fn build(
        dataset: &Dataset,
        filters: &FilterState,
        metric: BarMetric,
        show_day_count: bool,
    ) -> Self {
        let view = derive_view(dataset, filters);
        Self {
            filters: filters.clone(),
            summary: SummaryStats::from_view(&view),
            bar: aggregate_by_day(&view, metric, show_day_count),
            rows: view.records().to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn join_or_none<T: fmt::Display>(items: impl IntoIterator<Item = T>) -> String {
    let joined: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined.join(", ")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let range = self.filters.bill_range;
        writeln!(f, "Filters")?;
        writeln!(f, "  Bill amount:  €{:.2} - €{:.2}", range.min(), range.max())?;
        writeln!(f, "  Food service: {}", join_or_none(&self.filters.times))?;
        writeln!(f, "  Day of week:  {}", join_or_none(&self.filters.days))?;
        writeln!(f)?;

        let blank = String::new;
        writeln!(f, "Summary")?;
        writeln!(f, "  Total tippers:      {}", self.summary.format_count().unwrap_or_else(blank))?;
        writeln!(f, "  Average tip:        {}", self.summary.format_tip_percent().unwrap_or_else(blank))?;
        writeln!(f, "  Average bill:       {}", self.summary.format_bill().unwrap_or_else(blank))?;
        writeln!(f, "  Average party size: {}", self.summary.format_size().unwrap_or_else(blank))?;
        writeln!(f)?;

        match &self.bar {
            BarChartSpec::Placeholder { message } => writeln!(f, "{message}"),
            BarChartSpec::Bars(bars) => {
                writeln!(f, "{} ({})", bars.title, bars.y_title)?;
                for row in &bars.rows {
                    write!(f, "  {:<5} {:>9}", row.day.as_str(), bars.metric.format(row.value))?;
                    match row.visits {
                        Some(visits) => writeln!(f, "  (visits: {visits})")?,
                        None => writeln!(f)?,
                    }
                }
                Ok(())
            }
        }
    }
}
