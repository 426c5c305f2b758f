use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::charts::{BarMetric, ColorBy, SplitBy};
use crate::data::{Day, MealTime};
use crate::ui::filters::{FilterIntent, FilterReducer};
use crate::ui::mvi::Reducer;
use crate::ui::options::{DisplayOptions, OptionsIntent, OptionsReducer};
use crate::view::{BillRange, FilterState};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Explore restaurant tip records in the terminal.
#[derive(Debug, Parser)]
#[command(name = "tipboard", version, about)]
pub struct Cli {
    /// CSV dataset to load (defaults to the bundled sample)
    #[arg(long, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print a report instead of starting the dashboard
    #[arg(long)]
    pub report: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Lower end of the bill range
    #[arg(long, value_name = "AMOUNT", value_parser = parse_bill)]
    pub min_bill: Option<f64>,

    /// Upper end of the bill range
    #[arg(long, value_name = "AMOUNT", value_parser = parse_bill)]
    pub max_bill: Option<f64>,

    /// Meal times to include, comma separated (empty selects none)
    #[arg(long, value_delimiter = ',', num_args = 0.., value_parser = parse_time)]
    pub times: Option<Vec<MealTime>>,

    /// Days to include, comma separated (empty selects none)
    #[arg(long, value_delimiter = ',', num_args = 0.., value_parser = parse_day)]
    pub days: Option<Vec<Day>>,

    /// Bar chart metric
    #[arg(long, value_enum)]
    pub metric: Option<BarMetric>,

    /// Scatter plot color variable
    #[arg(long, value_enum)]
    pub color: Option<ColorBy>,

    /// Variable splitting the tip distribution
    #[arg(long, value_enum)]
    pub split: Option<SplitBy>,
}

impl Cli {
    /// Default filters for `bounds` with the command-line overrides applied.
    pub fn initial_filters(&self, bounds: BillRange) -> FilterState {
        let mut intents = Vec::new();
        if self.min_bill.is_some() || self.max_bill.is_some() {
            intents.push(FilterIntent::SetBillRange {
                min: self.min_bill.unwrap_or(bounds.min()),
                max: self.max_bill.unwrap_or(bounds.max()),
            });
        }
        if let Some(times) = &self.times {
            intents.push(FilterIntent::SetTimes(times.iter().copied().collect()));
        }
        if let Some(days) = &self.days {
            intents.push(FilterIntent::SetDays(days.iter().copied().collect()));
        }

        intents
            .into_iter()
            .fold(FilterState::new(bounds), FilterReducer::reduce)
    }

    /// Apply the command-line overrides to configured display options.
    pub fn apply_options(&self, options: DisplayOptions) -> DisplayOptions {
        let intents = [
            self.metric.map(OptionsIntent::SetMetric),
            self.color.map(OptionsIntent::SetScatterColor),
            self.split.map(OptionsIntent::SetSplit),
        ];
        intents
            .into_iter()
            .flatten()
            .fold(options, OptionsReducer::reduce)
    }
}

fn parse_bill(value: &str) -> Result<f64, String> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(format!("bill amount must be finite, got '{value}'"))
    }
}

fn parse_time(value: &str) -> Result<MealTime, String> {
    MealTime::parse(value).ok_or_else(|| format!("unknown meal time '{value}' (expected Lunch or Dinner)"))
}

fn parse_day(value: &str) -> Result<Day, String> {
    Day::parse(value).ok_or_else(|| format!("unknown day '{value}' (expected Thur, Fri, Sat or Sun)"))
}
