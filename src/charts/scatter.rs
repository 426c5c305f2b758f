use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::charts::lowess::{lowess, DEFAULT_FRAC, DEFAULT_ITERATIONS};
use crate::charts::{group_by_first_appearance, SplitBy};
use crate::data::Record;
use crate::view::DerivedView;

/// Variable used to color scatter points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ColorBy {
    #[default]
    None,
    Sex,
    Smoker,
    Day,
    Time,
}

impl ColorBy {
    pub const ALL: [ColorBy; 5] = [
        ColorBy::None,
        ColorBy::Sex,
        ColorBy::Smoker,
        ColorBy::Day,
        ColorBy::Time,
    ];

    pub fn split(self) -> Option<SplitBy> {
        match self {
            ColorBy::None => None,
            ColorBy::Sex => Some(SplitBy::Sex),
            ColorBy::Smoker => Some(SplitBy::Smoker),
            ColorBy::Day => Some(SplitBy::Day),
            ColorBy::Time => Some(SplitBy::Time),
        }
    }

    pub fn column(self) -> &'static str {
        self.split().map(SplitBy::column).unwrap_or("none")
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub bill: f64,
    pub tip: f64,
    /// Party size, present when size encoding is on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterGroup {
    /// `None` when the plot is not colored.
    pub label: Option<&'static str>,
    pub points: Vec<ScatterPoint>,
    /// LOWESS fit of tip on bill, sorted by bill.
    pub trend: Vec<(f64, f64)>,
}

/// Bill vs tip scatter plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSpec {
    pub color_by: ColorBy,
    pub show_size: bool,
    pub groups: Vec<ScatterGroup>,
}

impl ScatterSpec {
    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(|g| g.points.is_empty())
    }

    /// `[min, max]` over all bills, or `None` for an empty plot.
    pub fn x_bounds(&self) -> Option<[f64; 2]> {
        self.bounds(|p| p.bill)
    }

    pub fn y_bounds(&self) -> Option<[f64; 2]> {
        self.bounds(|p| p.tip)
    }

    fn bounds(&self, axis: impl Fn(&ScatterPoint) -> f64) -> Option<[f64; 2]> {
        self.groups
            .iter()
            .flat_map(|g| g.points.iter())
            .map(axis)
            .fold(None, |acc, v| match acc {
                None => Some([v, v]),
                Some([lo, hi]) => Some([lo.min(v), hi.max(v)]),
            })
    }
}

pub fn scatter_plot(view: &DerivedView, color_by: ColorBy, show_size: bool) -> ScatterSpec {
    let groups = match color_by.split() {
        None if view.is_empty() => Vec::new(),
        None => vec![build_group(None, view.iter(), show_size)],
        Some(split) => group_by_first_appearance(view, split)
            .into_iter()
            .map(|(label, members)| build_group(Some(label), members.into_iter(), show_size))
            .collect(),
    };
    ScatterSpec {
        color_by,
        show_size,
        groups,
    }
}

fn build_group<'a>(
    label: Option<&'static str>,
    records: impl Iterator<Item = &'a Record>,
    show_size: bool,
) -> ScatterGroup {
    let points: Vec<ScatterPoint> = records
        .map(|r| ScatterPoint {
            bill: r.total_bill,
            tip: r.tip,
            size: show_size.then_some(r.size),
        })
        .collect();
    let pairs: Vec<(f64, f64)> = points.iter().map(|p| (p.bill, p.tip)).collect();
    ScatterGroup {
        label,
        trend: lowess(&pairs, DEFAULT_FRAC, DEFAULT_ITERATIONS),
        points,
    }
}
