use serde::Serialize;

use crate::charts::{group_by_first_appearance, SplitBy};
use crate::view::DerivedView;

/// Kernel bandwidth in tip-ratio units.
pub const BANDWIDTH: f64 = 0.01;
const GRID_POINTS: usize = 120;

/// Estimated density of tip percentages for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DensitySeries {
    pub label: &'static str,
    pub samples: usize,
    /// `(tip ratio, density)` pairs on the shared grid.
    pub curve: Vec<(f64, f64)>,
}

impl DensitySeries {
    pub fn peak(&self) -> f64 {
        self.curve.iter().map(|(_, d)| *d).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSpec {
    pub split_by: SplitBy,
    pub bandwidth: f64,
    pub series: Vec<DensitySeries>,
}

/// One Gaussian KDE of `tip / total_bill` per value of `split_by`.
pub fn tip_distribution(view: &DerivedView, split_by: SplitBy) -> DistributionSpec {
    let groups = group_by_first_appearance(view, split_by);
    let grid = grid(view);

    let series = groups
        .into_iter()
        .map(|(label, members)| {
            let samples: Vec<f64> = members.iter().map(|r| r.tip_ratio()).collect();
            DensitySeries {
                label,
                samples: samples.len(),
                curve: grid.iter().map(|&x| (x, gaussian_kde(&samples, x))).collect(),
            }
        })
        .collect();

    DistributionSpec {
        split_by,
        bandwidth: BANDWIDTH,
        series,
    }
}

fn grid(view: &DerivedView) -> Vec<f64> {
    let Some((lo, hi)) = view.iter().map(|r| r.tip_ratio()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
    }) else {
        return Vec::new();
    };
    let start = lo - 3.0 * BANDWIDTH;
    let end = hi + 3.0 * BANDWIDTH;
    let step = (end - start) / (GRID_POINTS - 1) as f64;
    (0..GRID_POINTS).map(|i| start + step * i as f64).collect()
}

fn gaussian_kde(samples: &[f64], x: f64) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let norm = samples.len() as f64 * BANDWIDTH * (2.0 * std::f64::consts::PI).sqrt();
    samples
        .iter()
        .map(|s| {
            let u = (x - s) / BANDWIDTH;
            (-0.5 * u * u).exp()
        })
        .sum::<f64>()
        / norm
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Day, MealTime, Record, Sex};

    fn record(tip: f64, time: MealTime) -> Record {
        Record {
            total_bill: 10.0,
            tip,
            sex: Sex::Male,
            smoker: true,
            day: Day::Fri,
            time,
            size: 2,
        }
    }

    #[test]
    fn empty_view_has_no_series() {
        let spec = tip_distribution(&DerivedView::default(), SplitBy::Day);
        assert!(spec.series.is_empty());
        assert_eq!(spec.split_by, SplitBy::Day);
    }

    #[test]
    fn density_integrates_to_one() {
        let view: DerivedView = [1.0, 1.5, 2.0]
            .into_iter()
            .map(|tip| record(tip, MealTime::Dinner))
            .collect();
        let spec = tip_distribution(&view, SplitBy::Time);
        assert_eq!(spec.series.len(), 1);
        let curve = &spec.series[0].curve;
        let area: f64 = curve
            .windows(2)
            .map(|w| (w[1].0 - w[0].0) * (w[0].1 + w[1].1) / 2.0)
            .sum();
        assert!((area - 1.0).abs() < 0.01, "area {area}");
    }

    #[test]
    fn series_follow_first_appearance() {
        let view: DerivedView = vec![
            record(1.0, MealTime::Dinner),
            record(2.0, MealTime::Lunch),
            record(1.2, MealTime::Dinner),
        ]
        .into_iter()
        .collect();
        let spec = tip_distribution(&view, SplitBy::Time);
        let labels: Vec<_> = spec.series.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec!["Dinner", "Lunch"]);
        assert_eq!(spec.series[0].samples, 2);
        assert!(spec.series[0].peak() > 0.0);
    }
}
