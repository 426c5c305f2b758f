//! Summary statistics shown in the value boxes.

use serde::Serialize;

use crate::view::DerivedView;

/// The four headline numbers of the dashboard.
///
/// Every field is `None` when the derived view has no rows, so callers render
/// a blank box instead of dividing by zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub count: Option<usize>,
    /// Mean of `tip / total_bill` as a fraction.
    pub mean_tip_ratio: Option<f64>,
    pub mean_bill: Option<f64>,
    pub mean_size: Option<f64>,
}

impl SummaryStats {
    pub fn from_view(view: &DerivedView) -> Self {
        if view.is_empty() {
            return Self::default();
        }
        let n = view.len() as f64;
        Self {
            count: Some(view.len()),
            mean_tip_ratio: Some(view.iter().map(|r| r.tip_ratio()).sum::<f64>() / n),
            mean_bill: Some(view.iter().map(|r| r.total_bill).sum::<f64>() / n),
            mean_size: Some(view.iter().map(|r| f64::from(r.size)).sum::<f64>() / n),
        }
    }

    pub fn format_count(&self) -> Option<String> {
        self.count.map(|count| count.to_string())
    }

    pub fn format_tip_percent(&self) -> Option<String> {
        self.mean_tip_ratio
            .map(|ratio| format!("{:.1}%", ratio * 100.0))
    }

    pub fn format_bill(&self) -> Option<String> {
        self.mean_bill.map(|bill| format!("€{bill:.2}"))
    }

    pub fn format_size(&self) -> Option<String> {
        self.mean_size.map(|size| format!("{size:.1} people"))
    }
}
