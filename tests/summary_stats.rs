mod common;

use common::fixture_dataset;
use tipboard::data::{Day, MealTime};
use tipboard::stats::SummaryStats;
use tipboard::view::{derive_view, BillRange, DerivedView, FilterState};

fn lunch_weekend_view() -> DerivedView {
    let dataset = fixture_dataset();
    let state = FilterState {
        bill_range: BillRange::new(10.0, 20.0),
        times: [MealTime::Lunch].into_iter().collect(),
        days: [Day::Sat, Day::Sun].into_iter().collect(),
        ..FilterState::new(dataset.bill_bounds())
    };
    derive_view(&dataset, &state)
}

#[test]
fn stats_over_filtered_rows() {
    let stats = SummaryStats::from_view(&lunch_weekend_view());
    assert_eq!(stats.count, Some(3));
    assert_eq!(stats.mean_bill, Some(15.0));
    assert_eq!(stats.mean_size, Some(2.0));
    let ratio = stats.mean_tip_ratio.unwrap();
    assert!((ratio - (0.125 + 2.0 / 15.0 + 3.0 / 18.0) / 3.0).abs() < 1e-12);
}

#[test]
fn formatted_values() {
    let stats = SummaryStats::from_view(&lunch_weekend_view());
    assert_eq!(stats.format_count().as_deref(), Some("3"));
    assert_eq!(stats.format_tip_percent().as_deref(), Some("14.2%"));
    assert_eq!(stats.format_bill().as_deref(), Some("€15.00"));
    assert_eq!(stats.format_size().as_deref(), Some("2.0 people"));
}

#[test]
fn empty_view_has_no_values() {
    let stats = SummaryStats::from_view(&DerivedView::default());
    assert_eq!(stats, SummaryStats::default());
    assert!(stats.format_count().is_none());
    assert!(stats.format_tip_percent().is_none());
    assert!(stats.format_bill().is_none());
    assert!(stats.format_size().is_none());
}

#[test]
fn single_row_view_is_its_own_mean() {
    let dataset = fixture_dataset();
    let state = FilterState {
        bill_range: BillRange::new(30.0, 30.0),
        ..FilterState::new(dataset.bill_bounds())
    };
    let stats = SummaryStats::from_view(&derive_view(&dataset, &state));
    assert_eq!(stats.count, Some(1));
    assert_eq!(stats.format_bill().as_deref(), Some("€30.00"));
    assert_eq!(stats.format_tip_percent().as_deref(), Some("16.7%"));
}
