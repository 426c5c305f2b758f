mod common;

use common::fixture_dataset;
use tipboard::charts::BarMetric;
use tipboard::data::{Day, MealTime};
use tipboard::report::Report;
use tipboard::view::{BillRange, FilterState};

fn lunch_weekend() -> FilterState {
    let dataset = fixture_dataset();
    FilterState {
        bill_range: BillRange::new(10.0, 20.0),
        times: [MealTime::Lunch].into_iter().collect(),
        days: [Day::Sat, Day::Sun].into_iter().collect(),
        ..FilterState::new(dataset.bill_bounds())
    }
}

#[test]
fn report_collects_every_display() {
    let report = Report::build(&fixture_dataset(), &lunch_weekend(), BarMetric::MeanTip, true);
    assert_eq!(report.rows.len(), 3);
    assert_eq!(report.summary.count, Some(3));
    assert_eq!(report.bar.rows().len(), 2);
}

#[test]
fn text_report() {
    let report = Report::build(&fixture_dataset(), &lunch_weekend(), BarMetric::TotalTip, true);
    let text = report.to_string();

    assert!(text.contains("Bill amount:  €10.00 - €20.00"));
    assert!(text.contains("Food service: Lunch\n"));
    assert!(text.contains("Day of week:  Sat, Sun"));
    assert!(text.contains("Total tippers:      3"));
    assert!(text.contains("Average tip:        14.2%"));
    assert!(text.contains("Average party size: 2.0 people"));
    assert!(text.contains("Total tips by day of week"));
    assert!(text.contains("(visits: 2)"));
}

#[test]
fn empty_report_shows_placeholder() {
    let dataset = fixture_dataset();
    let filters = FilterState {
        days: Default::default(),
        ..FilterState::new(dataset.bill_bounds())
    };
    let report = Report::build(&dataset, &filters, BarMetric::TotalTip, true);
    let text = report.to_string();

    assert!(text.contains("Day of week:  (none)"));
    assert!(text.contains("No data to display with the current filters"));
    assert!(report.rows.is_empty());
}

#[test]
fn json_report_fields() {
    let report = Report::build(&fixture_dataset(), &lunch_weekend(), BarMetric::MeanTipPercent, false);
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["filters"]["bill_range"]["min"], 10.0);
    assert_eq!(json["filters"]["times"], serde_json::json!(["Lunch"]));
    assert_eq!(json["filters"]["days"], serde_json::json!(["Sat", "Sun"]));
    assert_eq!(json["summary"]["count"], 3);
    assert_eq!(json["bar"]["kind"], "bars");
    assert_eq!(json["bar"]["metric"], "percent");
    assert_eq!(json["bar"]["rows"][0]["day"], "Sat");
    assert!(json["bar"]["rows"][0].get("visits").is_none());
    assert_eq!(json["rows"].as_array().unwrap().len(), 3);
    assert_eq!(json["rows"][0]["smoker"], "No");
}
