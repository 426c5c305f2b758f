mod common;

use common::{fixture_dataset, fixture_records};
use std::collections::BTreeSet;
use tipboard::data::{Day, MealTime};
use tipboard::view::{derive_view, BillRange, FilterState, ViewCache};

fn filters(min: f64, max: f64, times: &[MealTime], days: &[Day]) -> FilterState {
    let dataset = fixture_dataset();
    FilterState {
        bill_range: BillRange::new(min, max),
        times: times.iter().copied().collect(),
        days: days.iter().copied().collect(),
        ..FilterState::new(dataset.bill_bounds())
    }
}

#[test]
fn default_filters_keep_every_row_in_source_order() {
    let dataset = fixture_dataset();
    let view = derive_view(&dataset, &FilterState::new(dataset.bill_bounds()));
    assert_eq!(view.records(), fixture_records().as_slice());
}

#[test]
fn lunch_weekend_example() {
    let dataset = fixture_dataset();
    let state = filters(10.0, 20.0, &[MealTime::Lunch], &[Day::Sat, Day::Sun]);
    let view = derive_view(&dataset, &state);

    let tips: Vec<f64> = view.iter().map(|r| r.tip).collect();
    assert_eq!(tips, vec![1.5, 2.0, 3.0]);
    let mean = tips.iter().sum::<f64>() / tips.len() as f64;
    assert_eq!(format!("{mean:.2}"), "2.17");
}

#[test]
fn every_row_satisfies_and_no_row_is_missed() {
    let dataset = fixture_dataset();
    let state = filters(14.0, 25.0, &[MealTime::Dinner, MealTime::Lunch], &[Day::Fri, Day::Sat, Day::Thur]);
    let view = derive_view(&dataset, &state);

    for record in view.iter() {
        assert!(record.total_bill >= 14.0 && record.total_bill <= 25.0);
        assert!(state.times.contains(&record.time));
        assert!(state.days.contains(&record.day));
    }
    let expected = dataset.records().iter().filter(|r| state.matches(r)).count();
    assert_eq!(view.len(), expected);
    assert_eq!(view.len(), 3);
}

#[test]
fn range_endpoints_are_inclusive() {
    let dataset = fixture_dataset();
    let state = filters(12.0, 12.0, &MealTime::ALL, &Day::ALL);
    let view = derive_view(&dataset, &state);
    assert_eq!(view.len(), 1);
    assert_eq!(view.records()[0].total_bill, 12.0);
}

#[test]
fn empty_selections_give_empty_view() {
    let dataset = fixture_dataset();
    let no_days = filters(0.0, 100.0, &MealTime::ALL, &[]);
    assert!(derive_view(&dataset, &no_days).is_empty());

    let no_times = FilterState {
        times: BTreeSet::new(),
        ..FilterState::new(dataset.bill_bounds())
    };
    assert!(derive_view(&dataset, &no_times).is_empty());
}

#[test]
fn derivation_is_deterministic() {
    let dataset = fixture_dataset();
    let state = filters(10.0, 30.0, &[MealTime::Dinner], &Day::ALL);
    assert_eq!(derive_view(&dataset, &state), derive_view(&dataset, &state));
}

#[test]
fn cache_recomputes_only_on_new_filters() {
    let dataset = fixture_dataset();
    let mut cache = ViewCache::new();
    let all = FilterState::new(dataset.bill_bounds());
    let lunch = filters(0.0, 100.0, &[MealTime::Lunch], &Day::ALL);

    assert_eq!(cache.get(&dataset, &all).len(), 9);
    assert_eq!(cache.get(&dataset, &all).len(), 9);
    assert_eq!(cache.recomputations(), 1);

    assert_eq!(cache.get(&dataset, &lunch).len(), 6);
    assert_eq!(cache.recomputations(), 2);
    assert_eq!(cache.get(&dataset, &all).len(), 9);
    assert_eq!(cache.recomputations(), 3);
}
