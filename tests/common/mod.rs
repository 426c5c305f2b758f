//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;
use tipboard::data::{Dataset, Day, MealTime, Record, Sex};

pub fn record(total_bill: f64, tip: f64, day: Day, time: MealTime) -> Record {
    Record {
        total_bill,
        tip,
        sex: Sex::Female,
        smoker: false,
        day,
        time,
        size: 2,
    }
}

/// Small hand-made table covering every day and both meal times.
///
/// Rows in [10, 20] at Lunch on Sat/Sun have tips 1.5, 2.0 and 3.0.
pub fn fixture_records() -> Vec<Record> {
    vec![
        record(12.0, 1.5, Day::Sat, MealTime::Lunch),
        record(25.0, 4.0, Day::Sat, MealTime::Dinner),
        record(15.0, 2.0, Day::Sun, MealTime::Lunch),
        record(8.0, 1.0, Day::Sun, MealTime::Lunch),
        record(18.0, 3.0, Day::Sun, MealTime::Lunch),
        record(14.0, 2.5, Day::Thur, MealTime::Lunch),
        record(30.0, 5.0, Day::Fri, MealTime::Dinner),
        record(19.0, 2.0, Day::Fri, MealTime::Lunch),
        record(22.0, 3.5, Day::Sun, MealTime::Dinner),
    ]
}

pub fn fixture_dataset() -> Dataset {
    Dataset::new(fixture_records()).unwrap()
}

/// Write `content` to a file named `name` in a fresh temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    let mut file = std::fs::File::create(&path).expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    (temp_dir, path)
}
