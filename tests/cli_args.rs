//! Tests for CLI argument parsing and the headless report, run against the
//! built binary.

mod common;

use common::temp_file;
use std::process::{Command, Output};

fn tipboard_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tipboard"));
    cmd.env_remove("RUST_LOG");
    cmd
}

fn run_report(args: &[&str]) -> Output {
    tipboard_cmd()
        .args(["--config", "/nonexistent/tipboard.toml", "--report"])
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_help_lists_filter_options() {
    let output = tipboard_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--data", "--report", "--min-bill", "--max-bill", "--times", "--days", "--metric"] {
        assert!(stdout.contains(flag), "help is missing {flag}");
    }
}

#[test]
fn test_json_report_on_bundled_data() {
    let output = run_report(&["--format", "json"]);
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report is valid JSON");
    for field in ["filters", "summary", "bar", "rows"] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["bar"]["kind"], "bars");
    let days: Vec<&str> = json["bar"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["day"].as_str().unwrap())
        .collect();
    assert_eq!(days, vec!["Thur", "Fri", "Sat", "Sun"]);
}

#[test]
fn test_filters_from_flags() {
    let output = run_report(&["--format", "json", "--times", "Lunch", "--days", "Thur", "--max-bill", "20"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json["rows"].as_array().unwrap();
    assert!(!rows.is_empty());
    for row in rows {
        assert_eq!(row["time"], "Lunch");
        assert_eq!(row["day"], "Thur");
        assert!(row["total_bill"].as_f64().unwrap() <= 20.0);
    }
}

#[test]
fn test_empty_selection_prints_placeholder() {
    let output = run_report(&["--days"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No data to display with the current filters"));
    assert!(stdout.contains("Day of week:  (none)"));
}

#[test]
fn test_data_flag_loads_csv() {
    let (_dir, path) = temp_file(
        "tips.csv",
        "total_bill,tip,sex,smoker,day,time,size\n20.0,4.0,Male,No,Fri,Dinner,2\n",
    );
    let output = run_report(&["--data", path.to_str().unwrap()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total tippers:      1"));
    assert!(stdout.contains("Average tip:        20.0%"));
}

#[test]
fn test_invalid_day_is_rejected() {
    let output = run_report(&["--days", "Mon"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown day 'Mon'"));
}

#[test]
fn test_nan_bill_is_rejected() {
    let output = run_report(&["--min-bill", "NaN"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bill amount must be finite"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("NaN"));
}

#[test]
fn test_missing_data_file_exits_with_error() {
    let output = run_report(&["--data", "/nonexistent/tips.csv"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to open dataset '/nonexistent/tips.csv'"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_file("config.toml", "[ui]\ntick_rate_ms = 0\n");
    let output = tipboard_cmd()
        .args(["--report", "--config", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[cfg(target_os = "linux")]
#[test]
fn test_default_config_location_is_used() {
    let (dir, _) = temp_file("unused", "");
    let config_dir = dir.path().join("tipboard");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[display]\nbar_metric = \"mean\"\n").unwrap();

    let output = tipboard_cmd()
        .env("XDG_CONFIG_HOME", dir.path())
        .args(["--report", "--format", "json"])
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["bar"]["metric"], "mean");
}
