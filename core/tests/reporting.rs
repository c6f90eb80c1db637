//! Reporter tests: the two artifacts and the summary's shape.

use loanrisk_core::record::RawLoanRow;
use loanrisk_core::report::{generate_report, DASHBOARD_FILE, SUMMARY_FILE};
use loanrisk_core::transform::{transform_data, ScoreBounds};
use std::path::PathBuf;

fn temp_out_dir() -> PathBuf {
    std::env::temp_dir().join(format!("loanrisk-report-{}", uuid::Uuid::new_v4()))
}

fn sample_records() -> Vec<loanrisk_core::record::LoanRecord> {
    let raw: Vec<RawLoanRow> = (0..40)
        .map(|i| RawLoanRow {
            loan_id: format!("L{i:03}"),
            income: Some(25000.0 + 2000.0 * i as f64),
            credit_score: Some(500.0 + 7.0 * i as f64),
            loan_amount: Some(8000.0 + 900.0 * i as f64),
            default_status: Some(if i % 5 == 0 { "Yes".into() } else { "No".into() }),
        })
        .collect();
    transform_data(&raw, ScoreBounds::Batch).unwrap()
}

/// Valid input writes exactly the two named artifacts.
#[test]
fn writes_exactly_two_artifacts() {
    let out_dir = temp_out_dir();
    let paths = generate_report(&sample_records(), &out_dir).unwrap();

    assert_eq!(paths.summary_csv, out_dir.join(SUMMARY_FILE));
    assert_eq!(paths.dashboard_png, out_dir.join(DASHBOARD_FILE));
    assert!(paths.summary_csv.exists());
    assert!(paths.dashboard_png.exists());

    let entries: Vec<_> = std::fs::read_dir(&out_dir).unwrap().collect();
    assert_eq!(entries.len(), 2, "no stray files in the output dir");

    let png_len = std::fs::metadata(&paths.dashboard_png).unwrap().len();
    assert!(png_len > 0, "chart image should not be empty");
}

/// The summary holds the eight statistics for the four columns.
#[test]
fn summary_shape_matches_describe() {
    let out_dir = temp_out_dir();
    let paths = generate_report(&sample_records(), &out_dir).unwrap();

    let contents = std::fs::read_to_string(&paths.summary_csv).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 9, "header plus eight statistic rows");
    assert_eq!(lines[0], ",risk_score,loan_amount,credit_score,income");

    let labels: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(labels, vec!["count", "mean", "std", "min", "25%", "50%", "75%", "max"]);

    // count row carries the row count in every column
    let count_row: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(count_row[1], "40");
}

/// Statistics in the summary are computed over the transformed values.
#[test]
fn summary_values_are_plausible() {
    let out_dir = temp_out_dir();
    let records = sample_records();
    let paths = generate_report(&records, &out_dir).unwrap();

    let contents = std::fs::read_to_string(&paths.summary_csv).unwrap();
    let min_row: Vec<String> = contents
        .lines()
        .find(|l| l.starts_with("min,"))
        .unwrap()
        .split(',')
        .map(|s| s.to_string())
        .collect();
    let max_row: Vec<String> = contents
        .lines()
        .find(|l| l.starts_with("max,"))
        .unwrap()
        .split(',')
        .map(|s| s.to_string())
        .collect();

    let risk_min: f64 = min_row[1].parse().unwrap();
    let risk_max: f64 = max_row[1].parse().unwrap();
    assert!((0.0..=100.0).contains(&risk_min));
    assert!((0.0..=100.0).contains(&risk_max));
    assert!(risk_max >= risk_min);
}
