//! Integration tests for loading course files

use gpa_calc::core::input::{load_entries, InputError};
use gpa_calc::{compute_cgpa, CreditPolicy};
use std::fs;
use tempfile::TempDir;

#[test]
fn loads_csv_with_header_and_comments() {
    let entries = load_entries("tests/fixtures/semester1.csv").expect("Failed to load CSV");

    assert_eq!(entries.len(), 4);
    assert_eq!(entries[0].grade, "O");
    assert_eq!(entries[3].grade, "A");
    assert_eq!(entries[3].credits.value(), Some(1.5));

    // (10*4 + 9*3 + 6*4 + 8*1.5) / 12.5 = 103 / 12.5 = 8.24
    let cgpa = compute_cgpa(&entries, CreditPolicy::Positive).unwrap();
    assert_eq!(cgpa.to_string(), "8.24");
}

#[test]
fn loads_toml_course_tables() {
    let entries = load_entries("tests/fixtures/semester2.toml").expect("Failed to load TOML");

    assert_eq!(entries.len(), 3);
    // (8*4 + 7*3 + 0*2) / 9 = 53 / 9 = 5.888...
    let cgpa = compute_cgpa(&entries, CreditPolicy::Positive).unwrap();
    assert_eq!(cgpa.to_string(), "5.89");
}

#[test]
fn bare_csv_without_header() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("grades.txt");
    fs::write(&path, "O,4\nB,4\n").expect("Failed to write file");

    let entries = load_entries(&path).expect("Failed to load bare CSV");
    assert_eq!(
        compute_cgpa(&entries, CreditPolicy::Positive)
            .unwrap()
            .to_string(),
        "8.00"
    );
}

#[test]
fn malformed_csv_row_is_an_input_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("grades.csv");
    fs::write(&path, "grade,credits\nO,4,extra\n").expect("Failed to write file");

    let err = load_entries(&path).unwrap_err();
    assert!(matches!(err, InputError::Csv { line: 2, .. }));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_entries("tests/fixtures/nonexistent.csv").unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
    assert!(err.to_string().contains("nonexistent.csv"));
}
