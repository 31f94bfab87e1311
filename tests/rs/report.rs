//! Integration tests for report generation

use gpa_calc::core::report::{
    generator_for, HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gpa_calc::{compute_summary, CourseEntry, CreditPolicy};
use std::fs;
use tempfile::TempDir;

#[test]
fn html_report_is_written_to_disk() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("result.html");

    let entries = vec![CourseEntry::new("O", "4"), CourseEntry::new("B", "4")];
    let outcome = compute_summary(&entries, CreditPolicy::Positive);
    let ctx = ReportContext::new(&entries, &outcome, CreditPolicy::Positive);

    HtmlReporter::new()
        .generate(&ctx, &path)
        .expect("Failed to write report");

    let html = fs::read_to_string(&path).expect("Failed to read report");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("Your CGPA is: 8.00"));
    assert!(html.contains("credit policy: positive"));
}

#[test]
fn error_report_shows_message_without_cgpa() {
    let entries = vec![CourseEntry::new("O", "0")];
    let outcome = compute_summary(&entries, CreditPolicy::NonNegative);
    let ctx = ReportContext::new(&entries, &outcome, CreditPolicy::NonNegative);

    let md = MarkdownReporter::new().render(&ctx).expect("Failed to render");
    assert!(md.contains("Total credits cannot be zero."));
    assert!(!md.contains("Your CGPA"));
}

#[test]
fn generator_matches_format() {
    let entries = vec![CourseEntry::new("C", "2")];
    let outcome = compute_summary(&entries, CreditPolicy::Positive);
    let ctx = ReportContext::new(&entries, &outcome, CreditPolicy::Positive);

    let html = generator_for(ReportFormat::Html).render(&ctx).unwrap();
    let md = generator_for(ReportFormat::Markdown).render(&ctx).unwrap();
    assert!(html.contains("<table>"));
    assert!(md.contains("| 1 | C | 2 | 5 |"));
}
