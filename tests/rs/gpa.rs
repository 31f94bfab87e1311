//! Integration tests for the CGPA engine

use gpa_calc::core::models::{CourseField, CourseSheet};
use gpa_calc::{compute_cgpa, compute_summary, CourseEntry, CreditPolicy, Credits, GpaError};

fn entry(grade: &str, credits: impl Into<Credits>) -> CourseEntry {
    CourseEntry::new(grade, credits)
}

#[test]
fn single_outstanding_course_is_ten() {
    let cgpa = compute_cgpa(&[entry("O", 4_u32)], CreditPolicy::Positive).unwrap();
    assert_eq!(cgpa.to_string(), "10.00");
}

#[test]
fn equal_credits_average_the_points() {
    let cgpa = compute_cgpa(
        &[entry("O", 4_u32), entry("B", 4_u32)],
        CreditPolicy::Positive,
    )
    .unwrap();
    assert_eq!(cgpa.to_string(), "8.00");
}

#[test]
fn numeric_and_text_credits_mix() {
    // (8*4 + 7*3 + 6*1.5) / 8.5 = 62 / 8.5 = 7.294...
    let entries = vec![entry("A", 4.0), entry("B+", "3"), entry("B", " 1.5 ")];
    let summary = compute_summary(&entries, CreditPolicy::Positive).unwrap();
    assert_eq!(summary.cgpa.to_string(), "7.29");
    assert!((summary.total_credits - 8.5).abs() < f64::EPSILON);
}

#[test]
fn every_grade_maps_to_its_points() {
    let expected = [
        ("O", "10.00"),
        ("A+", "9.00"),
        ("A", "8.00"),
        ("B+", "7.00"),
        ("B", "6.00"),
        ("C", "5.00"),
        ("U", "0.00"),
    ];
    for (grade, cgpa) in expected {
        let result = compute_cgpa(&[entry(grade, 3_u32)], CreditPolicy::Positive).unwrap();
        assert_eq!(result.to_string(), cgpa, "grade {grade}");
    }
}

#[test]
fn unknown_grade_is_rejected() {
    let err = compute_cgpa(&[entry("X", 4_u32)], CreditPolicy::Positive).unwrap_err();
    assert!(matches!(err, GpaError::InvalidGrade { index: 0, .. }));
}

#[test]
fn lowercase_grade_is_rejected() {
    let err = compute_cgpa(&[entry("a+", 4_u32)], CreditPolicy::Positive).unwrap_err();
    assert!(matches!(err, GpaError::InvalidGrade { .. }));
}

#[test]
fn non_numeric_credits_are_rejected() {
    let err = compute_cgpa(&[entry("A", "abc")], CreditPolicy::Positive).unwrap_err();
    assert!(matches!(err, GpaError::InvalidCredits { index: 0, .. }));
    assert_eq!(err.code(), "invalid-grade-or-credits");
}

#[test]
fn empty_input_has_zero_credits() {
    assert_eq!(
        compute_cgpa(&[], CreditPolicy::Positive),
        Err(GpaError::ZeroTotalCredits)
    );
    assert_eq!(
        compute_cgpa(&[], CreditPolicy::NonNegative),
        Err(GpaError::ZeroTotalCredits)
    );
}

#[test]
fn all_zero_credits_under_lenient_policy() {
    let entries = vec![entry("O", "0"), entry("A", 0_u32)];
    assert_eq!(
        compute_cgpa(&entries, CreditPolicy::NonNegative),
        Err(GpaError::ZeroTotalCredits)
    );
    assert!(matches!(
        compute_cgpa(&entries, CreditPolicy::Positive),
        Err(GpaError::InvalidCredits { index: 0, .. })
    ));
}

#[test]
fn computation_is_idempotent() {
    let entries = vec![entry("A+", "3"), entry("C", "2"), entry("B+", "4")];
    let first = compute_summary(&entries, CreditPolicy::Positive);
    let second = compute_summary(&entries, CreditPolicy::Positive);
    assert_eq!(first, second);
}

#[test]
fn sheet_flow_matches_engine() {
    let mut sheet = CourseSheet::with_count(CourseSheet::parse_count("3"));
    let inputs = [("A+", "3"), ("C", "2"), ("B+", "4")];
    for (idx, (grade, credits)) in inputs.iter().enumerate() {
        sheet.edit(idx, CourseField::Grade, grade).unwrap();
        sheet.edit(idx, CourseField::Credits, credits).unwrap();
    }

    let direct: Vec<CourseEntry> = inputs.iter().map(|(g, c)| entry(g, *c)).collect();
    assert_eq!(
        sheet.calculate(CreditPolicy::Positive),
        compute_cgpa(&direct, CreditPolicy::Positive)
    );
}

#[test]
fn overflowing_totals_are_rejected() {
    let err = compute_cgpa(&[entry("O", "1e308")], CreditPolicy::Positive).unwrap_err();
    assert!(matches!(err, GpaError::InvalidCredits { index: 0, .. }));

    let err = compute_cgpa(
        &[entry("U", "1.7e308"), entry("U", "1.7e308")],
        CreditPolicy::Positive,
    )
    .unwrap_err();
    assert!(matches!(err, GpaError::InvalidCredits { index: 1, .. }));

    // Large but representable totals still compute
    let cgpa = compute_cgpa(
        &[entry("O", "1e300"), entry("B", "1e300")],
        CreditPolicy::Positive,
    )
    .unwrap();
    assert_eq!(cgpa.to_string(), "8.00");
}
