//! Calculator form evaluation
//!
//! The form hands over its grade and credit fields as two parallel text
//! columns plus the "allow zero credits" switch. Errors are flattened to
//! `"<code>: <user message>"` so callers outside Rust can branch on the code.

use crate::core::gpa::{compute_cgpa, CreditPolicy};
use crate::core::models::CourseEntry;
use crate::debug;

/// Compute the CGPA for parallel grade and credit columns
///
/// Returns the CGPA formatted with two decimals.
///
/// # Errors
/// Returns a message if the columns differ in length, or
/// `"<code>: <user message>"` if the engine rejects the entries, e.g.
/// `"zero-credits: Total credits cannot be zero."`
pub fn compute_form_cgpa(
    grades: Vec<String>,
    credits: Vec<String>,
    allow_zero_credits: bool,
) -> Result<String, String> {
    if grades.len() != credits.len() {
        return Err(format!(
            "got {} grades but {} credit values",
            grades.len(),
            credits.len()
        ));
    }

    let entries: Vec<CourseEntry> = grades
        .into_iter()
        .zip(credits)
        .map(|(grade, credits)| CourseEntry::new(grade, credits))
        .collect();

    let policy = if allow_zero_credits {
        CreditPolicy::NonNegative
    } else {
        CreditPolicy::Positive
    };

    compute_cgpa(&entries, policy)
        .map(|cgpa| cgpa.to_string())
        .map_err(|err| {
            debug!("CGPA rejected: {err}");
            format!("{}: {}", err.code(), err.user_message())
        })
}
