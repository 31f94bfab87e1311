//! Calc command handler

use super::{collect_entries, effective_policy};
use crate::args::CourseSource;
use gpa_calc::config::Config;
use gpa_calc::{compute_summary, info, warn};

/// Run the calc command.
///
/// Prints `Your CGPA is: X.XX` on success. Validation failures print the
/// user message and return an error so the process exits non-zero.
///
/// # Errors
/// Returns a printable message if input could not be gathered or is invalid
pub fn run(source: &CourseSource, config: &Config, verbose: bool) -> Result<(), String> {
    let entries = collect_entries(source)?;
    let policy = effective_policy(source.allow_zero_credits, config.credit_policy());
    info!(
        "Calculating CGPA for {} course(s) under {policy} credit policy",
        entries.len()
    );

    match compute_summary(&entries, policy) {
        Ok(summary) => {
            println!("Your CGPA is: {}", summary.cgpa);
            if verbose {
                println!("  Courses:       {}", summary.course_count);
                println!("  Total credits: {}", summary.total_credits);
                println!("  Total points:  {}", summary.total_points);
            }
            Ok(())
        }
        Err(err) => {
            warn!("Rejected input: {err}");
            Err(format!("✗ {}", err.user_message()))
        }
    }
}
