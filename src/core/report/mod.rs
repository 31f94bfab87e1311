//! Result report generation
//!
//! Renders the entered courses and the calculation outcome as a standalone
//! HTML page or a Markdown document.

pub mod formats;

use crate::core::gpa::{CgpaSummary, CreditPolicy, GpaError};
use crate::core::grade::Grade;
use crate::core::models::CourseEntry;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Entries as entered, in order
    pub entries: &'a [CourseEntry],
    /// Result of the calculation
    pub outcome: &'a Result<CgpaSummary, GpaError>,
    /// Credit policy the calculation ran under
    pub policy: CreditPolicy,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        entries: &'a [CourseEntry],
        outcome: &'a Result<CgpaSummary, GpaError>,
        policy: CreditPolicy,
    ) -> Self {
        Self {
            entries,
            outcome,
            policy,
        }
    }

    /// Number of entries
    #[must_use]
    pub const fn course_count(&self) -> usize {
        self.entries.len()
    }

    /// Grade points of an entry, or `-` if its grade is not on the scale
    #[must_use]
    pub fn points_label(entry: &CourseEntry) -> String {
        Grade::from_symbol(&entry.grade).map_or_else(|| "-".to_string(), |g| g.points().to_string())
    }

    /// Headline shown for the outcome: the CGPA on success, the user message on failure
    #[must_use]
    pub fn headline(&self) -> String {
        match self.outcome {
            Ok(summary) => format!("Your CGPA is: {}", summary.cgpa),
            Err(err) => err.user_message().to_string(),
        }
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}

/// Pick the generator for a format
#[must_use]
pub fn generator_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gpa::compute_summary;

    #[test]
    fn test_headline_success() {
        let entries = vec![CourseEntry::new("O", "4"), CourseEntry::new("B", "4")];
        let outcome = compute_summary(&entries, CreditPolicy::Positive);
        let ctx = ReportContext::new(&entries, &outcome, CreditPolicy::Positive);
        assert_eq!(ctx.headline(), "Your CGPA is: 8.00");
        assert_eq!(ctx.course_count(), 2);
    }

    #[test]
    fn test_headline_error() {
        let entries: Vec<CourseEntry> = Vec::new();
        let outcome = compute_summary(&entries, CreditPolicy::Positive);
        let ctx = ReportContext::new(&entries, &outcome, CreditPolicy::Positive);
        assert_eq!(ctx.headline(), "Total credits cannot be zero.");
    }

    #[test]
    fn test_points_label() {
        assert_eq!(ReportContext::points_label(&CourseEntry::new("A+", "3")), "9");
        assert_eq!(ReportContext::points_label(&CourseEntry::new("Z", "3")), "-");
    }
}
