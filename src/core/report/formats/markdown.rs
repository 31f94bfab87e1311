//! Markdown report generator

use crate::core::report::{ReportContext, ReportGenerator};
use crate::get_version;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let outcome = match ctx.outcome {
            Ok(_) => format!("**{}**", ctx.headline()),
            Err(_) => format!("> **Error:** {}", ctx.headline()),
        };

        let mut output = MARKDOWN_TEMPLATE.to_string();
        output = output.replace("{{version}}", get_version());
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{credit_policy}}", &ctx.policy.to_string());
        output = output.replace("{{course_rows}}", &Self::generate_course_table(ctx));
        output = output.replace("{{outcome}}", &outcome);
        output
    }

    /// Generate the course table body
    fn generate_course_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        for (idx, entry) in ctx.entries.iter().enumerate() {
            // Pipes would split the cell
            let grade = entry.grade.replace('|', "\\|");
            let credits = entry.credits.to_string().replace('|', "\\|");
            let _ = writeln!(
                table,
                "| {} | {grade} | {credits} | {} |",
                idx + 1,
                ReportContext::points_label(entry)
            );
        }
        table.trim_end().to_string()
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
