//! HTML report generator
//!
//! The generated page is self-contained with embedded CSS. All user-entered
//! text is escaped before substitution.

use crate::core::report::{ReportContext, ReportGenerator};
use crate::get_version;
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let title = match ctx.outcome {
            Ok(summary) => format!("CGPA {}", summary.cgpa),
            Err(_) => "Invalid input".to_string(),
        };

        let mut output = HTML_TEMPLATE.to_string();
        output = output.replace("{{version}}", get_version());
        output = output.replace("{{title}}", &title);
        output = output.replace("{{course_count}}", &ctx.course_count().to_string());
        output = output.replace("{{credit_policy}}", &ctx.policy.to_string());
        output = output.replace("{{course_rows}}", &Self::generate_course_rows(ctx));
        output = output.replace("{{outcome}}", &Self::generate_outcome(ctx));
        output
    }

    /// Generate one table row per entry
    fn generate_course_rows(ctx: &ReportContext) -> String {
        let mut html = String::new();
        for (idx, entry) in ctx.entries.iter().enumerate() {
            let _ = writeln!(
                html,
                "      <tr><td class=\"num\">{}</td><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td></tr>",
                idx + 1,
                escape_html(&entry.grade),
                escape_html(&entry.credits.to_string()),
                ReportContext::points_label(entry)
            );
        }
        html
    }

    /// Generate the result paragraph (CGPA or error, never both)
    fn generate_outcome(ctx: &ReportContext) -> String {
        let class = if ctx.outcome.is_ok() { "result" } else { "error" };
        format!("<p class=\"{class}\">{}</p>", escape_html(&ctx.headline()))
    }
}

/// Escape text for inclusion in HTML element content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
