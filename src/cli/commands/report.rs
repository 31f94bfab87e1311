//! Report command handler
//!
//! Writes the entered courses and their outcome as an HTML page or a
//! Markdown document. A report is written even when the input is invalid;
//! it then shows the error message instead of a CGPA.

use super::{collect_entries, effective_policy};
use crate::args::CourseSource;
use gpa_calc::config::Config;
use gpa_calc::core::report::{generator_for, ReportContext, ReportFormat};
use gpa_calc::{compute_summary, error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File stem used when the courses did not come from a file
const DEFAULT_REPORT_STEM: &str = "cgpa_report";

/// Run the report command.
///
/// # Errors
/// Returns a printable message if input could not be gathered or the report
/// could not be written
pub fn run(
    source: &CourseSource,
    format_str: &str,
    output_file: Option<&Path>,
    config: &Config,
) -> Result<PathBuf, String> {
    let format = ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}"))?;
    let entries = collect_entries(source)?;
    let policy = effective_policy(source.allow_zero_credits, config.credit_policy());

    let outcome = compute_summary(&entries, policy);
    let ctx = ReportContext::new(&entries, &outcome, policy);

    let output_path = match output_file {
        Some(path) => path.to_path_buf(),
        None => default_output_path(source.file.as_deref(), format, config)?,
    };

    generator_for(format)
        .generate(&ctx, &output_path)
        .map_err(|e| {
            error!("Report generation failed: {e}");
            format!("✗ Failed to write report {}: {e}", output_path.display())
        })?;

    info!("{format} report written to {}", output_path.display());
    println!("{}", ctx.headline());
    Ok(output_path)
}

/// `<reports_dir>/<input stem>_cgpa.<ext>`, creating the directory if needed
fn default_output_path(
    input_file: Option<&Path>,
    format: ReportFormat,
    config: &Config,
) -> Result<PathBuf, String> {
    let reports_dir = PathBuf::from(&config.paths.reports_dir);
    std::fs::create_dir_all(&reports_dir).map_err(|e| {
        format!(
            "✗ Failed to create reports directory {}: {e}",
            reports_dir.display()
        )
    })?;

    let stem = input_file
        .and_then(Path::file_stem)
        .and_then(|stem| stem.to_str())
        .map_or_else(
            || DEFAULT_REPORT_STEM.to_string(),
            |stem| format!("{stem}_cgpa"),
        );
    Ok(reports_dir.join(format!("{stem}.{}", format.extension())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_reports_dir(dir: &Path) -> Config {
        let mut config = Config::default();
        config.paths.reports_dir = dir.to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_default_output_path_uses_input_stem() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_reports_dir(&dir.path().join("reports"));

        let path = default_output_path(
            Some(Path::new("terms/fall.csv")),
            ReportFormat::Markdown,
            &config,
        )
        .unwrap();
        assert_eq!(path, dir.path().join("reports").join("fall_cgpa.md"));
        assert!(dir.path().join("reports").is_dir());
    }

    #[test]
    fn test_run_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_with_reports_dir(dir.path());
        let source = CourseSource {
            courses: vec!["O:4".to_string(), "B:4".to_string()],
            file: None,
            allow_zero_credits: false,
        };

        let path = run(&source, "html", None, &config).unwrap();
        assert_eq!(path, dir.path().join("cgpa_report.html"));
        let html = std::fs::read_to_string(path).unwrap();
        assert!(html.contains("Your CGPA is: 8.00"));
    }

    #[test]
    fn test_run_rejects_unknown_format() {
        let config = Config::default();
        let source = CourseSource {
            courses: vec!["O:4".to_string()],
            file: None,
            allow_zero_credits: false,
        };
        assert!(run(&source, "pdf", None, &config).is_err());
    }
}
