//! CSV parser for course entry lists
//!
//! Accepts either bare `grade,credits` lines or a header line naming the
//! `Grade` and `Credits` columns (other columns, such as a course name, are
//! ignored). Blank lines and lines starting with `#` are skipped.

use super::InputError;
use crate::core::models::CourseEntry;

/// Column positions resolved from a header line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    grade: usize,
    credits: usize,
    width: usize,
}

impl Columns {
    /// Layout used when the file has no header
    const BARE: Self = Self {
        grade: 0,
        credits: 1,
        width: 2,
    };

    /// Resolve columns from a header line, if the line is one
    fn from_header(fields: &[String]) -> Option<Self> {
        let grade = fields.iter().position(|h| h.eq_ignore_ascii_case("grade"))?;
        let credits = fields
            .iter()
            .position(|h| h.eq_ignore_ascii_case("credits") || h.eq_ignore_ascii_case("credit"))?;
        Some(Self {
            grade,
            credits,
            width: fields.len(),
        })
    }
}

/// Parse CSV content into course entries
///
/// # Errors
/// Returns [`InputError::Csv`] with the 1-based line number when a row has the
/// wrong number of fields
pub fn parse_entries_csv(content: &str) -> Result<Vec<CourseEntry>, InputError> {
    let mut columns: Option<Columns> = None;
    let mut entries = Vec::new();

    // Spreadsheet exports often start with a byte order mark
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields = parse_csv_line(trimmed);

        let layout = if let Some(layout) = columns {
            layout
        } else if let Some(header) = Columns::from_header(&fields) {
            columns = Some(header);
            continue;
        } else {
            columns = Some(Columns::BARE);
            Columns::BARE
        };

        if fields.len() != layout.width {
            return Err(InputError::Csv {
                line: idx + 1,
                message: format!(
                    "expected {} fields, found {}",
                    layout.width,
                    fields.len()
                ),
            });
        }

        entries.push(CourseEntry::new(
            fields[layout.grade].as_str(),
            fields[layout.credits].as_str(),
        ));
    }

    Ok(entries)
}

/// Parse a CSV line into trimmed fields
fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .map(std::string::ToString::to_string)
        .collect()
}
