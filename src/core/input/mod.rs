//! Loading course entries from files
//!
//! `.toml` files are read as `[[course]]` tables; every other extension is
//! treated as CSV. Loaders only check file structure; grades and credits are
//! validated by the CGPA engine.

pub mod csv_parser;

pub use csv_parser::parse_entries_csv;

use crate::core::models::CourseEntry;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading a course file
#[derive(Debug, Error)]
pub enum InputError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// A CSV row is malformed
    #[error("line {line}: {message}")]
    Csv {
        /// 1-based line number
        line: usize,
        /// What was wrong with the row
        message: String,
    },
    /// The TOML document is malformed
    #[error("invalid course file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// TOML course file layout
#[derive(Debug, Deserialize)]
struct CourseFile {
    #[serde(default, rename = "course")]
    courses: Vec<CourseEntry>,
}

/// Parse a TOML document of `[[course]]` tables
///
/// # Errors
/// Returns [`InputError::Toml`] if the document cannot be parsed
pub fn parse_entries_toml(content: &str) -> Result<Vec<CourseEntry>, InputError> {
    let file: CourseFile = toml::from_str(content)?;
    Ok(file.courses)
}

/// Load course entries from a CSV or TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or is malformed
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<CourseEntry>, InputError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    if is_toml {
        parse_entries_toml(&content)
    } else {
        parse_entries_csv(&content)
    }
}
