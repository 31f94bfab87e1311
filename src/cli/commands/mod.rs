//! CLI command handlers for `gpacalc`.
//!
//! Each command is implemented in its own submodule.

pub mod calc;
pub mod config;
pub mod interactive;
pub mod report;

use crate::args::CourseSource;
use gpa_calc::core::input::load_entries;
use gpa_calc::{CourseEntry, CreditPolicy};

/// Gather course entries from a file (if given) followed by command-line pairs
///
/// # Errors
/// Returns a printable message if the file cannot be loaded, a pair is
/// malformed, or no courses were given at all
pub fn collect_entries(source: &CourseSource) -> Result<Vec<CourseEntry>, String> {
    let mut entries = match &source.file {
        Some(path) => load_entries(path)
            .map_err(|e| format!("✗ Failed to load {}: {e}", path.display()))?,
        None => Vec::new(),
    };

    for pair in &source.courses {
        entries.push(CourseEntry::from_pair(pair).map_err(|e| format!("✗ {e}"))?);
    }

    if entries.is_empty() {
        return Err("✗ No courses provided.".to_string());
    }
    Ok(entries)
}

/// Credit policy for a run: the per-command flag wins over the config value
pub fn effective_policy(allow_zero_credits: bool, configured: CreditPolicy) -> CreditPolicy {
    if allow_zero_credits {
        CreditPolicy::NonNegative
    } else {
        configured
    }
}
