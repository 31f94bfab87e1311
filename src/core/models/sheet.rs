//! Course sheet model
//!
//! The ordered, editable list of course entries behind the calculator form.

use crate::core::gpa::{compute_cgpa, Cgpa, CreditPolicy, GpaError};
use crate::core::models::course::{CourseEntry, Credits};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while editing a course sheet
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetError {
    /// The edited position does not exist
    #[error("course {} does not exist (sheet has {len} courses)", .index + 1)]
    IndexOutOfRange {
        /// Zero-based position that was requested
        index: usize,
        /// Number of entries on the sheet
        len: usize,
    },
}

/// Editable field of a course entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    /// The grade symbol
    Grade,
    /// The credit value
    Credits,
}

impl FromStr for CourseField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "grade" => Ok(Self::Grade),
            "credits" | "credit" => Ok(Self::Credits),
            _ => Err(format!("Unknown course field: '{s}'")),
        }
    }
}

impl fmt::Display for CourseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grade => write!(f, "grade"),
            Self::Credits => write!(f, "credits"),
        }
    }
}

/// Ordered list of course entries
///
/// Setting the count replaces every entry with a blank one; edits mutate a
/// single field in place. Entries have no identity beyond their position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseSheet {
    entries: Vec<CourseEntry>,
}

impl CourseSheet {
    /// Create an empty sheet
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a sheet with `count` blank entries
    #[must_use]
    pub fn with_count(count: usize) -> Self {
        let mut sheet = Self::new();
        sheet.set_count(count);
        sheet
    }

    /// Interpret the text of a course-count field
    ///
    /// Anything that is not a non-negative integer counts as zero courses.
    #[must_use]
    pub fn parse_count(text: &str) -> usize {
        text.trim().parse::<usize>().unwrap_or(0)
    }

    /// Replace all entries with `count` independent blank entries
    pub fn set_count(&mut self, count: usize) {
        self.entries = vec![CourseEntry::default(); count];
    }

    /// Set one field of the entry at `index`
    ///
    /// # Errors
    /// Returns [`SheetError::IndexOutOfRange`] if there is no entry at `index`
    pub fn edit(&mut self, index: usize, field: CourseField, value: &str) -> Result<(), SheetError> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(SheetError::IndexOutOfRange { index, len })?;

        match field {
            CourseField::Grade => entry.grade = value.to_string(),
            CourseField::Credits => entry.credits = Credits::from(value),
        }
        Ok(())
    }

    /// Entries in order
    #[must_use]
    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the sheet has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a calculation can be triggered (the sheet has at least one entry)
    #[must_use]
    pub fn can_calculate(&self) -> bool {
        !self.is_empty()
    }

    /// Compute the CGPA of the current entries
    ///
    /// # Errors
    /// Returns the engine's validation error for the first invalid entry
    pub fn calculate(&self, policy: CreditPolicy) -> Result<Cgpa, GpaError> {
        compute_cgpa(&self.entries, policy)
    }
}

impl From<Vec<CourseEntry>> for CourseSheet {
    fn from(entries: Vec<CourseEntry>) -> Self {
        Self { entries }
    }
}
