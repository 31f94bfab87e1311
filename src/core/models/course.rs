//! Course entry model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credit value as entered: either a number or raw text from an input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Credits {
    /// Numeric credits (e.g. from a TOML number or a typed API call)
    Number(f64),
    /// Unparsed text (e.g. from a form field or CSV cell)
    Text(String),
}

impl Credits {
    /// Interpret the credits as a finite number
    ///
    /// Text is trimmed before parsing. Empty text, non-numeric text, NaN and
    /// infinities all yield `None`.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        let parsed = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        parsed.is_finite().then_some(parsed)
    }

    /// Whether nothing has been entered yet
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().is_empty())
    }
}

impl Default for Credits {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<f64> for Credits {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for Credits {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Credits {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Credits {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One (grade, credits) pair contributed by the user
///
/// Entries are unvalidated: the grade is kept as entered and only checked
/// against the grade scale when a CGPA is computed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    /// Grade symbol as entered (e.g. "A+")
    #[serde(default)]
    pub grade: String,

    /// Credit value as entered
    #[serde(default)]
    pub credits: Credits,
}

impl CourseEntry {
    /// Create a course entry
    ///
    /// # Arguments
    /// * `grade` - Grade symbol
    /// * `credits` - Credits as a number or text
    #[must_use]
    pub fn new(grade: impl Into<String>, credits: impl Into<Credits>) -> Self {
        Self {
            grade: grade.into(),
            credits: credits.into(),
        }
    }

    /// Parse a `GRADE:CREDITS` pair as given on the command line (e.g. `A+:4`)
    ///
    /// The split happens at the last `:` so the grade may be anything; it is
    /// validated later by the engine.
    ///
    /// # Errors
    /// Returns an error if the text contains no `:` separator
    pub fn from_pair(pair: &str) -> Result<Self, String> {
        let (grade, credits) = pair
            .rsplit_once(':')
            .ok_or_else(|| format!("Expected GRADE:CREDITS, got '{pair}'"))?;
        Ok(Self::new(grade.trim(), credits.trim()))
    }
}
