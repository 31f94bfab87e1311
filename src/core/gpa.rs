//! CGPA engine
//!
//! Maps an ordered list of course entries to a credit-weighted grade point
//! average, or to the first validation error found.

use crate::core::grade::Grade;
use crate::core::models::CourseEntry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Message shown for an unrecognized grade or unusable credit value
pub const INVALID_INPUT_MESSAGE: &str =
    "Invalid grade or credits entered. Please check your inputs.";

/// Message shown when the credits add up to zero
pub const ZERO_CREDITS_MESSAGE: &str = "Total credits cannot be zero.";

/// Validation failures for a CGPA computation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GpaError {
    /// An entry's grade symbol is not on the scale
    #[error("course {}: invalid grade '{grade}'", .index + 1)]
    InvalidGrade {
        /// Zero-based position of the entry
        index: usize,
        /// The grade as entered
        grade: String,
    },
    /// An entry's credits are not a number, or are not allowed by the credit policy
    #[error("course {}: invalid credits '{credits}'", .index + 1)]
    InvalidCredits {
        /// Zero-based position of the entry
        index: usize,
        /// The credits as entered
        credits: String,
    },
    /// Every entry is valid but the credits sum to zero (or there are no entries)
    #[error("total credits cannot be zero")]
    ZeroTotalCredits,
}

impl GpaError {
    /// Stable error code for callers outside Rust
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidGrade { .. } | Self::InvalidCredits { .. } => "invalid-grade-or-credits",
            Self::ZeroTotalCredits => "zero-credits",
        }
    }

    /// Message suitable for showing to the user
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidGrade { .. } | Self::InvalidCredits { .. } => INVALID_INPUT_MESSAGE,
            Self::ZeroTotalCredits => ZERO_CREDITS_MESSAGE,
        }
    }
}

/// Which credit values count as valid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CreditPolicy {
    /// Credits must be strictly greater than zero
    #[default]
    Positive,
    /// Zero credits are accepted; negatives are still rejected
    NonNegative,
}

impl CreditPolicy {
    /// Whether `credits` is acceptable under this policy
    #[must_use]
    pub fn accepts(self, credits: f64) -> bool {
        match self {
            Self::Positive => credits > 0.0,
            Self::NonNegative => credits >= 0.0,
        }
    }
}

impl FromStr for CreditPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "positive" | "strict" => Ok(Self::Positive),
            "non-negative" | "non_negative" | "nonnegative" | "lenient" => Ok(Self::NonNegative),
            _ => Err(format!("Unknown credit policy: '{s}'")),
        }
    }
}

impl fmt::Display for CreditPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => write!(f, "positive"),
            Self::NonNegative => write!(f, "non-negative"),
        }
    }
}

/// A CGPA rounded to two decimal places
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Cgpa(f64);

impl Cgpa {
    /// Round a raw average to two decimals
    #[must_use]
    pub fn from_raw(raw: f64) -> Self {
        Self((raw * 100.0).round() / 100.0)
    }

    /// The rounded value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Cgpa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Totals behind a computed CGPA
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CgpaSummary {
    /// The rounded CGPA
    pub cgpa: Cgpa,
    /// Sum of grade points weighted by credits
    pub total_points: f64,
    /// Sum of credits
    pub total_credits: f64,
    /// Number of entries that contributed
    pub course_count: usize,
}

/// Compute the CGPA together with the totals it was derived from
///
/// Entries are validated in order and the first failure is returned; no
/// partial result is produced.
///
/// # Errors
/// - [`GpaError::InvalidGrade`] if a grade symbol is not on the scale
/// - [`GpaError::InvalidCredits`] if credits are not a finite number or the
///   policy rejects them
/// - [`GpaError::ZeroTotalCredits`] if the credits sum to zero
pub fn compute_summary(
    entries: &[CourseEntry],
    policy: CreditPolicy,
) -> Result<CgpaSummary, GpaError> {
    let mut total_points = 0.0;
    let mut total_credits = 0.0;

    for (index, entry) in entries.iter().enumerate() {
        let grade = Grade::from_symbol(&entry.grade).ok_or_else(|| GpaError::InvalidGrade {
            index,
            grade: entry.grade.clone(),
        })?;

        let credits = entry
            .credits
            .value()
            .filter(|c| policy.accepts(*c))
            .ok_or_else(|| GpaError::InvalidCredits {
                index,
                credits: entry.credits.to_string(),
            })?;

        total_points += f64::from(grade.points()) * credits;
        total_credits += credits;

        // Finite credits can still overflow the running sums
        if !total_points.is_finite() || !total_credits.is_finite() {
            return Err(GpaError::InvalidCredits {
                index,
                credits: entry.credits.to_string(),
            });
        }
    }

    if total_credits == 0.0 {
        return Err(GpaError::ZeroTotalCredits);
    }

    Ok(CgpaSummary {
        cgpa: Cgpa::from_raw(total_points / total_credits),
        total_points,
        total_credits,
        course_count: entries.len(),
    })
}

/// Compute the CGPA of a list of course entries
///
/// # Errors
/// Same as [`compute_summary`].
pub fn compute_cgpa(entries: &[CourseEntry], policy: CreditPolicy) -> Result<Cgpa, GpaError> {
    compute_summary(entries, policy).map(|summary| summary.cgpa)
}
