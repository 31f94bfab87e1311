//! Shared library for `gpa-calc`
//! Contains the CGPA engine and the pieces used by the CLI and WASM targets

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub mod config;
pub mod core;
pub mod logger;

pub use crate::core::gpa::{compute_cgpa, compute_summary, Cgpa, CgpaSummary, CreditPolicy, GpaError};
pub use crate::core::grade::Grade;
pub use crate::core::models::{CourseEntry, CourseSheet, Credits};

/// Returns the current version of the `gpa-calc` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
