//! Data models for `gpa-calc`

pub mod course;
pub mod sheet;

pub use course::{CourseEntry, Credits};
pub use sheet::{CourseField, CourseSheet, SheetError};
