//! Core grading logic and the data it works on

pub mod form;
pub mod gpa;
pub mod grade;
pub mod input;
pub mod models;
pub mod report;
