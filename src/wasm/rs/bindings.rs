//! WASM bindings exported to JavaScript/TypeScript

use crate::core::form::compute_form_cgpa;
use crate::get_version;
use wasm_bindgen::prelude::*;

/// Returns the current gpa-calc version for the WASM build.
#[wasm_bindgen]
pub fn get_wasm_version() -> String {
    format!("gpa-calc WASM v{}", get_version())
}

/// Compute the CGPA for parallel lists of grades and credits as entered in the form.
///
/// Returns the CGPA formatted with two decimals. On failure the thrown error
/// message is `"<code>: <user message>"`, e.g.
/// `"zero-credits: Total credits cannot be zero."`.
#[wasm_bindgen(js_name = computeCgpa)]
pub fn compute_cgpa(
    grades: Vec<String>,
    credits: Vec<String>,
    allow_zero_credits: bool,
) -> Result<String, JsError> {
    compute_form_cgpa(grades, credits, allow_zero_credits).map_err(|message| JsError::new(&message))
}
