//! WASM library entry point for `gpa-calc`
//! This module exports functionality to JavaScript/TypeScript

mod rs;

// Re-export WASM bindings
pub use rs::bindings::*;
