//! Rust-side binding modules
pub mod bindings;
