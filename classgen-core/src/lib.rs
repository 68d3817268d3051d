//! Core utilities and types for the classgen generator.
//!
//! This crate provides the file write policy and string helpers shared
//! across the classgen crates.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::upper_first;
