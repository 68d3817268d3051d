//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`Indent`] - Indentation configuration
//! - [`LineEnding`] - Line terminator for generated files

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::{Indent, LineEnding};
