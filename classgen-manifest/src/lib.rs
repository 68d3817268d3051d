//! Model definition loading and class extraction for classgen.
//!
//! A model definition is a YAML (or TOML/JSON) document listing class
//! definitions. [`ModelFile`] parses the document and exposes its raw
//! entries; [`extract`] turns one entry into a [`classgen_ir::ResolvedClass`].
//! Entries are extracted one at a time so a malformed entry stops the batch
//! at that point.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod extract;
mod file;
mod format;

pub use error::{Error, Result};
pub use extract::extract;
pub use file::ModelFile;
pub use format::Format;
