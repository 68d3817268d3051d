//! Intermediate representation types for the classgen generator.
//!
//! These types are the hand-off point between model parsing and code
//! generation.
//!
//! # Architecture
//!
//! ```text
//! models.yaml → classgen-manifest (extraction) → classgen-ir (ResolvedClass) → codegen
//! ```
//!
//! The IR is language-agnostic and has no dependencies beyond std.

mod class;
mod property;

pub use class::{ClassPatterns, ConstructorShape, NAMESPACE_SEPARATOR, ResolvedClass};
pub use property::Property;
