//! Shared code generation utilities for classgen.
//!
//! This crate provides language-agnostic abstractions used by the
//! language-specific backends (e.g., `classgen-codegen-php`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent, LineEnding)
//! - [`class`] - Declaration IR for a generated class (ClassDecl, Member, etc.)
//! - [`lower`] - Lowering from [`classgen_ir::ResolvedClass`] to [`class::ClassDecl`]
//! - [`language`] - The [`LanguageCodegen`] trait backends implement

pub mod builder;
pub mod class;
pub mod language;
pub mod lower;

mod config;

pub use builder::{CodeBuilder, Indent, LineEnding};
pub use class::{Arg, ClassDecl, ConstructorDecl, FieldDecl, Member, MethodBody, MethodDecl, ParamDecl};
pub use config::GenerateConfig;
pub use language::LanguageCodegen;
pub use lower::lower;
