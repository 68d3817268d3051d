//! Language-agnostic code generation traits.

use crate::class::ClassDecl;

/// Trait for language-specific class generators.
///
/// Implement this trait to add support for generating classes in a new language.
pub trait LanguageCodegen {
    /// File extension for generated source files (e.g., "php")
    fn file_extension(&self) -> &'static str;

    /// Render a class declaration to source text
    fn render(&self, class: &ClassDecl) -> String;
}
