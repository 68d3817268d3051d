mod generator;
mod renderer;

pub mod files;

pub use classgen_codegen::{GenerateConfig, LanguageCodegen};
pub use generator::Generator;
pub use renderer::PhpRenderer;
