use classgen_codegen::{ClassDecl, GenerateConfig, LanguageCodegen, lower};
use classgen_core::FileRules;
use classgen_ir::ResolvedClass;

use crate::{PhpRenderer, files::ClassFile};

/// PHP code generator that produces one data-holder class per model entry
#[derive(Debug, Clone, Default)]
pub struct Generator {
    renderer: PhpRenderer,
}

impl LanguageCodegen for Generator {
    fn file_extension(&self) -> &'static str {
        "php"
    }

    fn render(&self, class: &ClassDecl) -> String {
        self.renderer.render_class(class)
    }
}

impl Generator {
    pub fn new(config: GenerateConfig) -> Self {
        Self {
            renderer: PhpRenderer::new(config),
        }
    }

    /// Lower and render a resolved class into a file ready to be written.
    pub fn generate(&self, class: &ResolvedClass, rules: FileRules) -> ClassFile {
        let content = self.render(&lower(class));
        ClassFile::new(class, self.file_extension(), content, rules)
    }
}
