use std::path::{Path, PathBuf};

use classgen_core::{FileRules, GeneratedFile};
use classgen_ir::ResolvedClass;

/// A generated class source file, `<namespace dirs>/<ClassName>.<ext>`
#[derive(Debug, Clone)]
pub struct ClassFile {
    fqn: String,
    relative_path: PathBuf,
    content: String,
    rules: FileRules,
}

impl ClassFile {
    pub fn new(
        class: &ResolvedClass,
        extension: &str,
        content: String,
        rules: FileRules,
    ) -> Self {
        let relative_path = class
            .output_path()
            .join(format!("{}.{}", class.class_name, extension));
        Self {
            fqn: class.fqn(),
            relative_path,
            content,
            rules,
        }
    }

    /// Fully qualified name of the generated class.
    pub fn fqn(&self) -> &str {
        &self.fqn
    }

    /// Path relative to the output directory.
    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl GeneratedFile for ClassFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.relative_path)
    }

    fn rules(&self) -> FileRules {
        self.rules
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}
