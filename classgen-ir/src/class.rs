//! Resolved class representation.

use std::path::PathBuf;

use crate::Property;

/// Separator used to join namespace segments in generated code.
pub const NAMESPACE_SEPARATOR: &str = "\\";

/// A class definition after extraction and normalization, ready for lowering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedClass {
    /// Class name (last segment of the fqn).
    pub class_name: String,
    /// Namespace segments (every fqn segment but the last).
    pub namespace: Vec<String>,
    /// Properties in declaration order, constructor property first.
    pub properties: Vec<Property>,
    /// Requested class patterns.
    pub patterns: ClassPatterns,
    /// Constructor shape, selected once during extraction.
    pub constructor: ConstructorShape,
}

impl ResolvedClass {
    /// Namespace joined with [`NAMESPACE_SEPARATOR`] (empty for the global namespace).
    pub fn namespace(&self) -> String {
        self.namespace.join(NAMESPACE_SEPARATOR)
    }

    /// Fully qualified class name.
    pub fn fqn(&self) -> String {
        if self.namespace.is_empty() {
            self.class_name.clone()
        } else {
            format!(
                "{}{}{}",
                self.namespace(),
                NAMESPACE_SEPARATOR,
                self.class_name
            )
        }
    }

    /// Relative output directory, one directory per namespace segment.
    pub fn output_path(&self) -> PathBuf {
        self.namespace.iter().collect()
    }

    /// Whether mutators are generated for this class.
    pub fn has_mutators(&self) -> bool {
        !self.patterns.is_immutable()
    }
}

/// Class patterns resolved from `class-patterns` and `class-metadata`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassPatterns {
    /// Builder class name when the class is immutable.
    pub immutable: Option<String>,
    /// Built class name when the class is a builder.
    pub builder: Option<String>,
}

impl ClassPatterns {
    pub fn is_immutable(&self) -> bool {
        self.immutable.is_some()
    }

    pub fn is_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// The companion builder class of an immutable class.
    pub fn builder_class(&self) -> Option<&str> {
        self.immutable.as_deref()
    }

    /// The class a builder produces from `build()`.
    pub fn built_class(&self) -> Option<&str> {
        self.builder.as_deref()
    }
}

/// The three mutually exclusive constructor shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructorShape {
    /// No constructor is generated.
    None,
    /// One optional parameter assigning the declared constructor property.
    Plain(Property),
    /// A single builder parameter; every field is read from the builder.
    /// The constructor property, if any, parameterizes `createBuilder`.
    BuilderConsuming {
        builder_class: String,
        construct: Option<Property>,
    },
}

impl ConstructorShape {
    /// Pick the shape for a class. Immutability wins over a declared
    /// constructor property.
    pub fn select(construct: Option<Property>, patterns: &ClassPatterns) -> Self {
        match (patterns.builder_class(), construct) {
            (Some(builder_class), construct) => Self::BuilderConsuming {
                builder_class: builder_class.to_string(),
                construct,
            },
            (None, Some(prop)) => Self::Plain(prop),
            (None, None) => Self::None,
        }
    }
}
