use crate::builder::{Indent, LineEnding};

/// Rendering options for generated classes.
///
/// Passed to a backend at construction; there is no global configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Prefix of private field names. Keeps fields apart from accessor names.
    pub field_prefix: String,
    /// One level of indentation.
    pub indent: Indent,
    /// Line terminator.
    pub line_ending: LineEnding,
}

impl GenerateConfig {
    /// Field name for a property.
    pub fn field_name(&self, property: &str) -> String {
        format!("{}{}", self.field_prefix, property)
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            field_prefix: "_".to_string(),
            indent: Indent::PHP,
            line_ending: LineEnding::native(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GenerateConfig::default();
        assert_eq!(config.field_name("name"), "_name");
        assert_eq!(config.indent, Indent::Spaces(4));
        assert_eq!(config.line_ending, LineEnding::native());
    }

    #[test]
    fn test_custom_prefix() {
        let config = GenerateConfig {
            field_prefix: "m_".to_string(),
            ..GenerateConfig::default()
        }
        .with_line_ending(LineEnding::CrLf);

        assert_eq!(config.field_name("age"), "m_age");
        assert_eq!(config.line_ending, LineEnding::CrLf);
    }
}
