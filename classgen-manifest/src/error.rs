use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceOffset, SourceSpan};
use thiserror::Error;

/// Result type for classgen-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass an existing model definition file with -c <file>"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse the model definition file [ {filename} ]: {message}")]
    #[diagnostic(code(classgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        filename: String,
        message: String,
    },

    #[error("model definition file [ {filename} ] does not contain a list of classes")]
    #[diagnostic(
        code(classgen::invalid_document),
        help("found {found}; expected a list of class definitions or a `classes` list")
    )]
    InvalidDocument {
        filename: String,
        found: &'static str,
    },

    #[error("invalid class definition {entry}: {message}")]
    #[diagnostic(code(classgen::invalid_class))]
    Configuration {
        entry: String,
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl Error {
    /// Create a parse error from a YAML error with source context
    pub fn parse_yaml(source: serde_yaml::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.location().map(|loc| SourceSpan::from(loc.index()));
        Self::parse(source.to_string(), span, src, filename)
    }

    /// Create a parse error from a TOML error with source context
    pub fn parse_toml(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Self::parse(source.message().to_string(), span, src, filename)
    }

    /// Create a parse error from a JSON error with source context
    pub fn parse_json(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = (source.line() > 0).then(|| {
            SourceSpan::new(
                SourceOffset::from_location(src, source.line(), source.column()),
                0,
            )
        });
        Self::parse(source.to_string(), span, src, filename)
    }

    fn parse(message: String, span: Option<SourceSpan>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            filename: filename.to_string(),
            message,
        })
    }

    /// Create a configuration error for the class definition at `index`
    pub fn configuration(index: usize, fqn: Option<&str>, message: impl Into<String>) -> Box<Self> {
        Box::new(Error::Configuration {
            entry: describe_entry(index, fqn),
            message: message.into(),
            help: None,
        })
    }

    /// Create a configuration error with a hint on how to fix it
    pub fn configuration_with_help(
        index: usize,
        fqn: Option<&str>,
        message: impl Into<String>,
        help: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Configuration {
            entry: describe_entry(index, fqn),
            message: message.into(),
            help: Some(help.into()),
        })
    }
}

/// Entries are reported 1-based, as a reader counts them in the file.
fn describe_entry(index: usize, fqn: Option<&str>) -> String {
    match fqn {
        Some(fqn) => format!("#{} ({})", index + 1, fqn),
        None => format!("#{}", index + 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_message() {
        let err = Error::configuration(1, Some("App\\User"), "missing builderClass");
        assert_eq!(
            err.to_string(),
            "invalid class definition #2 (App\\User): missing builderClass"
        );

        let err = Error::configuration(0, None, "empty class definition");
        assert_eq!(err.to_string(), "invalid class definition #1: empty class definition");
    }

    #[test]
    fn test_parse_yaml_names_file() {
        let src = "- fqn: [unclosed\n";
        let source = serde_yaml::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::parse_yaml(source, src, "models.yaml");

        assert!(
            err.to_string()
                .starts_with("unable to parse the model definition file [ models.yaml ]: ")
        );
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_parse_toml_has_span() {
        let src = "[[classes]\nfqn = 1\n";
        let source = toml::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::parse_toml(source, src, "models.toml");

        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }
}
