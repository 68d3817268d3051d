//! Document formats accepted for model definitions.

use std::path::Path;

use serde_json::Value;

use crate::{Error, Result};

/// Serialization format of a model definition document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Yaml,
    Toml,
    Json,
}

impl Format {
    /// Pick the format from a file extension. Unknown extensions are read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => Self::Toml,
            Some("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    /// Parse `src` into a neutral value tree.
    pub fn parse(self, src: &str, filename: &str) -> Result<Value> {
        match self {
            Self::Yaml => {
                serde_yaml::from_str(src).map_err(|e| Error::parse_yaml(e, src, filename))
            }
            Self::Toml => toml::from_str(src).map_err(|e| Error::parse_toml(e, src, filename)),
            Self::Json => {
                serde_json::from_str(src).map_err(|e| Error::parse_json(e, src, filename))
            }
        }
    }
}
