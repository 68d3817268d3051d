use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::{Error, Format, Result};

/// Key under which a mapping-shaped document carries its class list.
const CLASSES_KEY: &str = "classes";

/// A model definition file and its class definition entries.
#[derive(Debug)]
pub struct ModelFile {
    path: PathBuf,
    entries: Vec<Value>,
}

impl ModelFile {
    /// Open and parse a model definition file, choosing the format by extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let entries = parse_entries(&content, &filename, Format::from_path(&path))?;

        Ok(Self { path, entries })
    }

    /// Parse a model definition from a string.
    pub fn from_str_with_format(content: &str, filename: &str, format: Format) -> Result<Self> {
        let entries = parse_entries(content, filename, format)?;
        Ok(Self {
            path: PathBuf::from(filename),
            entries,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Class definition entries in document order, not yet validated.
    pub fn entries(&self) -> &[Value] {
        &self.entries
    }
}

fn parse_entries(content: &str, filename: &str, format: Format) -> Result<Vec<Value>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    match format.parse(content, filename)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(entries) => Ok(entries),
        Value::Object(mut map) => {
            if let Some(Value::Array(entries)) = map.get_mut(CLASSES_KEY) {
                return Ok(std::mem::take(entries));
            }
            // Labelled entries: keys name the classes, values define them.
            Ok(map.into_iter().map(|(_, entry)| entry).collect())
        }
        other => Err(Box::new(Error::InvalidDocument {
            filename: filename.to_string(),
            found: kind_of(&other),
        })),
    }
}

/// Human-readable name of a value's kind for diagnostics.
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
