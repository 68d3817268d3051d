//! Class definition extraction.
//!
//! Turns one raw class definition entry into a [`ResolvedClass`]: class
//! identity from the fqn, a normalized property list, and resolved class
//! patterns. Pure; no I/O.

use classgen_ir::{ClassPatterns, ConstructorShape, Property, ResolvedClass};
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result, file::kind_of};

/// Delimiters accepted between fqn segments.
const FQN_DELIMITERS: [char; 3] = ['\\', '/', '.'];

/// Class pattern names with special handling. Anything else is ignored.
const PATTERN_IMMUTABLE: &str = "immutable";
const PATTERN_BUILDER: &str = "builder";

/// Property type that switches the accessor to `is<Name>()`.
const BOOLEAN_TYPE: &str = "boolean";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ClassDefinition {
    fqn: String,
    props: Option<Vec<PropertyDefinition>>,
    construct: Option<PropertyDefinition>,
    class_patterns: Option<Vec<String>>,
    class_metadata: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PropertyDefinition {
    Name(String),
    Detailed {
        prop: String,
        #[serde(default)]
        fqn: Option<String>,
        #[serde(default, rename = "type")]
        ty: Option<String>,
    },
}

impl From<PropertyDefinition> for Property {
    fn from(def: PropertyDefinition) -> Self {
        match def {
            PropertyDefinition::Name(name) => Property::new(name),
            PropertyDefinition::Detailed { prop, fqn, ty } => Property {
                name: prop,
                fqn: fqn.as_deref().and_then(qualified_name),
                boolean: ty.as_deref() == Some(BOOLEAN_TYPE),
            },
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClassMetadata {
    builder_class: Option<String>,
    built_class: Option<String>,
}

/// Extract the class definition at `index` of the document.
pub fn extract(entry: &Value, index: usize) -> Result<ResolvedClass> {
    let map = match entry {
        Value::Null => {
            return Err(Error::configuration(index, None, "empty class definition"));
        }
        Value::Object(map) if map.is_empty() => {
            return Err(Error::configuration(index, None, "empty class definition"));
        }
        Value::Object(map) => map,
        other => {
            return Err(Error::configuration_with_help(
                index,
                None,
                format!("expected a mapping, found {}", kind_of(other)),
                "each class definition is a mapping with at least an `fqn` key",
            ));
        }
    };

    let fqn = match map.get("fqn").and_then(Value::as_str) {
        Some(fqn) if !fqn.trim().is_empty() => fqn,
        _ => {
            return Err(Error::configuration_with_help(
                index,
                None,
                "required class fully qualified name (fqn) not present",
                "add e.g. `fqn: App\\Model\\User`",
            ));
        }
    };

    let def = ClassDefinition::deserialize(entry).map_err(|e| {
        Error::configuration_with_help(
            index,
            Some(fqn),
            e.to_string(),
            "`props` and `construct` take a name or a mapping with `prop` and optional `fqn`/`type`; `class-patterns` is a list of names",
        )
    })?;

    let mut segments: Vec<String> = def
        .fqn
        .split(FQN_DELIMITERS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    let Some(class_name) = segments.pop() else {
        return Err(Error::configuration(
            index,
            Some(fqn),
            "fully qualified name (fqn) has no class name",
        ));
    };

    let patterns = resolve_patterns(def.class_patterns.unwrap_or_default(), def.class_metadata)
    .map_err(|(message, help)| Error::configuration_with_help(index, Some(fqn), message, help))?;

    let construct = def.construct.map(Property::from);
    let mut properties: Vec<Property> = construct.iter().cloned().collect();
    properties.extend(def.props.unwrap_or_default().into_iter().map(Property::from));

    Ok(ResolvedClass {
        class_name,
        namespace: segments,
        properties,
        constructor: ConstructorShape::select(construct, &patterns),
        patterns,
    })
}

/// Resolve pattern names in listed order against the class metadata.
///
/// `class-metadata` is only read when a pattern needs it.
fn resolve_patterns(
    names: Vec<String>,
    metadata: Option<Value>,
) -> std::result::Result<ClassPatterns, (String, String)> {
    let mut patterns = ClassPatterns::default();
    if !names
        .iter()
        .any(|name| name == PATTERN_IMMUTABLE || name == PATTERN_BUILDER)
    {
        return Ok(patterns);
    }
    let metadata = parse_metadata(metadata.as_ref())?;

    for name in names {
        match name.as_str() {
            PATTERN_IMMUTABLE => {
                let builder = metadata
                    .builder_class
                    .as_deref()
                    .and_then(qualified_name)
                    .ok_or_else(|| {
                        (
                            "the immutable pattern needs class-metadata > builderClass".to_string(),
                            "add `class-metadata: { builderClass: App\\Model\\UserBuilder }`"
                                .to_string(),
                        )
                    })?;
                patterns.immutable = Some(builder);
            }
            PATTERN_BUILDER => {
                let built = metadata
                    .built_class
                    .as_deref()
                    .and_then(qualified_name)
                    .ok_or_else(|| {
                        (
                            "the builder pattern needs class-metadata > builtClass".to_string(),
                            "add `class-metadata: { builtClass: App\\Model\\User }`".to_string(),
                        )
                    })?;
                patterns.builder = Some(built);
            }
            _ => {}
        }
    }

    Ok(patterns)
}

fn parse_metadata(value: Option<&Value>) -> std::result::Result<ClassMetadata, (String, String)> {
    match value {
        None | Some(Value::Null) => Ok(ClassMetadata::default()),
        Some(value) => ClassMetadata::deserialize(value).map_err(|e| {
            (
                format!("invalid class-metadata: {}", e),
                "class-metadata is a mapping with `builderClass` and/or `builtClass`".to_string(),
            )
        }),
    }
}

/// Normalize a referenced class name: drop a leading `\`, reject empty names.
fn qualified_name(name: &str) -> Option<String> {
    let name = name.trim().trim_start_matches('\\');
    (!name.is_empty()).then(|| name.to_string())
}
