use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Configuration for the extraction pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Keep array fields whose extraction produced no elements
    pub retain_empty_lists: bool,

    /// Keep object fields (and array elements) whose extraction produced no keys
    pub retain_empty_objects: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        ExtractConfig {
            retain_empty_lists: true,
            retain_empty_objects: false,
        }
    }
}

/// How a single schema entry selects from the input
///
/// A schema is an ordinary JSON object whose values are interpreted by shape.
/// Anything that is not a boolean, an object, or a one-element array of an
/// object is `Unsupported` and excluded from the output.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaRule<'a> {
    /// `true`: copy the matching input value verbatim
    Include,
    /// `false`: leave the key out
    Exclude,
    /// Nested object: recurse with this sub-schema
    Object(&'a Map<String, Value>),
    /// One-element array: apply the inner sub-schema to every object element
    Array(&'a Map<String, Value>),
    /// Unrecognized shape; treated as exclusion
    Unsupported,
}

impl<'a> SchemaRule<'a> {
    /// Classify a schema entry's value by shape
    pub fn classify(value: &'a Value) -> SchemaRule<'a> {
        match value {
            Value::Bool(true) => SchemaRule::Include,
            Value::Bool(false) => SchemaRule::Exclude,
            Value::Object(sub) => SchemaRule::Object(sub),
            Value::Array(items) if items.len() == 1 => match &items[0] {
                Value::Object(sub) => SchemaRule::Array(sub),
                _ => SchemaRule::Unsupported,
            },
            _ => SchemaRule::Unsupported,
        }
    }
}
