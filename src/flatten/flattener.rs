use serde_json::{Map, Value};

/// Flatten a nested object into a single-level record with dotted keys
pub fn flatten(object: &Map<String, Value>) -> Map<String, Value> {
    flatten_with(object, "", ".")
}

/// Flatten with an explicit key prefix and separator
///
/// Nested objects contribute `parent<sep>child` keys; arrays whose elements
/// are all objects contribute `parent[idx]`-prefixed keys per element. Any
/// other array (empty, mixed, or scalar elements) becomes a single string
/// value: its JSON text with every `"` doubled, pre-escaped for the fully
/// quoted CSV output.
pub fn flatten_with(object: &Map<String, Value>, parent_key: &str, sep: &str) -> Map<String, Value> {
    let mut flat = Map::new();
    flatten_into(object, parent_key, sep, &mut flat);
    flat
}

fn flatten_into(
    object: &Map<String, Value>,
    parent_key: &str,
    sep: &str,
    flat: &mut Map<String, Value>,
) {
    for (key, value) in object {
        let flat_key = if parent_key.is_empty() {
            key.clone()
        } else {
            format!("{}{}{}", parent_key, sep, key)
        };

        match value {
            Value::Object(child) => {
                flatten_into(child, &flat_key, sep, flat);
            }
            Value::Array(items) if !items.is_empty() && items.iter().all(Value::is_object) => {
                for (idx, item) in items.iter().enumerate() {
                    if let Value::Object(element) = item {
                        flatten_into(element, &format!("{}[{}]", flat_key, idx), sep, flat);
                    }
                }
            }
            Value::Array(items) => {
                let text = Value::Array(items.clone()).to_string();
                flat.insert(flat_key, Value::String(text.replace('"', "\"\"")));
            }
            scalar => {
                flat.insert(flat_key, scalar.clone());
            }
        }
    }
}
