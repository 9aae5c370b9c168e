use crate::extract::types::{ExtractConfig, SchemaRule};
use serde_json::{Map, Value};
use std::cell::RefCell;

/// The core schema-driven extractor
///
/// Walks a schema object and copies the selected subtree out of an input
/// document. Extraction never fails: schema entries with an unrecognized
/// shape are skipped (and recorded, see [`Extractor::take_skipped`]), and
/// input values that don't match the shape the schema expects contribute
/// nothing.
pub struct Extractor {
    config: ExtractConfig,
    skipped: RefCell<Vec<String>>,
}

impl Extractor {
    pub fn new(config: ExtractConfig) -> Self {
        Extractor {
            config,
            skipped: RefCell::new(Vec::new()),
        }
    }

    /// Extract the schema-selected fields from a document
    ///
    /// Returns `None` when nothing matched and empty objects are not
    /// retained; callers can distinguish that from a matched-but-empty
    /// object. Non-object input or schema also yields `None`.
    pub fn extract(&self, data: &Value, schema: &Value) -> Option<Value> {
        let data = data.as_object()?;
        let schema = schema.as_object()?;
        self.extract_object(data, schema, "").map(Value::Object)
    }

    /// Drain the key paths of schema entries that were ignored because
    /// their shape was not boolean / object / one-element array
    pub fn take_skipped(&self) -> Vec<String> {
        self.skipped.take()
    }

    /// Extract one object level; `None` means the result was empty and
    /// empty objects are not retained
    fn extract_object(
        &self,
        data: &Map<String, Value>,
        schema: &Map<String, Value>,
        path: &str,
    ) -> Option<Map<String, Value>> {
        let mut extracted = Map::new();

        // Output key order follows schema key order
        for (key, rule_value) in schema {
            match SchemaRule::classify(rule_value) {
                SchemaRule::Include => {
                    if let Some(value) = data.get(key) {
                        extracted.insert(key.clone(), value.clone());
                    }
                }
                SchemaRule::Exclude => {}
                SchemaRule::Object(sub) => {
                    if let Some(Value::Object(child)) = data.get(key) {
                        let child_path = join_path(path, key);
                        if let Some(item) = self.extract_object(child, sub, &child_path) {
                            extracted.insert(key.clone(), Value::Object(item));
                        }
                    }
                }
                SchemaRule::Array(sub) => {
                    if let Some(Value::Array(items)) = data.get(key) {
                        let child_path = join_path(path, key);
                        let filtered = self.extract_array(items, sub, &child_path);
                        if !filtered.is_empty() || self.config.retain_empty_lists {
                            extracted.insert(key.clone(), Value::Array(filtered));
                        }
                    }
                }
                SchemaRule::Unsupported => {
                    self.skipped.borrow_mut().push(join_path(path, key));
                }
            }
        }

        if extracted.is_empty() && !self.config.retain_empty_objects {
            return None;
        }

        Some(extracted)
    }

    /// Apply a sub-schema to every object element of an array; non-object
    /// elements and elements that extract to nothing are dropped
    fn extract_array(
        &self,
        items: &[Value],
        schema: &Map<String, Value>,
        path: &str,
    ) -> Vec<Value> {
        let mut filtered = Vec::new();
        for item in items {
            if let Value::Object(obj) = item {
                if let Some(extracted) = self.extract_object(obj, schema, path) {
                    filtered.push(Value::Object(extracted));
                }
            }
        }
        filtered
    }
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}
