//! # Sift - schema-driven JSON field extraction
//!
//! A library for projecting a declared subset of fields out of a JSON
//! document and, optionally, flattening the result into a CSV table.
//!
//! ## Modules
//!
//! - **extract**: recursive, schema-driven subtree selection with retention
//!   policies for empty containers
//! - **flatten**: project nested objects into path-keyed flat records and
//!   emit them as fully quoted CSV
//! - **input**: boundary file reader with distinguishable error kinds
//!
//! ## Quick Start
//!
//! ### Extraction
//!
//! ```rust
//! use sift::extract::{ExtractConfig, Extractor};
//! use serde_json::json;
//!
//! let data = json!({"a": 1, "b": {"c": 2, "d": 3}});
//! let schema = json!({"a": true, "b": {"c": true}});
//!
//! let extractor = Extractor::new(ExtractConfig::default());
//! let extracted = extractor.extract(&data, &schema).unwrap();
//!
//! assert_eq!(extracted, json!({"a": 1, "b": {"c": 2}}));
//! ```
//!
//! ### Flattening
//!
//! ```rust
//! use sift::flatten::flatten;
//! use serde_json::json;
//!
//! let record = json!({"name": "A", "addr": {"city": "X"}});
//! let flat = flatten(record.as_object().unwrap());
//!
//! assert_eq!(flat["name"], json!("A"));
//! assert_eq!(flat["addr.city"], json!("X"));
//! ```

use serde_json::Value;

pub mod extract;
pub mod flatten;
pub mod input;

// Re-export commonly used items for convenience
pub use extract::{ExtractConfig, Extractor, SchemaRule};
pub use flatten::{flatten, flatten_with, tabulate, write_csv};
pub use input::{read_json_file, InputError};

/// Main entry point: extract the schema-selected fields from a parsed document
///
/// Returns `None` when nothing matched and `retain_empty_objects` is off,
/// which callers can distinguish from a matched-but-empty object.
pub fn extract_document(data: &Value, schema: &Value, config: ExtractConfig) -> Option<Value> {
    Extractor::new(config).extract(data, schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_then_tabulate() {
        let data = json!({
            "users": [
                {"name": "Alice", "age": 30, "secret": "x"},
                {"name": "Bob", "address": {"city": "Y"}}
            ]
        });
        let schema = json!({
            "users": [{"name": true, "address": {"city": true}}]
        });

        let extracted = extract_document(&data, &schema, ExtractConfig::default()).unwrap();
        let users = extracted["users"].as_array().unwrap().clone();

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &users).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert_eq!(
            output,
            "\"address.city\",\"name\"\n\"\",\"Alice\"\n\"Y\",\"Bob\"\n"
        );
    }
}
