//! Boundary reader: load and parse the document and schema files
//!
//! The two failure modes stay distinguishable, and both carry the path of
//! the file that failed so the caller can tell the document apart from the
//! schema.

use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("could not open '{}': {source}", path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{}': {source}", path.display())]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: simd_json::Error,
    },
}

/// Read a file and parse it as a JSON value
pub fn read_json_file(path: impl AsRef<Path>) -> Result<Value, InputError> {
    let path = path.as_ref();

    let mut bytes = std::fs::read(path).map_err(|source| InputError::MissingFile {
        path: path.to_path_buf(),
        source,
    })?;

    simd_json::serde::from_slice(&mut bytes).map_err(|source| InputError::MalformedJson {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("sift-input-{}-{}", std::process::id(), name));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_reads_valid_json() {
        let path = temp_file("valid.json", r#"{"a": 1, "b": [true, null]}"#);
        let value = read_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(value, json!({"a": 1, "b": [true, null]}));
    }

    #[test]
    fn test_missing_file_is_distinguishable() {
        let path = std::env::temp_dir().join("sift-input-does-not-exist.json");
        let err = read_json_file(&path).unwrap_err();

        assert!(matches!(err, InputError::MissingFile { .. }));
        assert!(err.to_string().contains("sift-input-does-not-exist.json"));
    }

    #[test]
    fn test_malformed_json_is_distinguishable() {
        let path = temp_file("broken.json", "{not json");
        let err = read_json_file(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(matches!(err, InputError::MalformedJson { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
