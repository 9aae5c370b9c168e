//! Schema-driven extraction of JSON subtrees
//!
//! A schema is a plain JSON object mirroring the input's shape: `true`
//! keeps a field verbatim, a nested object recurses, and a one-element
//! array of an object applies its sub-schema to every element of an
//! array-of-objects field. Two retention flags control whether empty
//! objects and empty arrays survive in the output.

pub mod extractor;
pub mod types;

pub use extractor::Extractor;
pub use types::{ExtractConfig, SchemaRule};
