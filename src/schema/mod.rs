//! Schema loading and validation.
//!
//! A [`Schema`] pairs the raw schema document with a compiled
//! `jsonschema::Validator` so a schema read once from disk can check any
//! number of records. Validation reports the validator's first failure;
//! nothing is aggregated across multiple violations.

use std::fs;
use std::path::Path;

use jsonschema::{Draft, Validator};
use serde_json::Value;
use tracing::debug;

use crate::error::{InputError, SchemaViolation};

pub mod utils;

use utils::is_empty_document;

/// A JSON Schema loaded from a file or value, compiled and ready to check
/// records.
#[derive(Debug)]
pub struct Schema {
    raw: Value,
    validator: Validator,
}

impl Schema {
    /// Load a schema document from a JSON file and compile it.
    ///
    /// Fails with [`InputError::ReadFile`] or [`InputError::ParseJson`] when
    /// the file is missing, unreadable, or not JSON, and with
    /// [`InputError::EmptySchema`] when the parsed document is empty.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| InputError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: Value = serde_json::from_str(&data).map_err(|source| InputError::ParseJson {
            path: path.to_path_buf(),
            source,
        })?;
        if is_empty_document(&raw) {
            return Err(InputError::EmptySchema {
                origin: path.display().to_string(),
            });
        }
        debug!("loaded schema from {}", path.display());
        Self::compile(raw)
    }

    /// Compile a schema document already held in memory.
    pub fn from_value(raw: Value) -> Result<Self, InputError> {
        if is_empty_document(&raw) {
            return Err(InputError::EmptySchema {
                origin: "inline value".to_string(),
            });
        }
        Self::compile(raw)
    }

    fn compile(raw: Value) -> Result<Self, InputError> {
        let validator = Validator::options()
            .with_draft(Draft::Draft7)
            .build(&raw)
            .map_err(|err| InputError::SchemaCompile {
                detail: err.to_string(),
            })?;
        Ok(Self { raw, validator })
    }

    /// Check a record against this schema, propagating the first violation
    /// as [`InputError::Validation`].
    pub fn validate(&self, instance: &Value) -> Result<(), InputError> {
        self.validator
            .validate(instance)
            .map_err(|err| SchemaViolation::from(err).into())
    }

    /// Non-raising twin of [`Schema::validate`].
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validator.is_valid(instance)
    }

    /// The schema's top-level `"required"` property names, in schema order.
    ///
    /// Only the top level is consulted; required properties of nested
    /// property schemas are not reported. Returns an empty list when the
    /// schema declares no top-level `"required"`.
    pub fn required_properties(&self) -> Vec<String> {
        match self.raw.get("required").and_then(Value::as_array) {
            Some(names) => names
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect(),
            None => Vec::new(),
        }
    }

    /// The schema document as it was parsed from its source.
    pub fn as_value(&self) -> &Value {
        &self.raw
    }
}
