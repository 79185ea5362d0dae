//! Error types for the jsoninput crate.
//!
//! Every fallible operation returns [`InputError`]. The variants map to the
//! distinct failure conditions of loading and checking input files:
//!
//! - [`InputError::ReadFile`] / [`InputError::ParseJson`] - a file could not
//!   be read or did not contain valid JSON
//! - [`InputError::EmptySchema`] - a schema document parsed but was empty
//! - [`InputError::SchemaCompile`] - a schema document could not be compiled
//! - [`InputError::Validation`] - a record failed validation, carrying the
//!   validator's diagnostic as an owned [`SchemaViolation`]
//! - [`InputError::ResolvePath`] - a source path could not be resolved to an
//!   existing absolute path
//! - [`InputError::NotAnObject`] - an input file held a JSON document that is
//!   not an object, so no `"path"` property can be attached to it

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for all jsoninput operations.
#[derive(Debug, Error)]
pub enum InputError {
    /// A file could not be read from disk.
    #[error("failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A file was read but its contents are not valid JSON.
    #[error("'{path}' is not valid JSON: {source}")]
    ParseJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A schema document parsed successfully but holds nothing to validate
    /// against: `null`, `false`, `0`, `""`, `[]`, or `{}`.
    #[error("schema from {origin} is empty")]
    EmptySchema { origin: String },

    /// A schema document is not itself a valid JSON Schema.
    #[error("failed to compile schema: {detail}")]
    SchemaCompile { detail: String },

    /// A record did not conform to the schema it was checked against.
    #[error(transparent)]
    Validation(#[from] SchemaViolation),

    /// A source path could not be resolved to an absolute, existing path.
    #[error("failed to resolve '{path}': {source}")]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input file holds a JSON document that is not an object.
    #[error("input document '{path}' is not a JSON object")]
    NotAnObject { path: PathBuf },
}

/// An owned schema-validation diagnostic.
///
/// The `jsonschema` validator reports the first violation it finds; this
/// struct captures that diagnostic without borrowing the checked instance.
#[derive(Debug, Error)]
#[error("validation error at '{instance_path}': {detail}")]
pub struct SchemaViolation {
    /// JSON pointer to the offending part of the instance.
    pub instance_path: String,
    /// JSON pointer to the schema keyword that was violated.
    pub schema_path: String,
    /// The validator's human-readable message.
    pub detail: String,
}

impl From<jsonschema::ValidationError<'_>> for SchemaViolation {
    fn from(err: jsonschema::ValidationError<'_>) -> Self {
        SchemaViolation {
            instance_path: err.instance_path.to_string(),
            schema_path: err.schema_path.to_string(),
            detail: err.to_string(),
        }
    }
}
