//! The accumulating input-file handler.
//!
//! An [`InputHandler`] loads JSON input files, tags each parsed record with
//! the resolved absolute path of its source file, optionally checks it
//! against the handler's schema, and keeps the records that pass. Records
//! are only ever appended; the handler never updates or removes them.
//!
//! Input files may not contain a top-level `"path"` property of their own,
//! since it is overwritten during loading.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::InputError;
use crate::schema::Schema;

/// Property injected into every loaded record, holding the resolved
/// absolute path of its source file.
pub const PATH_PROPERTY: &str = "path";

/// Loads, checks, and accumulates JSON input records.
///
/// A handler either holds a schema from construction onward or never holds
/// one; the two states are fixed for its lifetime. Each handler owns its
/// record accumulator.
#[derive(Debug)]
pub struct InputHandler {
    schema: Option<Schema>,
    records: Vec<Value>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a handler that holds no schema. Loading works; checking
    /// reports every record as unchecked.
    pub fn new() -> Self {
        debug!("creating input handler with no schema");
        Self {
            schema: None,
            records: Vec::new(),
        }
    }

    /// Create a handler with a schema loaded eagerly from `schema_path`,
    /// failing as [`Schema::from_file`] does.
    pub fn with_schema(schema_path: impl AsRef<Path>) -> Result<Self, InputError> {
        let schema = Schema::from_file(schema_path)?;
        Ok(Self {
            schema: Some(schema),
            records: Vec::new(),
        })
    }

    /// Create a handler from a loaded [`Config`], with or without a schema
    /// depending on whether the config names one.
    pub fn from_config(config: &Config) -> Result<Self, InputError> {
        match config.schema_file() {
            Some(path) => Self::with_schema(path),
            None => Ok(Self::new()),
        }
    }

    /// The schema held by this handler, if any.
    pub fn schema(&self) -> Option<&Schema> {
        self.schema.as_ref()
    }

    /// Check a record against the held schema, propagating the violation as
    /// an error.
    ///
    /// Returns `Ok(true)` when the record conforms and `Ok(false)` - never
    /// an error - when no schema is held.
    pub fn check_input(&self, record: &Value) -> Result<bool, InputError> {
        match &self.schema {
            Some(schema) => schema.validate(record).map(|()| true),
            None => {
                warn!("no schema loaded, record left unchecked");
                Ok(false)
            }
        }
    }

    /// Non-raising twin of [`InputHandler::check_input`]: `false` for a
    /// violation or when no schema is held.
    pub fn input_is_valid(&self, record: &Value) -> bool {
        match &self.schema {
            Some(schema) => schema.is_valid(record),
            None => {
                warn!("no schema loaded, record left unchecked");
                false
            }
        }
    }

    /// Load, tag, and optionally check a series of input files, in order.
    ///
    /// Each file is read and parsed, its source path is resolved strictly
    /// (the file must exist) and injected under [`PATH_PROPERTY`], and the
    /// record is appended - unconditionally when `check_first` is `false`,
    /// otherwise only after it passes [`InputHandler::check_input`]. A
    /// record that fails the check aborts the rest of the batch with the
    /// violation; records appended before the failure, in this call or
    /// earlier ones, remain. When no schema is held, a checked batch drops
    /// every record.
    ///
    /// Returns the total number of records accumulated by this handler so
    /// far, across all calls - not the number loaded by this call.
    pub fn load_input_files<P: AsRef<Path>>(
        &mut self,
        input_file_paths: &[P],
        check_first: bool,
    ) -> Result<usize, InputError> {
        for path in input_file_paths {
            let path = path.as_ref();
            let mut record = read_json_file(path)?;
            let resolved = fs::canonicalize(path).map_err(|source| InputError::ResolvePath {
                path: path.to_path_buf(),
                source,
            })?;
            match record.as_object_mut() {
                Some(map) => {
                    map.insert(PATH_PROPERTY.to_string(), json!(resolved.display().to_string()));
                }
                None => {
                    return Err(InputError::NotAnObject {
                        path: path.to_path_buf(),
                    });
                }
            }

            if !check_first || self.check_input(&record)? {
                self.records.push(record);
            }
            debug!("loaded input file {}", path.display());
        }

        Ok(self.records.len())
    }

    /// The held schema's top-level required property names.
    ///
    /// Empty when no schema is held or the schema declares none.
    pub fn required_properties(&self) -> Vec<String> {
        match &self.schema {
            Some(schema) => schema.required_properties(),
            None => {
                warn!("no schema loaded, no required properties to report");
                Vec::new()
            }
        }
    }

    /// The records accumulated so far, in load order.
    pub fn records(&self) -> &[Value] {
        &self.records
    }

    /// Number of records accumulated so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Read and parse one JSON file.
pub(crate) fn read_json_file(path: &Path) -> Result<Value, InputError> {
    let data = fs::read_to_string(path).map_err(|source| InputError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| InputError::ParseJson {
        path: path.to_path_buf(),
        source,
    })
}
