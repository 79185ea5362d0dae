//! jsoninput - load, tag, and check JSON input files.
//!
//! Input files use the JSON format and are validated against a [JSON
//! Schema](https://json-schema.org/) document using the `jsonschema` crate.
//! The [`InputHandler`] loads a batch of input files, attaches the resolved
//! absolute path of each file to its parsed record under the `"path"`
//! property, optionally checks every record against the handler's schema,
//! and accumulates the records that pass.
//!
//! ```no_run
//! use jsoninput::InputHandler;
//!
//! # fn main() -> Result<(), jsoninput::InputError> {
//! let mut handler = InputHandler::with_schema("run.schema.json")?;
//! let count = handler.load_input_files(&["run-alpha.json", "run-beta.json"], true)?;
//! println!("{count} input files loaded");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod schema;

pub use error::{InputError, SchemaViolation};
pub use input::InputHandler;
pub use schema::Schema;

use std::path::Path;

use serde_json::Value;
use tracing::error;

/// Load a schema and a single input file, check the file against the
/// schema, and return the parsed document.
///
/// One-shot convenience over [`Schema::from_file`] and [`Schema::validate`];
/// no `"path"` property is attached and nothing is accumulated.
pub fn validate_file(
    input_path: impl AsRef<Path>,
    schema_path: impl AsRef<Path>,
) -> Result<Value, InputError> {
    let schema = Schema::from_file(schema_path)?;
    let path = input_path.as_ref();
    let record = input::read_json_file(path)?;
    if let Err(err) = schema.validate(&record) {
        error!("validation failed for {}: {}", path.display(), err);
        return Err(err);
    }
    Ok(record)
}
