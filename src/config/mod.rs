//! Optional file-based configuration.
//!
//! A project may carry a `jsoninput.config.json` next to its input files to
//! name the schema those files are checked against and whether loading
//! checks by default. The config file itself is validated against an
//! embedded schema before use. A missing config file is not an error; it
//! yields the defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::InputError;
use crate::schema::Schema;
use crate::schema::utils::CONFIG_SCHEMA_STRING;

/// File name consulted when no explicit config path is given.
pub const DEFAULT_CONFIG_FILENAME: &str = "jsoninput.config.json";

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Config {
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    schema: Option<String>,
    jsoninput_schema_file: Option<String>,
    jsoninput_check_first: Option<bool>,
}

impl Config {
    /// Path of the schema file that input files are checked against, when
    /// the config names one.
    pub fn schema_file(&self) -> Option<&str> {
        self.jsoninput_schema_file.as_deref()
    }

    /// Whether `load_input_files` should check records before keeping them.
    /// Defaults to `true`.
    pub fn check_first(&self) -> bool {
        self.jsoninput_check_first.unwrap_or(true)
    }
}

/// Load configuration from `path`, or from [`DEFAULT_CONFIG_FILENAME`] in
/// the working directory when `path` is `None`.
///
/// A file that cannot be read yields the default config. A file that parses
/// but violates the embedded config schema is an error.
pub fn load_config(path: Option<&Path>) -> Result<Config, InputError> {
    let path = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILENAME));
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
    };

    let raw: Value = serde_json::from_str(&content).map_err(|source| InputError::ParseJson {
        path: path.to_path_buf(),
        source,
    })?;
    config_schema()?.validate(&raw)?;

    let config = serde_json::from_value(raw).map_err(|source| InputError::ParseJson {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded config from {}", path.display());
    Ok(config)
}

fn config_schema() -> Result<Schema, InputError> {
    let raw: Value =
        serde_json::from_str(CONFIG_SCHEMA_STRING).map_err(|err| InputError::SchemaCompile {
            detail: format!("embedded config schema is not valid JSON: {err}"),
        })?;
    Schema::from_value(raw)
}
