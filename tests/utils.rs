#![allow(dead_code)]

use std::fs;

use serde_json::Value;

pub static RUN_SCHEMA: &str = "tests/fixtures/run.schema.json";
pub static RUN_ALPHA: &str = "tests/fixtures/run-alpha.json";
pub static RUN_BETA: &str = "tests/fixtures/run-beta.json";
pub static RUN_GAMMA: &str = "tests/fixtures/run-gamma.json";
pub static BAD_RUN: &str = "tests/fixtures/bad-run.json";
pub static CONFIG_FILE: &str = "tests/fixtures/jsoninput.config.json";

pub fn init_test_logging() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn load_fixture(path: &str) -> Value {
    let data = fs::read_to_string(path).expect("fixture should exist");
    serde_json::from_str(&data).expect("fixture should be valid JSON")
}

/// The strictly resolved absolute path of a fixture, as it appears in a
/// loaded record's "path" property.
pub fn resolved(path: &str) -> String {
    fs::canonicalize(path)
        .expect("fixture should resolve")
        .display()
        .to_string()
}
