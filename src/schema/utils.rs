use serde_json::Value;

/// Schema that configuration files are checked against before use.
pub static CONFIG_SCHEMA_STRING: &str = include_str!("../../jsoninput.config.schema.json");

pub trait ValueExt {
    fn get_str(&self, field: &str) -> Option<String>;
}

impl ValueExt for Value {
    fn get_str(&self, field: &str) -> Option<String> {
        self.get(field)?.as_str().map(String::from)
    }
}

/// True for documents that hold nothing to validate against: `null`,
/// `false`, `0`, `""`, `[]`, and `{}`.
pub fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n == 0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}
