use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Error, Result};

/// One row of open data: string keys to string values, in source order.
pub type Record = IndexMap<String, String>;

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn json_to_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Nested values keep their compact JSON form
        other => other.to_string(),
    }
}

/// Parse `text` as a JSON array of flat objects.
///
/// `origin` names where the text came from (a URL or a file path) and is
/// only used in error messages.
pub fn parse_records(text: &str, origin: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(text).map_err(|source| Error::Json {
        origin: origin.to_string(),
        source,
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(Error::Shape {
                origin: origin.to_string(),
                found: kind_of(&other),
            });
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| {
                    let cell = json_to_string(&v);
                    (k, cell)
                })
                .collect()),
            other => Err(Error::NotAnObject {
                origin: origin.to_string(),
                index,
                found: kind_of(&other),
            }),
        })
        .collect()
}
