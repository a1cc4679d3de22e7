//! Flattening JSON objects to dot-notation field paths, and the inverse write
//! operation used when building transformed output.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use whisperer_common::error::{Result, WhispererError};

/// Flatten a JSON object into dot-notation paths.
///
/// `{"user": {"name": "John"}}` becomes `{"user.name": "John"}`. For arrays of
/// objects the first element is used as a template and the segment is marked
/// with `[]` (`items[].sku`). Any other array is a leaf value.
pub fn flatten_json(object: &Map<String, Value>) -> BTreeMap<String, Value> {
    let mut flat = BTreeMap::new();
    flatten_into(object, "", &mut flat);
    flat
}

fn flatten_into(object: &Map<String, Value>, prefix: &str, flat: &mut BTreeMap<String, Value>) {
    for (key, value) in object {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };

        match value {
            Value::Object(nested) => flatten_into(nested, &path, flat),
            Value::Array(items) => match items.first() {
                Some(Value::Object(template)) => {
                    flatten_into(template, &format!("{path}[]"), flat);
                }
                _ => {
                    flat.insert(path, value.clone());
                }
            },
            other => {
                flat.insert(path, other.clone());
            }
        }
    }
}

/// All field paths of a JSON document, sorted. The document must be an object.
pub fn extract_fields(document: &Value) -> Result<Vec<String>> {
    let object = document.as_object().ok_or_else(|| {
        WhispererError::InvalidInput("expected a JSON object at the top level".to_string())
    })?;
    Ok(flatten_json(object).into_keys().collect())
}

/// Write `value` into `result` at a dot-notation `path`, creating intermediate
/// objects as needed. `[]` markers are stripped; if an intermediate segment
/// already holds a non-object, it is replaced so the later write wins.
pub fn set_nested(result: &mut Map<String, Value>, path: &str, value: Value) {
    let mut parts = path.split('.').map(|p| p.replace("[]", "")).peekable();
    let mut current = result;

    while let Some(part) = parts.next() {
        if parts.peek().is_none() {
            current.insert(part, value);
            return;
        }

        let entry = current
            .entry(part)
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        match entry {
            Value::Object(map) => current = map,
            _ => return,
        }
    }
}
