//! The transform catalog and mapping execution.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

use whisperer_common::error::{Result, WhispererError};

use crate::flatten::{flatten_json, set_nested};
use crate::Mapping;

static FIRST_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").unwrap());

/// A named value transform applied to a source value during preview/export.
/// The catalog is closed: unknown names are rejected at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transform {
    Lowercase,
    Uppercase,
    Trim,
    ToString,
    ToInt,
}

impl Transform {
    pub const ALL: [Transform; 5] = [
        Transform::Lowercase,
        Transform::Uppercase,
        Transform::Trim,
        Transform::ToString,
        Transform::ToInt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Transform::Lowercase => "lowercase",
            Transform::Uppercase => "uppercase",
            Transform::Trim => "trim",
            Transform::ToString => "to_string",
            Transform::ToInt => "to_int",
        }
    }

    /// Apply the transform. Null passes through untouched; string-producing
    /// transforms stringify non-string input first.
    pub fn apply(&self, value: &Value) -> Value {
        if value.is_null() {
            return Value::Null;
        }

        match self {
            Transform::Lowercase => Value::String(stringify(value).to_lowercase()),
            Transform::Uppercase => Value::String(stringify(value).to_uppercase()),
            Transform::Trim => Value::String(stringify(value).trim().to_string()),
            Transform::ToString => Value::String(stringify(value)),
            Transform::ToInt => Value::from(to_int(value)),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Transform {
    type Err = WhispererError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "lowercase" => Ok(Transform::Lowercase),
            "uppercase" => Ok(Transform::Uppercase),
            "trim" => Ok(Transform::Trim),
            "to_string" => Ok(Transform::ToString),
            "to_int" => Ok(Transform::ToInt),
            other => Err(WhispererError::InvalidInput(format!(
                "unknown transform: {other}"
            ))),
        }
    }
}

/// Deserialize an optional transform, treating `""` the same as null.
pub fn deserialize_opt<'de, D>(deserializer: D) -> std::result::Result<Option<Transform>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(name) => Transform::from_str(name)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Integer coercion: numbers truncate toward zero; strings yield their first
/// `-?\d+` run; anything without digits (or overflowing i64) is 0.
fn to_int(value: &Value) -> i64 {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else {
                n.as_f64().map(|f| f as i64).unwrap_or(0)
            }
        }
        other => {
            let text = stringify(other);
            FIRST_INTEGER
                .find(&text)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0)
        }
    }
}

/// Apply mappings to transform a source object into the target structure.
///
/// Mappings missing either endpoint are skipped; a source path absent from the
/// document yields null. Output keys appear in mapping order.
pub fn transform_data(source: &Value, mappings: &[Mapping]) -> Result<Value> {
    let object = source.as_object().ok_or_else(|| {
        WhispererError::InvalidInput("expected a JSON object at the top level".to_string())
    })?;

    let flat = flatten_json(object);
    let mut result = Map::new();

    for mapping in mappings {
        if !mapping.is_complete() {
            continue;
        }

        let mut value = flat.get(&mapping.source).cloned().unwrap_or(Value::Null);
        if let Some(transform) = mapping.transform {
            value = transform.apply(&value);
        }

        set_nested(&mut result, &mapping.target, value);
    }

    Ok(Value::Object(result))
}
