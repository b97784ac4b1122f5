//! Shared serde helpers used across catalogue types.

use serde::Deserialize;

/// A scalar that upstream payloads encode either as a string or a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

impl StringOrNumber {
    pub(crate) fn into_string(self) -> String {
        match self {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Int(i) => i.to_string(),
            StringOrNumber::Float(f) => format_number(f),
        }
    }
}

/// Print a number in its shortest form: `2.0` becomes `2`, `2.5` stays `2.5`.
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Render a free-form JSON scalar the way it reads in a storefront label.
///
/// Returns `None` for null, empty strings, and non-scalar values.
pub(crate) fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        serde_json::Value::Number(n) => n
            .as_i64()
            .map(|i| i.to_string())
            .or_else(|| n.as_f64().map(format_number)),
        _ => None,
    }
}

/// Deserialize an optional label that may arrive as a string or a number.
///
/// Blank strings deserialize to `None`.
pub(crate) fn deserialize_opt_label<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<StringOrNumber> = Option::deserialize(deserializer)?;
    Ok(raw
        .map(StringOrNumber::into_string)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}
