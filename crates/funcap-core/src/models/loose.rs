//! Deserializers for the loosely-typed shapes older wizard builds wrote.
//!
//! Records arrive as JSON blobs produced by a browser wizard, where a
//! numeric field may be a number, a numeric string, or absent, and a time
//! field may be a bare number or an object carrying a `value`. Each shape
//! is normalized here, once, at load time — never inline at use sites.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a number, a numeric string, or null/absent. Anything else is
/// tolerated as `None` rather than failing the whole record.
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_to_f64))
}

/// Accepts a bare number, a numeric string, or an object with a `value`
/// field (the legacy trial-time shape). Defaults to 0.0 when unreadable.
pub fn seconds<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let resolved = match value {
        Some(Value::Object(map)) => map.get("value").and_then(value_to_f64),
        Some(other) => value_to_f64(&other),
        None => None,
    };
    Ok(resolved.unwrap_or(0.0))
}

/// Accepts a number or numeric string; non-numeric shapes become 0.
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_to_f64)
        .map(|v| v.max(0.0).round() as u32)
        .unwrap_or(0))
}

/// Accepts a string enum tag in any casing, or null/absent. Returns the
/// lowercased trimmed tag for the caller to match; unknown tags fall back
/// to the caller's unset variant.
pub fn keyword<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .map(|s| s.trim().to_lowercase()))
}

fn value_to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}
