//! Field-level deserializers for oracle replies.
//!
//! The model is asked for a fixed JSON shape but nothing enforces it. These
//! helpers let a single wrong-typed field fall back to its default instead of
//! failing the whole reply.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Number(f64),
    Text(String),
}

/// Accepts a JSON number or a numeric string. Errors on anything else.
pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match NumberLike::deserialize(deserializer)? {
        NumberLike::Number(n) => n,
        NumberLike::Text(s) => s.trim().parse::<f64>().map_err(de::Error::custom)?,
    };
    if n.is_finite() {
        Ok(n)
    } else {
        Err(de::Error::custom("confidence must be finite"))
    }
}

/// Like [`number`], but a non-numeric value decodes as `0.0`.
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number(value).unwrap_or(0.0))
}

/// Decodes `T`, falling back to `T::default()` when the value has the wrong shape.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// A list element that either decodes as `T` or is kept aside as malformed.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Entry<T> {
    Valid(T),
    Malformed(Value),
}
