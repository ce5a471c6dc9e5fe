// Numeric coercion of the hourly rate sent by clients.
//
// A missing rate falls back to the configured default. A present rate is never rejected:
// numbers pass through, numeric strings are parsed, blank strings, null and false become 0,
// true becomes 1, and anything else becomes NaN.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const DEFAULT_HOURLY_RATE: f64 = 150.0;

pub fn coerce_hourly_rate(raw: Option<&Value>, default: f64) -> f64 {
    match raw {
        None => default,
        Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => f64::from(u8::from(*flag)),
        Some(Value::Number(number)) => number.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Array(_) | Value::Object(_)) => f64::NAN,
    }
}

/// Keeps an explicit `null` distinguishable from a missing field. Pair with `#[serde(default)]`.
pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
