//! Forgiving field decoders for hand-edited content files.
//!
//! A single malformed field never rejects the whole content store: `null`
//! falls back to the field default and loosely typed progress values are
//! coerced to an integer.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes `null` (or a missing field, with `#[serde(default)]`) as `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Decodes a progress percentage from any JSON value.
///
/// Integers pass through, floats and numeric strings are rounded, and
/// anything else becomes `0`. Range clamping happens on display.
pub fn progress<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(progress_from_value(&value))
}

fn progress_from_value(value: &Value) -> i64 {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().map(round_saturating))
            .unwrap_or(0),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|parsed| parsed.is_finite())
            .map(round_saturating)
            .unwrap_or(0),
        _ => 0,
    }
}

fn round_saturating(value: f64) -> i64 {
    // Float-to-int `as` saturates at the i64 bounds.
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::progress_from_value;
    use serde_json::json;

    #[test]
    fn progress_accepts_loose_numbers() {
        assert_eq!(progress_from_value(&json!(65)), 65);
        assert_eq!(progress_from_value(&json!(65.5)), 66);
        assert_eq!(progress_from_value(&json!(-4.4)), -4);
        assert_eq!(progress_from_value(&json!(" 40 ")), 40);
        assert_eq!(progress_from_value(&json!(u64::MAX)), i64::MAX);
    }

    #[test]
    fn progress_defaults_unusable_values_to_zero() {
        assert_eq!(progress_from_value(&json!(null)), 0);
        assert_eq!(progress_from_value(&json!("soon")), 0);
        assert_eq!(progress_from_value(&json!(true)), 0);
        assert_eq!(progress_from_value(&json!({"pct": 50})), 0);
    }
}
