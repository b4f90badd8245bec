//! Lenient coercion of client-supplied JSON values
//!
//! The wire contract tolerates numbers arriving as JSON numbers or numeric
//! strings. `decimal` refuses anything else; `integer_or_zero` silently
//! falls back to zero, mirroring the original API's `parseInt(x) || 0`.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

/// Coerce a JSON value to a decimal amount
///
/// Accepts numbers and numeric strings; returns `None` for everything else.
pub fn decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Decimal::from(i))
            } else {
                n.as_f64().and_then(Decimal::from_f64)
            }
        }
        Value::String(s) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    }
}

/// Coerce a JSON value to a non-negative integer, defaulting to zero
///
/// Non-numeric input (and negative input, which the stock count cannot
/// represent) becomes 0.
pub fn integer_or_zero(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.unwrap_or(0).max(0).try_into().unwrap_or(u32::MAX)
}
