//! Canonical payload serialization
//!
//! Produces the deterministic compact JSON form that gets signed: key-value
//! pairs separated by a single `,`, keys separated from values by a single
//! `:`, no whitespace, fields in insertion order. Identical payload content
//! always serializes to identical bytes.

use crate::{Number, Payload, Result, UpsigError, Value};

/// Serialize a payload to its canonical JSON text
///
/// Fails with [`UpsigError::NonFiniteNumber`] if any field holds a NaN or
/// infinite float, since JSON has no representation for those.
pub fn canonical_json(payload: &Payload) -> Result<String> {
    for (key, value) in payload.iter() {
        check_value(value, key)?;
    }
    Ok(serde_json::to_string(payload)?)
}

fn check_value(value: &Value, path: &str) -> Result<()> {
    match value {
        Value::Number(Number::Float(f)) if !f.is_finite() => {
            Err(UpsigError::NonFiniteNumber(path.to_string()))
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                check_value(item, &format!("{}[{}]", path, index))?;
            }
            Ok(())
        }
        Value::Object(payload) => {
            for (key, item) in payload.iter() {
                check_value(item, &format!("{}.{}", path, key))?;
            }
            Ok(())
        }
        _ => Ok(()),
    }
}
