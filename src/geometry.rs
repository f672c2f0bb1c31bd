//! Geometry parameter validation for actor commands.
//!
//! Callers hand geometry over as loose JSON (`[1, "2.5", 3]`); the engine
//! only accepts float triples. Validation happens before any command is sent,
//! so a bad triple never reaches the connection.

use crate::error::{Result, ToolError};
use crate::types::{GeometryField, Vec3};
use serde_json::Value;

/// Validate an optional geometry value.
///
/// Absent or `null` yields `Ok(None)`. Anything other than an array of three
/// float-coercible elements is rejected with [`ToolError::InvalidGeometry`].
pub fn validate_triple(field: GeometryField, value: Option<&Value>) -> Result<Option<Vec3>> {
    let items = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(items)) if items.len() == 3 => items,
        Some(other) => {
            log::error!(
                "Invalid {} format: {}. Must be a list of 3 float values.",
                field,
                other
            );
            return Err(ToolError::InvalidGeometry { field });
        }
    };

    let mut coords = [0.0f64; 3];
    for (slot, item) in coords.iter_mut().zip(items) {
        *slot = coerce_f64(item).ok_or_else(|| {
            log::error!("Invalid {} component: {}", field, item);
            ToolError::InvalidGeometry { field }
        })?;
    }
    Ok(Some(Vec3::from(coords)))
}

/// Validate a geometry value, substituting the field's creation default when absent.
pub fn resolve_triple(field: GeometryField, value: Option<&Value>) -> Result<Vec3> {
    Ok(validate_triple(field, value)?.unwrap_or_else(|| field.default_value()))
}

/// Float coercion: numbers as-is, booleans as 1/0, numeric strings parsed.
///
/// NaN and infinities are rejected; JSON has no encoding for them.
fn coerce_f64(value: &Value) -> Option<f64> {
    let f = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    f.filter(|f| f.is_finite())
}
