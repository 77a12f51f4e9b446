//! Conversions between [`Value`] and [`serde_json::Value`].
//!
//! Every JSON document converts into a [`Value`]. The reverse direction fails
//! for functions, `undefined` and non-finite numbers.

use serde_json::{Map, Number, Value as JsonValue};

use crate::{Mapping, Value, ValueError};

/// Largest integer magnitude an `f64` holds exactly (2^53).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => Value::Number(number_to_f64(&n)),
            JsonValue::String(s) => Value::String(s),
            JsonValue::Array(arr) => Value::Sequence(arr.into_iter().map(Value::from).collect()),
            JsonValue::Object(obj) => Value::Mapping(
                obj.into_iter()
                    .map(|(key, val)| (key, Value::from(val)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(json: &JsonValue) -> Self {
        Value::from(json.clone())
    }
}

impl TryFrom<&Value> for JsonValue {
    type Error = ValueError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        to_json(value)
    }
}

impl TryFrom<Value> for JsonValue {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        to_json(&value)
    }
}

fn number_to_f64(n: &Number) -> f64 {
    match n.as_f64() {
        Some(f) => f,
        // Only reachable with arbitrary-precision numbers.
        None => n.to_string().parse().unwrap_or(f64::NAN),
    }
}

fn f64_to_number(n: f64) -> Result<Number, ValueError> {
    if !n.is_finite() {
        return Err(ValueError::NonFiniteNumber(n));
    }
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Ok(Number::from(n as i64));
    }
    Number::from_f64(n).ok_or(ValueError::NonFiniteNumber(n))
}

/// Convert a [`Value`] into JSON.
///
/// Integral numbers are written as JSON integers so that `1` round-trips as
/// `1` rather than `1.0`.
pub fn to_json(value: &Value) -> Result<JsonValue, ValueError> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Number(n) => JsonValue::Number(f64_to_number(*n)?),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Sequence(items) => JsonValue::Array(
            items
                .iter()
                .map(to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Mapping(map) => JsonValue::Object(mapping_to_json(map)?),
        Value::Undefined | Value::Function(_) => {
            return Err(ValueError::Unrepresentable { kind: value.kind() })
        }
    })
}

fn mapping_to_json(map: &Mapping) -> Result<Map<String, JsonValue>, ValueError> {
    let mut out = Map::with_capacity(map.len());
    for (key, val) in map {
        out.insert(key.clone(), to_json(val)?);
    }
    Ok(out)
}

impl Value {
    /// Parse JSON text into a [`Value`].
    pub fn from_json_str(text: &str) -> Result<Value, ValueError> {
        let json: JsonValue = serde_json::from_str(text)?;
        Ok(Value::from(json))
    }

    /// Serialize into compact JSON text.
    pub fn to_json_string(&self) -> Result<String, ValueError> {
        let json = to_json(self)?;
        Ok(serde_json::to_string(&json)?)
    }
}
