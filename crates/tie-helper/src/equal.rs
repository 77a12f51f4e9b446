//! Deep structural equality.

use tie_value::{lookup, Value};

/// Deeply compares two mappings or two sequences.
///
/// Returns `false` when the kinds differ and also when neither argument is a
/// container: this is a container comparison, not a scalar equality helper.
///
/// Sequences must have the same length and pairwise equal elements. Mappings
/// must have the same number of keys, and every key of `value` must match the
/// same key of `other`, where a missing key reads as `undefined`.
pub fn is_equal(value: &Value, other: &Value) -> bool {
    match (value, other) {
        (Value::Sequence(a), Value::Sequence(b)) => {
            if a.len() != b.len() {
                return false;
            }
            a.iter().zip(b).all(|(x, y)| strict_equals(x, y))
        }
        (Value::Mapping(a), Value::Mapping(b)) => {
            if a.len() != b.len() {
                return false;
            }
            a.iter()
                .all(|(key, val)| strict_equals(val, lookup(b, key)))
        }
        _ => false,
    }
}

/// Element-level equality shared by [`is_equal`], the sequence helpers and
/// the diff.
///
/// Kinds must match. Numbers follow IEEE equality (`NaN` never equals
/// itself), functions compare by text, and containers compare structurally
/// through [`is_equal`].
pub fn strict_equals(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Function(x), Value::Function(y)) => x.source() == y.source(),
        (Value::Sequence(_), _) | (Value::Mapping(_), _) => is_equal(a, b),
        _ => false,
    }
}
