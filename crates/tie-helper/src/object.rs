//! Mapping helpers.

use tie_value::{Mapping, Value};

use crate::copy::copy;

/// Returns `true` iff the value is a mapping (not a sequence, not null).
pub fn is_plain_object(value: &Value) -> bool {
    value.is_mapping()
}

/// Returns a copy of `obj` with `key` set to `value` at position `index`.
///
/// With no index, or an index past the last entry, the pair is appended. If
/// `obj` already holds `key`, that entry is moved to the requested position
/// and takes the new value. `obj` itself is left untouched.
pub fn add_to_object(
    obj: &Mapping,
    key: impl Into<String>,
    value: Value,
    index: Option<usize>,
) -> Mapping {
    let key = key.into();
    let mut out: Mapping = obj
        .iter()
        .filter(|(prop, _)| **prop != key)
        .map(|(prop, val)| (prop.clone(), copy(val)))
        .collect();
    match index {
        Some(index) if index < out.len() => {
            out.shift_insert(index, key, value);
        }
        _ => {
            out.insert(key, value);
        }
    }
    out
}
