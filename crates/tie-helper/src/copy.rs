//! copy — deep clone of a value tree.

use tie_value::{Mapping, Value};

/// Deep-copy a value.
///
/// Mappings and sequences are rebuilt recursively. Function references share
/// their handle with the original and scalars are returned as-is.
pub fn copy(value: &Value) -> Value {
    match value {
        Value::Mapping(map) => Value::Mapping(copy_mapping(map)),
        Value::Sequence(items) => Value::Sequence(items.iter().map(copy).collect()),
        other => other.clone(),
    }
}

/// Deep-copy a mapping, keeping key order.
pub fn copy_mapping(map: &Mapping) -> Mapping {
    map.iter()
        .map(|(key, val)| (key.clone(), copy(val)))
        .collect()
}
