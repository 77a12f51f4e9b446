//! Replays a [`DiffResult`] onto a base mapping.

use tie_value::{Mapping, Value};

use super::{Change, DiffResult};
use crate::copy::copy_mapping;

/// Apply `diff` to a copy of `base`.
///
/// Removed keys are deleted, changed keys are overwritten (sequences are
/// replaced wholesale) and nested diffs recurse into the base key, starting
/// from an empty mapping when the base holds something else there. Existing
/// keys keep their position and new keys are appended.
pub fn apply_diff(base: &Mapping, diff: &DiffResult) -> Mapping {
    let mut out = copy_mapping(base);
    for (key, change) in diff {
        match change {
            Change::Removed => {
                out.shift_remove(key);
            }
            Change::Changed(value) => {
                out.insert(key.clone(), value.clone());
            }
            Change::Nested(nested) => {
                let inner = match base.get(key) {
                    Some(Value::Mapping(map)) => apply_diff(map, nested),
                    _ => apply_diff(&Mapping::new(), nested),
                };
                out.insert(key.clone(), Value::Mapping(inner));
            }
        }
    }
    out
}
