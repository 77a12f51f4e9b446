//! Sequence helpers.

use tie_value::Value;

use crate::equal::strict_equals;

/// Returns `true` if both sequences have the same length and the same
/// elements in the same positions.
pub fn arrays_match(a: &[Value], b: &[Value]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| strict_equals(x, y))
}

/// Removes duplicates, keeping the first occurrence of each element.
///
/// `NaN` never equals itself, so every `NaN` is kept.
pub fn dedupe(items: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        if !out.iter().any(|seen| strict_equals(seen, item)) {
            out.push(item.clone());
        }
    }
    out
}
