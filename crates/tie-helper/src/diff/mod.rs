//! Deep diff between a base value and a target mapping.
//!
//! The result lists only keys that changed, were added or were removed:
//!
//! - a key missing from the target (or `undefined` there) is [`Change::Removed`],
//!   unless the base holds `undefined` as well;
//! - a kind mismatch records the target value verbatim;
//! - two mappings are diffed recursively into [`Change::Nested`];
//! - two sequences are compared position by position and, if they differ at
//!   all, the whole target sequence is recorded (no element-level diff);
//! - functions compare by text, other scalars by strict equality.
//!
//! Keys from the base come first, then additions from the target, each in
//! mapping order.

mod apply;

pub use apply::apply_diff;

use indexmap::IndexMap;
use tie_value::{lookup, Mapping, Value};
use tracing::{debug, trace};

use crate::arrays::arrays_match;
use crate::copy::copy;
use crate::equal::strict_equals;
use crate::options::{DiffOptions, MissingKey};

/// One entry of a [`DiffResult`].
#[derive(Debug, Clone, PartialEq)]
pub enum Change {
    /// The key exists in the base but not in the target.
    Removed,
    /// The key takes this value in the target.
    Changed(Value),
    /// Both sides are mappings; these are the changes inside.
    Nested(DiffResult),
}

impl Change {
    fn label(&self) -> &'static str {
        match self {
            Change::Removed => "removed",
            Change::Changed(_) => "changed",
            Change::Nested(_) => "nested",
        }
    }

    /// Render as a plain value. The removed marker becomes `null`.
    pub fn into_value(self) -> Value {
        match self {
            Change::Removed => Value::Null,
            Change::Changed(value) => value,
            Change::Nested(nested) => nested.into_value(),
        }
    }
}

/// Ordered set of changes produced by [`diff`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffResult {
    changes: IndexMap<String, Change>,
}

impl DiffResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn get(&self, key: &str) -> Option<&Change> {
        self.changes.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.changes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Change> {
        self.changes.iter()
    }

    /// Render as a mapping value, with removed keys set to `null`.
    pub fn into_value(self) -> Value {
        Value::Mapping(
            self.changes
                .into_iter()
                .map(|(key, change)| (key, change.into_value()))
                .collect(),
        )
    }

    pub fn to_value(&self) -> Value {
        self.clone().into_value()
    }
}

impl FromIterator<(String, Change)> for DiffResult {
    fn from_iter<I: IntoIterator<Item = (String, Change)>>(iter: I) -> Self {
        Self {
            changes: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for DiffResult {
    type Item = (String, Change);
    type IntoIter = indexmap::map::IntoIter<String, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = (&'a String, &'a Change);
    type IntoIter = indexmap::map::Iter<'a, String, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

impl From<DiffResult> for Value {
    fn from(diff: DiffResult) -> Self {
        diff.into_value()
    }
}

/// Diff `base` against `target` with default options.
///
/// ```
/// use serde_json::json;
/// use tie_helper::{diff, Change, Value};
///
/// let base = Value::from(json!({"a": 1, "b": 2}));
/// let target = Value::from(json!({"a": 1}));
/// let changes = diff(&base, target.as_mapping().unwrap());
/// assert_eq!(changes.get("b"), Some(&Change::Removed));
/// ```
pub fn diff(base: &Value, target: &Mapping) -> DiffResult {
    diff_with(base, target, &DiffOptions::default())
}

/// Diff `base` against `target`.
///
/// A `base` that is not a mapping has no keys, so every key of `target` is
/// reported as an addition.
pub fn diff_with(base: &Value, target: &Mapping, options: &DiffOptions) -> DiffResult {
    let base_map = base.as_mapping();

    let changed = base_map.into_iter().flatten().filter_map(|(key, item)| {
        let change = compare(item, lookup(target, key), options)?;
        trace!(key = %key, change = change.label(), "base key differs");
        Some((key.clone(), change))
    });

    let added = target.iter().filter_map(|(key, item)| {
        if !is_missing(base.get(key), item, options) {
            return None;
        }
        trace!(key = %key, "target key added");
        Some((key.clone(), Change::Changed(item.clone())))
    });

    changed.chain(added).collect()
}

/// Dynamic entry point: when `target` is not a mapping there is nothing to
/// diff against and a copy of `base` is returned unchanged. Otherwise the
/// diff is rendered with [`DiffResult::into_value`].
pub fn diff_value(base: &Value, target: &Value) -> Value {
    diff_value_with(base, target, &DiffOptions::default())
}

pub fn diff_value_with(base: &Value, target: &Value, options: &DiffOptions) -> Value {
    match target {
        Value::Mapping(target) => diff_with(base, target, options).into_value(),
        other => {
            debug!(kind = %other.kind(), "diff target is not a mapping, returning base");
            copy(base)
        }
    }
}

fn compare(item: &Value, target: &Value, options: &DiffOptions) -> Option<Change> {
    if target.is_undefined() {
        // Undefined on both sides is absent on both sides.
        if item.is_undefined() && options.missing_key == MissingKey::Absent {
            return None;
        }
        return Some(Change::Removed);
    }
    if item.kind() != target.kind() {
        return Some(Change::Changed(target.clone()));
    }
    match (item, target) {
        (Value::Mapping(_), Value::Mapping(target)) => {
            let nested = diff_with(item, target, options);
            (nested.len() > options.nested_threshold).then_some(Change::Nested(nested))
        }
        (Value::Sequence(a), Value::Sequence(b)) => {
            (!arrays_match(a, b)).then(|| Change::Changed(target.clone()))
        }
        _ => (!strict_equals(item, target)).then(|| Change::Changed(target.clone())),
    }
}

fn is_missing(base_item: &Value, target_item: &Value, options: &DiffOptions) -> bool {
    match options.missing_key {
        MissingKey::Absent => base_item.is_undefined() && !target_item.is_undefined(),
        MissingKey::Falsy => !base_item.is_truthy() && !strict_equals(base_item, target_item),
    }
}
