//! Public surface matrix: copy, is_equal, diff, dedupe, arrays_match,
//! is_plain_object and add_to_object.

use serde_json::json;
use tie_helper::{
    add_to_object, apply_diff, arrays_match, copy, dedupe, diff, diff_value, diff_with, is_equal,
    is_plain_object, Change, DiffOptions, Mapping, MissingKey, Value,
};

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn m(json: serde_json::Value) -> Mapping {
    match Value::from(json) {
        Value::Mapping(map) => map,
        other => panic!("expected mapping, got {other:?}"),
    }
}

fn seq(json: serde_json::Value) -> Vec<Value> {
    match Value::from(json) {
        Value::Sequence(items) => items,
        other => panic!("expected sequence, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// copy
// ---------------------------------------------------------------------------

#[test]
fn copy_preserves_structural_equality() {
    let cases = vec![
        json!({}),
        json!([]),
        json!({"a": 1, "b": {"c": [1, 2, {"d": null}]}}),
        json!([[1, 2], {"x": "y"}, true, null]),
    ];
    for case in cases {
        let value = v(case);
        assert!(is_equal(&copy(&value), &value), "copy differs for {value:?}");
    }
}

// ---------------------------------------------------------------------------
// is_equal
// ---------------------------------------------------------------------------

#[test]
fn is_equal_examples() {
    assert!(is_equal(
        &v(json!({"a": 1, "b": {"c": 2}})),
        &v(json!({"a": 1, "b": {"c": 2}}))
    ));
    assert!(!is_equal(&v(json!({"a": 1})), &v(json!({"a": "1"}))));
}

#[test]
fn is_equal_length_mismatch() {
    assert!(!is_equal(&v(json!([1, 2])), &v(json!([1, 2, 3]))));
    assert!(!is_equal(&v(json!({"a": 1})), &v(json!({"a": 1, "b": 2}))));
}

#[test]
fn is_equal_same_count_different_keys() {
    assert!(!is_equal(&v(json!({"a": 1})), &v(json!({"b": 1}))));
}

#[test]
fn is_equal_missing_key_reads_as_undefined() {
    let mut left = Mapping::new();
    left.insert("a".into(), Value::Undefined);
    left.insert("b".into(), Value::from(1));
    let right = m(json!({"b": 1, "c": 2}));
    assert!(is_equal(&Value::Mapping(left), &Value::Mapping(right)));
}

#[test]
fn is_equal_scalar_roots_are_degenerate() {
    assert!(!is_equal(&v(json!("a")), &v(json!("a"))));
    assert!(!is_equal(&v(json!(true)), &v(json!(true))));
}

// ---------------------------------------------------------------------------
// diff
// ---------------------------------------------------------------------------

#[test]
fn diff_change_and_addition() {
    let out = diff(&v(json!({"a": 1, "b": 2})), &m(json!({"a": 1, "b": 3, "c": 4})));
    assert_eq!(out.into_value(), v(json!({"b": 3, "c": 4})));
}

#[test]
fn diff_removal() {
    let out = diff(&v(json!({"a": 1, "b": 2})), &m(json!({"a": 1})));
    assert_eq!(out.get("b"), Some(&Change::Removed));
    assert_eq!(out.get("a"), None);
}

#[test]
fn diff_of_self_is_empty() {
    let value = json!({"a": {"b": {"c": [1, 2, 3]}}, "d": "e", "f": false, "g": 0});
    assert!(diff(&v(value.clone()), &m(value)).is_empty());
}

#[test]
fn diff_order_base_then_additions() {
    let out = diff(
        &v(json!({"z": 1, "y": 2, "x": 3})),
        &m(json!({"new": 0, "x": 30, "z": 10})),
    );
    assert_eq!(out.keys().collect::<Vec<_>>(), vec!["z", "y", "x", "new"]);
}

#[test]
fn diff_present_falsy_keys_are_not_additions_by_default() {
    let out = diff(&v(json!({"a": 0, "b": false})), &m(json!({"a": 0, "b": false})));
    assert!(out.is_empty());

    let opts = DiffOptions {
        missing_key: MissingKey::Falsy,
        ..Default::default()
    };
    let out = diff_with(&v(json!({"a": 0})), &m(json!({"a": 0})), &opts);
    assert!(out.is_empty());
}

#[test]
fn diff_value_guard() {
    let base = v(json!({"a": [1]}));
    assert_eq!(diff_value(&base, &v(json!("not a mapping"))), base);
}

#[test]
fn diff_then_apply_reaches_target() {
    let base = m(json!({"keep": 1, "drop": 2, "deep": {"a": {"b": 1, "c": [1, 2]}}, "swap": [1]}));
    let target = m(json!({"keep": 1, "deep": {"a": {"b": 2, "c": [1, 2]}, "z": null}, "swap": {"k": 1}, "add": "x"}));
    let changes = diff(&Value::Mapping(base.clone()), &target);
    let patched = apply_diff(&base, &changes);
    assert!(is_equal(&Value::Mapping(patched), &Value::Mapping(target)));
}

// ---------------------------------------------------------------------------
// arrays_match / dedupe
// ---------------------------------------------------------------------------

#[test]
fn arrays_match_examples() {
    assert!(arrays_match(&seq(json!([1, 2, 3])), &seq(json!([1, 2, 3]))));
    assert!(!arrays_match(&seq(json!([1, 2, 3])), &seq(json!([3, 2, 1]))));
}

#[test]
fn dedupe_preserves_order() {
    assert_eq!(
        dedupe(&seq(json!([3, 1, 3, 2, 1, "3"]))),
        seq(json!([3, 1, 2, "3"]))
    );
}

#[test]
fn dedupe_is_idempotent() {
    let once = dedupe(&seq(json!([1, 1, [1], [1], {"a": 1}, {"a": 1}, null, null])));
    assert_eq!(dedupe(&once), once);
    assert_eq!(once.len(), 4);
}

// ---------------------------------------------------------------------------
// is_plain_object / add_to_object
// ---------------------------------------------------------------------------

#[test]
fn is_plain_object_matrix() {
    assert!(is_plain_object(&v(json!({"a": 1}))));
    assert!(!is_plain_object(&v(json!([1]))));
    assert!(!is_plain_object(&v(json!(null))));
    assert!(!is_plain_object(&v(json!("obj"))));
    assert!(!is_plain_object(&Value::Undefined));
}

#[test]
fn add_to_object_positional() {
    let out = add_to_object(&m(json!({"x": 1, "z": 3})), "y", Value::from(2), Some(1));
    let pairs: Vec<(&str, &Value)> = out.iter().map(|(k, val)| (k.as_str(), val)).collect();
    assert_eq!(
        pairs,
        vec![("x", &Value::from(1)), ("y", &Value::from(2)), ("z", &Value::from(3))]
    );
}

#[test]
fn add_to_object_leaves_original_alone() {
    let original = m(json!({"x": {"deep": 1}}));
    let out = add_to_object(&original, "y", Value::from(false), None);
    assert_eq!(out.len(), 2);
    assert_eq!(original.len(), 1);
    assert_eq!(out["x"], original["x"]);
}
