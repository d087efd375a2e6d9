//! Normalizer scenarios through the public API

use crate::test_utils::init_tracing;
use drawflags::{normalize, normalize_dotted, Error, MeasureCoercion, Payload, Policy};
use serde_json::{json, Value};

fn run(initial: Value, path: &str, policy: Policy) -> Value {
    init_tracing();
    let mut payload = Payload::from_value(initial);
    normalize_dotted(&mut payload, path, policy, &MeasureCoercion).unwrap();
    payload.into_inner()
}

#[test]
fn absent_leaf_creates_containers_then_collapses() {
    assert_eq!(
        run(json!({}), "a.b.c", Policy::StringArray),
        json!({"a": {"b": {"c": null}}})
    );
}

#[test]
fn scalar_string_is_wrapped() {
    assert_eq!(
        run(json!({"a": {"b": {"c": "red"}}}), "a.b.c", Policy::StringArray),
        json!({"a": {"b": {"c": ["red"]}}})
    );
}

#[test]
fn zero_keeps_number_array() {
    assert_eq!(
        run(json!({"a": {"b": {"c": [0, null]}}}), "a.b.c", Policy::NumberArray),
        json!({"a": {"b": {"c": [0, null]}}})
    );
}

#[test]
fn all_null_number_array_collapses() {
    assert_eq!(
        run(json!({"a": {"b": {"c": [null, null]}}}), "a.b.c", Policy::NumberArray),
        json!({"a": {"b": {"c": null}}})
    );
}

#[test]
fn zero_collapses_string_array() {
    assert_eq!(
        run(json!({"a": [0, ""]}), "a", Policy::StringArray),
        json!({"a": null})
    );
}

#[test]
fn sibling_objects_survive() {
    let out = run(
        json!({"a": {"keep": true, "b": {"also": 1}}}),
        "a.b.c",
        Policy::ScalarSave,
    );
    assert_eq!(out, json!({"a": {"keep": true, "b": {"also": 1, "c": null}}}));
}

#[test]
fn non_object_root_is_invalid_payload() {
    let mut payload = Payload::from_value(json!(null));
    let err = normalize(
        &mut payload,
        &"a".parse().unwrap(),
        Policy::ScalarSave,
        &MeasureCoercion,
    )
    .unwrap_err();
    assert_eq!(err, Error::InvalidPayload { found: "null" });
}

#[test]
fn malformed_path_is_invalid_path() {
    let mut payload = Payload::object();
    let err = normalize_dotted(&mut payload, "textStyle.fill[0]", Policy::StringArray, &MeasureCoercion)
        .unwrap_err();
    assert!(matches!(err, Error::InvalidPath { ref path, .. } if path == "textStyle.fill[0]"));
    assert_eq!(payload.into_inner(), json!({}));
}
