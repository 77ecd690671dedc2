// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn key_order_does_not_matter() {
    let a: Value = serde_json::from_str(r#"{"selector":{"textRegex":"A","optional":false},"longPress":false}"#).unwrap();
    let b: Value = serde_json::from_str(r#"{"longPress":false,"selector":{"optional":false,"textRegex":"A"}}"#).unwrap();
    assert!(structural_eq(&a, &b));
}

#[test]
fn nested_field_difference_is_detected() {
    let a = json!({"selector": {"textRegex": "Login"}});
    let b = json!({"selector": {"textRegex": "Logout"}});
    assert!(!structural_eq(&a, &b));
}

#[test]
fn extra_field_is_detected() {
    let a = json!({"text": "hello"});
    let b = json!({"text": "hello", "optional": true});
    assert!(!structural_eq(&a, &b));
    assert!(!structural_eq(&b, &a));
}

#[test]
fn array_order_matters() {
    assert!(!structural_eq(&json!([1, 2]), &json!([2, 1])));
    assert!(structural_eq(&json!([1, 2]), &json!([1, 2])));
}

#[yare::parameterized(
    int_and_float = { json!(1),   json!(1.0),  true },
    negative      = { json!(-5),  json!(-5),   true },
    big_unsigned  = { json!(u64::MAX), json!(u64::MAX), true },
    different     = { json!(2),   json!(3),    false },
    fractional    = { json!(0.5), json!(0.25), false },
    mixed_sign    = { json!(-1),  json!(u64::MAX), false },
)]
fn numbers_compare_by_value(a: Value, b: Value, expected: bool) {
    assert_eq!(structural_eq(&a, &b), expected);
}

#[yare::parameterized(
    null_vs_false  = { json!(null), json!(false) },
    string_vs_num  = { json!("1"),  json!(1) },
    array_vs_obj   = { json!([]),   json!({}) },
    bool_vs_string = { json!(true), json!("true") },
)]
fn different_types_are_never_equal(a: Value, b: Value) {
    assert!(!structural_eq(&a, &b));
}

#[test]
fn json_type_names() {
    assert_eq!(json_type(&json!(null)), "null");
    assert_eq!(json_type(&json!({})), "object");
    assert_eq!(json_type(&json!([])), "array");
    assert_eq!(json_type(&json!("x")), "string");
}

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-c]{1,2}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    /// Invariant: equality is reflexive.
    #[test]
    fn reflexive(value in arb_json()) {
        prop_assert!(structural_eq(&value, &value));
    }

    /// Invariant: equality is symmetric.
    #[test]
    fn symmetric(a in arb_json(), b in arb_json()) {
        prop_assert_eq!(structural_eq(&a, &b), structural_eq(&b, &a));
    }

    /// Invariant: agrees with serde_json's own equality when no floats are involved.
    #[test]
    fn agrees_with_value_eq(a in arb_json(), b in arb_json()) {
        prop_assert_eq!(structural_eq(&a, &b), a == b);
    }
}
