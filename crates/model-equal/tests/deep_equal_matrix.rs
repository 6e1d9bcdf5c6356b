//! Deep equality comparison matrix tests covering symmetry, reflexivity,
//! type mismatches, nested structures, null handling, and number edge cases.

use reactive_seq_model_equal::deep_equal;
use serde_json::json;

// ---------------------------------------------------------------------------
// Reflexivity
// ---------------------------------------------------------------------------

#[test]
fn reflexivity_null() {
    let v = json!(null);
    assert!(deep_equal(&v, &v));
}

#[test]
fn reflexivity_bool() {
    let v = json!(true);
    assert!(deep_equal(&v, &v));
}

#[test]
fn reflexivity_number() {
    let v = json!(42);
    assert!(deep_equal(&v, &v));
}

#[test]
fn reflexivity_string() {
    let v = json!("hello");
    assert!(deep_equal(&v, &v));
}

#[test]
fn reflexivity_array() {
    let v = json!([1, 2, 3]);
    assert!(deep_equal(&v, &v));
}

// ---------------------------------------------------------------------------
// Symmetry
// ---------------------------------------------------------------------------

#[test]
fn symmetry_mixed_number_representations() {
    let a = json!(7);
    let b = json!(7.0);
    assert!(deep_equal(&a, &b));
    assert!(deep_equal(&b, &a));
}

#[test]
fn symmetry_unequal_values() {
    let a = json!("a");
    let b = json!("b");
    assert!(!deep_equal(&a, &b));
    assert!(!deep_equal(&b, &a));
}

// ---------------------------------------------------------------------------
// Type mismatches
// ---------------------------------------------------------------------------

#[test]
fn number_vs_numeric_string() {
    assert!(!deep_equal(&json!(1), &json!("1")));
}

#[test]
fn zero_vs_false() {
    assert!(!deep_equal(&json!(0), &json!(false)));
}

#[test]
fn null_vs_empty_string() {
    assert!(!deep_equal(&json!(null), &json!("")));
}

#[test]
fn empty_array_vs_empty_object() {
    assert!(!deep_equal(&json!([]), &json!({})));
}

// ---------------------------------------------------------------------------
// Nested structures
// ---------------------------------------------------------------------------

#[test]
fn nested_arrays_equal() {
    let a = json!([1, [2, [3, "x"]], null]);
    let b = json!([1.0, [2, [3, "x"]], null]);
    assert!(deep_equal(&a, &b));
}

#[test]
fn nested_arrays_length_mismatch() {
    assert!(!deep_equal(&json!([1, 2, 3]), &json!([1, 2])));
}

#[test]
fn nested_arrays_element_mismatch() {
    assert!(!deep_equal(&json!([1, [2, 3]]), &json!([1, [2, 4]])));
}

#[test]
fn nested_objects_equal_regardless_of_key_order() {
    let a = json!({"a": 1, "b": {"c": [true]}});
    let b = json!({"b": {"c": [true]}, "a": 1});
    assert!(deep_equal(&a, &b));
}

#[test]
fn nested_objects_extra_key() {
    let a = json!({"a": 1});
    let b = json!({"a": 1, "b": 2});
    assert!(!deep_equal(&a, &b));
}

// ---------------------------------------------------------------------------
// Number edge cases
// ---------------------------------------------------------------------------

#[test]
fn large_u64_beyond_i64_range() {
    let v = json!(u64::MAX);
    assert!(deep_equal(&v, &v));
}

#[test]
fn large_integers_differ() {
    assert!(!deep_equal(&json!(u64::MAX), &json!(u64::MAX - 1)));
}

#[test]
fn negative_zero_equals_zero() {
    assert!(deep_equal(&json!(0), &json!(-0.0)));
}
