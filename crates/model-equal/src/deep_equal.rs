use serde_json::{Number, Value};

/// Recursively compares two JSON values with strict type checking.
///
/// A type mismatch is unequal, except for numbers: `2` and `2.0` compare
/// equal regardless of their internal representation.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => number_equal(x, y),
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y.iter()).all(|(u, v)| deep_equal(u, v))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, u)| y.get(key).is_some_and(|v| deep_equal(u, v)))
        }
        _ => false,
    }
}

/// Numeric comparison across integer and float representations.
///
/// Exact integer paths are tried first so values beyond f64 precision
/// compare correctly; only mixed representations fall back to f64.
fn number_equal(x: &Number, y: &Number) -> bool {
    if let (Some(a), Some(b)) = (x.as_i64(), y.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (x.as_u64(), y.as_u64()) {
        return a == b;
    }
    match (x.as_f64(), y.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
