//! Verbose JSON codec encoder.

use serde_json::{json, Value};

use crate::delta::{Delta, ListDelta};
use crate::model::Model;

/// Encodes a model as plain JSON: lists as arrays, primitives verbatim.
pub fn encode_model(model: &Model) -> Value {
    match model {
        Model::Primitive(value) => value.clone(),
        Model::List(list) => Value::Array(list.iter().map(encode_model).collect()),
    }
}

fn encode_values(values: &[Model]) -> Value {
    Value::Array(values.iter().map(encode_model).collect())
}

/// Encodes a delta as a tagged `{"op": ...}` envelope.
pub fn encode(delta: &Delta) -> Value {
    match delta {
        Delta::Value { new_value } => json!({
            "op": "val",
            "value": encode_model(new_value),
        }),
        Delta::List(ListDelta::NoChange) => json!({ "op": "nop" }),
        Delta::List(ListDelta::Append { values, at }) => json!({
            "op": "append",
            "at": at,
            "values": encode_values(values),
        }),
        Delta::List(ListDelta::Replace { values }) => json!({
            "op": "replace",
            "values": encode_values(values),
        }),
    }
}
