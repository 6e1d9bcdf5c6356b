//! Verbose JSON codec decoder.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::delta::{Delta, ListDelta};
use crate::model::{ListModel, Model};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("delta envelope must be an object")]
    NotAnObject,
    #[error("delta envelope has no op field")]
    MissingOp,
    #[error("unknown delta op: {0}")]
    UnknownOp(String),
    #[error("delta envelope field {0} is missing or invalid")]
    InvalidField(&'static str),
    #[error("json objects are reserved for the keyed-map model")]
    UnsupportedModelKind,
}

/// Decodes a model from plain JSON: arrays as lists, scalars as primitives.
pub fn decode_model(value: &Value) -> Result<Model, CodecError> {
    match value {
        Value::Array(items) => {
            let list: ListModel = items
                .iter()
                .map(decode_model)
                .collect::<Result<_, _>>()?;
            Ok(Model::List(list))
        }
        Value::Object(_) => Err(CodecError::UnsupportedModelKind),
        scalar => Ok(Model::Primitive(scalar.clone())),
    }
}

fn decode_values(envelope: &Map<String, Value>) -> Result<Vec<Model>, CodecError> {
    envelope
        .get("values")
        .and_then(Value::as_array)
        .ok_or(CodecError::InvalidField("values"))?
        .iter()
        .map(decode_model)
        .collect()
}

/// Decodes a tagged `{"op": ...}` envelope into a [`Delta`].
pub fn decode(value: &Value) -> Result<Delta, CodecError> {
    let envelope = value.as_object().ok_or(CodecError::NotAnObject)?;
    let op = envelope
        .get("op")
        .and_then(Value::as_str)
        .ok_or(CodecError::MissingOp)?;
    match op {
        "nop" => Ok(Delta::List(ListDelta::NoChange)),
        "val" => {
            let raw = envelope
                .get("value")
                .ok_or(CodecError::InvalidField("value"))?;
            Ok(Delta::Value {
                new_value: decode_model(raw)?,
            })
        }
        "append" => {
            let at = envelope
                .get("at")
                .and_then(Value::as_u64)
                .and_then(|at| usize::try_from(at).ok())
                .ok_or(CodecError::InvalidField("at"))?;
            Ok(Delta::List(ListDelta::Append {
                values: decode_values(envelope)?,
                at,
            }))
        }
        "replace" => Ok(Delta::List(ListDelta::Replace {
            values: decode_values(envelope)?,
        })),
        other => Err(CodecError::UnknownOp(other.to_string())),
    }
}
