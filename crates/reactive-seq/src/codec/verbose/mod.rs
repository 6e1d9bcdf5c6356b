//! Verbose JSON codec.
//!
//! Human-readable tagged envelopes: every delta is an object with an `"op"`
//! field; models encode as plain JSON, lists as arrays and primitives
//! verbatim. JSON objects are reserved for the keyed-map model, which this
//! crate does not implement, and are rejected on decode.

mod decode;
mod encode;

pub use decode::{decode, decode_model, CodecError};
pub use encode::{encode, encode_model};
