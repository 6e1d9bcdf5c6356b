//! Path projection from sequence models.
//!
//! A sequence whose slots (past the first, reserved one) are primitives
//! can be read as an addressable path token: drop the first element, fold
//! the rest left-to-right into a [`Path`]. A pure, stateless projection.

use reactive_seq_path::Path;
use serde_json::Value;

use crate::model::{ListModel, Model, ModelError};

/// Derives the addressable path encoded by `list`.
///
/// The first slot is reserved and skipped. Every remaining slot must be a
/// primitive; a nested sequence fails with
/// [`ModelError::NonPrimitivePathSegment`].
pub fn to_path(list: &ListModel) -> Result<Path, ModelError> {
    let mut path = Path::new();
    for (index, item) in list.iter().enumerate().skip(1) {
        let component = match item {
            Model::Primitive(value) => component_for(value),
            Model::List(_) => return Err(ModelError::NonPrimitivePathSegment { index }),
        };
        path = path.join(component);
    }
    Ok(path)
}

/// String slots contribute their content verbatim; other scalars their
/// JSON rendering.
fn component_for(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
