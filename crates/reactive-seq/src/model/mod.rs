//! The polymorphic value model.
//!
//! [`Model`] is a closed union over the value kinds the synchronization
//! core understands: opaque primitive slots and ordered sequences. Every
//! consumer (diff, patch, codec, walker) matches it exhaustively; there is
//! no open dispatch.

mod error;
mod list;

pub use error::ModelError;
pub use list::ListModel;

use reactive_seq_model_equal::deep_equal;
use serde_json::Value;

use crate::delta::Delta;
use crate::patch::PatchError;

/// One node of the value model.
#[derive(Debug, Clone)]
pub enum Model {
    /// An opaque scalar slot value (null, bool, number, or string).
    ///
    /// Composite values belong to dedicated model kinds; a primitive slot is
    /// treated as an equality-comparable token and never inspected beyond
    /// that.
    Primitive(Value),
    /// An immutable ordered sequence of models.
    List(ListModel),
}

impl Model {
    /// Creates a primitive node from any JSON-representable value.
    pub fn primitive(value: impl Into<Value>) -> Model {
        Model::Primitive(value.into())
    }

    /// Computes the delta turning this node into `target`, `None` when the
    /// nodes are equal. See [`crate::diff::diff`].
    pub fn diff(&self, target: &Model) -> Option<Delta> {
        crate::diff::diff(self, target)
    }

    /// Applies `delta` to this node, producing the next node.
    /// See [`crate::patch::apply`].
    pub fn patch(&self, delta: &Delta) -> Result<Model, PatchError> {
        crate::patch::apply(self, delta)
    }
}

impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Model::Primitive(a), Model::Primitive(b)) => deep_equal(a, b),
            (Model::List(a), Model::List(b)) => a == b,
            _ => false,
        }
    }
}

impl From<Value> for Model {
    fn from(value: Value) -> Self {
        Model::Primitive(value)
    }
}

impl From<ListModel> for Model {
    fn from(list: ListModel) -> Self {
        Model::List(list)
    }
}
