//! Base serialization contract shared by every entity and request model.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::models::convert::strip_nulls;

/// Round-trip conversion between models and API JSON.
///
/// Every model carries a `#[serde(flatten)]` field bag, so keys the typed
/// struct does not recognize survive `from_value` -> `to_value` verbatim.
/// Two serialization modes exist:
///
/// - [`to_value`](JsonModel::to_value): the full wire form. Unset optional
///   fields serialize as explicit JSON null, which is how "clear this field"
///   is expressed on update.
/// - [`to_value_sparse`](JsonModel::to_value_sparse): null-valued keys are
///   stripped recursively. Used for create payloads, where an explicit null
///   would be read by the server as a deliberate clear rather than absence.
pub trait JsonModel: Serialize + DeserializeOwned {
    /// Build a model from an API JSON value.
    ///
    /// Nested mappings are promoted to their typed child models. Applying
    /// this to the output of [`to_value`](JsonModel::to_value) yields an
    /// equal model (idempotent round-trip).
    fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize to the full wire form, preserving explicit nulls.
    fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to the sparse wire form, omitting null-valued keys.
    fn to_value_sparse(&self) -> Result<Value> {
        Ok(strip_nulls(serde_json::to_value(self)?))
    }
}

impl<T: Serialize + DeserializeOwned> JsonModel for T {}

/// Body accepted by manager create/update methods: either a typed request
/// model or a raw JSON mapping, resolved to a single [`Value`] before the
/// request is built.
#[derive(Debug, Clone)]
pub enum RequestBody<T> {
    /// A typed request model, serialized through [`JsonModel::to_value`].
    Typed(T),
    /// A raw JSON object passed through unchanged.
    Raw(Value),
}

impl<T: Serialize> RequestBody<T> {
    /// Resolve to the single JSON representation sent on the wire.
    pub fn into_value(self) -> Result<Value> {
        match self {
            RequestBody::Typed(model) => Ok(serde_json::to_value(model)?),
            RequestBody::Raw(value) => Ok(value),
        }
    }
}
