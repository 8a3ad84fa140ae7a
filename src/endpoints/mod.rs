//! Per-resource API managers.
//!
//! Each manager wraps the [`HttpClient`](crate::client::HttpClient)
//! collaborator with typed CRUD plus resource-specific operations. Managers
//! hold no state beyond the shared transport; concurrent calls are
//! independent units of work with no ordering guarantee between them.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{MealieError, Result};

pub mod groups;
pub mod meal_plans;
pub mod recipes;
pub mod shopping_lists;
pub mod users;

pub use groups::GroupsManager;
pub use meal_plans::MealPlansManager;
pub use recipes::RecipesManager;
pub use shopping_lists::ShoppingListsManager;
pub use users::UsersManager;

/// Normalize the three collection response shapes the API produces into a
/// plain sequence: a bare array, an object wrapping an `items` array, or a
/// degenerate single object (returned as a one-element sequence). Null means
/// an empty collection.
pub(crate) fn collection_items(response: Value) -> Vec<Value> {
    match response {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("items") {
            Some(Value::Array(items)) => items,
            Some(Value::Null) => Vec::new(),
            Some(other) => vec![other],
            None => vec![Value::Object(map)],
        },
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

/// Decode a collection response into typed elements.
pub(crate) fn decode_items<T: DeserializeOwned>(response: Value) -> Result<Vec<T>> {
    collection_items(response)
        .into_iter()
        .map(|item| Ok(serde_json::from_value(item)?))
        .collect()
}

/// The single local recovery managers perform: a 404-status transport error
/// becomes a typed [`MealieError::NotFound`] carrying the resource type and
/// the key that was looked up. Everything else passes through unchanged.
pub(crate) fn map_not_found(err: MealieError, resource_type: &str, resource_id: &str) -> MealieError {
    match err {
        MealieError::Api {
            status_code: 404, ..
        } => MealieError::NotFound {
            resource_type: resource_type.to_string(),
            resource_id: resource_id.to_string(),
        },
        other => other,
    }
}
