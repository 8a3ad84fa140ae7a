//! Shopping list operations, including per-item management on the
//! `groups/shopping/items` collection.

use std::sync::Arc;

use serde_json::Value;

use crate::client::http::HttpClient;
use crate::endpoints::{decode_items, map_not_found};
use crate::error::Result;
use crate::models::base::{JsonModel, RequestBody};
use crate::models::shopping_list::{
    ShoppingList, ShoppingListCreateRequest, ShoppingListFilter, ShoppingListItem,
    ShoppingListItemCreateRequest, ShoppingListItemUpdateRequest, ShoppingListSummary,
    ShoppingListUpdateRequest,
};

/// Manager for the `groups/shopping/lists` resource family.
pub struct ShoppingListsManager {
    http: Arc<dyn HttpClient>,
}

impl ShoppingListsManager {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        ShoppingListsManager { http }
    }

    /// List shopping lists with filtering and pagination.
    pub async fn get_all(&self, filter: ShoppingListFilter) -> Result<Vec<ShoppingListSummary>> {
        let response = self
            .http
            .get("groups/shopping/lists", &filter.to_params())
            .await?;
        decode_items(response)
    }

    /// Fetch one shopping list by id, items included.
    pub async fn get(&self, list_id: &str) -> Result<ShoppingList> {
        let response = self
            .http
            .get(&format!("groups/shopping/lists/{}", list_id), &[])
            .await
            .map_err(|e| map_not_found(e, "shopping_list", list_id))?;
        ShoppingList::from_value(response)
    }

    /// Create a shopping list.
    pub async fn create(&self, data: RequestBody<ShoppingListCreateRequest>) -> Result<ShoppingList> {
        let response = self
            .http
            .post("groups/shopping/lists", Some(data.into_value()?))
            .await?;
        ShoppingList::from_value(response)
    }

    /// Update a shopping list.
    pub async fn update(
        &self,
        list_id: &str,
        data: RequestBody<ShoppingListUpdateRequest>,
    ) -> Result<ShoppingList> {
        let response = self
            .http
            .put(
                &format!("groups/shopping/lists/{}", list_id),
                Some(data.into_value()?),
            )
            .await
            .map_err(|e| map_not_found(e, "shopping_list", list_id))?;
        ShoppingList::from_value(response)
    }

    /// Delete a shopping list.
    pub async fn delete(&self, list_id: &str) -> Result<bool> {
        self.http
            .delete(&format!("groups/shopping/lists/{}", list_id))
            .await
            .map_err(|e| map_not_found(e, "shopping_list", list_id))?;
        Ok(true)
    }

    /// Add an item to a list. The list id is injected into the payload as
    /// `shopping_list_id`.
    pub async fn add_item(
        &self,
        list_id: &str,
        data: RequestBody<ShoppingListItemCreateRequest>,
    ) -> Result<ShoppingListItem> {
        let mut body = data.into_value()?;
        if let Some(map) = body.as_object_mut() {
            map.insert(
                "shopping_list_id".to_string(),
                Value::String(list_id.to_string()),
            );
        }
        let response = self
            .http
            .post("groups/shopping/items", Some(body))
            .await
            .map_err(|e| map_not_found(e, "shopping_list", list_id))?;
        ShoppingListItem::from_value(response)
    }

    /// Update a single shopping list item.
    pub async fn update_item(
        &self,
        item_id: &str,
        data: RequestBody<ShoppingListItemUpdateRequest>,
    ) -> Result<ShoppingListItem> {
        let response = self
            .http
            .put(
                &format!("groups/shopping/items/{}", item_id),
                Some(data.into_value()?),
            )
            .await
            .map_err(|e| map_not_found(e, "shopping_list_item", item_id))?;
        ShoppingListItem::from_value(response)
    }

    /// Delete a single shopping list item.
    pub async fn delete_item(&self, item_id: &str) -> Result<bool> {
        self.http
            .delete(&format!("groups/shopping/items/{}", item_id))
            .await
            .map_err(|e| map_not_found(e, "shopping_list_item", item_id))?;
        Ok(true)
    }
}
