//! Group operations.
//!
//! Create/update/delete are part of the API contract, but most deployments
//! only allow them for administrators; a rejection surfaces as the normal
//! [`Authentication`](crate::MealieError::Authentication) or
//! [`Validation`](crate::MealieError::Validation) error and is not a client
//! bug.

use std::sync::Arc;

use crate::client::http::HttpClient;
use crate::endpoints::{decode_items, map_not_found};
use crate::error::Result;
use crate::models::base::{JsonModel, RequestBody};
use crate::models::group::{Group, GroupCreateRequest, GroupSummary, GroupUpdateRequest};

/// Manager for the `groups` resource family.
pub struct GroupsManager {
    http: Arc<dyn HttpClient>,
}

impl GroupsManager {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        GroupsManager { http }
    }

    /// List all groups visible to the caller.
    pub async fn get_all(&self) -> Result<Vec<GroupSummary>> {
        let response = self.http.get("groups", &[]).await?;
        decode_items(response)
    }

    /// Fetch one group by id.
    pub async fn get(&self, group_id: &str) -> Result<Group> {
        let response = self
            .http
            .get(&format!("groups/{}", group_id), &[])
            .await
            .map_err(|e| map_not_found(e, "group", group_id))?;
        Group::from_value(response)
    }

    /// Create a group. May be rejected outside administrative contexts.
    pub async fn create(&self, data: RequestBody<GroupCreateRequest>) -> Result<Group> {
        let response = self.http.post("groups", Some(data.into_value()?)).await?;
        Group::from_value(response)
    }

    /// Update a group. May be rejected outside administrative contexts.
    pub async fn update(
        &self,
        group_id: &str,
        data: RequestBody<GroupUpdateRequest>,
    ) -> Result<Group> {
        let response = self
            .http
            .put(&format!("groups/{}", group_id), Some(data.into_value()?))
            .await
            .map_err(|e| map_not_found(e, "group", group_id))?;
        Group::from_value(response)
    }

    /// Delete a group. May be rejected outside administrative contexts.
    pub async fn delete(&self, group_id: &str) -> Result<bool> {
        self.http
            .delete(&format!("groups/{}", group_id))
            .await
            .map_err(|e| map_not_found(e, "group", group_id))?;
        Ok(true)
    }
}
