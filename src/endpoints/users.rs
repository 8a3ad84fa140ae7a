//! User operations.

use std::sync::Arc;

use crate::client::http::HttpClient;
use crate::endpoints::{decode_items, map_not_found};
use crate::error::Result;
use crate::models::base::{JsonModel, RequestBody};
use crate::models::user::{User, UserCreateRequest, UserFilter, UserSummary, UserUpdateRequest};

/// Manager for the `users` resource family.
pub struct UsersManager {
    http: Arc<dyn HttpClient>,
}

impl UsersManager {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        UsersManager { http }
    }

    /// List users with filtering and pagination.
    pub async fn get_all(&self, filter: UserFilter) -> Result<Vec<UserSummary>> {
        let response = self.http.get("users", &filter.to_params()).await?;
        decode_items(response)
    }

    /// Fetch one user by id.
    pub async fn get(&self, user_id: &str) -> Result<User> {
        let response = self
            .http
            .get(&format!("users/{}", user_id), &[])
            .await
            .map_err(|e| map_not_found(e, "user", user_id))?;
        User::from_value(response)
    }

    /// Fetch the currently authenticated user.
    pub async fn get_current(&self) -> Result<User> {
        let response = self.http.get("users/self", &[]).await?;
        User::from_value(response)
    }

    /// Create a user.
    pub async fn create(&self, data: RequestBody<UserCreateRequest>) -> Result<User> {
        let response = self.http.post("users", Some(data.into_value()?)).await?;
        User::from_value(response)
    }

    /// Update a user. The full wire form is sent, so `None` fields arrive as
    /// explicit nulls (clear semantics).
    pub async fn update(
        &self,
        user_id: &str,
        data: RequestBody<UserUpdateRequest>,
    ) -> Result<User> {
        let response = self
            .http
            .put(&format!("users/{}", user_id), Some(data.into_value()?))
            .await
            .map_err(|e| map_not_found(e, "user", user_id))?;
        User::from_value(response)
    }

    /// Delete a user.
    pub async fn delete(&self, user_id: &str) -> Result<bool> {
        self.http
            .delete(&format!("users/{}", user_id))
            .await
            .map_err(|e| map_not_found(e, "user", user_id))?;
        Ok(true)
    }
}
