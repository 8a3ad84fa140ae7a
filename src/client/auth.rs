//! Authentication handling for the Mealie API.
//!
//! Mealie accepts either a long-lived API token (created in the user's
//! profile page) or a short-lived access token obtained by exchanging
//! username/password at the `auth/token` endpoint. Both end up as a Bearer
//! header on every request.

use std::sync::RwLock;

use reqwest::Client;
use serde::Deserialize;

use crate::error::{MealieError, Result};

/// Access token response from the `auth/token` endpoint.
#[derive(Debug, Deserialize)]
struct AuthToken {
    access_token: String,
}

/// Token store and credential exchange for Mealie API access.
///
/// The token slot is interior-mutable so the transport can be shared behind
/// an `Arc` across managers while still supporting late authentication.
pub struct MealieAuth {
    base_url: String,
    client: Client,
    token: RwLock<Option<String>>,
}

impl MealieAuth {
    pub fn new(base_url: String) -> Self {
        MealieAuth {
            base_url,
            client: Client::new(),
            token: RwLock::new(None),
        }
    }

    pub fn with_token(base_url: String, token: String) -> Self {
        MealieAuth {
            base_url,
            client: Client::new(),
            token: RwLock::new(Some(token)),
        }
    }

    /// Exchange username/password for an access token and store it.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        tracing::info!("Attempting authentication for user: {}", username);

        let auth_url = format!("{}/api/auth/token", self.base_url);
        let form = [("username", username), ("password", password)];

        let response = self
            .client
            .post(&auth_url)
            .form(&form)
            .timeout(std::time::Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Network error during authentication: {}", e);
                MealieError::Http(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            tracing::error!("Authentication failed with status {}: {}", status, message);
            return Err(MealieError::Authentication {
                status_code: Some(status.as_u16()),
                message,
            });
        }

        let token: AuthToken = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse authentication response: {}", e);
            MealieError::Http(e)
        })?;

        self.set_token(token.access_token);
        tracing::info!("Authentication successful for user: {}", username);
        Ok(())
    }

    pub fn set_token(&self, token: String) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(token);
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Bearer header value for authenticated requests.
    pub fn bearer(&self) -> Result<String> {
        match self.token() {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => {
                tracing::error!("Attempted to make authenticated request without a token");
                Err(MealieError::Authentication {
                    status_code: None,
                    message: "Not authenticated - set an API token or call authenticate()"
                        .to_string(),
                })
            }
        }
    }
}
