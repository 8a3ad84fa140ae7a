//! HTTP transport for the Mealie API.
//!
//! [`HttpClient`] is the seam between the resource managers and the wire:
//! managers only ever see JSON values and [`MealieError`]s, which is what
//! makes them testable against a mock transport. [`MealieHttpClient`] is the
//! reqwest-backed production implementation.
//!
//! Status mapping is deliberately coarse here: 401/403 become
//! [`MealieError::Authentication`], 4xx other than 404 become
//! [`MealieError::Validation`], and everything else non-success (404
//! included) becomes [`MealieError::Api`]. The manager layer owns the
//! 404-to-`NotFound` translation because only it knows the resource type and
//! key being addressed.

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;

use crate::client::auth::MealieAuth;
use crate::error::{MealieError, Result};

/// The HTTP collaborator consumed by every resource manager.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Base URL of the server, without the `/api` suffix.
    fn base_url(&self) -> &str;

    /// `GET <collection path>` with query parameters.
    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value>;

    /// `POST <path>` with an optional JSON body.
    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value>;

    /// `PUT <path>` with an optional JSON body.
    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value>;

    /// `PUT <path>` with a single binary multipart field.
    async fn put_multipart(
        &self,
        path: &str,
        field: &str,
        file_name: String,
        bytes: Vec<u8>,
        mime: &str,
        params: &[(String, String)],
    ) -> Result<Value>;

    /// `DELETE <path>`; an empty response body decodes to `Value::Null`.
    async fn delete(&self, path: &str) -> Result<Value>;
}

/// Production transport backed by reqwest.
pub struct MealieHttpClient {
    base_url: String,
    client: Client,
    auth: MealieAuth,
}

impl MealieHttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        MealieHttpClient {
            client: Client::new(),
            auth: MealieAuth::new(base_url.clone()),
            base_url,
        }
    }

    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        MealieHttpClient {
            client: Client::new(),
            auth: MealieAuth::with_token(base_url.clone(), token.into()),
            base_url,
        }
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        self.auth.authenticate(username, password).await
    }

    pub fn set_token(&self, token: String) {
        self.auth.set_token(token);
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Value> {
        let response = builder
            .header("Authorization", self.auth.bearer()?)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn decode(response: Response) -> Result<Value> {
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if status.is_success() {
            let text = response.text().await?;
            if text.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_str(&text)?);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read error response".to_string());
        tracing::error!("Request failed with status {}: {}", status, message);

        match status.as_u16() {
            code @ (401 | 403) => Err(MealieError::Authentication {
                status_code: Some(code),
                message,
            }),
            404 => Err(MealieError::Api {
                status_code: 404,
                message,
            }),
            code @ 400..=499 => Err(MealieError::Validation {
                status_code: code,
                message,
            }),
            code => Err(MealieError::Api {
                status_code: code,
                message,
            }),
        }
    }
}

#[async_trait]
impl HttpClient for MealieHttpClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        let url = self.api_url(path);
        tracing::debug!("GET {} ({} params)", url, params.len());
        self.dispatch(self.client.get(&url).query(params)).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value> {
        let url = self.api_url(path);
        tracing::debug!("POST {}", url);
        let mut builder = self.client.post(&url);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.dispatch(builder).await
    }

    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value> {
        let url = self.api_url(path);
        tracing::debug!("PUT {}", url);
        let mut builder = self.client.put(&url);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.dispatch(builder).await
    }

    async fn put_multipart(
        &self,
        path: &str,
        field: &str,
        file_name: String,
        bytes: Vec<u8>,
        mime: &str,
        params: &[(String, String)],
    ) -> Result<Value> {
        let url = self.api_url(path);
        tracing::debug!("PUT {} (multipart, {} bytes)", url, bytes.len());
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)?;
        let form = multipart::Form::new().part(field.to_string(), part);
        self.dispatch(self.client.put(&url).query(params).multipart(form))
            .await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        let url = self.api_url(path);
        tracing::debug!("DELETE {}", url);
        self.dispatch(self.client.delete(&url)).await
    }
}
