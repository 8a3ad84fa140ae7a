//! Error types for the Mealie client.
//!
//! Managers perform exactly one local recovery: a transport error carrying a
//! 404 status is translated into [`MealieError::NotFound`] with the resource
//! type and key attached. Every other failure propagates unchanged, so callers
//! can match on the specific variant they want to handle and let the rest
//! bubble up.

use thiserror::Error;

/// Error type for all Mealie client operations.
#[derive(Debug, Error)]
pub enum MealieError {
    /// The requested resource does not exist.
    #[error("{resource_type} '{resource_id}' not found")]
    NotFound {
        /// Resource family, e.g. "recipe" or "meal_plan".
        resource_type: String,
        /// The id or slug that was looked up.
        resource_id: String,
    },

    /// Authentication failed or the credentials lack permission (401/403).
    #[error("authentication failed: {message}")]
    Authentication {
        /// HTTP status, if the failure came from the server.
        status_code: Option<u16>,
        message: String,
    },

    /// The server rejected the request payload (4xx other than 401/403/404).
    #[error("validation failed ({status_code}): {message}")]
    Validation { status_code: u16, message: String },

    /// Any other non-success API response.
    #[error("API error ({status_code}): {message}")]
    Api { status_code: u16, message: String },

    /// A local date, datetime, or duration string could not be parsed.
    #[error("invalid format: {0}")]
    Format(String),

    /// Client construction failed, e.g. a missing environment variable.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network-level failure from the HTTP transport.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file I/O failed (image upload).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl MealieError {
    /// HTTP status associated with this error, when one exists.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            MealieError::NotFound { .. } => Some(404),
            MealieError::Authentication { status_code, .. } => *status_code,
            MealieError::Validation { status_code, .. } => Some(*status_code),
            MealieError::Api { status_code, .. } => Some(*status_code),
            MealieError::Http(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error represents a missing resource.
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Check if this error represents an authentication/authorization failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, MealieError::Authentication { .. })
            || matches!(self.status_code(), Some(401) | Some(403))
    }
}

/// Result type for client operations.
pub type Result<T, E = MealieError> = std::result::Result<T, E>;
