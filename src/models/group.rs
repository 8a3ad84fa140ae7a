//! Group models.
//!
//! Groups are effectively read-only from the client's perspective in most
//! deployments: the create/update/delete operations exist in the API
//! contract, but server-side policy decides whether they succeed. The nested
//! category/webhook/user lists stay opaque mappings; the client does not
//! model them further.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::convert::{flexible_datetime, null_to_default};

/// Complete group with settings and preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub categories: Vec<Value>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub webhooks: Vec<Value>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub users: Vec<Value>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub preferences: Map<String, Value>,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl Group {
    /// Number of users in the group.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of categories owned by the group.
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

/// Payload for creating a group. May be rejected outside administrative
/// contexts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupCreateRequest {
    pub name: String,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for updating a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub preferences: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Reduced group projection used in list views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub user_count: u64,
    #[serde(default)]
    pub category_count: u64,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}
