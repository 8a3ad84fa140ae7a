//! User models and the users query filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::{OrderDirection, UserRole};
use crate::models::convert::{flexible_datetime, null_to_default};

fn default_auth_method() -> String {
    "Mealie".to_string()
}

/// Complete user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub favorite_recipes: Vec<String>,
    #[serde(default)]
    pub can_invite: bool,
    #[serde(default)]
    pub can_manage: bool,
    #[serde(default)]
    pub can_organize: bool,
    #[serde(default)]
    pub advanced: bool,
    #[serde(default = "default_auth_method")]
    pub auth_method: String,
    #[serde(default, with = "flexible_datetime")]
    pub password_reset_time: Option<DateTime<Utc>>,
    /// Failed login counter. The wire name keeps the server's spelling.
    #[serde(default)]
    pub login_attemps: i64,
    #[serde(default, with = "flexible_datetime")]
    pub locked_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl Default for User {
    fn default() -> Self {
        User {
            id: None,
            username: String::new(),
            email: String::new(),
            full_name: None,
            admin: false,
            group: None,
            group_id: None,
            favorite_recipes: Vec::new(),
            can_invite: false,
            can_manage: false,
            can_organize: false,
            advanced: false,
            auth_method: default_auth_method(),
            password_reset_time: None,
            login_attemps: 0,
            locked_at: None,
            created_at: None,
            updated_at: None,
            additional_fields: Map::new(),
        }
    }
}

impl User {
    /// Role derived from the `admin` flag, recomputed on every call.
    pub fn role(&self) -> UserRole {
        if self.admin {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// A user is locked exactly when `locked_at` is set; there is no
    /// separate boolean on the wire.
    pub fn is_locked(&self) -> bool {
        self.locked_at.is_some()
    }

    /// Full name when present, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

/// Payload for creating a user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCreateRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for updating a user. Unset fields serialize as explicit nulls in
/// the full wire form, which the server reads as "clear".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub can_invite: Option<bool>,
    #[serde(default)]
    pub can_manage: Option<bool>,
    #[serde(default)]
    pub can_organize: Option<bool>,
    #[serde(default)]
    pub advanced: Option<bool>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for changing the current user's password.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPasswordChangeRequest {
    pub current_password: String,
    pub new_password: String,
}

/// Payload for requesting a password reset email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserPasswordResetRequest {
    pub email: String,
}

/// Reduced user projection used in list views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub admin: bool,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl UserSummary {
    /// Full name when present, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.username)
    }
}

/// Query filter for user listings.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFilter {
    pub page: u32,
    pub per_page: u32,
    pub order_by: Option<String>,
    pub order_direction: OrderDirection,
    pub search: Option<String>,
    pub admin_only: Option<bool>,
    pub group: Option<String>,
}

impl Default for UserFilter {
    fn default() -> Self {
        UserFilter {
            page: 1,
            per_page: 50,
            order_by: None,
            order_direction: OrderDirection::Asc,
            search: None,
            admin_only: None,
            group: None,
        }
    }
}

impl UserFilter {
    /// Translate to wire query parameters (camelCase names, unset fields
    /// omitted, pagination always present).
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("perPage".to_string(), self.per_page.to_string()),
        ];

        if let Some(order_by) = &self.order_by {
            params.push(("orderBy".to_string(), order_by.clone()));
            params.push((
                "orderDirection".to_string(),
                self.order_direction.as_param().to_string(),
            ));
        }
        if let Some(search) = &self.search {
            params.push(("search".to_string(), search.clone()));
        }
        if let Some(admin_only) = self.admin_only {
            params.push(("adminOnly".to_string(), admin_only.to_string()));
        }
        if let Some(group) = &self.group {
            params.push(("group".to_string(), group.clone()));
        }

        params
    }
}
