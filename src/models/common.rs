//! Enumerations shared across the model layer.

use serde::{Deserialize, Serialize};

/// User role, derived from the `admin` flag. Never stored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    User,
}

/// Meal slot for a meal plan entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealPlanType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Side,
}

/// Checked state of a shopping list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShoppingListItemStatus {
    Checked,
    Unchecked,
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    /// Wire value for the `orderDirection` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            OrderDirection::Asc => "asc",
            OrderDirection::Desc => "desc",
        }
    }
}
