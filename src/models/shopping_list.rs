//! Shopping list models and the shopping lists query filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::{OrderDirection, ShoppingListItemStatus};
use crate::models::convert::{flexible_datetime, null_to_default};

/// A single shopping list item.
///
/// An item is either structured (quantity/unit/food, `is_food` set) or
/// free-text via `note`. `position` is the explicit display order and must
/// stay consistent with the item's index in the parent list on write-back;
/// see [`ShoppingList::sync_positions`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub shopping_list_id: Option<String>,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub position: u64,
    #[serde(default)]
    pub is_food: bool,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    /// Back-links to the recipes this item was generated from.
    #[serde(default, deserialize_with = "null_to_default")]
    pub recipe_references: Vec<Value>,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl ShoppingListItem {
    /// Status derived from the checked flag.
    pub fn status(&self) -> ShoppingListItemStatus {
        if self.checked {
            ShoppingListItemStatus::Checked
        } else {
            ShoppingListItemStatus::Unchecked
        }
    }

    /// Human-readable line: quantity, unit, and food (or label), with the
    /// note appended in parentheses.
    pub fn display_text(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(quantity) = self.quantity {
            if quantity != 0.0 {
                parts.push(quantity.to_string());
            }
        }
        if let Some(unit) = &self.unit {
            parts.push(unit.clone());
        }
        if let Some(food) = &self.food {
            parts.push(food.clone());
        } else if let Some(label) = &self.label {
            parts.push(label.clone());
        }

        let mut display = parts.join(" ");
        if let Some(note) = &self.note {
            if display.is_empty() {
                display = note.clone();
            } else {
                display.push_str(&format!(" ({note})"));
            }
        }

        display
    }

    /// Whether this item is linked back to any recipe.
    pub fn has_recipe_references(&self) -> bool {
        !self.recipe_references.is_empty()
    }
}

/// A complete shopping list with its items in display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub items: Vec<ShoppingListItem>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub recipe_references: Vec<Value>,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl ShoppingList {
    /// Total number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of checked items.
    pub fn checked_count(&self) -> usize {
        self.items.iter().filter(|i| i.checked).count()
    }

    /// Number of unchecked items.
    pub fn unchecked_count(&self) -> usize {
        self.items.iter().filter(|i| !i.checked).count()
    }

    /// Completion as a percentage in [0, 100]. An empty list is 0.0, not an
    /// error.
    pub fn completion_percentage(&self) -> f64 {
        let total = self.item_count();
        if total == 0 {
            return 0.0;
        }
        (self.checked_count() as f64 / total as f64) * 100.0
    }

    /// Items filtered by checked status.
    pub fn items_by_status(&self, status: ShoppingListItemStatus) -> Vec<&ShoppingListItem> {
        let want_checked = status == ShoppingListItemStatus::Checked;
        self.items
            .iter()
            .filter(|i| i.checked == want_checked)
            .collect()
    }

    /// Whether every item is checked. An empty list is not complete.
    pub fn is_complete(&self) -> bool {
        self.item_count() > 0 && self.unchecked_count() == 0
    }

    /// Rewrite each item's `position` to its sequence index so the explicit
    /// order field is monotonically consistent before write-back.
    pub fn sync_positions(&mut self) {
        for (index, item) in self.items.iter_mut().enumerate() {
            item.position = index as u64;
        }
    }
}

/// Payload for creating a shopping list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListCreateRequest {
    pub name: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub items: Vec<ShoppingListItemCreateRequest>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for updating a shopping list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub items: Option<Vec<ShoppingListItemUpdateRequest>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for adding an item to a shopping list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItemCreateRequest {
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub position: u64,
    #[serde(default)]
    pub is_food: bool,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for updating a shopping list item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItemUpdateRequest {
    #[serde(default)]
    pub checked: Option<bool>,
    #[serde(default)]
    pub position: Option<u64>,
    #[serde(default)]
    pub is_food: Option<bool>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub food: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Reduced shopping list projection used in list views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub item_count: u64,
    #[serde(default)]
    pub checked_count: u64,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl ShoppingListSummary {
    /// Completion as a percentage in [0, 100], 0.0 for an empty list.
    pub fn completion_percentage(&self) -> f64 {
        if self.item_count == 0 {
            return 0.0;
        }
        (self.checked_count as f64 / self.item_count as f64) * 100.0
    }

    /// Whether every item is checked. An empty list is not complete.
    pub fn is_complete(&self) -> bool {
        self.item_count > 0 && self.checked_count == self.item_count
    }
}

/// Query filter for shopping list listings.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListFilter {
    pub page: u32,
    pub per_page: u32,
    pub order_by: Option<String>,
    pub order_direction: OrderDirection,
    pub search: Option<String>,
}

impl Default for ShoppingListFilter {
    fn default() -> Self {
        ShoppingListFilter {
            page: 1,
            per_page: 50,
            order_by: None,
            order_direction: OrderDirection::Asc,
            search: None,
        }
    }
}

impl ShoppingListFilter {
    /// Translate to wire query parameters.
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

        params
    }
}
