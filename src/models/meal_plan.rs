//! Meal plan models and the meal plans query filter.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::common::MealPlanType;
use crate::models::convert::{flexible_date, flexible_datetime, null_to_default, safe_get};

/// A single scheduled meal, bound to one calendar date and meal type.
///
/// `recipe_id` is a weak reference: the recipe is looked up by id/slug, never
/// embedded as an owned child. The optional `recipe` mapping is join data the
/// server may include for display, kept opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, with = "flexible_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub entry_type: MealPlanType,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub recipe_id: Option<String>,
    #[serde(default)]
    pub recipe: Option<Value>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl MealPlanEntry {
    /// Whether this entry references a recipe.
    pub fn has_recipe(&self) -> bool {
        self.recipe_id.is_some()
    }

    /// Display title: the referenced recipe's name when the join payload
    /// carries one, otherwise the free-text title. Never both.
    pub fn display_title(&self) -> &str {
        if let Some(recipe) = &self.recipe {
            if let Some(name) = safe_get(recipe, "name").and_then(Value::as_str) {
                return name;
            }
        }
        self.title.as_deref().unwrap_or("")
    }
}

/// A meal plan spanning an inclusive date range.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlan {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default, with = "flexible_date")]
    pub start_date: Option<NaiveDate>,
    /// Last day covered by the plan, inclusive.
    #[serde(default, with = "flexible_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub entries: Vec<MealPlanEntry>,
    #[serde(default, with = "flexible_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl MealPlan {
    /// Total number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of entries referencing a recipe.
    pub fn recipe_count(&self) -> usize {
        self.entries.iter().filter(|e| e.has_recipe()).count()
    }

    /// All entries scheduled on a specific date.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&MealPlanEntry> {
        self.entries.iter().filter(|e| e.date == Some(date)).collect()
    }

    /// All entries of a specific meal type.
    pub fn entries_of_type(&self, entry_type: MealPlanType) -> Vec<&MealPlanEntry> {
        self.entries
            .iter()
            .filter(|e| e.entry_type == entry_type)
            .collect()
    }
}

/// Payload for creating a meal plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlanCreateRequest {
    #[serde(default, with = "flexible_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "flexible_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub entries: Vec<MealPlanEntryCreateRequest>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for updating a meal plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlanUpdateRequest {
    #[serde(default, with = "flexible_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, with = "flexible_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub entries: Option<Vec<MealPlanEntryCreateRequest>>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for a single entry inside a meal plan create/update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntryCreateRequest {
    #[serde(default, with = "flexible_date")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub entry_type: MealPlanType,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub recipe_id: Option<String>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Query filter for meal plan listings, with optional date-range bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub page: u32,
    pub per_page: u32,
}

impl Default for MealPlanFilter {
    fn default() -> Self {
        MealPlanFilter {
            start_date: None,
            end_date: None,
            page: 1,
            per_page: 50,
        }
    }
}

impl MealPlanFilter {
    /// Translate to wire query parameters (`startDate`/`endDate` camelCase,
    /// omitted when unset).
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("perPage".to_string(), self.per_page.to_string()),
        ];

        if let Some(start_date) = self.start_date {
            params.push(("startDate".to_string(), start_date.format("%Y-%m-%d").to_string()));
        }
        if let Some(end_date) = self.end_date {
            params.push(("endDate".to_string(), end_date.format("%Y-%m-%d").to_string()));
        }

        params
    }
}
