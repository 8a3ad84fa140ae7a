//! Recipe models: the full entity, its nested children, the list-view
//! summary, and the request/filter shapes for the recipes endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::models::common::OrderDirection;
use crate::models::convert::{
    flexible_datetime, lenient_f64, null_to_default, parse_duration,
};

fn default_true() -> bool {
    true
}

/// Nutrition facts for a recipe. Every field is optional; absence means the
/// value is unknown, not zero. Some endpoints send these as numeric strings,
/// which the lenient codec accepts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default, with = "lenient_f64")]
    pub calories: Option<f64>,
    #[serde(default, with = "lenient_f64")]
    pub fat_content: Option<f64>,
    #[serde(default, with = "lenient_f64")]
    pub protein_content: Option<f64>,
    #[serde(default, with = "lenient_f64")]
    pub carbohydrate_content: Option<f64>,
    #[serde(default, with = "lenient_f64")]
    pub fiber_content: Option<f64>,
    #[serde(default, with = "lenient_f64")]
    pub sodium_content: Option<f64>,
    #[serde(default, with = "lenient_f64")]
    pub sugar_content: Option<f64>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// One ingredient line. `unit` and `food` are kept as opaque mappings: the
/// server returns either a full reference object or null depending on whether
/// the ingredient was parsed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<Value>,
    #[serde(default)]
    pub food: Option<Value>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub is_food: bool,
    #[serde(default = "default_true")]
    pub disable_amount: bool,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// One instruction step. Order within the recipe's instruction list is
/// significant: steps replay in sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeInstruction {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "null_to_default")]
    pub ingredient_references: Vec<Value>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// A file attached to a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeAsset {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Per-recipe visibility and display flags, with the API's documented
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSettings {
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub show_nutrition: bool,
    #[serde(default)]
    pub show_assets: bool,
    #[serde(default)]
    pub landscape_view: bool,
    #[serde(default)]
    pub disable_comments: bool,
    #[serde(default = "default_true")]
    pub disable_amount: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl Default for RecipeSettings {
    fn default() -> Self {
        RecipeSettings {
            public: false,
            show_nutrition: false,
            show_assets: false,
            landscape_view: false,
            disable_comments: false,
            disable_amount: true,
            locked: false,
            additional_fields: Map::new(),
        }
    }
}

/// A category assigned to a recipe (name + slug pair).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeCategory {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// A tag assigned to a recipe (name + slug pair).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeTag {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// A kitchen tool required by a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeTool {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub on_hand: bool,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Complete recipe with all fields and metadata.
///
/// Timing fields hold their ISO 8601 duration strings as sent by the server
/// (`PT30M`, `PT1H30M`); the `*_minutes` accessors parse lazily on each call.
/// The `extras` map is the server's own free-form bucket and round-trips
/// verbatim, separately from the flattened unknown-field bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub name: String,
    /// URL-safe alternate key, non-empty on server-returned recipes and
    /// usable interchangeably with `id` for lookups and deletes.
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub recipe_yield: Option<String>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub recipe_ingredient: Vec<RecipeIngredient>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub recipe_instructions: Vec<RecipeInstruction>,

    #[serde(default)]
    pub prep_time: Option<String>,
    #[serde(default)]
    pub cook_time: Option<String>,
    #[serde(default)]
    pub perform_time: Option<String>,
    #[serde(default)]
    pub total_time: Option<String>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub recipe_category: Vec<RecipeCategory>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub tags: Vec<RecipeTag>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub tools: Vec<RecipeTool>,

    #[serde(default)]
    pub nutrition: Option<Nutrition>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub assets: Vec<RecipeAsset>,
    #[serde(default, deserialize_with = "null_to_default")]
    pub settings: RecipeSettings,
    #[serde(default)]
    pub org_url: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub recipe_yield_quantity: Option<f64>,
    #[serde(default)]
    pub recipe_yield_unit: Option<String>,

    #[serde(default, with = "flexible_datetime")]
    pub date_added: Option<DateTime<Utc>>,
    #[serde(default, with = "flexible_datetime")]
    pub date_updated: Option<DateTime<Utc>>,

    #[serde(default, deserialize_with = "null_to_default")]
    pub extras: Map<String, Value>,

    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

impl Recipe {
    /// Total time in minutes, parsed from the ISO 8601 duration string.
    pub fn total_time_minutes(&self) -> Result<Option<i64>> {
        parse_duration(self.total_time.as_deref())
    }

    /// Preparation time in minutes.
    pub fn prep_time_minutes(&self) -> Result<Option<i64>> {
        parse_duration(self.prep_time.as_deref())
    }

    /// Cooking time in minutes.
    pub fn cook_time_minutes(&self) -> Result<Option<i64>> {
        parse_duration(self.cook_time.as_deref())
    }

    /// Active/perform time in minutes.
    pub fn perform_time_minutes(&self) -> Result<Option<i64>> {
        parse_duration(self.perform_time.as_deref())
    }

    /// Whether the recipe is publicly visible.
    pub fn is_public(&self) -> bool {
        self.settings.public
    }

    /// Names of all assigned categories.
    pub fn category_names(&self) -> Vec<&str> {
        self.recipe_category.iter().map(|c| c.name.as_str()).collect()
    }

    /// Names of all assigned tags.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().map(|t| t.name.as_str()).collect()
    }

    /// Names of all required tools.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    /// Number of ingredient lines.
    pub fn ingredient_count(&self) -> usize {
        self.recipe_ingredient.len()
    }

    /// Number of instruction steps.
    pub fn instruction_count(&self) -> usize {
        self.recipe_instructions.len()
    }
}

/// Reduced recipe projection used in list views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for creating a recipe. Additional write-accepted fields (timing,
/// ingredients, tags, ...) go through the flattened bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeCreateRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for updating a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeUpdateRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(flatten)]
    pub additional_fields: Map<String, Value>,
}

/// Payload for importing a recipe from a source URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeImportRequest {
    pub url: String,
    #[serde(default = "default_true")]
    pub include_tags: bool,
}

impl RecipeImportRequest {
    pub fn new(url: impl Into<String>) -> Self {
        RecipeImportRequest {
            url: url.into(),
            include_tags: true,
        }
    }
}

/// Payload for exporting several recipes at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkRecipeExportRequest {
    pub recipes: Vec<String>,
    pub export_type: String,
}

impl Default for BulkRecipeExportRequest {
    fn default() -> Self {
        BulkRecipeExportRequest {
            recipes: Vec::new(),
            export_type: "json".to_string(),
        }
    }
}

/// Query filter for recipe listings.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeFilter {
    pub page: u32,
    pub per_page: u32,
    pub order_by: Option<String>,
    pub order_direction: OrderDirection,
    pub search: Option<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub tools: Vec<String>,
}

impl Default for RecipeFilter {
    fn default() -> Self {
        RecipeFilter {
            page: 1,
            per_page: 50,
            order_by: None,
            order_direction: OrderDirection::Asc,
            search: None,
            categories: Vec::new(),
            tags: Vec::new(),
            tools: Vec::new(),
        }
    }
}

impl RecipeFilter {
    /// Translate to wire query parameters. Internal names are snake_case;
    /// the API expects camelCase. Pagination is always sent; unset optional
    /// fields are omitted entirely, and `orderDirection` only accompanies an
    /// explicit `orderBy`.
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
        for category in &self.categories {
            params.push(("categories".to_string(), category.clone()));
        }
        for tag in &self.tags {
            params.push(("tags".to_string(), tag.clone()));
        }
        for tool in &self.tools {
            params.push(("tools".to_string(), tool.clone()));
        }

        params
    }
}
