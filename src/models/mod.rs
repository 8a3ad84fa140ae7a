//! Data models for the Mealie API.
//!
//! This is the marshalling core of the SDK: typed entity models, their
//! lightweight list-view summaries, create/update request payloads, and
//! query filters, all converting to and from the API's JSON.
//!
//! ## Round-trip fidelity
//!
//! Every model keeps a `#[serde(flatten)]` `additional_fields` bag, so keys
//! the client does not model explicitly are never dropped: deserializing a
//! server payload and serializing it back reproduces every key. See
//! [`base::JsonModel`] for the full/sparse serialization modes.
//!
//! ## Modules
//!
//! - [`convert`] - primitive wire-format converters (dates, durations)
//! - [`base`] - the shared serialization contract and [`base::RequestBody`]
//! - [`common`] - shared enumerations
//! - [`recipe`], [`user`], [`group`], [`meal_plan`], [`shopping_list`] -
//!   per-family entity, summary, request, and filter models

pub mod base;
pub mod common;
pub mod convert;
pub mod group;
pub mod meal_plan;
pub mod recipe;
pub mod shopping_list;
pub mod user;

pub use base::{JsonModel, RequestBody};
pub use common::{MealPlanType, OrderDirection, ShoppingListItemStatus, UserRole};
pub use convert::{convert_date, convert_datetime, parse_duration, safe_get, strip_nulls};
pub use group::{Group, GroupCreateRequest, GroupSummary, GroupUpdateRequest};
pub use meal_plan::{
    MealPlan, MealPlanCreateRequest, MealPlanEntry, MealPlanEntryCreateRequest, MealPlanFilter,
    MealPlanUpdateRequest,
};
pub use recipe::{
    BulkRecipeExportRequest, Nutrition, Recipe, RecipeAsset, RecipeCategory, RecipeCreateRequest,
    RecipeFilter, RecipeImportRequest, RecipeIngredient, RecipeInstruction, RecipeSettings,
    RecipeSummary, RecipeTag, RecipeTool, RecipeUpdateRequest,
};
pub use shopping_list::{
    ShoppingList, ShoppingListCreateRequest, ShoppingListFilter, ShoppingListItem,
    ShoppingListItemCreateRequest, ShoppingListItemUpdateRequest, ShoppingListSummary,
    ShoppingListUpdateRequest,
};
pub use user::{
    User, UserCreateRequest, UserFilter, UserPasswordChangeRequest, UserPasswordResetRequest,
    UserSummary, UserUpdateRequest,
};
