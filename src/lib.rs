//! # Mealie Client
//!
//! Typed async client SDK for the [Mealie](https://mealie.io) recipe manager
//! REST API. It consists of three layers:
//!
//! ## Models
//!
//! The [`models`] module is the marshalling core: typed entities (recipes,
//! users, groups, meal plans, shopping lists), list-view summaries, request
//! payloads, and query filters. Unknown server-sent fields are retained and
//! round-trip losslessly.
//!
//! ## Transport
//!
//! The [`client`] module handles authentication and HTTP, behind the
//! [`client::HttpClient`] trait so the managers can be exercised without a
//! network.
//!
//! ## Managers
//!
//! The [`endpoints`] module exposes one manager per resource family, wired
//! together by [`MealieClient`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealie_client::{MealieClient, RecipeFilter};
//!
//! # async fn example() -> mealie_client::Result<()> {
//! let client = MealieClient::with_token("https://mealie.example.com", "api-token");
//!
//! let recipes = client.recipes.get_all(RecipeFilter::default()).await?;
//! for recipe in &recipes {
//!     println!("{} ({})", recipe.name, recipe.slug);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::{HttpClient, MealieClient, MealieHttpClient};
pub use endpoints::{
    GroupsManager, MealPlansManager, RecipesManager, ShoppingListsManager, UsersManager,
};
pub use error::{MealieError, Result};
pub use models::*;
