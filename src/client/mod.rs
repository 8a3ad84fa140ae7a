//! # Mealie HTTP transport
//!
//! Authentication, the [`HttpClient`] collaborator trait, its reqwest-backed
//! implementation, and the [`MealieClient`] facade that wires the per-resource
//! managers together.
//!
//! ## Modules
//!
//! - [`auth`] - token storage and the username/password exchange
//! - [`http`] - the transport trait and production implementation
//! - [`client`] - the top-level [`MealieClient`]
//!
//! ## Quick Start
//!
//! ```no_run
//! use mealie_client::MealieClient;
//!
//! # async fn example() -> mealie_client::Result<()> {
//! let client = MealieClient::new("https://mealie.example.com");
//! client.authenticate("username", "password").await?;
//!
//! let me = client.users.get_current().await?;
//! println!("Logged in as {}", me.display_name());
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod http;

pub use client::MealieClient;
pub use http::{HttpClient, MealieHttpClient};
