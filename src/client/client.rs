//! The top-level client facade.

use std::env;
use std::sync::Arc;

use crate::client::http::{HttpClient, MealieHttpClient};
use crate::endpoints::{
    GroupsManager, MealPlansManager, RecipesManager, ShoppingListsManager, UsersManager,
};
use crate::error::{MealieError, Result};

/// Client for a Mealie server, exposing one manager per resource family.
///
/// ```no_run
/// use mealie_client::MealieClient;
///
/// # async fn example() -> mealie_client::Result<()> {
/// let client = MealieClient::with_token("https://mealie.example.com", "api-token");
///
/// let recipes = client.recipes.search("pasta", 10).await?;
/// println!("Found {} recipes", recipes.len());
/// # Ok(())
/// # }
/// ```
pub struct MealieClient {
    http: Arc<MealieHttpClient>,
    pub recipes: RecipesManager,
    pub users: UsersManager,
    pub groups: GroupsManager,
    pub meal_plans: MealPlansManager,
    pub shopping_lists: ShoppingListsManager,
}

impl MealieClient {
    /// Create an unauthenticated client; call
    /// [`authenticate`](MealieClient::authenticate) or
    /// [`set_token`](MealieClient::set_token) before making requests.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_http(Arc::new(MealieHttpClient::new(base_url)))
    }

    /// Create a client with a pre-issued API token.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::from_http(Arc::new(MealieHttpClient::with_token(base_url, token)))
    }

    /// Create a client from `MEALIE_BASE_URL` and (optionally)
    /// `MEALIE_API_TOKEN` environment variables.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("MEALIE_BASE_URL")
            .map_err(|_| MealieError::Config("MEALIE_BASE_URL is not set".to_string()))?;
        match env::var("MEALIE_API_TOKEN") {
            Ok(token) => Ok(Self::with_token(base_url, token)),
            Err(_) => Ok(Self::new(base_url)),
        }
    }

    fn from_http(http: Arc<MealieHttpClient>) -> Self {
        let transport: Arc<dyn HttpClient> = http.clone();
        MealieClient {
            recipes: RecipesManager::new(transport.clone()),
            users: UsersManager::new(transport.clone()),
            groups: GroupsManager::new(transport.clone()),
            meal_plans: MealPlansManager::new(transport.clone()),
            shopping_lists: ShoppingListsManager::new(transport),
            http,
        }
    }

    /// Exchange username/password for an access token.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<()> {
        self.http.authenticate(username, password).await
    }

    /// Install a pre-issued API token.
    pub fn set_token(&self, token: impl Into<String>) {
        self.http.set_token(token.into());
    }

    pub fn is_authenticated(&self) -> bool {
        self.http.is_authenticated()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}
