//! Recipe operations: CRUD, search and filter conveniences, URL import,
//! duplication, and image management.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::client::http::HttpClient;
use crate::endpoints::{decode_items, map_not_found};
use crate::error::Result;
use crate::models::base::{JsonModel, RequestBody};
use crate::models::convert::strip_nulls;
use crate::models::recipe::{
    Recipe, RecipeCreateRequest, RecipeFilter, RecipeImportRequest, RecipeSummary,
    RecipeUpdateRequest,
};

/// Server-enforced ceiling on `perPage`; larger values are clamped before
/// the request is built.
pub const MAX_PER_PAGE: u32 = 100;

/// Manager for the `recipes` resource family.
pub struct RecipesManager {
    http: Arc<dyn HttpClient>,
}

impl RecipesManager {
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        RecipesManager { http }
    }

    /// List recipes with filtering and pagination.
    pub async fn get_all(&self, mut filter: RecipeFilter) -> Result<Vec<RecipeSummary>> {
        filter.per_page = filter.per_page.min(MAX_PER_PAGE);
        let response = self.http.get("recipes", &filter.to_params()).await?;
        decode_items(response)
    }

    /// Fetch one recipe by id or slug.
    pub async fn get(&self, id_or_slug: &str) -> Result<Recipe> {
        let response = self
            .http
            .get(&format!("recipes/{}", id_or_slug), &[])
            .await
            .map_err(|e| map_not_found(e, "recipe", id_or_slug))?;
        Recipe::from_value(response)
    }

    /// Create a recipe. The payload is sent sparse: null-valued keys are
    /// stripped so unset optional fields read as absent, not as an explicit
    /// clear.
    pub async fn create(&self, data: RequestBody<RecipeCreateRequest>) -> Result<Recipe> {
        let body = strip_nulls(data.into_value()?);
        let response = self.http.post("recipes", Some(body)).await?;
        Recipe::from_value(response)
    }

    /// Update a recipe by id or slug. Sparse payload, like
    /// [`create`](RecipesManager::create).
    pub async fn update(
        &self,
        id_or_slug: &str,
        data: RequestBody<RecipeUpdateRequest>,
    ) -> Result<Recipe> {
        let body = strip_nulls(data.into_value()?);
        let response = self
            .http
            .put(&format!("recipes/{}", id_or_slug), Some(body))
            .await
            .map_err(|e| map_not_found(e, "recipe", id_or_slug))?;
        Recipe::from_value(response)
    }

    /// Delete a recipe by id or slug.
    pub async fn delete(&self, id_or_slug: &str) -> Result<bool> {
        self.http
            .delete(&format!("recipes/{}", id_or_slug))
            .await
            .map_err(|e| map_not_found(e, "recipe", id_or_slug))?;
        Ok(true)
    }

    /// Search recipes by name, description, or ingredients.
    pub async fn search(&self, query: &str, limit: u32) -> Result<Vec<RecipeSummary>> {
        self.get_all(RecipeFilter {
            search: Some(query.to_string()),
            per_page: limit,
            ..Default::default()
        })
        .await
    }

    /// List recipes belonging to a category (name or slug).
    pub async fn get_by_category(&self, category: &str, limit: u32) -> Result<Vec<RecipeSummary>> {
        self.get_all(RecipeFilter {
            categories: vec![category.to_string()],
            per_page: limit,
            ..Default::default()
        })
        .await
    }

    /// List recipes carrying a tag (name or slug).
    pub async fn get_by_tag(&self, tag: &str, limit: u32) -> Result<Vec<RecipeSummary>> {
        self.get_all(RecipeFilter {
            tags: vec![tag.to_string()],
            per_page: limit,
            ..Default::default()
        })
        .await
    }

    /// Import a recipe by scraping a source URL.
    pub async fn import_from_url(&self, url: &str) -> Result<Recipe> {
        tracing::debug!("Importing recipe from {}", url);
        let request = RecipeImportRequest::new(url);
        let response = self
            .http
            .post("recipes/create-url", Some(request.to_value()?))
            .await?;
        Recipe::from_value(response)
    }

    /// Fetch random recipes.
    pub async fn get_random(&self, limit: u32) -> Result<Vec<RecipeSummary>> {
        let response = self
            .http
            .get(
                "recipes/random",
                &[("limit".to_string(), limit.to_string())],
            )
            .await?;
        decode_items(response)
    }

    /// Duplicate a recipe: fetch the source, drop its server-assigned
    /// fields, optionally rename (default: " (Copy)" suffix), and create.
    pub async fn duplicate(&self, id_or_slug: &str, new_name: Option<&str>) -> Result<Recipe> {
        let original = self.get(id_or_slug).await?;

        let mut data = original.to_value()?;
        if let Some(map) = data.as_object_mut() {
            for field in ["id", "slug", "date_added", "date_updated", "user_id"] {
                map.remove(field);
            }
            let name = match new_name {
                Some(name) => name.to_string(),
                None => format!("{} (Copy)", original.name),
            };
            map.insert("name".to_string(), Value::String(name));
        }

        self.create(RequestBody::Raw(data)).await
    }

    /// URL for a recipe's image, suitable for direct fetching.
    pub fn image_url(&self, id_or_slug: &str, extension: &str) -> String {
        format!(
            "{}/api/recipes/{}/image?extension={}",
            self.http.base_url(),
            urlencoding::encode(id_or_slug),
            urlencoding::encode(extension)
        )
    }

    /// Upload an image for a recipe as a multipart field. The file handle is
    /// scoped to the read and closed before the request goes out, on every
    /// path.
    pub async fn upload_image(
        &self,
        id_or_slug: &str,
        image_path: impl AsRef<Path>,
        extension: &str,
    ) -> Result<Value> {
        let path = image_path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("image.{}", extension));
        let bytes = tokio::fs::read(path).await?;

        self.http
            .put_multipart(
                &format!("recipes/{}/image", id_or_slug),
                "image",
                file_name,
                bytes,
                mime_for_extension(extension),
                &[("extension".to_string(), extension.to_string())],
            )
            .await
            .map_err(|e| map_not_found(e, "recipe", id_or_slug))
    }

    /// Delete a recipe's image.
    pub async fn delete_image(&self, id_or_slug: &str) -> Result<bool> {
        self.http
            .delete(&format!("recipes/{}/image", id_or_slug))
            .await
            .map_err(|e| map_not_found(e, "recipe", id_or_slug))?;
        Ok(true)
    }
}

fn mime_for_extension(extension: &str) -> &'static str {
    match extension {
        "webp" => "image/webp",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}
