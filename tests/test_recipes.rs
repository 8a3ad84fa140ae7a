mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use common::MockHttpClient;
use mealie_client::endpoints::recipes::MAX_PER_PAGE;
use mealie_client::{
    MealieError, RecipeCreateRequest, RecipeFilter, RecipesManager, RequestBody,
};

#[tokio::test]
async fn test_get_all_reads_items_wrapper() {
    let mock = MockHttpClient::new();
    mock.push_ok(json!({
        "items": [
            common::recipe_summary_json("cake", "Cake"),
            common::recipe_summary_json("pie", "Pie")
        ],
        "total": 2,
        "page": 1
    }));

    let manager = RecipesManager::new(mock.clone());
    let recipes = manager.get_all(RecipeFilter::default()).await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].slug, "cake");
    assert_eq!(recipes[1].name, "Pie");

    let request = &mock.requests()[0];
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "recipes");
    assert!(request
        .params
        .contains(&("page".to_string(), "1".to_string())));
    assert!(request
        .params
        .contains(&("perPage".to_string(), "50".to_string())));
}

#[tokio::test]
async fn test_get_all_clamps_per_page() {
    let mock = MockHttpClient::new();
    mock.push_ok(json!({"items": []}));

    let manager = RecipesManager::new(mock.clone());
    let filter = RecipeFilter {
        per_page: 500,
        ..Default::default()
    };
    manager.get_all(filter).await.unwrap();

    let request = &mock.requests()[0];
    assert!(request
        .params
        .contains(&("perPage".to_string(), MAX_PER_PAGE.to_string())));
}

#[tokio::test]
async fn test_get_all_filter_params() {
    let mock = MockHttpClient::new();
    mock.push_ok(json!([]));

    let manager = RecipesManager::new(mock.clone());
    let filter = RecipeFilter {
        order_by: Some("name".to_string()),
        search: Some("chocolate".to_string()),
        categories: vec!["dessert".to_string()],
        tags: vec!["baking".to_string(), "quick".to_string()],
        ..Default::default()
    };
    manager.get_all(filter).await.unwrap();

    let params = &mock.requests()[0].params;
    assert!(params.contains(&("orderBy".to_string(), "name".to_string())));
    assert!(params.contains(&("orderDirection".to_string(), "asc".to_string())));
    assert!(params.contains(&("search".to_string(), "chocolate".to_string())));
    assert!(params.contains(&("categories".to_string(), "dessert".to_string())));
    assert!(params.contains(&("tags".to_string(), "baking".to_string())));
    assert!(params.contains(&("tags".to_string(), "quick".to_string())));
}

#[tokio::test]
async fn test_get_missing_recipe_is_not_found() {
    let mock = MockHttpClient::new();
    mock.push_status(404, "Not Found");

    let manager = RecipesManager::new(mock.clone());
    let err = manager.get("missing-slug").await.unwrap_err();

    match err {
        MealieError::NotFound {
            resource_type,
            resource_id,
        } => {
            assert_eq!(resource_type, "recipe");
            assert_eq!(resource_id, "missing-slug");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_errors_propagate_unchanged() {
    let mock = MockHttpClient::new();
    mock.push_status(500, "Internal Server Error");

    let manager = RecipesManager::new(mock.clone());
    let err = manager.get("cake").await.unwrap_err();

    assert!(matches!(
        err,
        MealieError::Api {
            status_code: 500,
            ..
        }
    ));
}

#[tokio::test]
async fn test_create_sends_sparse_payload() {
    let mock = MockHttpClient::new();
    mock.push_ok(common::recipe_json("cake", "Cake"));

    let manager = RecipesManager::new(mock.clone());
    let request = RecipeCreateRequest {
        name: "Cake".to_string(),
        description: None,
        ..Default::default()
    };
    let created = manager.create(RequestBody::Typed(request)).await.unwrap();
    assert_eq!(created.slug, "cake");

    let recorded = &mock.requests()[0];
    assert_eq!(recorded.method, "POST");
    assert_eq!(recorded.path, "recipes");
    let body = recorded.body.as_ref().unwrap();
    assert_eq!(body["name"], json!("Cake"));
    assert_eq!(body.get("description"), None);
}

#[tokio::test]
async fn test_create_accepts_raw_payload() {
    let mock = MockHttpClient::new();
    mock.push_ok(common::recipe_json("soup", "Soup"));

    let manager = RecipesManager::new(mock.clone());
    let created = manager
        .create(RequestBody::Raw(json!({
            "name": "Soup",
            "recipe_yield": "2 bowls",
            "nonsense_key": null
        })))
        .await
        .unwrap();
    assert_eq!(created.name, "Soup");

    let body = mock.requests()[0].body.clone().unwrap();
    assert_eq!(body["recipe_yield"], json!("2 bowls"));
    assert_eq!(body.get("nonsense_key"), None);
}

#[tokio::test]
async fn test_duplicate_strips_server_fields_and_renames() {
    let mock = MockHttpClient::new();
    mock.push_ok(common::recipe_json("cake", "Cake"));
    mock.push_ok(common::recipe_json("cake-copy", "Cake (Copy)"));

    let manager = RecipesManager::new(mock.clone());
    let copy = manager.duplicate("cake", None).await.unwrap();
    assert_eq!(copy.name, "Cake (Copy)");

    let requests = mock.requests();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[1].method, "POST");

    let body = requests[1].body.as_ref().unwrap();
    assert_eq!(body["name"], json!("Cake (Copy)"));
    for field in ["id", "slug", "date_added", "date_updated", "user_id"] {
        assert_eq!(body.get(field), None, "field '{field}' should be stripped");
    }
    // Everything else carries over, unknown keys included.
    assert_eq!(body["magicField"], json!("kept"));
    assert_eq!(body["total_time"], json!("PT1H30M"));
}

#[tokio::test]
async fn test_duplicate_with_explicit_name() {
    let mock = MockHttpClient::new();
    mock.push_ok(common::recipe_json("cake", "Cake"));
    mock.push_ok(common::recipe_json("better-cake", "Better Cake"));

    let manager = RecipesManager::new(mock.clone());
    manager.duplicate("cake", Some("Better Cake")).await.unwrap();

    let body = mock.requests()[1].body.clone().unwrap();
    assert_eq!(body["name"], json!("Better Cake"));
}

#[tokio::test]
async fn test_import_from_url() {
    let mock = MockHttpClient::new();
    mock.push_ok(common::recipe_json("imported", "Imported"));

    let manager = RecipesManager::new(mock.clone());
    let recipe = manager
        .import_from_url("https://example.com/cake")
        .await
        .unwrap();
    assert_eq!(recipe.slug, "imported");

    let recorded = &mock.requests()[0];
    assert_eq!(recorded.path, "recipes/create-url");
    let body = recorded.body.as_ref().unwrap();
    assert_eq!(body["url"], json!("https://example.com/cake"));
    assert_eq!(body["include_tags"], json!(true));
}

#[tokio::test]
async fn test_get_random_normalizes_single_object() {
    let mock = MockHttpClient::new();
    mock.push_ok(common::recipe_summary_json("surprise", "Surprise"));

    let manager = RecipesManager::new(mock.clone());
    let recipes = manager.get_random(1).await.unwrap();

    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0].name, "Surprise");
    assert_eq!(
        mock.requests()[0].params,
        vec![("limit".to_string(), "1".to_string())]
    );
}

#[tokio::test]
async fn test_delete_recipe() {
    let mock = MockHttpClient::new();
    mock.push_ok(json!(null));

    let manager = RecipesManager::new(mock.clone());
    assert!(manager.delete("cake").await.unwrap());
    assert_eq!(mock.requests()[0].method, "DELETE");
    assert_eq!(mock.requests()[0].path, "recipes/cake");
}

#[tokio::test]
async fn test_search_passes_query_and_limit() {
    let mock = MockHttpClient::new();
    mock.push_ok(json!({"items": []}));

    let manager = RecipesManager::new(mock.clone());
    manager.search("tacos al pastor", 10).await.unwrap();

    let params = &mock.requests()[0].params;
    assert!(params.contains(&("search".to_string(), "tacos al pastor".to_string())));
    assert!(params.contains(&("perPage".to_string(), "10".to_string())));
}

#[tokio::test]
async fn test_image_url_is_escaped() {
    let mock = MockHttpClient::new();
    let manager = RecipesManager::new(mock);

    assert_eq!(
        manager.image_url("chocolate cake", "webp"),
        "http://mealie.test/api/recipes/chocolate%20cake/image?extension=webp"
    );
}

#[tokio::test]
async fn test_upload_image_sends_multipart() {
    let dir = std::env::temp_dir().join("mealie-client-test-upload");
    tokio::fs::create_dir_all(&dir).await.unwrap();
    let path = dir.join("cake.webp");
    tokio::fs::write(&path, b"not really an image").await.unwrap();

    let mock = MockHttpClient::new();
    mock.push_ok(json!({"message": "ok"}));

    let manager = RecipesManager::new(mock.clone());
    manager.upload_image("cake", &path, "webp").await.unwrap();

    let recorded = &mock.requests()[0];
    assert_eq!(recorded.method, "PUT_MULTIPART");
    assert_eq!(recorded.path, "recipes/cake/image");
    assert_eq!(
        recorded.params,
        vec![("extension".to_string(), "webp".to_string())]
    );
    let body = recorded.body.as_ref().unwrap();
    assert_eq!(body["field"], json!("image"));
    assert_eq!(body["file_name"], json!("cake.webp"));
    assert_eq!(body["mime"], json!("image/webp"));
}

#[tokio::test]
async fn test_upload_image_missing_file_is_io_error() {
    let mock = MockHttpClient::new();
    let manager = RecipesManager::new(mock.clone());

    let err = manager
        .upload_image("cake", "/nonexistent/cake.webp", "webp")
        .await
        .unwrap_err();
    assert!(matches!(err, MealieError::Io(_)));
    // The transport was never touched.
    assert!(mock.requests().is_empty());
}
