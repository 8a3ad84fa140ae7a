mod common;

use pretty_assertions::assert_eq;
use serde_json::json;

use common::MockHttpClient;
use mealie_client::{GroupCreateRequest, GroupsManager, MealieError, RequestBody};

#[tokio::test]
async fn test_get_all_accepts_bare_array() {
    let mock = MockHttpClient::new();
    mock.push_ok(json!([
        {"id": "g-1", "name": "Home", "user_count": 3},
        {"id": "g-2", "name": "Work", "user_count": 12}
    ]));

    let manager = GroupsManager::new(mock.clone());
    let groups = manager.get_all().await.unwrap();

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "Home");
    assert_eq!(groups[1].user_count, 12);
    assert_eq!(mock.requests()[0].path, "groups");
}

#[tokio::test]
async fn test_get_group_with_nested_collections() {
    let mock = MockHttpClient::new();
    mock.push_ok(common::group_json("Home"));

    let manager = GroupsManager::new(mock.clone());
    let group = manager.get("g-1").await.unwrap();

    assert_eq!(group.name, "Home");
    assert_eq!(group.user_count(), 3);
    assert_eq!(group.category_count(), 2);
    assert_eq!(group.preferences["private_group"], json!(true));
}

#[tokio::test]
async fn test_get_missing_group_is_not_found() {
    let mock = MockHttpClient::new();
    mock.push_status(404, "Not Found");

    let manager = GroupsManager::new(mock.clone());
    let err = manager.get("g-404").await.unwrap_err();

    match err {
        MealieError::NotFound {
            resource_type,
            resource_id,
        } => {
            assert_eq!(resource_type, "group");
            assert_eq!(resource_id, "g-404");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_create_rejection_propagates() {
    let mock = MockHttpClient::new();
    mock.push_err(MealieError::Authentication {
        status_code: Some(403),
        message: "admin required".to_string(),
    });

    let manager = GroupsManager::new(mock.clone());
    let request = GroupCreateRequest {
        name: "New Group".to_string(),
        ..Default::default()
    };
    let err = manager.create(RequestBody::Typed(request)).await.unwrap_err();

    assert!(err.is_auth_error());
    assert_eq!(err.status_code(), Some(403));
}

#[tokio::test]
async fn test_delete_group() {
    let mock = MockHttpClient::new();
    mock.push_ok(json!(null));

    let manager = GroupsManager::new(mock.clone());
    assert!(manager.delete("g-1").await.unwrap());
    assert_eq!(mock.requests()[0].method, "DELETE");
    assert_eq!(mock.requests()[0].path, "groups/g-1");
}
