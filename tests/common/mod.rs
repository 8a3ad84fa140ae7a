//! Shared test harness: a scripted mock transport standing in for the HTTP
//! collaborator, plus canned server payloads.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use mealie_client::{HttpClient, MealieError};

/// One request observed by the mock, in the shape managers hand to the
/// transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

/// Scripted [`HttpClient`]: responses are popped in FIFO order, every request
/// is recorded for assertion. An exhausted script answers `Value::Null`.
pub struct MockHttpClient {
    responses: Mutex<VecDeque<Result<Value, MealieError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockHttpClient {
    pub fn new() -> Arc<Self> {
        Arc::new(MockHttpClient {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn push_ok(&self, value: Value) {
        self.responses.lock().unwrap().push_back(Ok(value));
    }

    pub fn push_err(&self, err: MealieError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    /// Shorthand for a transport error carrying an HTTP status.
    pub fn push_status(&self, status_code: u16, message: &str) {
        self.push_err(MealieError::Api {
            status_code,
            message: message.to_string(),
        });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn record(
        &self,
        method: &'static str,
        path: &str,
        params: &[(String, String)],
        body: Option<Value>,
    ) -> Result<Value, MealieError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            method,
            path: path.to_string(),
            params: params.to_vec(),
            body,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    fn base_url(&self) -> &str {
        "http://mealie.test"
    }

    async fn get(&self, path: &str, params: &[(String, String)]) -> Result<Value, MealieError> {
        self.record("GET", path, params, None)
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<Value, MealieError> {
        self.record("POST", path, &[], body)
    }

    async fn put(&self, path: &str, body: Option<Value>) -> Result<Value, MealieError> {
        self.record("PUT", path, &[], body)
    }

    async fn put_multipart(
        &self,
        path: &str,
        field: &str,
        file_name: String,
        bytes: Vec<u8>,
        mime: &str,
        params: &[(String, String)],
    ) -> Result<Value, MealieError> {
        let body = json!({
            "field": field,
            "file_name": file_name,
            "bytes": bytes.len(),
            "mime": mime,
        });
        self.record("PUT_MULTIPART", path, params, Some(body))
    }

    async fn delete(&self, path: &str) -> Result<Value, MealieError> {
        self.record("DELETE", path, &[], None)
    }
}

/// A full recipe payload as the server returns it, including a key the
/// client does not model (`magicField`).
pub fn recipe_json(slug: &str, name: &str) -> Value {
    json!({
        "id": "r-1",
        "user_id": "u-1",
        "group_id": "g-1",
        "name": name,
        "slug": slug,
        "description": "A test recipe",
        "recipe_yield": "4 servings",
        "recipe_ingredient": [
            {"note": "2 cups flour", "quantity": 2.0, "unit": null, "food": null},
            {"note": "1 cup sugar", "quantity": 1.0, "unit": null, "food": null}
        ],
        "recipe_instructions": [
            {"text": "Mix everything"},
            {"text": "Bake it"}
        ],
        "prep_time": "PT15M",
        "cook_time": "PT30M",
        "total_time": "PT1H30M",
        "recipe_category": [{"name": "Dessert", "slug": "dessert"}],
        "tags": [{"name": "baking", "slug": "baking"}],
        "tools": [],
        "nutrition": {"calories": "350", "protein_content": 12.5},
        "settings": {"public": true, "disable_amount": false},
        "rating": 4.5,
        "date_added": "2023-06-01T10:00:00Z",
        "date_updated": "2023-06-02T10:00:00",
        "extras": {"source": "grandma"},
        "magicField": "kept"
    })
}

pub fn recipe_summary_json(slug: &str, name: &str) -> Value {
    json!({
        "id": format!("r-{slug}"),
        "name": name,
        "slug": slug,
        "image": null,
        "description": "summary",
        "rating": 4.0
    })
}

pub fn user_json(username: &str, admin: bool) -> Value {
    json!({
        "id": "u-1",
        "username": username,
        "email": format!("{username}@example.com"),
        "full_name": "Test User",
        "admin": admin,
        "group": "Home",
        "group_id": "g-1",
        "favorite_recipes": [],
        "can_invite": false,
        "can_manage": admin,
        "can_organize": admin,
        "advanced": false,
        "auth_method": "Mealie",
        "login_attemps": 0,
        "locked_at": null,
        "created_at": "2023-01-15T08:00:00Z",
        "updated_at": "2023-01-16T08:00:00Z"
    })
}

pub fn group_json(name: &str) -> Value {
    json!({
        "id": "g-1",
        "name": name,
        "slug": name.to_lowercase(),
        "categories": [{"name": "Dinner"}, {"name": "Dessert"}],
        "webhooks": [],
        "users": [{"username": "alice"}, {"username": "bob"}, {"username": "carol"}],
        "preferences": {"private_group": true},
        "created_at": "2023-01-01T00:00:00Z"
    })
}

pub fn meal_plan_json(plan_id: &str) -> Value {
    json!({
        "id": plan_id,
        "group_id": "g-1",
        "user_id": "u-1",
        "start_date": "2023-07-03",
        "end_date": "2023-07-09",
        "entries": [
            {
                "id": "e-1",
                "date": "2023-07-03",
                "entry_type": "dinner",
                "title": "Custom",
                "text": null,
                "recipe_id": "r-1",
                "recipe": {"name": "Tacos", "slug": "tacos"}
            },
            {
                "id": "e-2",
                "date": "2023-07-04",
                "entry_type": "breakfast",
                "title": "Oatmeal",
                "text": "with berries",
                "recipe_id": null,
                "recipe": null
            }
        ],
        "created_at": "2023-07-01T09:00:00Z"
    })
}

pub fn shopping_list_json(list_id: &str, checked: &[bool]) -> Value {
    let items: Vec<Value> = checked
        .iter()
        .enumerate()
        .map(|(i, &is_checked)| {
            json!({
                "id": format!("i-{i}"),
                "shopping_list_id": list_id,
                "checked": is_checked,
                "position": i,
                "is_food": false,
                "note": format!("item {i}"),
                "quantity": null,
                "unit": null,
                "food": null,
                "label": null,
                "recipe_references": []
            })
        })
        .collect();

    json!({
        "id": list_id,
        "group_id": "g-1",
        "user_id": "u-1",
        "name": "Groceries",
        "items": items,
        "recipe_references": [],
        "created_at": "2023-08-01T12:00:00Z"
    })
}
