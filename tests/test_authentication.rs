use pretty_assertions::assert_eq;

use mealie_client::client::auth::MealieAuth;
use mealie_client::{MealieClient, MealieError};

#[test]
fn test_with_token_is_authenticated() {
    let client = MealieClient::with_token("https://mealie.example.com", "api-token");
    assert!(client.is_authenticated());
    assert_eq!(client.base_url(), "https://mealie.example.com");
}

#[test]
fn test_new_client_starts_unauthenticated() {
    let client = MealieClient::new("https://mealie.example.com");
    assert!(!client.is_authenticated());

    client.set_token("late-token");
    assert!(client.is_authenticated());
}

#[test]
fn test_trailing_slash_is_trimmed() {
    let client = MealieClient::with_token("https://mealie.example.com/", "api-token");
    assert_eq!(client.base_url(), "https://mealie.example.com");
}

#[test]
fn test_bearer_without_token_is_auth_error() {
    let auth = MealieAuth::new("https://mealie.example.com".to_string());
    let err = auth.bearer().unwrap_err();

    match err {
        MealieError::Authentication {
            status_code,
            message,
        } => {
            assert_eq!(status_code, None);
            assert!(message.contains("Not authenticated"));
        }
        other => panic!("expected Authentication, got {other:?}"),
    }
}

#[test]
fn test_bearer_formats_token() {
    let auth = MealieAuth::with_token(
        "https://mealie.example.com".to_string(),
        "api-token".to_string(),
    );
    assert_eq!(auth.bearer().unwrap(), "Bearer api-token");
}

// Environment manipulation is process-global, so every from_env case lives
// in this single test.
#[test]
fn test_from_env() {
    std::env::remove_var("MEALIE_BASE_URL");
    std::env::remove_var("MEALIE_API_TOKEN");

    let Err(err) = MealieClient::from_env() else {
        panic!("expected a configuration error when MEALIE_BASE_URL is unset");
    };
    assert!(matches!(err, MealieError::Config(_)));

    std::env::set_var("MEALIE_BASE_URL", "https://mealie.example.com");
    let client = MealieClient::from_env().unwrap();
    assert!(!client.is_authenticated());

    std::env::set_var("MEALIE_API_TOKEN", "env-token");
    let client = MealieClient::from_env().unwrap();
    assert!(client.is_authenticated());
    assert_eq!(client.base_url(), "https://mealie.example.com");

    std::env::remove_var("MEALIE_BASE_URL");
    std::env::remove_var("MEALIE_API_TOKEN");
}
