use crate::common::{create_logged_in_client, create_test_client, held_tokens};
use auth_portal_client::prelude::*;
use mockito::{Matcher, Server};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_logout_clears_both_tokens() {
    let server = Server::new_async().await;
    let client = create_logged_in_client(&server, "AT1", "RT1");

    client.logout().await.unwrap();

    assert_eq!(held_tokens(&client).await, (None, None));
    assert!(!client.has_refresh_token().await);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let server = Server::new_async().await;
    let client = create_test_client(&server);

    client.logout().await.unwrap();
    client.logout().await.unwrap();

    assert!(client.session().await.is_empty());
}

#[tokio::test]
async fn test_logout_all_sends_bearer_and_clears() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/logout-all")
        .match_header("authorization", "Bearer AT1")
        .with_status(200)
        .with_body(r#"{"message":"Logged out from all devices"}"#)
        .expect(1)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT1", "RT1");
    client.logout_all().await.unwrap();

    assert_eq!(held_tokens(&client).await, (None, None));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_all_server_error_still_clears() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/logout-all")
        .with_status(500)
        .with_body(r#"{"detail":"Internal Server Error"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT1", "RT1");
    let error = client.logout_all().await.unwrap_err();

    assert_eq!(error.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(held_tokens(&client).await, (None, None));
}

#[tokio::test]
async fn test_logout_all_network_failure_still_clears() {
    let session = Session {
        access_token: Some(AccessToken::new("AT1")),
        refresh_token: Some(RefreshToken::new("RT1")),
        token_type: None,
        expires_at: None,
    };
    let client = SessionClient::new(
        Config::with_base_url("http://127.0.0.1:1"),
        Arc::new(MemoryTokenStore::with_session(session)),
    )
    .unwrap();

    let error = client.logout_all().await.unwrap_err();

    assert!(matches!(error, AppError::Network(_)));
    assert!(client.session().await.is_empty());
}

#[tokio::test]
async fn test_logout_all_without_session_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/logout-all")
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let error = client.logout_all().await.unwrap_err();

    assert!(matches!(error, AppError::Unauthenticated));
    assert!(client.session().await.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_logout_all_after_dropped_access_token_clears_refresh_token() {
    let mut server = Server::new_async().await;
    let _profile = server
        .mock("GET", "/users/me")
        .with_status(401)
        .create_async()
        .await;
    let logout_all = server
        .mock("POST", "/auth/logout-all")
        .expect(0)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT_DEAD", "RT1");
    assert!(client.get_profile().await.is_err());
    assert!(client.has_refresh_token().await);

    let error = client.logout_all().await.unwrap_err();

    assert!(matches!(error, AppError::Unauthenticated));
    assert!(!client.has_refresh_token().await);
    logout_all.assert_async().await;
}

#[tokio::test]
async fn test_revoke_sends_refresh_token_and_clears() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/auth/logout")
        .match_header("authorization", "Bearer AT1")
        .match_body(Matcher::Json(json!({"refresh_token": "RT1"})))
        .with_status(200)
        .with_body(r#"{"message":"Logged out successfully"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT1", "RT1");
    client.revoke().await.unwrap();

    assert_eq!(held_tokens(&client).await, (None, None));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_revoke_failure_still_clears() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/auth/logout")
        .with_status(401)
        .with_body(r#"{"detail":"Could not validate credentials"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT1", "RT1");
    let error = client.revoke().await.unwrap_err();

    assert!(error.is_unauthorized());
    assert!(client.session().await.is_empty());
}

#[tokio::test]
async fn test_bearer_request_after_logout_all_sends_nothing() {
    let mut server = Server::new_async().await;
    let _logout_all = server
        .mock("POST", "/auth/logout-all")
        .with_status(200)
        .create_async()
        .await;
    let profile = server
        .mock("GET", "/users/me")
        .expect(0)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT1", "RT1");
    client.logout_all().await.unwrap();

    let error = client.get_profile().await.unwrap_err();
    assert!(matches!(error, AppError::Unauthenticated));
    profile.assert_async().await;
}
