use crate::common::{create_logged_in_client, create_test_client, held_tokens, mock_login};
use auth_portal_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_login_then_profile_carries_bearer() {
    let mut server = Server::new_async().await;
    let _login = mock_login(&mut server, "AT1", "RT1").await;
    let profile_mock = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer AT1")
        .with_status(200)
        .with_body(r#"{"id":1,"email":"a@b.com","username":"alice","is_active":true}"#)
        .expect(1)
        .create_async()
        .await;

    let client = create_test_client(&server);
    client.login("a@b.com", "pw").await.unwrap();
    let profile = client.get_profile().await.unwrap();

    assert_eq!(profile.email.as_deref(), Some("a@b.com"));
    assert_eq!(profile.username.as_deref(), Some("alice"));
    profile_mock.assert_async().await;
}

#[tokio::test]
async fn test_profile_without_login_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/users/me")
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let error = client.get_profile().await.unwrap_err();

    assert!(matches!(error, AppError::Unauthenticated));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_profile_without_login_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/users/me")
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let error = client
        .update_profile(&UserUpdate::username("bob"))
        .await
        .unwrap_err();

    assert!(matches!(error, AppError::Unauthenticated));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_profile_sends_partial_update() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/users/me")
        .match_header("authorization", "Bearer AT1")
        .match_body(Matcher::Json(json!({"username": "bob"})))
        .with_status(200)
        .with_body(r#"{"id":1,"email":"a@b.com","username":"bob"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT1", "RT1");
    let confirmation = client
        .update_profile(&UserUpdate::username("bob"))
        .await
        .unwrap();

    assert_eq!(confirmation["username"], "bob");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_profile_conflict_keeps_session() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("PATCH", "/users/me")
        .with_status(409)
        .with_body(r#"{"detail":"Username already taken"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT1", "RT1");
    let error = client
        .update_profile(&UserUpdate::username("taken"))
        .await
        .unwrap_err();

    assert_eq!(error.body().unwrap()["detail"], "Username already taken");
    assert!(client.is_authenticated().await);
}

#[tokio::test]
async fn test_unauthorized_profile_drops_access_token_only() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/users/me")
        .with_status(401)
        .with_body(r#"{"detail":"Could not validate credentials"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT_DEAD", "RT1");
    let error = client.get_profile().await.unwrap_err();

    assert!(error.is_unauthorized());
    assert_eq!(
        error.body().unwrap()["detail"],
        "Could not validate credentials"
    );
    assert!(!client.is_authenticated().await);
    assert_eq!(held_tokens(&client).await, (None, Some("RT1".to_string())));
}

#[tokio::test]
async fn test_unauthorized_then_refresh_recovers_session() {
    let mut server = Server::new_async().await;
    let _dead = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer AT_DEAD")
        .with_status(401)
        .create_async()
        .await;
    let _refresh = server
        .mock("POST", "/auth/refresh")
        .with_status(200)
        .with_body(r#"{"access_token":"AT2"}"#)
        .create_async()
        .await;
    let fresh = server
        .mock("GET", "/users/me")
        .match_header("authorization", "Bearer AT2")
        .with_status(200)
        .with_body(r#"{"username":"alice"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT_DEAD", "RT1");
    assert!(client.get_profile().await.is_err());
    assert!(client.session().await.needs_refresh(None));

    client.refresh().await.unwrap();
    let profile = client.get_profile().await.unwrap();

    assert_eq!(profile.username.as_deref(), Some("alice"));
    fresh.assert_async().await;
}

#[tokio::test]
async fn test_deactivate_account_clears_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/users/me")
        .match_header("authorization", "Bearer AT1")
        .with_status(200)
        .with_body(r#"{"message":"Account deactivated successfully"}"#)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT1", "RT1");
    let confirmation = client.deactivate_account().await.unwrap();

    assert_eq!(confirmation["message"], "Account deactivated successfully");
    assert!(client.session().await.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_deactivate_failure_keeps_session() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/users/me")
        .with_status(500)
        .create_async()
        .await;

    let client = create_logged_in_client(&server, "AT1", "RT1");
    assert!(client.deactivate_account().await.is_err());
    assert!(client.is_authenticated().await);
}
