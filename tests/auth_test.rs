//! Integration tests for login and token handling.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_login_success() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("jdoe", "password123", "user", "Laboratory")
        .await;

    let response = app
        .request(
            "POST",
            "/api/users/login",
            Some(serde_json::json!({
                "username": "jdoe",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert!(data.get("token").is_some());
    assert_eq!(
        data.pointer("/user/username").unwrap().as_str().unwrap(),
        "jdoe"
    );
    // The password hash never appears in a response.
    assert!(data.pointer("/user/password_hash").is_none());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("jdoe2", "password123", "user", "Imaging")
        .await;

    let response = app
        .request(
            "POST",
            "/api/users/login",
            Some(serde_json::json!({
                "username": "jdoe2",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_user() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app
        .request(
            "POST",
            "/api/users/login",
            Some(serde_json::json!({
                "username": "nobody",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_deactivated_account() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("gone", "password123", "user", "Reception")
        .await;
    sqlx::query("UPDATE users SET active = FALSE WHERE username = 'gone'")
        .execute(&app.db_pool)
        .await
        .unwrap();

    let response = app
        .request(
            "POST",
            "/api/users/login",
            Some(serde_json::json!({
                "username": "gone",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_with_token() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("meuser", "password123", "admin", "Imaging")
        .await;
    let token = app.login("meuser", "password123").await;

    let response = app
        .request("GET", "/api/users/me", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("username").unwrap().as_str().unwrap(),
        "meuser"
    );
    assert_eq!(response.data().get("role").unwrap().as_str().unwrap(), "admin");
}

#[tokio::test]
async fn test_me_without_token() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app.request("GET", "/api/users/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };

    let response = app
        .request("GET", "/api/users/me", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
