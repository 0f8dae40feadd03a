//! Integration tests for user account administration.

mod helpers;

use http::StatusCode;
use serde_json::json;

fn register_body(username: &str, role: &str) -> serde_json::Value {
    json!({
        "username": username,
        "password": "password123",
        "first_name": "New",
        "last_name": "Hire",
        "role": role,
        "department": "Reception",
    })
}

#[tokio::test]
async fn test_register_requires_admin() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("plainuser", "password123", "user", "Laboratory")
        .await;
    let token = app.login("plainuser", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/users/register",
            Some(register_body("newbie", "user")),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_creates_user_but_not_admin() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("hr_admin", "password123", "admin", "Laboratory")
        .await;
    let token = app.login("hr_admin", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/users/register",
            Some(register_body("newstaff", "user")),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let data = response.data();
    assert_eq!(data.get("username").unwrap().as_str().unwrap(), "newstaff");
    assert!(data.get("active").unwrap().as_bool().unwrap());
    assert!(data.get("password_hash").is_none());

    // Granting admin is beyond a department admin's authority.
    let response = app
        .request(
            "POST",
            "/api/users/register",
            Some(register_body("wannabe", "admin")),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_superadmin_creates_admin() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("root", "password123", "superadmin", "Laboratory")
        .await;
    let token = app.login("root", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/users/register",
            Some(register_body("newadmin", "admin")),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data().get("role").unwrap().as_str().unwrap(), "admin");
}

#[tokio::test]
async fn test_duplicate_username_conflicts() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("root2", "password123", "superadmin", "Laboratory")
        .await;
    app.create_test_user("taken", "password123", "user", "Imaging")
        .await;
    let token = app.login("root2", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/users/register",
            Some(register_body("taken", "user")),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_short_password_rejected() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("root3", "password123", "superadmin", "Laboratory")
        .await;
    let token = app.login("root3", "password123").await;

    let mut body = register_body("shortpw", "user");
    body["password"] = json!("short");

    let response = app
        .request("POST", "/api/users/register", Some(body), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_users_admin_only() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("listadmin", "password123", "admin", "Laboratory")
        .await;
    app.create_test_user("listuser", "password123", "user", "Laboratory")
        .await;
    let admin_token = app.login("listadmin", "password123").await;
    let user_token = app.login("listuser", "password123").await;

    let response = app.request("GET", "/api/users", None, Some(&user_token)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("GET", "/api/users", None, Some(&admin_token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_role_changes_need_superadmin() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("root4", "password123", "superadmin", "Laboratory")
        .await;
    app.create_test_user("promoter", "password123", "admin", "Imaging")
        .await;
    let target_id = app
        .create_test_user("promotee", "password123", "user", "Imaging")
        .await;
    let root_token = app.login("root4", "password123").await;
    let admin_token = app.login("promoter", "password123").await;

    // An admin cannot grant the admin role.
    let response = app
        .request(
            "PUT",
            &format!("/api/users/{target_id}"),
            Some(json!({ "role": "admin" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    // A superadmin can.
    let response = app
        .request(
            "PUT",
            &format!("/api/users/{target_id}"),
            Some(json!({ "role": "admin", "department": "Reception" })),
            Some(&root_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data.get("role").unwrap().as_str().unwrap(), "admin");
    assert_eq!(
        data.get("department").unwrap().as_str().unwrap(),
        "Reception"
    );

    // Once promoted, the target is out of the admin's reach entirely.
    let response = app
        .request(
            "PUT",
            &format!("/api/users/{target_id}"),
            Some(json!({ "first_name": "Renamed" })),
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_deactivation_blocks_login() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("root5", "password123", "superadmin", "Laboratory")
        .await;
    let target_id = app
        .create_test_user("leaver", "password123", "user", "Phlebotomy")
        .await;
    let root_token = app.login("root5", "password123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{target_id}"),
            Some(json!({ "active": false })),
            Some(&root_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.data().get("active").unwrap().as_bool().unwrap());

    let response = app
        .request(
            "POST",
            "/api/users/login",
            Some(json!({ "username": "leaver", "password": "password123" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_password_reset() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("root6", "password123", "superadmin", "Laboratory")
        .await;
    let target_id = app
        .create_test_user("forgetful", "oldpassword1", "user", "Imaging")
        .await;
    let root_token = app.login("root6", "password123").await;

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{target_id}"),
            Some(json!({ "password": "newpassword1" })),
            Some(&root_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The old password no longer works; the new one does.
    let response = app
        .request(
            "POST",
            "/api/users/login",
            Some(json!({ "username": "forgetful", "password": "oldpassword1" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    app.login("forgetful", "newpassword1").await;
}

#[tokio::test]
async fn test_delete_rules() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    let root_id = app
        .create_test_user("root7", "password123", "superadmin", "Laboratory")
        .await;
    let target_id = app
        .create_test_user("departing", "password123", "user", "Others")
        .await;
    let root_token = app.login("root7", "password123").await;

    // Self-deletion is rejected.
    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{root_id}"),
            None,
            Some(&root_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{target_id}"),
            None,
            Some(&root_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            &format!("/api/users/{target_id}"),
            None,
            Some(&root_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
