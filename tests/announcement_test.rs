//! Integration tests for the announcement board.

mod helpers;

use http::StatusCode;
use serde_json::json;

async fn create_announcement(
    app: &helpers::TestApp,
    token: &str,
    title: &str,
    department: &str,
) -> String {
    let response = app
        .request(
            "POST",
            "/api/announcements",
            Some(json!({
                "title": title,
                "content": "<p>Body</p>",
                "department": department,
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    response
        .data()
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_create_and_list() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("author", "password123", "user", "Laboratory")
        .await;
    let token = app.login("author", "password123").await;

    create_announcement(&app, &token, "Holiday schedule", "Laboratory").await;

    let response = app
        .request("GET", "/api/announcements", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let list = response.data().as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].get("title").unwrap().as_str().unwrap(), "Holiday schedule");
    assert_eq!(list[0].get("archived").unwrap().as_bool().unwrap(), false);
    assert_eq!(list[0].get("comments").unwrap().as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_empty_title_rejected() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("author2", "password123", "user", "Laboratory")
        .await;
    let token = app.login("author2", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/announcements",
            Some(json!({
                "title": "",
                "content": "<p>Body</p>",
                "department": "Laboratory",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_comment_appears_in_listing() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("poster", "password123", "user", "Imaging")
        .await;
    let token = app.login("poster", "password123").await;

    let id = create_announcement(&app, &token, "New scanner", "Imaging").await;

    let response = app
        .request(
            "POST",
            &format!("/api/announcements/{id}/comments"),
            Some(json!({ "content": "Looking forward to it" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("author_name").unwrap().as_str().unwrap(),
        "poster Test"
    );

    let response = app
        .request("GET", "/api/announcements", None, Some(&token))
        .await;
    let list = response.data().as_array().unwrap();
    let comments = list[0].get("comments").unwrap().as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(
        comments[0].get("content").unwrap().as_str().unwrap(),
        "Looking forward to it"
    );
}

#[tokio::test]
async fn test_author_can_edit_other_user_cannot() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("owner", "password123", "user", "Reception")
        .await;
    app.create_test_user("other", "password123", "user", "Reception")
        .await;
    let owner_token = app.login("owner", "password123").await;
    let other_token = app.login("other", "password123").await;

    let id = create_announcement(&app, &owner_token, "Front desk notice", "Reception").await;

    let update = json!({ "title": "Front desk notice v2", "content": "<p>Updated</p>" });

    let response = app
        .request(
            "PUT",
            &format!("/api/announcements/{id}"),
            Some(update.clone()),
            Some(&other_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &format!("/api/announcements/{id}"),
            Some(update),
            Some(&owner_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data().get("title").unwrap().as_str().unwrap(),
        "Front desk notice v2"
    );
}

#[tokio::test]
async fn test_archive_permissions_and_round_trip() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("staff", "password123", "user", "Laboratory")
        .await;
    app.create_test_user("itguy", "password123", "it", "Others")
        .await;
    let staff_token = app.login("staff", "password123").await;
    let it_token = app.login("itguy", "password123").await;

    let id = create_announcement(&app, &staff_token, "Old news", "Laboratory").await;

    // Regular staff cannot archive, IT can regardless of department.
    let response = app
        .request(
            "PUT",
            &format!("/api/announcements/{id}/archive"),
            None,
            Some(&staff_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &format!("/api/announcements/{id}/archive"),
            None,
            Some(&it_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.data().get("archived").unwrap().as_bool().unwrap());

    // Archived items leave the default listing and show up under
    // ?archived=true.
    let response = app
        .request("GET", "/api/announcements", None, Some(&staff_token))
        .await;
    assert_eq!(response.data().as_array().unwrap().len(), 0);

    let response = app
        .request(
            "GET",
            "/api/announcements?archived=true",
            None,
            Some(&staff_token),
        )
        .await;
    assert_eq!(response.data().as_array().unwrap().len(), 1);

    // Unarchive restores the original state.
    let response = app
        .request(
            "PUT",
            &format!("/api/announcements/{id}/archive"),
            None,
            Some(&it_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(!response.data().get("archived").unwrap().as_bool().unwrap());
}

#[tokio::test]
async fn test_delete_is_superadmin_only() {
    let Some(app) = helpers::TestApp::new().await else {
        return;
    };
    app.create_test_user("deptadmin", "password123", "admin", "Phlebotomy")
        .await;
    app.create_test_user("root", "password123", "superadmin", "Laboratory")
        .await;
    let admin_token = app.login("deptadmin", "password123").await;
    let root_token = app.login("root", "password123").await;

    let id = create_announcement(&app, &admin_token, "To be removed", "Phlebotomy").await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/announcements/{id}"),
            None,
            Some(&admin_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/announcements/{id}"),
            None,
            Some(&root_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/announcements/{id}"),
            None,
            Some(&root_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
