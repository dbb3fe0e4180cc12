//! Admin account management: listing, creation, update and deletion rules.
mod util;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn admin_lists_users_without_password_material() {
    let (app, _state) = util::app().await;
    util::register(&app, "Alice", "alice@example.com", "correct horse").await;

    let admin = util::admin_token(&app).await;
    let (status, body) = util::send(&app, "GET", "/admin/users", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);

    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 2); // seeded admin + Alice
    for user in users {
        let obj = user.as_object().unwrap();
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("passwordHash"));
        assert!(obj.contains_key("createdAt"));
    }
}

#[tokio::test]
async fn plain_user_cannot_list_accounts() {
    let (app, _state) = util::app().await;
    util::register(&app, "Alice", "alice@example.com", "correct horse").await;
    let token = util::login(&app, "alice@example.com", "correct horse").await;

    let (status, body) = util::send(&app, "GET", "/admin/users", Some(&token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], json!("access denied"));
}

#[tokio::test]
async fn admin_creates_account_with_explicit_role() {
    let (app, _state) = util::app().await;
    let admin = util::admin_token(&app).await;

    let (status, body) = util::send(
        &app,
        "POST",
        "/admin/users",
        Some(&admin),
        Some(json!({
            "name": "Second Admin",
            "email": "second@example.com",
            "password": "another password",
            "role": "admin"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["role"], json!("admin"));

    // omitted role defaults to user
    let (status, body) = util::send(
        &app,
        "POST",
        "/admin/users",
        Some(&admin),
        Some(json!({
            "name": "Plain",
            "email": "plain@example.com",
            "password": "plain password"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["user"]["role"], json!("user"));
}

#[tokio::test]
async fn account_can_update_its_own_name_and_email() {
    let (app, _state) = util::app().await;
    let id = util::register(&app, "Alice", "alice@example.com", "correct horse").await;
    let token = util::login(&app, "alice@example.com", "correct horse").await;

    let (status, body) = util::send(
        &app,
        "PUT",
        &format!("/admin/users/{id}"),
        Some(&token),
        Some(json!({ "name": "Alice Renamed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], json!("Alice Renamed"));
    assert_eq!(body["user"]["email"], json!("alice@example.com"));
}

#[tokio::test]
async fn plain_user_cannot_update_someone_else() {
    let (app, _state) = util::app().await;
    let alice_id = util::register(&app, "Alice", "alice@example.com", "correct horse").await;
    util::register(&app, "Bob", "bob@example.com", "another horse").await;
    let bob = util::login(&app, "bob@example.com", "another horse").await;

    let (status, _) = util::send(
        &app,
        "PUT",
        &format!("/admin/users/{alice_id}"),
        Some(&bob),
        Some(json!({ "name": "Hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn plain_user_cannot_change_their_own_role() {
    let (app, _state) = util::app().await;
    let id = util::register(&app, "Alice", "alice@example.com", "correct horse").await;
    let token = util::login(&app, "alice@example.com", "correct horse").await;

    let (status, _) = util::send(
        &app,
        "PUT",
        &format!("/admin/users/{id}"),
        Some(&token),
        Some(json!({ "role": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_can_promote_an_account() {
    let (app, _state) = util::app().await;
    let id = util::register(&app, "Alice", "alice@example.com", "correct horse").await;
    let admin = util::admin_token(&app).await;

    let (status, body) = util::send(
        &app,
        "PUT",
        &format!("/admin/users/{id}"),
        Some(&admin),
        Some(json!({ "role": "admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], json!("admin"));
}

#[tokio::test]
async fn update_cannot_steal_an_existing_email() {
    let (app, _state) = util::app().await;
    util::register(&app, "Alice", "alice@example.com", "correct horse").await;
    let bob_id = util::register(&app, "Bob", "bob@example.com", "another horse").await;
    let admin = util::admin_token(&app).await;

    let (status, body) = util::send(
        &app,
        "PUT",
        &format!("/admin/users/{bob_id}"),
        Some(&admin),
        Some(json!({ "email": "alice@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("a user with this email already exists"));
}

#[tokio::test]
async fn update_of_unknown_account_is_not_found() {
    let (app, _state) = util::app().await;
    let admin = util::admin_token(&app).await;

    let (status, body) = util::send(
        &app,
        "PUT",
        "/admin/users/no-such-id",
        Some(&admin),
        Some(json!({ "name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("user not found"));
}

#[tokio::test]
async fn admin_deletes_another_account() {
    let (app, _state) = util::app().await;
    let id = util::register(&app, "Alice", "alice@example.com", "correct horse").await;
    let admin = util::admin_token(&app).await;

    let (status, _) = util::send(
        &app,
        "DELETE",
        &format!("/admin/users/{id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = util::send(
        &app,
        "GET",
        &format!("/admin/users/{id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_cannot_delete_their_own_account() {
    let (app, state) = util::app().await;
    let admin = util::admin_token(&app).await;
    let admin_id = state.tokens.verify(&admin).unwrap().sub;

    let (status, body) = util::send(
        &app,
        "DELETE",
        &format!("/admin/users/{admin_id}"),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("you cannot delete your own account"));
}

#[tokio::test]
async fn plain_user_cannot_delete_accounts() {
    let (app, _state) = util::app().await;
    let alice_id = util::register(&app, "Alice", "alice@example.com", "correct horse").await;
    util::register(&app, "Bob", "bob@example.com", "another horse").await;
    let bob = util::login(&app, "bob@example.com", "another horse").await;

    let (status, _) = util::send(
        &app,
        "DELETE",
        &format!("/admin/users/{alice_id}"),
        Some(&bob),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn delete_of_unknown_account_is_not_found() {
    let (app, _state) = util::app().await;
    let admin = util::admin_token(&app).await;

    let (status, _) = util::send(&app, "DELETE", "/admin/users/no-such-id", Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
