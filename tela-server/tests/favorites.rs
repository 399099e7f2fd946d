use axum::http::StatusCode;
use serde_json::{Value, json};

#[path = "support/mod.rs"]
mod support;

use support::{USER_TOKEN, build_test_app};

#[tokio::test]
async fn favorites_require_a_token() {
    let app = build_test_app().await;

    app.server
        .get("/favorites")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
    app.server
        .post("/favorites")
        .json(&json!({ "contentId": "m1", "type": "movie" }))
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn add_list_remove_round_trip() {
    let app = build_test_app().await;

    for _ in 0..2 {
        // The second add is a no-op thanks to the exists guard.
        app.server
            .post("/favorites")
            .authorization_bearer(USER_TOKEN)
            .json(&json!({ "contentId": "m1", "type": "movie" }))
            .await
            .assert_status_ok();
    }
    app.server
        .post("/favorites")
        .authorization_bearer(USER_TOKEN)
        .json(&json!({ "contentId": "s1", "type": "series" }))
        .await
        .assert_status_ok();

    let favorites: Value = app
        .server
        .get("/favorites")
        .authorization_bearer(USER_TOKEN)
        .await
        .json();
    let favorites = favorites.as_array().unwrap().clone();
    assert_eq!(favorites.len(), 2);
    assert_eq!(favorites[0]["contentId"], json!("m1"));
    assert_eq!(favorites[1]["type"], json!("series"));

    app.server
        .delete("/favorites/m1")
        .authorization_bearer(USER_TOKEN)
        .await
        .assert_status_ok();

    let favorites: Value = app
        .server
        .get("/favorites")
        .authorization_bearer(USER_TOKEN)
        .await
        .json();
    assert_eq!(favorites.as_array().unwrap().len(), 1);

    // Removing an entry that is already gone still succeeds.
    app.server
        .delete("/favorites/m1")
        .authorization_bearer(USER_TOKEN)
        .await
        .assert_status_ok();
}
