use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::{Value, json};

#[path = "support/mod.rs"]
mod support;

use support::{ADMIN_TOKEN, USER_TOKEN, build_test_app};

fn banner_form() -> MultipartForm {
    MultipartForm::new()
        .add_text("contentId", "m1")
        .add_text("type", "movie")
        .add_part(
            "file",
            Part::bytes(vec![0xFF, 0xD8, 0xFF])
                .file_name("banner.jpg")
                .mime_type("image/jpeg"),
        )
}

#[tokio::test]
async fn upload_stores_the_banner_and_links_it() {
    let app = build_test_app().await;

    let response = app
        .server
        .post("/slider/upload")
        .authorization_bearer(ADMIN_TOKEN)
        .multipart(banner_form())
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["success"], json!(true));
    let url = body["url"].as_str().unwrap();
    assert!(url.contains("slider-banners"));

    let slider: Value = app.server.get("/slider").await.json();
    let entries = slider.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["contentId"], json!("m1"));
    assert_eq!(entries[0]["type"], json!("movie"));
    assert!(entries[0]["fileName"].as_str().unwrap().ends_with("banner.jpg"));

    assert_eq!(app.storage.uploads.lock().await.len(), 1);
}

#[tokio::test]
async fn upload_requires_admin_and_a_file() {
    let app = build_test_app().await;

    app.server
        .post("/slider/upload")
        .authorization_bearer(USER_TOKEN)
        .multipart(banner_form())
        .await
        .assert_status(StatusCode::FORBIDDEN);

    let form = MultipartForm::new()
        .add_text("contentId", "m1")
        .add_text("type", "movie");
    let response = app
        .server
        .post("/slider/upload")
        .authorization_bearer(ADMIN_TOKEN)
        .multipart(form)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], json!("No file provided"));
}

#[tokio::test]
async fn removing_an_entry_cleans_the_bucket_up() {
    let app = build_test_app().await;

    app.server
        .post("/slider/upload")
        .authorization_bearer(ADMIN_TOKEN)
        .multipart(banner_form())
        .await
        .assert_status_ok();

    app.server
        .delete("/slider/0")
        .authorization_bearer(ADMIN_TOKEN)
        .await
        .assert_status_ok();

    let slider: Value = app.server.get("/slider").await.json();
    assert!(slider.as_array().unwrap().is_empty());
    assert_eq!(app.storage.removals.lock().await.len(), 1);
}

#[tokio::test]
async fn out_of_range_indexes_are_rejected() {
    let app = build_test_app().await;

    let response = app
        .server
        .delete("/slider/5")
        .authorization_bearer(ADMIN_TOKEN)
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
