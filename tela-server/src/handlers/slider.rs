//! Home-screen slider management.
//!
//! Banner uploads go to the hosted bucket and are linked through a long-lived
//! signed URL; the entry records the object name so deletion can clean the
//! bucket up as well.

use axum::{
    Json,
    extract::{Multipart, Path, State},
};
use chrono::Utc;
use serde_json::{Value, json};
use tracing::info;

use tela_model::{ContentId, ContentKind, SliderEntry};

use crate::errors::{AppError, AppResult};
use crate::infra::app_state::AppState;

pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<SliderEntry>>> {
    let entries = state.store.slider().await?;
    Ok(Json(entries))
}

pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<Value>> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut content_id: Option<String> = None;
    let mut kind: Option<ContentKind> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let name = field.file_name().unwrap_or("banner").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::bad_request(e.to_string()))?;
                file = Some((name, content_type, bytes.to_vec()));
            }
            Some("contentId") => {
                content_id = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::bad_request(e.to_string()))?,
                );
            }
            Some("type") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::bad_request(e.to_string()))?;
                kind = Some(
                    raw.parse()
                        .map_err(|_| AppError::bad_request(format!("unknown type: {raw}")))?,
                );
            }
            _ => {}
        }
    }

    let (original_name, content_type, bytes) =
        file.ok_or_else(|| AppError::bad_request("No file provided"))?;
    let content_id = ContentId::from(content_id.unwrap_or_default());
    let kind = kind.ok_or_else(|| AppError::bad_request("Missing type field"))?;

    let now = Utc::now().timestamp_millis();
    let file_name = format!("{now}-{original_name}");
    let bucket = &state.config.slider_bucket;

    state
        .storage
        .upload(bucket, &file_name, bytes, &content_type)
        .await?;
    let url = state
        .storage
        .create_signed_url(bucket, &file_name, state.config.signed_url_ttl_seconds)
        .await?;

    let mut entries = state.store.slider().await?;
    entries.push(SliderEntry {
        url: url.clone(),
        file_name: Some(file_name),
        content_id,
        kind,
        created_at: now,
    });
    state.store.set_slider(&entries).await?;

    info!(target: "catalog.slider", %kind, "banner uploaded");
    Ok(Json(json!({ "success": true, "url": url })))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(index): Path<usize>,
) -> AppResult<Json<Value>> {
    let mut entries = state.store.slider().await?;
    if index >= entries.len() {
        return Err(AppError::bad_request("Invalid slider index"));
    }

    let entry = entries.remove(index);
    if let Some(file_name) = &entry.file_name {
        state
            .storage
            .remove(&state.config.slider_bucket, file_name)
            .await?;
    }
    state.store.set_slider(&entries).await?;

    info!(target: "catalog.slider", content_id = %entry.content_id, "slider entry removed");
    Ok(Json(json!({ "success": true })))
}
