use axum::{Json, extract::{Path, Query, State}, response::IntoResponse};
use crate::error::AppError;
use crate::state::AppState;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct NotificationListParams {
    #[serde(default)]
    pub unread: bool,
}

pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NotificationListParams>,
) -> Result<impl IntoResponse, AppError> {
    let notifications = state.notification_repo.list(params.unread).await?;
    Ok(Json(notifications))
}

pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.notification_repo.mark_read(&id).await?;
    Ok(Json(serde_json::json!({ "status": "read" })))
}

pub async fn mark_all_read(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let updated = state.notification_repo.mark_all_read().await?;
    Ok(Json(serde_json::json!({ "updated": updated })))
}

pub async fn dismiss(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.notification_repo.dismiss(&id).await?;
    Ok(Json(serde_json::json!({ "status": "dismissed" })))
}
