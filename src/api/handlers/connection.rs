use axum::{Json, extract::{Path, State}, response::IntoResponse};
use crate::api::dtos::requests::UpdateConnectionRequest;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn list_connections(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let connections = state.connection_repo.list().await?;
    Ok(Json(connections))
}

pub async fn update_connection(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateConnectionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut connection = state
        .connection_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Connection not found".into()))?;

    if let Some(key) = payload.key {
        connection.key = key;
    }
    if let Some(is_visible) = payload.is_visible {
        connection.is_visible = is_visible;
    }
    if let Some(status) = payload.status {
        match status.as_str() {
            "connected" | "disconnected" | "testing" => connection.status = status,
            _ => return Err(AppError::Validation("Invalid connection status".into())),
        }
    }
    if let Some(last_validated) = payload.last_validated {
        connection.last_validated = Some(last_validated);
    }
    if let Some(category) = payload.category {
        connection.category = Some(category);
    }
    if let Some(markup_type) = payload.markup_type {
        match markup_type.as_str() {
            "percentage" | "fixed" => connection.markup_type = Some(markup_type),
            _ => return Err(AppError::Validation("Invalid markup type".into())),
        }
    }
    if let Some(markup_value) = payload.markup_value {
        connection.markup_value = Some(markup_value);
    }
    if let Some(is_stopped) = payload.is_stopped {
        connection.is_stopped = Some(is_stopped);
    }

    let updated = state.connection_repo.update(&connection).await?;
    info!("Updated OTA connection {}", updated.id);
    Ok(Json(updated))
}
