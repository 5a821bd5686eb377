use axum::{Json, extract::{Path, Query, State}, response::IntoResponse};
use crate::api::dtos::requests::UpdateGuestRequest;
use crate::error::AppError;
use crate::state::AppState;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Deserialize)]
pub struct GuestListParams {
    pub search: Option<String>,
}

pub async fn list_guests(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GuestListParams>,
) -> Result<impl IntoResponse, AppError> {
    let guests = match params.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(query) => state.guest_repo.search_by_name(query).await?,
        None => state.guest_repo.list().await?,
    };
    Ok(Json(guests))
}

pub async fn get_guest(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let guest = state
        .guest_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Guest profile not found".into()))?;
    Ok(Json(guest))
}

pub async fn update_guest(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateGuestRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut guest = state
        .guest_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Guest profile not found".into()))?;

    if let Some(name) = payload.name {
        guest.name = name;
    }
    if let Some(phone) = payload.phone_number {
        guest.phone_number = phone;
    }
    if let Some(email) = payload.email {
        guest.email = Some(email);
    }
    if let Some(id_type) = payload.id_type {
        guest.id_type = Some(id_type);
    }
    if let Some(id_number) = payload.id_number {
        guest.id_number = Some(id_number);
    }
    if let Some(address) = payload.address {
        guest.address = Some(address);
    }
    if let Some(dob) = payload.dob {
        guest.dob = Some(dob);
    }
    if let Some(nationality) = payload.nationality {
        guest.nationality = Some(nationality);
    }
    if let Some(preferences) = payload.preferences {
        guest.preferences = Some(preferences);
    }

    let updated = state.guest_repo.update(&guest).await?;
    Ok(Json(updated))
}

pub async fn delete_guest(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.guest_repo.delete(id).await?;
    info!("Deleted guest profile {}", id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
