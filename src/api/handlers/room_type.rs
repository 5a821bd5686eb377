use axum::{Json, extract::{Path, State}, response::IntoResponse};
use chrono::Utc;
use crate::api::dtos::requests::RoomTypePayload;
use crate::domain::models::room_type::RoomType;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

fn from_payload(id: String, payload: RoomTypePayload) -> RoomType {
    RoomType {
        id,
        name: payload.name,
        total_capacity: payload.total_capacity,
        base_price: payload.base_price,
        floor_price: payload.floor_price,
        ceiling_price: payload.ceiling_price,
        base_occupancy: payload.base_occupancy,
        amenities: payload.amenities,
        room_numbers: payload.room_numbers,
        extra_bed_charge: payload.extra_bed_charge,
    }
}

pub async fn list_room_types(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let room_types = state.room_type_repo.list().await?;
    Ok(Json(room_types))
}

pub async fn get_room_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let room_type = state
        .room_type_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Room type not found".into()))?;
    Ok(Json(room_type))
}

pub async fn create_room_type(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RoomTypePayload>,
) -> Result<impl IntoResponse, AppError> {
    let id = payload.id.clone().unwrap_or_else(|| Uuid::new_v4().to_string());
    let room_type = from_payload(id, payload);
    if !room_type.has_valid_price_band() {
        return Err(AppError::Validation("Price band must satisfy floor <= base <= ceiling".into()));
    }

    let created = state.room_type_repo.create(&room_type).await?;
    info!("Created room type {} ({})", created.name, created.id);
    Ok(Json(created))
}

pub async fn update_room_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<RoomTypePayload>,
) -> Result<impl IntoResponse, AppError> {
    state
        .room_type_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Room type not found".into()))?;

    let room_type = from_payload(id, payload);
    if !room_type.has_valid_price_band() {
        return Err(AppError::Validation("Price band must satisfy floor <= base <= ceiling".into()));
    }

    let updated = state.room_type_repo.update(&room_type).await?;
    Ok(Json(updated))
}

pub async fn delete_room_type(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .room_type_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Room type not found".into()))?;

    // a type with guests booked into it (now or later) must stay
    let today = Utc::now().date_naive().format("%Y-%m-%d").to_string();
    let bookings = state.booking_repo.list_by_room_type(&id).await?;
    let in_use = bookings
        .iter()
        .any(|b| b.status.is_active() && b.check_out.as_str() >= today.as_str());
    if in_use {
        return Err(AppError::Conflict("Room type has current or upcoming bookings".into()));
    }

    state.room_type_repo.delete(&id).await?;
    info!("Deleted room type {}", id);
    Ok(Json(serde_json::json!({ "status": "deleted" })))
}
