use axum::{Json, extract::{Path, State}, response::IntoResponse};
use crate::api::dtos::requests::CreateHotelRequest;
use crate::domain::models::hotel::Hotel;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub async fn list_hotels(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let hotels = state.hotel_repo.list().await?;
    Ok(Json(hotels))
}

pub async fn get_hotel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = state
        .hotel_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Hotel not found".into()))?;
    Ok(Json(hotel))
}

pub async fn create_hotel(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateHotelRequest>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = Hotel {
        id: payload.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        name: payload.name,
        location: payload.location,
        color: payload.color,
        ota_config: payload.ota_config,
    };
    let created = state.hotel_repo.create(&hotel).await?;
    info!("Created hotel {}", created.id);
    Ok(Json(created))
}
