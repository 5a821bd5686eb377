use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use crate::domain::services::statistics;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;

/// Recomputed from the full booking set on every request; nothing is
/// materialized.
pub async fn get_statistics(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list().await?;
    let stats = statistics::compute(&bookings, Utc::now().date_naive());
    Ok(Json(stats))
}
