use axum::{Json, extract::State, response::IntoResponse};
use crate::api::dtos::requests::UpdateSettingsRequest;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

pub async fn get_settings(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let settings = state
        .settings_repo
        .get()
        .await?
        .ok_or(AppError::NotFound("Property settings not found".into()))?;
    Ok(Json(settings))
}

pub async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut settings = state
        .settings_repo
        .get()
        .await?
        .ok_or(AppError::NotFound("Property settings not found".into()))?;

    if let Some(name) = payload.name {
        settings.name = name;
    }
    if let Some(address) = payload.address {
        settings.address = address;
    }
    if let Some(phone) = payload.phone {
        settings.phone = Some(phone);
    }
    if let Some(email) = payload.email {
        settings.email = Some(email);
    }
    if let Some(gst_number) = payload.gst_number {
        settings.gst_number = Some(gst_number);
    }
    if let Some(gst_rate) = payload.gst_rate {
        settings.gst_rate = gst_rate;
    }
    if let Some(checkin_time) = payload.checkin_time {
        settings.checkin_time = checkin_time;
    }
    if let Some(checkout_time) = payload.checkout_time {
        settings.checkout_time = checkout_time;
    }
    if let Some(timezone) = payload.timezone {
        settings.timezone = timezone;
    }
    if let Some(key_id) = payload.razorpay_key_id {
        settings.razorpay_key_id = Some(key_id);
    }
    if let Some(key_secret) = payload.razorpay_key_secret {
        settings.razorpay_key_secret = Some(key_secret);
    }
    if let Some(tiers) = payload.loyalty_tiers {
        settings.loyalty_tiers = tiers;
    }

    let updated = state.settings_repo.update(&settings).await?;
    info!("Updated property settings");
    Ok(Json(updated))
}
