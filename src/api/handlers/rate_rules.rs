use axum::{Json, extract::{Query, State}, response::IntoResponse};
use crate::api::dtos::responses::QuoteResponse;
use crate::domain::models::rate_rules::RateRulesConfig;
use crate::domain::services::{defaults, rates};
use crate::error::AppError;
use crate::state::AppState;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

pub async fn get_rules(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let rules = state
        .rate_rules_repo
        .get()
        .await?
        .unwrap_or_else(defaults::default_rate_rules);
    Ok(Json(rules))
}

pub async fn update_rules(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RateRulesConfig>,
) -> Result<impl IntoResponse, AppError> {
    for event in &payload.special_events {
        if event.end_date < event.start_date {
            return Err(AppError::Validation(format!(
                "Special event '{}' ends before it starts",
                event.name
            )));
        }
    }

    let updated = state.rate_rules_repo.update(&payload).await?;
    info!("Updated rate rules ({} special events)", updated.special_events.len());
    Ok(Json(updated))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteParams {
    pub room_type_id: String,
    pub date: String,
}

pub async fn quote_rate(
    State(state): State<Arc<AppState>>,
    Query(params): Query<QuoteParams>,
) -> Result<impl IntoResponse, AppError> {
    let room_type = state
        .room_type_repo
        .find_by_id(&params.room_type_id)
        .await?
        .ok_or(AppError::NotFound("Room type not found".into()))?;

    let date = chrono::NaiveDate::parse_from_str(&params.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format".into()))?;

    let rules = state
        .rate_rules_repo
        .get()
        .await?
        .unwrap_or_else(defaults::default_rate_rules);

    let quote = rates::quote(&room_type, &rules, date);
    Ok(Json(QuoteResponse {
        room_type_id: room_type.id,
        date: params.date,
        base_price: room_type.base_price,
        price: quote.price,
        applied_rule: quote.applied_rule,
    }))
}
