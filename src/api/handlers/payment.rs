use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use crate::api::dtos::requests::{CreateOrderRequest, VerifyPaymentRequest};
use crate::api::dtos::responses::OrderResponse;
use crate::domain::models::booking::{Payment, PaymentCategory, PaymentMethod, PaymentStatus};
use crate::error::AppError;
use crate::infra::payments::razorpay_gateway::verify_signature;
use crate::state::AppState;
use rand::{Rng, distributions::Alphanumeric};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateOrderRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .booking_repo
        .find_by_id(&payload.booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let settings = state
        .settings_repo
        .get()
        .await?
        .ok_or(AppError::NotFound("Property settings not found".into()))?;
    let key_id = settings
        .razorpay_key_id
        .ok_or(AppError::Configuration("Payment gateway key id".into()))?;
    let key_secret = settings
        .razorpay_key_secret
        .ok_or(AppError::Configuration("Payment gateway key secret".into()))?;

    if payload.amount <= 0.0 {
        return Err(AppError::Validation("Amount must be positive".into()));
    }

    let receipt: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect();
    let receipt = format!("rcpt_{}", receipt);

    let amount_minor = (payload.amount * 100.0).round() as i64;
    let order_id = state
        .payment_gateway
        .create_order(&key_id, &key_secret, amount_minor, &receipt)
        .await?;
    info!("Created order {} for booking {}", order_id, payload.booking_id);

    Ok(Json(OrderResponse {
        order_id,
        amount: payload.amount,
        currency: "INR".to_string(),
        key_id,
    }))
}

/// The signature is checked before anything is written: a failed check
/// applies no payment and no folio reconciliation.
pub async fn verify_payment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<VerifyPaymentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut booking = state
        .booking_repo
        .find_by_id(&payload.booking_id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let settings = state
        .settings_repo
        .get()
        .await?
        .ok_or(AppError::NotFound("Property settings not found".into()))?;
    let key_secret = settings
        .razorpay_key_secret
        .ok_or(AppError::Configuration("Payment gateway key secret".into()))?;

    if !verify_signature(&payload.order_id, &payload.payment_id, &key_secret, &payload.signature) {
        warn!("Signature verification failed for order {}", payload.order_id);
        return Err(AppError::Validation("Payment signature verification failed".into()));
    }

    let method = payload.method.unwrap_or(PaymentMethod::Upi);
    booking.payments.push(Payment {
        id: payload.payment_id.clone(),
        amount: payload.amount,
        method,
        timestamp: Utc::now().to_rfc3339(),
        category: payload.category.unwrap_or(PaymentCategory::Folio),
        description: payload.description.clone(),
        status: PaymentStatus::Completed,
    });

    for item in booking
        .folio
        .iter_mut()
        .filter(|i| payload.folio_item_ids.contains(&i.id))
    {
        item.is_paid = true;
        item.payment_method = Some(method.as_str().to_string());
        item.payment_id = Some(payload.payment_id.clone());
    }

    let updated = state.booking_repo.update(&booking).await?;
    info!("Recorded payment {} on booking {}", payload.payment_id, updated.id);

    state
        .notifier
        .emit(
            "payment_received",
            "payment",
            "Payment Received",
            &format!("Rs. {:.2} received from {}", payload.amount, updated.guest_name),
            "normal",
            Some(updated.id.clone()),
            updated.room_number.clone(),
            None,
        )
        .await;

    Ok(Json(updated))
}
