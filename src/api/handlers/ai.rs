use axum::{Json, extract::State, response::IntoResponse};
use base64::{Engine as _, engine::general_purpose};
use crate::api::dtos::requests::{ParseEmailRequest, ScanDocumentRequest};
use crate::domain::ports::ImagePart;
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use tracing::info;

fn scan_prompt(document_type: &str) -> Result<String, AppError> {
    let fields = match document_type {
        "id" => "name, idType, idNumber, dob, gender, address, city, state, pinCode, nationality",
        "passport" => "name, passportNumber, nationality, dob, gender, passportPlaceIssue, passportIssueDate, passportExpiry",
        "visa" => "visaNumber, visaType, visaPlaceIssue, visaIssueDate, visaExpiry",
        _ => return Err(AppError::Validation("Unknown document type".into())),
    };
    Ok(format!(
        "Extract the following fields from the attached identity document image: {}.\n\
         Respond with a single JSON object using exactly those keys. Use null for \
         anything that is not legible. Dates must be YYYY-MM-DD.",
        fields
    ))
}

/// OCR over a scanned identity document via the vision model. The result is
/// a guest-details fragment the front desk reviews before applying.
pub async fn scan_document(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ScanDocumentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let api_key = state
        .config
        .ai_api_key
        .clone()
        .ok_or(AppError::Configuration("GEMINI_API_KEY".into()))?;

    if general_purpose::STANDARD.decode(payload.image_base64.as_bytes()).is_err() {
        return Err(AppError::Validation("Image payload is not valid base64".into()));
    }

    let prompt = scan_prompt(&payload.document_type)?;
    let image = ImagePart {
        mime_type: payload.mime_type.unwrap_or_else(|| "image/jpeg".to_string()),
        data_base64: payload.image_base64,
    };

    let extracted = state
        .vision_service
        .extract_json(&api_key, &prompt, Some(&image))
        .await?;
    info!("Extracted {} document fields", payload.document_type);
    Ok(Json(extracted))
}

/// Turns an inbound reservation e-mail (typically an OTA notification) into
/// a booking draft.
pub async fn parse_email(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ParseEmailRequest>,
) -> Result<impl IntoResponse, AppError> {
    let api_key = state
        .config
        .ai_api_key
        .clone()
        .ok_or(AppError::Configuration("GEMINI_API_KEY".into()))?;

    let prompt = format!(
        "Below is a reservation e-mail received by a hotel. Extract the booking \
         details and respond with a single JSON object with keys: guestName, \
         phoneNumber, email, checkIn, checkOut, roomType, pax, source, amount, \
         specialRequests. Use null for missing values; dates must be YYYY-MM-DD; \
         source must be one of Direct, MMT, Booking.com, Expedia.\n\n\
         Subject: {}\n\n{}",
        payload.subject.as_deref().unwrap_or(""),
        payload.body
    );

    let extracted = state.vision_service.extract_json(&api_key, &prompt, None).await?;
    info!("Parsed inbound reservation e-mail");
    Ok(Json(extracted))
}
