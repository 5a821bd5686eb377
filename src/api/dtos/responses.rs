use crate::domain::models::booking::Booking;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub original: Booking,
    /// Present only for a mid-stay split.
    pub transferred: Option<Booking>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub booking: Booking,
    pub invoice_number: String,
    pub invoice_path: String,
    pub receipt_path: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub amount: f64,
    pub currency: String,
    pub key_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub room_type_id: String,
    pub date: String,
    pub base_price: f64,
    pub price: f64,
    pub applied_rule: Option<String>,
}
