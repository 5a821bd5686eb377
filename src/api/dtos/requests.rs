use crate::domain::models::booking::{
    BookingSource, BookingStatus, FolioItem, GuestDetails, Payment, PaymentCategory, PaymentMethod,
};
use serde::Deserialize;
use std::collections::HashMap;

/// Full booking payload as submitted by the front desk or a channel import.
/// Used verbatim for create, bulk create and update (updates are full-record
/// overwrites of the mutable fields).
#[derive(Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub room_type_id: String,
    pub room_number: Option<String>,
    pub guest_name: String,
    pub source: BookingSource,
    pub status: Option<BookingStatus>,
    pub check_in: String,
    pub check_out: String,
    pub amount: Option<f64>,
    pub reservation_id: Option<String>,
    #[serde(default)]
    pub channel_sync: HashMap<String, String>,
    pub rejection_reason: Option<String>,
    pub guest_details: Option<GuestDetails>,
    pub number_of_rooms: Option<i32>,
    pub pax: Option<i32>,
    #[serde(default)]
    pub accessory_guests: Vec<GuestDetails>,
    pub extra_beds: Option<i32>,
    pub special_requests: Option<String>,
    #[serde(default, rename = "isVIP")]
    pub is_vip: bool,
    #[serde(default)]
    pub folio: Vec<FolioItem>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

#[derive(Deserialize)]
pub struct BulkBookingRequest {
    pub bookings: Vec<BookingPayload>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTransferRequest {
    pub new_room_type_id: String,
    pub new_room_number: String,
    pub effective_date: String,
    pub keep_rate: bool,
    pub transfer_folio: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelRequest {
    pub id: Option<String>,
    pub name: String,
    pub location: String,
    pub color: String,
    #[serde(default)]
    pub ota_config: HashMap<String, String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypePayload {
    pub id: Option<String>,
    pub name: String,
    pub total_capacity: i32,
    pub base_price: f64,
    pub floor_price: f64,
    pub ceiling_price: f64,
    pub base_occupancy: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub room_numbers: Vec<String>,
    pub extra_bed_charge: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuestRequest {
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub address: Option<String>,
    pub dob: Option<String>,
    pub nationality: Option<String>,
    pub preferences: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gst_number: Option<String>,
    pub gst_rate: Option<f64>,
    pub checkin_time: Option<String>,
    pub checkout_time: Option<String>,
    pub timezone: Option<String>,
    pub razorpay_key_id: Option<String>,
    pub razorpay_key_secret: Option<String>,
    pub loyalty_tiers: Option<Vec<crate::domain::models::settings::LoyaltyTier>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConnectionRequest {
    pub key: Option<String>,
    pub is_visible: Option<bool>,
    pub status: Option<String>,
    pub last_validated: Option<String>,
    pub category: Option<String>,
    pub markup_type: Option<String>,
    pub markup_value: Option<f64>,
    pub is_stopped: Option<bool>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub booking_id: String,
    pub amount: f64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub booking_id: String,
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
    pub amount: f64,
    pub method: Option<PaymentMethod>,
    pub category: Option<PaymentCategory>,
    pub description: Option<String>,
    #[serde(default)]
    pub folio_item_ids: Vec<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanDocumentRequest {
    pub image_base64: String,
    pub mime_type: Option<String>,
    /// "id" | "passport" | "visa"
    pub document_type: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseEmailRequest {
    pub subject: Option<String>,
    pub body: String,
}
