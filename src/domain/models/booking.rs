use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Room bookings carry the full stay state: folio, payments and the guest
/// snapshot travel with the row as JSON columns.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub room_type_id: String,
    pub room_number: Option<String>,
    pub guest_name: String,
    pub source: BookingSource,
    pub status: BookingStatus,
    /// Creation time, epoch milliseconds.
    pub timestamp: i64,
    /// Calendar dates, string-encoded YYYY-MM-DD. Imported channel data can
    /// carry unparseable values here.
    pub check_in: String,
    pub check_out: String,
    pub amount: Option<f64>,
    /// Links segments of one logical stay after a room transfer.
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
    pub is_settled: bool,
    #[serde(default)]
    pub folio: Vec<FolioItem>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    pub invoice_number: Option<String>,
    pub invoice_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    Rejected,
}

impl BookingStatus {
    /// Active stays are the only ones that hold a room.
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::CheckedIn)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::CheckedIn => "CheckedIn",
            BookingStatus::CheckedOut => "CheckedOut",
            BookingStatus::Cancelled => "Cancelled",
            BookingStatus::Rejected => "Rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Confirmed" => Some(BookingStatus::Confirmed),
            "CheckedIn" => Some(BookingStatus::CheckedIn),
            "CheckedOut" => Some(BookingStatus::CheckedOut),
            "Cancelled" => Some(BookingStatus::Cancelled),
            "Rejected" => Some(BookingStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum BookingSource {
    #[serde(rename = "Direct")]
    Direct,
    #[serde(rename = "MMT")]
    Mmt,
    #[serde(rename = "Booking.com")]
    BookingCom,
    #[serde(rename = "Expedia")]
    Expedia,
}

impl BookingSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingSource::Direct => "Direct",
            BookingSource::Mmt => "MMT",
            BookingSource::BookingCom => "Booking.com",
            BookingSource::Expedia => "Expedia",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Direct" => Some(BookingSource::Direct),
            "MMT" => Some(BookingSource::Mmt),
            "Booking.com" => Some(BookingSource::BookingCom),
            "Expedia" => Some(BookingSource::Expedia),
            _ => None,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FolioItem {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub category: FolioCategory,
    pub timestamp: String,
    #[serde(default)]
    pub is_paid: bool,
    pub payment_method: Option<String>,
    pub payment_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum FolioCategory {
    #[serde(rename = "F&B")]
    FoodAndBeverage,
    Laundry,
    Room,
    Other,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub timestamp: String,
    pub category: PaymentCategory,
    pub description: Option<String>,
    pub status: PaymentStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    Card,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::Card => "Card",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentCategory {
    Room,
    Folio,
    Extra,
    Partial,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Completed,
    Refunded,
    Cancelled,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Cancelled => "Cancelled",
        }
    }
}

/// Guest snapshot attached to a booking. Everything is optional: front-desk
/// forms, OTA payloads and document scans each fill a different subset.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct GuestDetails {
    pub profile_id: Option<i64>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<String>,
    pub father_or_husband_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
    pub country: Option<String>,
    pub passport_number: Option<String>,
    pub passport_place_issue: Option<String>,
    pub passport_issue_date: Option<String>,
    pub passport_expiry: Option<String>,
    pub visa_number: Option<String>,
    pub visa_type: Option<String>,
    pub visa_place_issue: Option<String>,
    pub visa_issue_date: Option<String>,
    pub visa_expiry: Option<String>,
    pub arrived_from: Option<String>,
    pub arrival_date_india: Option<String>,
    pub arrival_port: Option<String>,
    pub next_destination: Option<String>,
    pub purpose_of_visit: Option<String>,
    pub arrival_time: Option<String>,
    pub departure_time: Option<String>,
    pub is_form_c_submitted: Option<bool>,
    pub id_image: Option<String>,
    pub id_image_back: Option<String>,
    pub visa_page: Option<String>,
}

impl GuestDetails {
    /// A snapshot with neither a name nor a phone number cannot be matched
    /// to a profile and is not worth persisting in the registry.
    pub fn is_identifiable(&self) -> bool {
        self.name.as_deref().is_some_and(|s| !s.trim().is_empty())
            || self.phone_number.as_deref().is_some_and(|s| !s.trim().is_empty())
    }
}
