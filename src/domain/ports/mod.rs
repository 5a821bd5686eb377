use crate::domain::models::{
    booking::Booking, connection::OtaConnection, guest::GuestProfile, hotel::Hotel,
    notification::Notification, rate_rules::RateRulesConfig, room_type::RoomType,
    settings::PropertySettings,
};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn create(&self, hotel: &Hotel) -> Result<Hotel, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, AppError>;
    async fn list(&self) -> Result<Vec<Hotel>, AppError>;
}

#[async_trait]
pub trait RoomTypeRepository: Send + Sync {
    async fn create(&self, room_type: &RoomType) -> Result<RoomType, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<RoomType>, AppError>;
    async fn list(&self) -> Result<Vec<RoomType>, AppError>;
    async fn update(&self, room_type: &RoomType) -> Result<RoomType, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: &Booking) -> Result<Booking, AppError>;
    /// All-or-nothing insert for a bulk reservation request.
    async fn create_many(&self, bookings: &[Booking]) -> Result<Vec<Booking>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, AppError>;
    async fn list(&self) -> Result<Vec<Booking>, AppError>;
    /// Bookings holding a room: same room number, status Confirmed/CheckedIn.
    async fn list_active_by_room(&self, room_number: &str) -> Result<Vec<Booking>, AppError>;
    async fn list_by_room_type(&self, room_type_id: &str) -> Result<Vec<Booking>, AppError>;
    async fn update(&self, booking: &Booking) -> Result<Booking, AppError>;
    /// Writes the settled booking and bumps the property invoice counter in
    /// one transaction.
    async fn settle(&self, booking: &Booking) -> Result<Booking, AppError>;
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait GuestProfileRepository: Send + Sync {
    async fn create(&self, profile: &GuestProfile) -> Result<GuestProfile, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<GuestProfile>, AppError>;
    async fn find_by_name_phone(&self, name: &str, phone: &str) -> Result<Option<GuestProfile>, AppError>;
    /// Phone-only match, most recent last_check_in first.
    async fn find_latest_by_phone(&self, phone: &str) -> Result<Option<GuestProfile>, AppError>;
    /// Case-insensitive substring match on the guest name.
    async fn search_by_name(&self, query: &str) -> Result<Vec<GuestProfile>, AppError>;
    async fn list(&self) -> Result<Vec<GuestProfile>, AppError>;
    async fn update(&self, profile: &GuestProfile) -> Result<GuestProfile, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<Option<PropertySettings>, AppError>;
    async fn update(&self, settings: &PropertySettings) -> Result<PropertySettings, AppError>;
}

#[async_trait]
pub trait OtaConnectionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<OtaConnection>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<OtaConnection>, AppError>;
    async fn update(&self, connection: &OtaConnection) -> Result<OtaConnection, AppError>;
}

#[async_trait]
pub trait RateRulesRepository: Send + Sync {
    async fn get(&self) -> Result<Option<RateRulesConfig>, AppError>;
    async fn update(&self, rules: &RateRulesConfig) -> Result<RateRulesConfig, AppError>;
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create(&self, notification: &Notification) -> Result<Notification, AppError>;
    async fn list(&self, unread_only: bool) -> Result<Vec<Notification>, AppError>;
    async fn mark_read(&self, id: &str) -> Result<(), AppError>;
    async fn mark_all_read(&self) -> Result<u64, AppError>;
    async fn dismiss(&self, id: &str) -> Result<(), AppError>;
}

/// Inline image handed to the vision model.
#[derive(Debug, Clone)]
pub struct ImagePart {
    pub mime_type: String,
    pub data_base64: String,
}

#[async_trait]
pub trait VisionService: Send + Sync {
    /// Runs the prompt (optionally with an image) against an ordered list of
    /// model candidates and returns the first JSON object found in the reply.
    async fn extract_json(
        &self,
        api_key: &str,
        prompt: &str,
        image: Option<&ImagePart>,
    ) -> Result<Value, AppError>;
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Creates a gateway order and returns its id. Amount is in minor units
    /// (paise).
    async fn create_order(
        &self,
        key_id: &str,
        key_secret: &str,
        amount_minor: i64,
        receipt: &str,
    ) -> Result<String, AppError>;
}

#[async_trait]
pub trait DocumentService: Send + Sync {
    async fn generate_invoice(
        &self,
        booking: &Booking,
        settings: &PropertySettings,
        invoice_number: &str,
    ) -> Result<String, AppError>;

    async fn generate_receipt(
        &self,
        booking: &Booking,
        settings: &PropertySettings,
        invoice_number: &str,
    ) -> Result<String, AppError>;
}
