use crate::config::Config;
use crate::domain::ports::{
    BookingRepository, DocumentService, GuestProfileRepository, HotelRepository,
    NotificationRepository, OtaConnectionRepository, PaymentGateway, RateRulesRepository,
    RoomTypeRepository, SettingsRepository, VisionService,
};
use crate::domain::services::{guest_registry::GuestRegistry, notifier::Notifier};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub hotel_repo: Arc<dyn HotelRepository>,
    pub room_type_repo: Arc<dyn RoomTypeRepository>,
    pub booking_repo: Arc<dyn BookingRepository>,
    pub guest_repo: Arc<dyn GuestProfileRepository>,
    pub settings_repo: Arc<dyn SettingsRepository>,
    pub connection_repo: Arc<dyn OtaConnectionRepository>,
    pub rate_rules_repo: Arc<dyn RateRulesRepository>,
    pub notification_repo: Arc<dyn NotificationRepository>,
    pub vision_service: Arc<dyn VisionService>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub document_service: Arc<dyn DocumentService>,
    pub guest_registry: Arc<GuestRegistry>,
    pub notifier: Arc<Notifier>,
}
