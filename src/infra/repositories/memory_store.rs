use crate::domain::models::{
    booking::Booking, connection::OtaConnection, guest::GuestProfile, hotel::Hotel,
    notification::Notification, rate_rules::RateRulesConfig, room_type::RoomType,
    settings::PropertySettings,
};
use crate::domain::services::defaults;
use std::sync::Mutex;
use std::sync::atomic::AtomicI64;

/// Backing storage shared by the in-memory repositories. Selected at startup
/// when no database URL is configured; every repository holds an Arc to the
/// one injected instance.
pub struct MemoryStore {
    pub hotels: Mutex<Vec<Hotel>>,
    pub room_types: Mutex<Vec<RoomType>>,
    pub bookings: Mutex<Vec<Booking>>,
    pub guest_profiles: Mutex<Vec<GuestProfile>>,
    pub next_guest_id: AtomicI64,
    pub settings: Mutex<Option<PropertySettings>>,
    pub connections: Mutex<Vec<OtaConnection>>,
    pub rate_rules: Mutex<Option<RateRulesConfig>>,
    pub notifications: Mutex<Vec<Notification>>,
}

impl MemoryStore {
    /// Fresh store carrying the same singleton rows the SQLite migrations
    /// seed.
    pub fn seeded() -> Self {
        Self {
            hotels: Mutex::new(Vec::new()),
            room_types: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
            guest_profiles: Mutex::new(Vec::new()),
            next_guest_id: AtomicI64::new(1),
            settings: Mutex::new(Some(defaults::default_settings())),
            connections: Mutex::new(defaults::default_connections()),
            rate_rules: Mutex::new(Some(defaults::default_rate_rules())),
            notifications: Mutex::new(Vec::new()),
        }
    }
}
