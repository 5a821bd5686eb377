pub mod memory_booking_repo;
pub mod memory_guest_repo;
pub mod memory_hotel_repo;
pub mod memory_room_type_repo;
pub mod memory_singleton_repos;
pub mod memory_store;
pub mod sqlite_booking_repo;
pub mod sqlite_connection_repo;
pub mod sqlite_guest_repo;
pub mod sqlite_hotel_repo;
pub mod sqlite_notification_repo;
pub mod sqlite_rate_rules_repo;
pub mod sqlite_room_type_repo;
pub mod sqlite_settings_repo;
