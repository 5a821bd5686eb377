pub mod booking;
pub mod connection;
pub mod guest;
pub mod hotel;
pub mod notification;
pub mod rate_rules;
pub mod room_type;
pub mod settings;
