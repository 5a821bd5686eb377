pub mod ai;
pub mod booking;
pub mod connection;
pub mod guest;
pub mod health;
pub mod hotel;
pub mod notification;
pub mod payment;
pub mod rate_rules;
pub mod room_type;
pub mod settings;
pub mod stats;
