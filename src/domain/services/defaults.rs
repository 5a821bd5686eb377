use crate::domain::models::{
    connection::OtaConnection,
    rate_rules::{ModifierType, RateRulesConfig, WeeklyRule},
    settings::PropertySettings,
};

/// Singleton rows every deployment starts with. The SQLite migrations seed
/// the same content; the in-memory store seeds through these.
pub fn default_settings() -> PropertySettings {
    PropertySettings {
        id: "default".to_string(),
        name: "Hotel Satsangi".to_string(),
        address: "Deoghar, Jharkhand".to_string(),
        phone: None,
        email: None,
        gst_number: None,
        gst_rate: 12.0,
        checkin_time: "14:00".to_string(),
        checkout_time: "11:00".to_string(),
        timezone: "Asia/Kolkata".to_string(),
        razorpay_key_id: None,
        razorpay_key_secret: None,
        invoice_seq: 0,
        loyalty_tiers: vec![],
    }
}

pub fn default_rate_rules() -> RateRulesConfig {
    RateRulesConfig {
        weekly_rules: WeeklyRule {
            is_active: true,
            active_days: vec![5, 6],
            modifier_type: ModifierType::Percentage,
            modifier_value: 1.2,
        },
        special_events: vec![],
    }
}

pub fn default_connections() -> Vec<OtaConnection> {
    let channel = |id: &str, name: &str| OtaConnection {
        id: id.to_string(),
        name: name.to_string(),
        key: String::new(),
        is_visible: false,
        status: "disconnected".to_string(),
        last_validated: None,
        category: None,
        markup_type: None,
        markup_value: None,
        is_stopped: Some(false),
    };
    vec![
        channel("mmt", "MakeMyTrip"),
        channel("booking", "Booking.com"),
        channel("expedia", "Expedia"),
    ]
}
