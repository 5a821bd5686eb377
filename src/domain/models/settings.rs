use serde::{Deserialize, Serialize};

/// Property-wide configuration. A single row with id = "default"; mutated by
/// the settings endpoint and by checkout (invoice counter).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PropertySettings {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub gst_number: Option<String>,
    pub gst_rate: f64,
    /// Time-of-day cutoffs, "HH:MM" on the property-local clock.
    pub checkin_time: String,
    pub checkout_time: String,
    pub timezone: String,
    pub razorpay_key_id: Option<String>,
    pub razorpay_key_secret: Option<String>,
    /// Persistent invoice counter. Never reset, not even across years;
    /// issued numbers may be referenced externally.
    pub invoice_seq: i64,
    #[serde(default)]
    pub loyalty_tiers: Vec<LoyaltyTier>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyTier {
    pub name: String,
    pub min_stays: i32,
    pub discount_percent: f64,
}
