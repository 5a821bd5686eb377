use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RateRulesConfig {
    pub weekly_rules: WeeklyRule,
    #[serde(default)]
    pub special_events: Vec<SpecialEvent>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyRule {
    pub is_active: bool,
    /// 0 = Sunday .. 6 = Saturday
    pub active_days: Vec<u8>,
    pub modifier_type: ModifierType,
    /// Multiplier for percentage (1.2 = +20%), absolute INR for fixed.
    pub modifier_value: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpecialEvent {
    pub id: String,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub modifier_type: ModifierType,
    pub modifier_value: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModifierType {
    Percentage,
    Fixed,
}
