use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Channel-manager connection record for one OTA.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OtaConnection {
    pub id: String,
    pub name: String,
    pub key: String,
    pub is_visible: bool,
    /// "connected" | "disconnected" | "testing"
    pub status: String,
    pub last_validated: Option<String>,
    pub category: Option<String>,
    /// "percentage" | "fixed"
    pub markup_type: Option<String>,
    pub markup_value: Option<f64>,
    /// Master switch to stop sales on this channel.
    pub is_stopped: Option<bool>,
}
