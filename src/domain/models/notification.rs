use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// In-app notification emitted as a side effect of booking-state transitions.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub notif_type: String,
    pub category: String,
    pub title: String,
    pub message: String,
    pub priority: String,
    pub booking_id: Option<String>,
    pub room_number: Option<String>,
    pub metadata: Option<serde_json::Value>,
    pub is_read: bool,
    pub is_dismissed: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        notif_type: &str,
        category: &str,
        title: &str,
        message: &str,
        priority: &str,
        booking_id: Option<String>,
        room_number: Option<String>,
        metadata: Option<serde_json::Value>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            notif_type: notif_type.to_string(),
            category: category.to_string(),
            title: title.to_string(),
            message: message.to_string(),
            priority: priority.to_string(),
            booking_id,
            room_number,
            metadata,
            is_read: false,
            is_dismissed: false,
            created_at: Utc::now(),
        }
    }
}
