use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Deduplicated guest identity record. The registry keys profiles on
/// (name, phone_number) and keeps the most recent stay date for phone-only
/// tie-breaking.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GuestProfile {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub id_type: Option<String>,
    pub id_number: Option<String>,
    pub address: Option<String>,
    pub dob: Option<String>,
    pub nationality: Option<String>,
    pub preferences: Option<String>,
    pub last_check_in: Option<String>,
}
