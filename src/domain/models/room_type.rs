use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RoomType {
    pub id: String,
    pub name: String,
    pub total_capacity: i32,
    pub base_price: f64,
    pub floor_price: f64,
    pub ceiling_price: f64,
    pub base_occupancy: i32,
    #[serde(default)]
    pub amenities: Vec<String>,
    /// Physical units this type spans, e.g. ["101", "102"].
    #[serde(default)]
    pub room_numbers: Vec<String>,
    pub extra_bed_charge: Option<f64>,
}

impl RoomType {
    /// floor <= base <= ceiling must hold for rate rules to clamp sensibly.
    pub fn has_valid_price_band(&self) -> bool {
        self.floor_price <= self.base_price && self.base_price <= self.ceiling_price
    }
}
