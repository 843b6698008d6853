//! Room inventory models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type RoomId = i64;
pub type RoomTypeId = i64;

/// A bookable room. Its price comes entirely from its room type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub room_type_id: RoomTypeId,
    /// Door label shown to staff ("101", "202").
    #[serde(default)]
    pub number: String,
}

/// Room category with its base nightly price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomType {
    pub id: RoomTypeId,
    pub name: String,
    pub base_price: Decimal,
    /// Not used by pricing.
    #[serde(default)]
    pub max_occupancy: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Room {
    pub fn new(id: RoomId, room_type_id: RoomTypeId, number: impl Into<String>) -> Self {
        Self {
            id,
            room_type_id,
            number: number.into(),
        }
    }
}

impl RoomType {
    pub fn new(
        id: RoomTypeId,
        name: impl Into<String>,
        base_price: Decimal,
        max_occupancy: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            base_price,
            max_occupancy,
            description: None,
        }
    }
}
