//! Request DTOs for pricing API endpoints.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::dates::deserialize_calendar_date;
use crate::models::{Catalog, RoomId, Stay};

/// Request to price a stay
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub checkin: NaiveDate,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub checkout: NaiveDate,
    pub room_id: RoomId,
    /// Collections to price against for this call only; the store snapshot otherwise
    #[serde(default)]
    pub catalog: Option<Catalog>,
}

impl QuoteRequest {
    pub fn stay(&self) -> Stay {
        Stay::new(self.checkin, self.checkout)
    }
}
