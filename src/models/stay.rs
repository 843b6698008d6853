//! Stay date range

use chrono::NaiveDate;
use serde::Serialize;

/// Half-open interval `[checkin, checkout)`: the night of `checkout` is not charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stay {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

impl Stay {
    pub fn new(checkin: NaiveDate, checkout: NaiveDate) -> Self {
        Self { checkin, checkout }
    }

    /// Number of charged nights, zero when `checkout <= checkin`
    pub fn nights(&self) -> u32 {
        let days = (self.checkout - self.checkin).num_days();
        u32::try_from(days).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.checkout <= self.checkin
    }

    /// Each charged night, oldest first
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let checkout = self.checkout;
        self.checkin.iter_days().take_while(move |d| *d < checkout)
    }
}
