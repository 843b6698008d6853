//! Response DTOs for pricing API endpoints.

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{RoomId, RoomTypeId, RuleId};

use super::calculators::{round_money, NightPrice};
use super::services::StayQuote;

/// Money value for JSON responses
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
}

impl MoneyResponse {
    pub fn new(amount: Decimal, currency: &str) -> Self {
        Self {
            amount,
            currency: currency.to_string(),
        }
    }
}

/// One charged night in a quote
#[derive(Debug, Serialize)]
pub struct NightResponse {
    pub date: NaiveDate,
    pub weekday: Weekday,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub applied_rules: Vec<RuleId>,
}

impl From<NightPrice> for NightResponse {
    fn from(night: NightPrice) -> Self {
        Self {
            date: night.date,
            weekday: night.weekday,
            amount: night.amount,
            applied_rules: night.applied_rules,
        }
    }
}

/// Response for stay pricing
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub room_id: RoomId,
    pub room_type_id: RoomTypeId,
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
    pub night_count: usize,
    pub nights: Vec<NightResponse>,
    /// Exact total, unrounded
    pub total: MoneyResponse,
    /// Total rounded to cents for display
    pub total_rounded: MoneyResponse,
}

impl QuoteResponse {
    pub fn new(quote: StayQuote, currency: &str) -> Self {
        Self {
            room_id: quote.room_id,
            room_type_id: quote.room_type_id,
            checkin: quote.stay.checkin,
            checkout: quote.stay.checkout,
            night_count: quote.nights.len(),
            nights: quote.nights.into_iter().map(NightResponse::from).collect(),
            total: MoneyResponse::new(quote.total, currency),
            total_rounded: MoneyResponse::new(round_money(quote.total, 2), currency),
        }
    }
}

/// Liveness probe body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
