//! Core pricing calculation functions.
//!
//! Pure functions for per-night pricing math. No lookups, no I/O.

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::prelude::*;
use serde::Serialize;

use crate::models::{AdjustmentKind, PricingRule, RoomTypeId, RuleId};

use super::services::PricingError;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// The engine itself never rounds; this is for presenting totals.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use pousada_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Price of one charged night
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NightPrice {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub amount: Decimal,
    /// Rules that adjusted this night, in application order
    pub applied_rules: Vec<RuleId>,
}

/// Check whether `rule` adjusts the night of `date` for a room of `room_type_id`.
///
/// All three must hold: `date` inside the inclusive window, its weekday in
/// the rule's set, and the room-type scope unset or equal.
pub fn rule_applies(rule: &PricingRule, date: NaiveDate, room_type_id: RoomTypeId) -> bool {
    rule.is_valid_on(date)
        && rule.weekdays.contains(date.weekday())
        && rule.covers_room_type(room_type_id)
}

/// Apply one rule's adjustment to the running nightly amount.
///
/// Returns `None` on decimal overflow.
pub fn apply_adjustment(nightly: Decimal, rule: &PricingRule) -> Option<Decimal> {
    match rule.kind {
        AdjustmentKind::Percentage => {
            let factor = Decimal::ONE.checked_add(rule.value.checked_div(Decimal::ONE_HUNDRED)?)?;
            nightly.checked_mul(factor)
        }
        AdjustmentKind::FixedAmount => nightly.checked_add(rule.value),
    }
}

/// Price a single night.
///
/// Applicable rules compound on the running amount in the order they appear
/// in `rules`. Reordering `rules` can change the result.
pub fn price_night(
    base_price: Decimal,
    date: NaiveDate,
    room_type_id: RoomTypeId,
    rules: &[PricingRule],
) -> Result<NightPrice, PricingError> {
    let mut amount = base_price;
    let mut applied_rules = Vec::new();

    for rule in rules.iter().filter(|r| rule_applies(r, date, room_type_id)) {
        amount = apply_adjustment(amount, rule).ok_or(PricingError::Overflow { date })?;
        applied_rules.push(rule.id);
    }

    Ok(NightPrice {
        date,
        weekday: date.weekday(),
        amount,
        applied_rules,
    })
}
