//! Stay pricing services.
//!
//! Resolve a room to its base price and accumulate nightly prices over a
//! stay. Callers pass the full catalog snapshot; rules are filtered here.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Catalog, PricingRule, Room, RoomId, RoomType, RoomTypeId, Stay};

use super::calculators::{price_night, NightPrice};

/// Longest stay [`quote_stay`] prices unless configured otherwise
pub const DEFAULT_MAX_STAY_NIGHTS: u32 = 366;

/// Pricing calculation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("Stay from {checkin} to {checkout} has no nights to charge")]
    EmptyStay {
        checkin: NaiveDate,
        checkout: NaiveDate,
    },

    #[error("Stay of {nights} nights exceeds the limit of {max_nights}")]
    StayTooLong { nights: u32, max_nights: u32 },

    #[error("Room {room_id} not found")]
    UnknownRoom { room_id: RoomId },

    #[error("Room {room_id} references unknown room type {room_type_id}")]
    UnknownRoomType {
        room_id: RoomId,
        room_type_id: RoomTypeId,
    },

    #[error("Price overflow on {date}")]
    Overflow { date: NaiveDate },
}

impl PricingError {
    /// Stable snake_case label for API responses
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::EmptyStay { .. } => "empty_stay",
            PricingError::StayTooLong { .. } => "stay_too_long",
            PricingError::UnknownRoom { .. } => "unknown_room",
            PricingError::UnknownRoomType { .. } => "unknown_room_type",
            PricingError::Overflow { .. } => "overflow",
        }
    }
}

/// What to do with a stay total below zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativeTotals {
    /// Return the total as computed. Large negative fixed adjustments can
    /// push it below zero.
    #[default]
    Allow,
    /// Clamp the stay total at zero. Nightly amounts are left as computed.
    ClampToZero,
}

/// Knobs for [`quote_stay`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingOptions {
    pub negative_totals: NegativeTotals,
    /// Stays longer than this are rejected before any night is priced
    pub max_stay_nights: u32,
}

impl Default for PricingOptions {
    fn default() -> Self {
        Self {
            negative_totals: NegativeTotals::Allow,
            max_stay_nights: DEFAULT_MAX_STAY_NIGHTS,
        }
    }
}

/// Result of pricing a stay
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StayQuote {
    pub room_id: RoomId,
    pub room_type_id: RoomTypeId,
    pub base_price: Decimal,
    pub stay: Stay,
    pub nights: Vec<NightPrice>,
    pub total: Decimal,
}

/// Find a room and the room type it prices from.
pub fn resolve_room<'a>(
    room_id: RoomId,
    rooms: &'a [Room],
    room_types: &'a [RoomType],
) -> Result<(&'a Room, &'a RoomType), PricingError> {
    let room = rooms
        .iter()
        .find(|r| r.id == room_id)
        .ok_or(PricingError::UnknownRoom { room_id })?;

    let room_type = room_types
        .iter()
        .find(|t| t.id == room.room_type_id)
        .ok_or(PricingError::UnknownRoomType {
            room_id,
            room_type_id: room.room_type_id,
        })?;

    Ok((room, room_type))
}

fn ensure_nights(stay: &Stay) -> Result<(), PricingError> {
    if stay.is_empty() {
        return Err(PricingError::EmptyStay {
            checkin: stay.checkin,
            checkout: stay.checkout,
        });
    }
    Ok(())
}

/// Price every night of `stay` in a room, with a per-night breakdown.
///
/// Each night starts at the room type's base price; every rule that applies
/// to that night compounds on the running amount, in catalog order. The
/// night of `checkout` is not charged. Stays longer than
/// `options.max_stay_nights` are rejected up front.
pub fn quote_stay(
    stay: Stay,
    room_id: RoomId,
    catalog: &Catalog,
    options: &PricingOptions,
) -> Result<StayQuote, PricingError> {
    ensure_nights(&stay)?;

    let night_count = stay.nights();
    if night_count > options.max_stay_nights {
        return Err(PricingError::StayTooLong {
            nights: night_count,
            max_nights: options.max_stay_nights,
        });
    }

    let (room, room_type) = resolve_room(room_id, &catalog.rooms, &catalog.room_types)?;

    let mut nights = Vec::with_capacity(night_count as usize);
    let mut total = Decimal::ZERO;
    for date in stay.dates() {
        let night = price_night(room_type.base_price, date, room_type.id, &catalog.rules)?;
        total = total
            .checked_add(night.amount)
            .ok_or(PricingError::Overflow { date })?;
        nights.push(night);
    }

    if options.negative_totals == NegativeTotals::ClampToZero && total < Decimal::ZERO {
        tracing::debug!("Clamping negative total {} for room {}", total, room.id);
        total = Decimal::ZERO;
    }

    Ok(StayQuote {
        room_id: room.id,
        room_type_id: room_type.id,
        base_price: room_type.base_price,
        stay,
        nights,
        total,
    })
}

/// Total price of a stay, or zero when it cannot be priced.
///
/// Zero is returned for an unknown room, an unknown room type, a stay where
/// `checkout <= checkin`, and on arithmetic overflow. Zero is also a
/// legitimate price for a free room type; use [`quote_stay`] to tell the
/// cases apart. Negative totals are returned unclamped. Nights are summed
/// as they are priced, so no breakdown is kept.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
/// use pousada_pricing::models::Catalog;
/// use pousada_pricing::pricing::calculate_stay_price;
///
/// let catalog = Catalog::seed();
/// let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
///
/// // Room 101 is Standard (150/night); Friday and Saturday get +20 %.
/// let total = calculate_stay_price(
///     friday,
///     sunday,
///     1,
///     &catalog.rooms,
///     &catalog.room_types,
///     &catalog.rules,
/// );
/// assert_eq!(total, dec!(360));
/// ```
pub fn calculate_stay_price(
    checkin: NaiveDate,
    checkout: NaiveDate,
    room_id: RoomId,
    rooms: &[Room],
    room_types: &[RoomType],
    rules: &[PricingRule],
) -> Decimal {
    let stay = Stay::new(checkin, checkout);
    match stay_total(&stay, room_id, rooms, room_types, rules) {
        Ok(total) => total,
        Err(e) => {
            tracing::debug!("Stay price collapsed to zero: {}", e);
            Decimal::ZERO
        }
    }
}

fn stay_total(
    stay: &Stay,
    room_id: RoomId,
    rooms: &[Room],
    room_types: &[RoomType],
    rules: &[PricingRule],
) -> Result<Decimal, PricingError> {
    ensure_nights(stay)?;
    let (_, room_type) = resolve_room(room_id, rooms, room_types)?;

    stay.dates().try_fold(Decimal::ZERO, |total, date| {
        let night = price_night(room_type.base_price, date, room_type.id, rules)?;
        total
            .checked_add(night.amount)
            .ok_or(PricingError::Overflow { date })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdjustmentKind, RuleId, WeekdaySet};
    use chrono::Weekday;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rule(id: RuleId, kind: AdjustmentKind, value: Decimal) -> PricingRule {
        PricingRule {
            id,
            name: format!("rule {}", id),
            starts_on: date(2024, 1, 1),
            ends_on: date(2024, 12, 31),
            weekdays: WeekdaySet::ALL,
            kind,
            value,
            room_type_id: None,
        }
    }

    /// Room 1 is type 1 (150/night), room 2 is type 2 (250/night).
    fn inventory() -> (Vec<Room>, Vec<RoomType>) {
        (
            vec![Room::new(1, 1, "101"), Room::new(2, 2, "201")],
            vec![
                RoomType::new(1, "Standard", dec!(150), 2),
                RoomType::new(2, "Deluxe", dec!(250), 3),
            ],
        )
    }

    fn price(
        checkin: NaiveDate,
        checkout: NaiveDate,
        room_id: RoomId,
        rules: &[PricingRule],
    ) -> Decimal {
        let (rooms, room_types) = inventory();
        calculate_stay_price(checkin, checkout, room_id, &rooms, &room_types, rules)
    }

    // ==================== calculate_stay_price tests ====================

    #[test]
    fn test_no_rules_is_nights_times_base() {
        assert_eq!(price(date(2024, 3, 1), date(2024, 3, 2), 1, &[]), dec!(150));
        assert_eq!(price(date(2024, 3, 1), date(2024, 3, 8), 1, &[]), dec!(1050));
        assert_eq!(price(date(2024, 3, 1), date(2024, 3, 4), 2, &[]), dec!(750));
    }

    #[test]
    fn test_empty_or_inverted_stay_is_zero() {
        let rules = vec![rule(1, AdjustmentKind::FixedAmount, dec!(10))];
        assert_eq!(price(date(2024, 3, 1), date(2024, 3, 1), 1, &rules), Decimal::ZERO);
        assert_eq!(price(date(2024, 3, 5), date(2024, 3, 1), 1, &rules), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_room_is_zero() {
        assert_eq!(price(date(2024, 3, 1), date(2024, 3, 3), 99, &[]), Decimal::ZERO);
    }

    #[test]
    fn test_unknown_room_type_is_zero() {
        let rooms = vec![Room::new(7, 42, "701")];
        let (_, room_types) = inventory();
        let (checkin, checkout) = (date(2024, 3, 1), date(2024, 3, 3));
        let total = calculate_stay_price(checkin, checkout, 7, &rooms, &room_types, &[]);
        assert_eq!(total, Decimal::ZERO);
    }

    #[test]
    fn test_percentage_every_night() {
        let rules = vec![rule(1, AdjustmentKind::Percentage, dec!(20))];
        assert_eq!(price(date(2024, 3, 1), date(2024, 3, 4), 1, &rules), dec!(540));
    }

    #[test]
    fn test_scoped_rule_ignores_other_room_types() {
        let mut scoped = rule(1, AdjustmentKind::FixedAmount, dec!(100));
        scoped.room_type_id = Some(2);

        assert_eq!(price(date(2024, 3, 1), date(2024, 3, 3), 1, &[scoped.clone()]), dec!(300));
        assert_eq!(price(date(2024, 3, 1), date(2024, 3, 3), 2, &[scoped]), dec!(700));
    }

    #[test]
    fn test_rule_order_changes_result() {
        let a = rule(1, AdjustmentKind::FixedAmount, dec!(10));
        let b = rule(2, AdjustmentKind::Percentage, dec!(10));
        let rooms = vec![Room::new(1, 1, "101")];
        let room_types = vec![RoomType::new(1, "Budget", dec!(100), 1)];
        let (checkin, checkout) = (date(2024, 3, 1), date(2024, 3, 2));

        let forward = [a.clone(), b.clone()];
        let ab = calculate_stay_price(checkin, checkout, 1, &rooms, &room_types, &forward);
        let ba = calculate_stay_price(checkin, checkout, 1, &rooms, &room_types, &[b, a]);
        assert_eq!(ab, dec!(121));
        assert_eq!(ba, dec!(120));
    }

    #[test]
    fn test_weekday_rule_outside_stay_has_no_effect() {
        // 2024-03-04 (Mon) to 2024-03-07 (Thu): Mon, Tue, Wed nights
        let mut weekend = rule(1, AdjustmentKind::Percentage, dec!(50));
        weekend.weekdays = [Weekday::Fri, Weekday::Sat, Weekday::Sun].into_iter().collect();

        let with_rule = price(date(2024, 3, 4), date(2024, 3, 7), 1, &[weekend]);
        assert_eq!(with_rule, price(date(2024, 3, 4), date(2024, 3, 7), 1, &[]));
        assert_eq!(with_rule, dec!(450));
    }

    #[test]
    fn test_weekend_scenario_excludes_checkout_night() {
        let mut weekend = rule(1, AdjustmentKind::Percentage, dec!(20));
        weekend.weekdays = [Weekday::Fri, Weekday::Sat, Weekday::Sun].into_iter().collect();

        assert_eq!(price(date(2024, 1, 5), date(2024, 1, 7), 1, &[weekend]), dec!(360));
    }

    #[test]
    fn test_window_boundaries_are_inclusive() {
        let mut promo = rule(1, AdjustmentKind::FixedAmount, dec!(-50));
        promo.starts_on = date(2024, 3, 2);
        promo.ends_on = date(2024, 3, 3);

        // Nights: Mar 1 (150), Mar 2 (100), Mar 3 (100), Mar 4 (150)
        assert_eq!(price(date(2024, 3, 1), date(2024, 3, 5), 1, &[promo]), dec!(500));
    }

    #[test]
    fn test_negative_total_is_not_clamped() {
        let dump = rule(1, AdjustmentKind::FixedAmount, dec!(-400));
        assert_eq!(price(date(2024, 3, 1), date(2024, 3, 3), 1, &[dump]), dec!(-500));
    }

    // ==================== quote_stay tests ====================

    #[test]
    fn test_quote_breakdown_sums_to_total() {
        let catalog = Catalog::seed();
        let stay = Stay::new(date(2024, 12, 26), date(2024, 12, 30));

        let quote = quote_stay(stay, 5, &catalog, &PricingOptions::default()).unwrap();

        // Suite 400; summer holiday +100 every night; weekend +20 % first.
        // Thu 26: 500, Fri 27: 580, Sat 28: 580, Sun 29: 580
        let amounts: Vec<Decimal> = quote.nights.iter().map(|n| n.amount).collect();
        assert_eq!(amounts, vec![dec!(500), dec!(580), dec!(580), dec!(580)]);
        assert_eq!(quote.nights[1].applied_rules, vec![1, 2]);
        assert_eq!(quote.total, amounts.iter().copied().sum::<Decimal>());
        assert_eq!(quote.total, dec!(2240));
        assert_eq!(quote.room_type_id, 3);
        assert_eq!(quote.base_price, dec!(400));
    }

    #[test]
    fn test_quote_explicit_errors() {
        let mut catalog = Catalog::seed();
        catalog.rooms.push(Room::new(9, 77, "901"));
        let options = PricingOptions::default();

        let empty = Stay::new(date(2024, 3, 2), date(2024, 3, 2));
        let one_night = Stay::new(date(2024, 3, 1), date(2024, 3, 2));

        let err = quote_stay(empty, 1, &catalog, &options).unwrap_err();
        assert_eq!(err.kind(), "empty_stay");

        let err = quote_stay(one_night, 42, &catalog, &options).unwrap_err();
        assert_eq!(err, PricingError::UnknownRoom { room_id: 42 });

        let err = quote_stay(one_night, 9, &catalog, &options).unwrap_err();
        assert_eq!(
            err,
            PricingError::UnknownRoomType {
                room_id: 9,
                room_type_id: 77
            }
        );
        assert!(err.to_string().contains("unknown room type 77"));
    }

    #[test]
    fn test_quote_clamps_negative_total_when_asked() {
        let mut catalog = Catalog::seed();
        catalog.rules = vec![rule(1, AdjustmentKind::FixedAmount, dec!(-400))];
        let stay = Stay::new(date(2024, 3, 1), date(2024, 3, 3));

        let allowed = quote_stay(stay, 1, &catalog, &PricingOptions::default()).unwrap();
        assert_eq!(allowed.total, dec!(-500));

        let clamped = quote_stay(
            stay,
            1,
            &catalog,
            &PricingOptions {
                negative_totals: NegativeTotals::ClampToZero,
                ..PricingOptions::default()
            },
        )
        .unwrap();
        assert_eq!(clamped.total, Decimal::ZERO);
        assert_eq!(clamped.nights[0].amount, dec!(-250));
    }

    #[test]
    fn test_overflow_collapses_to_zero() {
        let (rooms, _) = inventory();
        let room_types = vec![RoomType::new(1, "Palace", Decimal::MAX, 1)];
        let (checkin, checkout) = (date(2024, 3, 1), date(2024, 3, 3));
        let total = calculate_stay_price(checkin, checkout, 1, &rooms, &room_types, &[]);
        assert_eq!(total, Decimal::ZERO);
    }

    // ==================== stay length tests ====================

    #[test]
    fn test_quote_rejects_stay_over_limit() {
        let catalog = Catalog::seed();
        let options = PricingOptions {
            max_stay_nights: 30,
            ..PricingOptions::default()
        };

        let month = Stay::new(date(2024, 3, 1), date(2024, 3, 31));
        let quote = quote_stay(month, 1, &catalog, &options).unwrap();
        assert_eq!(quote.nights.len(), 30);

        let longer = Stay::new(date(2024, 3, 1), date(2024, 4, 1));
        let err = quote_stay(longer, 1, &catalog, &options).unwrap_err();
        assert_eq!(
            err,
            PricingError::StayTooLong {
                nights: 31,
                max_nights: 30
            }
        );
        assert_eq!(err.kind(), "stay_too_long");
    }

    #[test]
    fn test_limit_checked_before_room_lookup() {
        let catalog = Catalog::seed();
        let stay = Stay::new(NaiveDate::MIN, NaiveDate::MAX);

        let err = quote_stay(stay, 404, &catalog, &PricingOptions::default()).unwrap_err();
        assert_eq!(err.kind(), "stay_too_long");
    }

    #[test]
    fn test_default_limit_allows_leap_year() {
        let catalog = Catalog::seed();
        let year = Stay::new(date(2024, 1, 1), date(2025, 1, 1));

        let quote = quote_stay(year, 1, &catalog, &PricingOptions::default()).unwrap();
        assert_eq!(quote.nights.len(), DEFAULT_MAX_STAY_NIGHTS as usize);
    }

    #[test]
    fn test_stay_price_has_no_length_limit() {
        // Ten years without rules: every night at base price
        let total = price(date(2020, 1, 1), date(2030, 1, 1), 1, &[]);
        let nights = Stay::new(date(2020, 1, 1), date(2030, 1, 1)).nights();
        assert_eq!(nights, 3653);
        assert_eq!(total, dec!(150) * Decimal::from(nights));
    }
}
