//! Catalog: the rooms, room types and pricing rules a quote is computed against.

use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::room::{Room, RoomId, RoomType, RoomTypeId};
use super::rule::{AdjustmentKind, PricingRule, WeekdaySet};
use crate::error::CatalogError;

/// Immutable set of entity collections handed to the pricing engine.
///
/// Rule order is significant: applicable rules compound in the order they
/// appear in `rules`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub room_types: Vec<RoomType>,
    #[serde(default)]
    pub rules: Vec<PricingRule>,
}

/// Collection sizes, for logging and the catalog endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub rooms: usize,
    pub room_types: usize,
    pub rules: usize,
}

impl Catalog {
    pub fn new(rooms: Vec<Room>, room_types: Vec<RoomType>, rules: Vec<PricingRule>) -> Self {
        Self {
            rooms,
            room_types,
            rules,
        }
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            rooms: self.rooms.len(),
            room_types: self.room_types.len(),
            rules: self.rules.len(),
        }
    }

    /// Rooms whose room type does not resolve. They cannot be priced.
    pub fn dangling_rooms(&self) -> Vec<RoomId> {
        let known: HashSet<RoomTypeId> = self.room_types.iter().map(|t| t.id).collect();
        self.rooms
            .iter()
            .filter(|r| !known.contains(&r.room_type_id))
            .map(|r| r.id)
            .collect()
    }

    /// Check structural invariants, reporting every violation at once.
    ///
    /// Dangling room-type references are allowed; see [`Catalog::dangling_rooms`].
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut errors = Vec::new();

        for id in duplicates(self.rooms.iter().map(|r| r.id)) {
            errors.push(format!("duplicate room id {}", id));
        }
        for id in duplicates(self.room_types.iter().map(|t| t.id)) {
            errors.push(format!("duplicate room type id {}", id));
        }
        for id in duplicates(self.rules.iter().map(|r| r.id)) {
            errors.push(format!("duplicate pricing rule id {}", id));
        }

        for room_type in &self.room_types {
            if room_type.base_price < Decimal::ZERO {
                errors.push(format!(
                    "room type {} has negative base price {}",
                    room_type.id, room_type.base_price
                ));
            }
        }

        for rule in &self.rules {
            if rule.ends_on < rule.starts_on {
                errors.push(format!(
                    "pricing rule {} ends on {} before it starts on {}",
                    rule.id, rule.ends_on, rule.starts_on
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Invalid { errors })
        }
    }

    /// Demo inventory of the pousada, used when no catalog file is configured
    pub fn seed() -> Self {
        let standard = RoomType::new(1, "Standard", dec!(150.00), 2);
        let deluxe = RoomType::new(2, "Deluxe", dec!(250.00), 3);
        let suite = RoomType::new(3, "Suíte", dec!(400.00), 4);

        let rooms = vec![
            Room::new(1, standard.id, "101"),
            Room::new(2, standard.id, "102"),
            Room::new(3, deluxe.id, "201"),
            Room::new(4, deluxe.id, "202"),
            Room::new(5, suite.id, "301"),
        ];

        let rules = vec![
            PricingRule {
                id: 1,
                name: "Fim de Semana".to_string(),
                starts_on: ymd(2023, 1, 1),
                ends_on: ymd(2025, 12, 31),
                weekdays: [Weekday::Fri, Weekday::Sat, Weekday::Sun].into_iter().collect(),
                kind: AdjustmentKind::Percentage,
                value: dec!(20),
                room_type_id: None,
            },
            PricingRule {
                id: 2,
                name: "Feriado de Verão".to_string(),
                starts_on: ymd(2024, 12, 20),
                ends_on: ymd(2025, 1, 10),
                weekdays: WeekdaySet::ALL,
                kind: AdjustmentKind::FixedAmount,
                value: dec!(100),
                room_type_id: Some(suite.id),
            },
        ];

        Self::new(rooms, vec![standard, deluxe, suite], rules)
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

fn duplicates(ids: impl Iterator<Item = i64>) -> Vec<i64> {
    let mut seen = HashSet::new();
    let mut dups = Vec::new();
    for id in ids {
        if !seen.insert(id) && !dups.contains(&id) {
            dups.push(id);
        }
    }
    dups
}
