//! Pricing rule models

use chrono::{NaiveDate, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::room::RoomTypeId;
use crate::dates::deserialize_calendar_date;

pub type RuleId = i64;

/// How a rule's `value` changes the nightly price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    /// `nightly * (1 + value / 100)`
    #[serde(alias = "percentual")]
    Percentage,
    /// `nightly + value`
    #[serde(alias = "fixo", alias = "fixed")]
    FixedAmount,
}

/// Date/weekday-scoped adjustment to the nightly base price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRule {
    pub id: RuleId,
    pub name: String,
    /// First day of the validity window (inclusive)
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub starts_on: NaiveDate,
    /// Last day of the validity window (inclusive)
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub ends_on: NaiveDate,
    pub weekdays: WeekdaySet,
    pub kind: AdjustmentKind,
    /// Signed: positive raises the price, negative lowers it.
    pub value: Decimal,
    /// `None` applies to every room type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_type_id: Option<RoomTypeId>,
}

impl PricingRule {
    /// Check if `date` falls inside the inclusive validity window
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.starts_on <= date && date <= self.ends_on
    }

    /// Check if the rule's room-type scope admits `room_type_id`
    pub fn covers_room_type(&self, room_type_id: RoomTypeId) -> bool {
        match self.room_type_id {
            Some(scope) => scope == room_type_id,
            None => true,
        }
    }
}

/// Weekdays in Sunday-first order, matching the wire indices `0..=6`.
const WEEK: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Subset of the seven weekdays.
///
/// Serialized as a list of day indices with `0 = Sunday` through `6 = Saturday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const EMPTY: Self = Self(0);
    pub const ALL: Self = Self(0b0111_1111);

    pub fn from_weekdays(days: impl IntoIterator<Item = Weekday>) -> Self {
        days.into_iter()
            .fold(Self::EMPTY, |set, day| Self(set.0 | bit(day)))
    }

    pub fn contains(self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Members in Sunday-first order
    pub fn iter(self) -> impl Iterator<Item = Weekday> {
        WEEK.into_iter().filter(move |day| self.contains(*day))
    }
}

fn bit(day: Weekday) -> u8 {
    1 << day.num_days_from_sunday()
}

impl TryFrom<Vec<u8>> for WeekdaySet {
    type Error = String;

    fn try_from(indices: Vec<u8>) -> Result<Self, Self::Error> {
        let mut days = Vec::with_capacity(indices.len());
        for index in indices {
            let day = WEEK
                .get(usize::from(index))
                .ok_or_else(|| format!("weekday index {} out of range 0..=6 (0 = Sunday)", index))?;
            days.push(*day);
        }
        Ok(Self::from_weekdays(days))
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(set: WeekdaySet) -> Self {
        set.iter()
            .map(|day| day.num_days_from_sunday() as u8)
            .collect()
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::from_weekdays(iter)
    }
}
