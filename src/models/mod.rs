//! Entity models consumed by the pricing engine

pub mod catalog;
pub mod room;
pub mod rule;
pub mod stay;

pub use catalog::{Catalog, CatalogStats};
pub use room::{Room, RoomId, RoomType, RoomTypeId};
pub use rule::{AdjustmentKind, PricingRule, RuleId, WeekdaySet};
pub use stay::Stay;
