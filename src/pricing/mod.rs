//! Reservation pricing engine.
//!
//! Computes the total price of a stay by walking each charged night and
//! compounding the pricing rules that apply to it. Exposed in-process and,
//! for the reservation form's live preview, over HTTP/JSON.

pub mod calculators;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{round_money, NightPrice};
pub use routes::router;
pub use services::{
    calculate_stay_price, quote_stay, NegativeTotals, PricingError, PricingOptions, StayQuote,
    DEFAULT_MAX_STAY_NIGHTS,
};
