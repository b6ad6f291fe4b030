//! Delivery eligibility and fee calculation.
//!
//! Given the address fields from checkout, [`DeliveryEngine::evaluate_delivery`]
//! geocodes the address, checks it against the configured [`ServiceArea`] and
//! quotes a delivery fee tiered by straight-line distance from the kitchen.
//!
//! [`ServiceArea`]: hardal_core::ServiceArea

pub mod engine;
pub mod messages;
pub mod quote;
pub mod tier;
pub mod validate;

pub use engine::{build_geocode_query, quote_address, DeliveryEngine};
pub use quote::{DeliveryQuote, QuoteOutcome, QuoteStatus};
pub use tier::{DeliveryTier, STANDARD_RADIUS_METERS};
pub use validate::{check_address, validate_address, Rejection, ValidationResult};
