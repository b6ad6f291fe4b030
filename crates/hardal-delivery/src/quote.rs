use serde::Serialize;

use crate::messages;
use crate::tier::DeliveryTier;
use crate::validate::{Rejection, ValidationResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStatus {
    Success,
    Warning,
    Error,
}

/// How the evaluation ended. Drives the HTTP response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuoteOutcome {
    /// In zone; a fee was quoted.
    Quoted,
    /// Geocoded, but failed a structural or zone check.
    Rejected,
    /// The provider had no match for the address.
    NotFound,
    /// The provider could not be reached or answered with garbage.
    LookupFailed,
}

/// Result of one delivery evaluation. Built per request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryQuote {
    pub outcome: QuoteOutcome,
    pub is_available: bool,
    /// Unrounded great-circle distance from the kitchen.
    pub distance_meters: Option<f64>,
    /// Whole euros.
    pub fee: Option<u32>,
    pub message: String,
    pub status: QuoteStatus,
    pub formatted_address: Option<String>,
    pub validation: Option<ValidationResult>,
}

impl DeliveryQuote {
    #[must_use]
    pub fn quoted(distance_meters: f64, formatted_address: String) -> Self {
        let tier = DeliveryTier::for_distance(distance_meters);
        Self {
            outcome: QuoteOutcome::Quoted,
            is_available: true,
            distance_meters: Some(distance_meters),
            fee: Some(tier.fee()),
            message: tier.message().to_string(),
            status: tier.status(),
            formatted_address: Some(formatted_address),
            validation: Some(ValidationResult::valid()),
        }
    }

    #[must_use]
    pub fn rejected(rejection: Rejection, formatted_address: String) -> Self {
        Self {
            outcome: QuoteOutcome::Rejected,
            is_available: false,
            distance_meters: None,
            fee: None,
            message: rejection.message().to_string(),
            status: QuoteStatus::Error,
            formatted_address: Some(formatted_address),
            validation: Some(ValidationResult::rejected(rejection)),
        }
    }

    #[must_use]
    pub fn not_found() -> Self {
        Self::unresolved(QuoteOutcome::NotFound, messages::ADDRESS_NOT_FOUND)
    }

    #[must_use]
    pub fn lookup_failed() -> Self {
        Self::unresolved(QuoteOutcome::LookupFailed, messages::LOOKUP_FAILED)
    }

    fn unresolved(outcome: QuoteOutcome, message: &str) -> Self {
        Self {
            outcome,
            is_available: false,
            distance_meters: None,
            fee: None,
            message: message.to_string(),
            status: QuoteStatus::Error,
            formatted_address: None,
            validation: None,
        }
    }

    /// Distance rounded to whole meters.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn distance_rounded(&self) -> Option<i64> {
        self.distance_meters.map(|d| d.round() as i64)
    }

    /// Distance in kilometres with one decimal, e.g. `"2.4"`.
    #[must_use]
    pub fn distance_km_display(&self) -> Option<String> {
        self.distance_meters.map(|d| format!("{:.1}", d / 1000.0))
    }
}
