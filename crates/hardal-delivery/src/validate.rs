//! Structural checks on a geocoded address.
//!
//! Checks run in a fixed order and stop at the first failure, so an address
//! missing its house number reports that even when it is also out of zone.

use std::sync::LazyLock;

use hardal_core::{DeliveryZone, GeocodedAddress};
use regex::Regex;
use serde::Serialize;

use crate::messages;

static POSTAL_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}$").expect("valid postal code regex"));

/// Why an address was refused.
///
/// Locality, postal range and bounding box failures are distinct here but
/// share one customer-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The provider returned no address components for the candidate.
    Unverifiable,
    MissingStreet,
    LocalityOutsideZone,
    InvalidPostalCode,
    PostalCodeOutsideZone,
    OutsideBounds,
}

impl Rejection {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Rejection::Unverifiable => messages::ADDRESS_UNVERIFIABLE,
            Rejection::MissingStreet => messages::INCOMPLETE_STREET,
            Rejection::InvalidPostalCode => messages::INVALID_POSTAL_CODE,
            Rejection::LocalityOutsideZone
            | Rejection::PostalCodeOutsideZone
            | Rejection::OutsideBounds => messages::OUTSIDE_DELIVERY_AREA,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            reason: None,
        }
    }

    #[must_use]
    pub fn rejected(rejection: Rejection) -> Self {
        Self {
            is_valid: false,
            reason: Some(rejection.message().to_string()),
        }
    }
}

impl From<Result<(), Rejection>> for ValidationResult {
    fn from(outcome: Result<(), Rejection>) -> Self {
        match outcome {
            Ok(()) => Self::valid(),
            Err(rejection) => Self::rejected(rejection),
        }
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Runs every zone check against `address` and reports the first failure.
///
/// # Errors
///
/// Returns the [`Rejection`] for the first check that fails.
pub fn check_address(address: &GeocodedAddress, zone: &DeliveryZone) -> Result<(), Rejection> {
    if present(address.street_number.as_deref()).is_none()
        || present(address.street_name.as_deref()).is_none()
    {
        return Err(Rejection::MissingStreet);
    }

    match present(address.locality.as_deref()) {
        Some(locality) if zone.matches_locality(locality) => {}
        _ => return Err(Rejection::LocalityOutsideZone),
    }

    let postal_code = address
        .postal_code
        .as_deref()
        .filter(|code| POSTAL_CODE_RE.is_match(code))
        .ok_or(Rejection::InvalidPostalCode)?;

    let code: u32 = postal_code
        .parse()
        .map_err(|_| Rejection::InvalidPostalCode)?;
    if !zone.contains_postal_code(code) {
        return Err(Rejection::PostalCodeOutsideZone);
    }

    if !zone.bounds.contains(address.location) {
        return Err(Rejection::OutsideBounds);
    }

    Ok(())
}

/// [`check_address`] as the customer-facing [`ValidationResult`].
#[must_use]
pub fn validate_address(address: &GeocodedAddress, zone: &DeliveryZone) -> ValidationResult {
    check_address(address, zone).into()
}
