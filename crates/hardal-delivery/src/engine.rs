use std::sync::Arc;

use hardal_core::{haversine_meters, GeocodedAddress, ServiceArea};
use hardal_geocode::{normalize_result, GeocodeClient, GeocodeError};

use crate::quote::DeliveryQuote;
use crate::validate::{check_address, Rejection};

const COUNTRY: &str = "Germany";

/// Free-text query sent to the geocoder.
///
/// Only match quality depends on this string; the zone checks read the
/// provider's structured components.
#[must_use]
pub fn build_geocode_query(address: &str, city: &str, postal_code: &str) -> String {
    format!("{address}, {postal_code} {city}, {COUNTRY}")
}

/// Quote an already geocoded address against `area`.
#[must_use]
pub fn quote_address(area: &ServiceArea, address: &GeocodedAddress) -> DeliveryQuote {
    if let Err(rejection) = check_address(address, &area.zone) {
        return DeliveryQuote::rejected(rejection, address.formatted_address.clone());
    }

    let distance = haversine_meters(area.origin, address.location);
    DeliveryQuote::quoted(distance, address.formatted_address.clone())
}

/// Checks delivery addresses against a fixed service area.
///
/// Holds no per-request state; one engine serves all requests concurrently.
/// Every call geocodes afresh.
#[derive(Debug)]
pub struct DeliveryEngine {
    geocoder: GeocodeClient,
    area: Arc<ServiceArea>,
}

impl DeliveryEngine {
    #[must_use]
    pub fn new(geocoder: GeocodeClient, area: Arc<ServiceArea>) -> Self {
        Self { geocoder, area }
    }

    #[must_use]
    pub fn area(&self) -> &ServiceArea {
        &self.area
    }

    /// Geocodes the address and quotes delivery for it.
    ///
    /// Never fails: provider errors are reported through
    /// [`QuoteOutcome::NotFound`] or [`QuoteOutcome::LookupFailed`].
    ///
    /// [`QuoteOutcome::NotFound`]: crate::QuoteOutcome::NotFound
    /// [`QuoteOutcome::LookupFailed`]: crate::QuoteOutcome::LookupFailed
    pub async fn evaluate_delivery(
        &self,
        address: &str,
        city: &str,
        postal_code: &str,
    ) -> DeliveryQuote {
        let query = build_geocode_query(address, city, postal_code);

        let candidate = match self.geocoder.geocode(&query).await {
            Ok(Some(candidate)) => candidate,
            Ok(None) => {
                tracing::info!(postal_code, "geocoder found no match for address");
                return DeliveryQuote::not_found();
            }
            Err(GeocodeError::ApiStatus { status, message }) => {
                tracing::warn!(%status, %message, "geocoder rejected request");
                return DeliveryQuote::not_found();
            }
            Err(e) => {
                tracing::warn!(postal_code, error = %e, "geocoding lookup failed");
                return DeliveryQuote::lookup_failed();
            }
        };

        let Some(geocoded) = normalize_result(&candidate) else {
            tracing::warn!("geocoder candidate has no address components");
            return DeliveryQuote::rejected(Rejection::Unverifiable, candidate.formatted_address);
        };

        let quote = quote_address(&self.area, &geocoded);
        tracing::info!(
            postal_code = geocoded.postal_code.as_deref().unwrap_or_default(),
            outcome = ?quote.outcome,
            distance_m = quote.distance_rounded(),
            fee = quote.fee,
            "delivery evaluated"
        );
        quote
    }
}

#[cfg(test)]
mod tests {
    use hardal_core::GeoPoint;

    use super::*;
    use crate::messages;
    use crate::quote::{QuoteOutcome, QuoteStatus};

    fn address_at(location: GeoPoint, postal_code: &str) -> GeocodedAddress {
        GeocodedAddress {
            street_name: Some("Teststraße".to_string()),
            street_number: Some("1".to_string()),
            postal_code: Some(postal_code.to_string()),
            locality: Some("Hamburg".to_string()),
            formatted_address: format!("Teststraße 1, {postal_code} Hamburg, Deutschland"),
            location,
        }
    }

    #[test]
    fn query_joins_fields_with_country() {
        assert_eq!(
            build_geocode_query("Möllner Landstraße 3", "Hamburg", "22111"),
            "Möllner Landstraße 3, 22111 Hamburg, Germany"
        );
    }

    #[test]
    fn origin_itself_is_standard_tier() {
        let area = ServiceArea::hamburg();
        let quote = quote_address(&area, &address_at(area.origin, "22111"));
        assert_eq!(quote.outcome, QuoteOutcome::Quoted);
        assert_eq!(quote.distance_rounded(), Some(0));
        assert_eq!(quote.fee, Some(20));
        assert_eq!(quote.status, QuoteStatus::Success);
    }

    #[test]
    fn city_centre_is_extended_tier() {
        let area = ServiceArea::hamburg();
        let quote = quote_address(&area, &address_at(GeoPoint::new(53.550_3, 9.992_0), "20095"));
        assert_eq!(quote.outcome, QuoteOutcome::Quoted);
        assert_eq!(quote.fee, Some(30));
        assert_eq!(quote.status, QuoteStatus::Warning);
        assert_eq!(quote.message, messages::EXTENDED_FEE);
    }

    #[test]
    fn rejection_skips_distance() {
        let area = ServiceArea::hamburg();
        let quote = quote_address(&area, &address_at(area.origin, "25000"));
        assert_eq!(quote.outcome, QuoteOutcome::Rejected);
        assert!(quote.distance_meters.is_none());
        assert_eq!(quote.message, messages::OUTSIDE_DELIVERY_AREA);
    }
}
