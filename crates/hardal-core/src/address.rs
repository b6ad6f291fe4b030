use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// A postal address as resolved by the geocoding provider.
///
/// Component fields are `None` when the provider did not return them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedAddress {
    pub street_name: Option<String>,
    pub street_number: Option<String>,
    pub postal_code: Option<String>,
    pub locality: Option<String>,
    /// Provider's display string, e.g. `"Möllner Landstraße 3, 22111 Hamburg, Deutschland"`.
    pub formatted_address: String,
    pub location: GeoPoint,
}
