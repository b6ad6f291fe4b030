//! Google Geocoding API response types.
//!
//! Only the fields the delivery check reads are modelled. The API reports
//! its outcome in the top-level `status` field rather than the HTTP status.

use serde::Deserialize;

/// Top-level response from `maps/api/geocode/json`.
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    /// `"OK"`, `"ZERO_RESULTS"`, `"REQUEST_DENIED"`, `"OVER_QUERY_LIMIT"`,
    /// `"INVALID_REQUEST"` or `"UNKNOWN_ERROR"`.
    pub status: String,
    /// Kept raw so that only the first candidate has to be well-formed.
    #[serde(default)]
    pub results: Vec<serde_json::Value>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// One candidate match for the queried address.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResult {
    /// `None` when the provider omitted the component list entirely.
    #[serde(default)]
    pub address_components: Option<Vec<AddressComponent>>,
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub short_name: String,
    /// e.g. `["street_number"]`, `["locality", "political"]`.
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}
