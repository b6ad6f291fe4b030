//! Conversion of provider candidates into [`GeocodedAddress`].

use hardal_core::{GeoPoint, GeocodedAddress};

use crate::types::{AddressComponent, GeocodeResult};

/// Returns the `long_name` of the first component tagged with `kind`.
fn component(components: &[AddressComponent], kind: &str) -> Option<String> {
    components
        .iter()
        .find(|c| c.types.iter().any(|t| t == kind))
        .map(|c| c.long_name.clone())
}

/// Converts a provider candidate into a [`GeocodedAddress`].
///
/// Returns `None` if the candidate has no component list at all, in which
/// case nothing about the address can be validated.
#[must_use]
pub fn normalize_result(result: &GeocodeResult) -> Option<GeocodedAddress> {
    let components = result.address_components.as_deref()?;
    let location = result.geometry.location;

    Some(GeocodedAddress {
        street_name: component(components, "route"),
        street_number: component(components, "street_number"),
        postal_code: component(components, "postal_code"),
        locality: component(components, "locality"),
        formatted_address: result.formatted_address.clone(),
        location: GeoPoint::new(location.lat, location.lng),
    })
}
