//! Command handlers for delivery checks and zone inspection.

use std::path::Path;
use std::sync::Arc;

use hardal_core::resolve_service_area;
use hardal_delivery::DeliveryEngine;
use hardal_geocode::GeocodeClient;

/// Quote delivery for one address and print the result as JSON.
///
/// # Errors
///
/// Returns an error if configuration is incomplete or the zone file fails to
/// load. Geocoding problems are part of the printed quote, not errors.
pub(crate) async fn run_check_delivery(
    address: &str,
    city: &str,
    postal_code: &str,
) -> anyhow::Result<()> {
    let config = hardal_core::load_app_config()?;
    let area = resolve_service_area(config.zone_path.as_deref())?;
    let geocoder = GeocodeClient::with_base_url(
        &config.google_maps_api_key,
        config.geocode_timeout_secs,
        &config.user_agent,
        &config.geocode_base_url,
    )?;
    let engine = DeliveryEngine::new(geocoder, Arc::new(area));

    let quote = engine.evaluate_delivery(address, city, postal_code).await;
    tracing::debug!(outcome = ?quote.outcome, "delivery check finished");
    println!("{}", serde_json::to_string_pretty(&quote)?);

    Ok(())
}

/// Print the service area the server would use.
///
/// # Errors
///
/// Returns an error if the override file cannot be loaded.
pub(crate) fn run_zone(zone_path: Option<&Path>) -> anyhow::Result<()> {
    let area = resolve_service_area(zone_path)?;
    println!("{}", serde_json::to_string_pretty(&area)?);
    Ok(())
}
