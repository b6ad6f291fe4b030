use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geo::{BoundingBox, GeoPoint};
use crate::ConfigError;

/// Inclusive range of five-digit postal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalRange {
    pub min: u32,
    pub max: u32,
}

impl PostalRange {
    #[must_use]
    pub fn contains(&self, code: u32) -> bool {
        code >= self.min && code <= self.max
    }
}

/// The area the kitchen delivers to.
///
/// An address is in the zone only when its locality, its postal code and its
/// coordinate all match. The bounding box alone admits neighbouring towns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryZone {
    /// Lowercase city name, matched as a substring of the geocoded locality.
    pub city: String,
    pub bounds: BoundingBox,
    pub postal_ranges: Vec<PostalRange>,
}

impl DeliveryZone {
    #[must_use]
    pub fn matches_locality(&self, locality: &str) -> bool {
        locality
            .to_lowercase()
            .contains(&self.city.to_lowercase())
    }

    #[must_use]
    pub fn contains_postal_code(&self, code: u32) -> bool {
        self.postal_ranges.iter().any(|r| r.contains(code))
    }
}

/// Kitchen location plus the zone it serves. Built once at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceArea {
    pub origin: GeoPoint,
    pub zone: DeliveryZone,
}

impl ServiceArea {
    /// Möllner Landstraße 3, 22111 Hamburg, serving the Hamburg city area.
    #[must_use]
    pub fn hamburg() -> Self {
        Self {
            origin: GeoPoint::new(53.563_963_1, 10.092_267_7),
            zone: DeliveryZone {
                city: "hamburg".to_string(),
                bounds: BoundingBox {
                    north: 53.7541,
                    south: 53.3951,
                    east: 10.3261,
                    west: 9.7145,
                },
                postal_ranges: vec![
                    PostalRange {
                        min: 20095,
                        max: 21149,
                    },
                    PostalRange {
                        min: 22041,
                        max: 22769,
                    },
                ],
            },
        }
    }
}

impl Default for ServiceArea {
    fn default() -> Self {
        Self::hamburg()
    }
}

/// Load and validate a service area from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_service_area(path: &Path) -> Result<ServiceArea, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ZoneFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_service_area(&content)
}

/// The service area from `zone_path` if set, otherwise [`ServiceArea::hamburg`].
///
/// # Errors
///
/// Returns `ConfigError` if the override file cannot be loaded.
pub fn resolve_service_area(zone_path: Option<&Path>) -> Result<ServiceArea, ConfigError> {
    match zone_path {
        Some(path) => load_service_area(path),
        None => Ok(ServiceArea::hamburg()),
    }
}

fn parse_service_area(content: &str) -> Result<ServiceArea, ConfigError> {
    let area: ServiceArea = serde_yaml::from_str(content).map_err(ConfigError::ZoneFileParse)?;
    validate_service_area(&area)?;
    Ok(area)
}

fn validate_service_area(area: &ServiceArea) -> Result<(), ConfigError> {
    validate_point("origin", area.origin)?;

    let zone = &area.zone;
    if zone.city.trim().is_empty() {
        return Err(ConfigError::Validation(
            "zone city must be non-empty".to_string(),
        ));
    }

    let b = zone.bounds;
    validate_point("bounds north-east corner", GeoPoint::new(b.north, b.east))?;
    validate_point("bounds south-west corner", GeoPoint::new(b.south, b.west))?;
    if b.north <= b.south {
        return Err(ConfigError::Validation(format!(
            "bounds north {} must be greater than south {}",
            b.north, b.south
        )));
    }
    if b.east <= b.west {
        return Err(ConfigError::Validation(format!(
            "bounds east {} must be greater than west {}",
            b.east, b.west
        )));
    }

    if zone.postal_ranges.is_empty() {
        return Err(ConfigError::Validation(
            "at least one postal range is required".to_string(),
        ));
    }
    for range in &zone.postal_ranges {
        if range.max > 99_999 {
            return Err(ConfigError::Validation(format!(
                "postal range {}-{} must use five-digit codes",
                range.min, range.max
            )));
        }
        if range.min > range.max {
            return Err(ConfigError::Validation(format!(
                "postal range {}-{} has min greater than max",
                range.min, range.max
            )));
        }
    }

    Ok(())
}

fn validate_point(label: &str, point: GeoPoint) -> Result<(), ConfigError> {
    if !(-90.0..=90.0).contains(&point.lat) || !(-180.0..=180.0).contains(&point.lng) {
        return Err(ConfigError::Validation(format!(
            "{label} ({}, {}) is not a valid coordinate",
            point.lat, point.lng
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "area_test.rs"]
mod tests;
