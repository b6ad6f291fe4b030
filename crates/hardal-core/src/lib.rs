pub mod address;
pub mod app_config;
pub mod area;
pub mod cart;
pub mod config;
pub mod geo;

use thiserror::Error;

pub use address::GeocodedAddress;
pub use app_config::{AppConfig, Environment};
pub use area::{load_service_area, resolve_service_area, DeliveryZone, PostalRange, ServiceArea};
pub use cart::{calculate_cart_totals, CartPayload, CartTotals};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{haversine_meters, BoundingBox, GeoPoint, EARTH_RADIUS_METERS};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read zone file {path}: {source}")]
    ZoneFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse zone file: {0}")]
    ZoneFileParse(#[source] serde_yaml::Error),

    #[error("zone validation failed: {0}")]
    Validation(String),
}
