pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use normalize::normalize_result;
pub use types::{AddressComponent, GeocodeResponse, GeocodeResult, Geometry, LatLng};
