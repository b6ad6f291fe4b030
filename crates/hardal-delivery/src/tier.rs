use crate::messages;
use crate::quote::QuoteStatus;

/// Addresses up to this distance from the kitchen pay the standard fee.
pub const STANDARD_RADIUS_METERS: f64 = 3_000.0;

const STANDARD_FEE_EUR: u32 = 20;
const EXTENDED_FEE_EUR: u32 = 30;

/// Fee tier for an in-zone address.
///
/// There is no upper cutoff: anything past the standard radius that passed
/// the zone checks gets the extended tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryTier {
    Standard,
    Extended,
}

impl DeliveryTier {
    /// Picks the tier from the unrounded distance. The radius is inclusive.
    #[must_use]
    pub fn for_distance(distance_meters: f64) -> Self {
        if distance_meters <= STANDARD_RADIUS_METERS {
            DeliveryTier::Standard
        } else {
            DeliveryTier::Extended
        }
    }

    /// Fee in whole euros.
    #[must_use]
    pub fn fee(self) -> u32 {
        match self {
            DeliveryTier::Standard => STANDARD_FEE_EUR,
            DeliveryTier::Extended => EXTENDED_FEE_EUR,
        }
    }

    #[must_use]
    pub fn status(self) -> QuoteStatus {
        match self {
            DeliveryTier::Standard => QuoteStatus::Success,
            DeliveryTier::Extended => QuoteStatus::Warning,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            DeliveryTier::Standard => messages::STANDARD_FEE,
            DeliveryTier::Extended => messages::EXTENDED_FEE,
        }
    }
}
