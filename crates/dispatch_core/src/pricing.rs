//! Fare calculation from the distance-to-center proxy.

use crate::error::DispatchError;
use crate::locations::Location;

/// Currency units (Rs.) charged per unit of distance-proxy difference.
pub const RATE_PER_DISTANCE_UNIT: f64 = 20.0;

/// Calculate the fare between two locations.
///
/// Formula: `fare = |source.distance - destination.distance| * RATE_PER_DISTANCE_UNIT`
///
/// Symmetric, never negative, and zero when both points sit at the same distance.
pub fn compute_fare(source: &Location, destination: &Location) -> f64 {
    PricingConfig::default().fare(source, destination)
}

/// Pricing parameters used by the dispatcher.
///
/// The rate is finite and non-negative, so every fare is too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingConfig {
    rate_per_unit: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            rate_per_unit: RATE_PER_DISTANCE_UNIT,
        }
    }
}

impl PricingConfig {
    /// # Errors
    ///
    /// [DispatchError::InvalidArgument] for a negative, NaN or infinite rate.
    pub fn new(rate_per_unit: f64) -> Result<Self, DispatchError> {
        if !rate_per_unit.is_finite() || rate_per_unit.is_sign_negative() {
            return Err(DispatchError::InvalidArgument(format!(
                "fare rate must be a finite non-negative number, got {rate_per_unit}"
            )));
        }
        Ok(Self { rate_per_unit })
    }

    pub fn fare(&self, source: &Location, destination: &Location) -> f64 {
        let units = source
            .distance_from_center()
            .abs_diff(destination.distance_from_center());
        f64::from(units) * self.rate_per_unit
    }
}
