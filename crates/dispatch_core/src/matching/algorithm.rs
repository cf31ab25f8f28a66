use crate::ecs::{DriverHandle, RiderHandle};
use crate::locations::Location;

use super::types::DriverCandidate;

/// Decides which driver serves a ride request.
///
/// `candidates` is the full driver pool in registration order, including drivers that are
/// currently unavailable. Implementations must never return an unavailable driver and must be
/// deterministic for a fixed pool order and availability bitmap.
pub trait MatchingAlgorithm: Send + Sync {
    /// Returns the driver to assign, or `None` when nobody can take the ride.
    fn find_match(
        &self,
        rider: RiderHandle,
        source: &Location,
        destination: &Location,
        candidates: &[DriverCandidate],
    ) -> Option<DriverHandle>;
}
