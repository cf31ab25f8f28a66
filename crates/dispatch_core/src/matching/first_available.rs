use crate::ecs::{DriverHandle, RiderHandle};
use crate::locations::Location;

use super::algorithm::MatchingAlgorithm;
use super::types::DriverCandidate;

/// First-available matching: strict first match by registration order.
///
/// No load balancing, no distance-aware selection, no randomization. The same pool order and
/// availability always produce the same driver.
///
/// Time complexity: O(n) in the size of the pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct FirstAvailableMatching;

impl MatchingAlgorithm for FirstAvailableMatching {
    fn find_match(
        &self,
        _rider: RiderHandle,
        _source: &Location,
        _destination: &Location,
        candidates: &[DriverCandidate],
    ) -> Option<DriverHandle> {
        candidates
            .iter()
            .find(|candidate| candidate.available)
            .map(|candidate| candidate.driver)
    }
}
