pub mod algorithm;
pub mod first_available;
pub mod types;

use bevy_ecs::prelude::Resource;

pub use algorithm::MatchingAlgorithm;
pub use first_available::FirstAvailableMatching;
pub use types::DriverCandidate;

/// Resource wrapper for the matching algorithm trait object.
#[derive(Resource)]
pub struct MatchingAlgorithmResource(pub Box<dyn MatchingAlgorithm>);

impl MatchingAlgorithmResource {
    pub fn new(algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        Self(algorithm)
    }
}

impl Default for MatchingAlgorithmResource {
    fn default() -> Self {
        Self::new(Box::new(FirstAvailableMatching))
    }
}

impl std::ops::Deref for MatchingAlgorithmResource {
    type Target = dyn MatchingAlgorithm;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
