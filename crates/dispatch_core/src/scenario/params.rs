use bevy_ecs::prelude::Resource;

use crate::pricing::PricingConfig;

/// Dispatch policy knobs. Inserted as a resource into the dispatcher's world.
#[derive(Debug, Clone, Copy, PartialEq, Resource)]
pub struct DispatchConfig {
    /// When false, a request whose source and destination are the same location is rejected
    /// with `InvalidArgument` instead of producing a zero-fare ride.
    pub allow_same_location: bool,
    pub pricing: PricingConfig,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            allow_same_location: true,
            pricing: PricingConfig::default(),
        }
    }
}

impl DispatchConfig {
    pub fn with_same_location_allowed(mut self, allowed: bool) -> Self {
        self.allow_same_location = allowed;
        self
    }

    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }
}
