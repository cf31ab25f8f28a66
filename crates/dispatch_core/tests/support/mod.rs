#![allow(dead_code)]

use dispatch_core::ecs::{DriverHandle, RiderHandle};
use dispatch_core::locations::{Location, LocationRegistry};
use dispatch_core::scenario::{DispatchConfig, DriverSeed};
use dispatch_core::test_helpers::{test_driver, test_locations};
use dispatch_core::RideManager;

/// Builder for reproducible dispatchers used across integration tests.
#[derive(Debug, Clone)]
pub struct TestDispatcherBuilder {
    config: DispatchConfig,
    locations: LocationRegistry,
    drivers: Vec<DriverSeed>,
    riders: Vec<(i64, String)>,
}

impl Default for TestDispatcherBuilder {
    fn default() -> Self {
        Self {
            config: DispatchConfig::default(),
            locations: test_locations(),
            drivers: Vec::new(),
            riders: Vec::new(),
        }
    }
}

impl TestDispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: DispatchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_locations(mut self, locations: Vec<Location>) -> Self {
        self.locations = LocationRegistry::new(locations);
        self
    }

    /// Add one driver per flag, ids continuing from the drivers already added.
    pub fn with_pool(mut self, availability: &[bool]) -> Self {
        for available in availability {
            let seed = test_driver(self.drivers.len() as i64 + 1);
            self.drivers
                .push(if *available { seed } else { seed.unavailable() });
        }
        self
    }

    pub fn with_riders(mut self, count: usize) -> Self {
        for index in 0..count {
            let id = self.riders.len() as i64 + 1;
            self.riders.push((id, format!("Rider {}", index + 1)));
        }
        self
    }

    pub fn build(self) -> TestDispatcher {
        let mut manager = RideManager::new(self.config, self.locations);
        let drivers = self
            .drivers
            .into_iter()
            .map(|seed| manager.add_driver(seed))
            .collect();
        let riders = self
            .riders
            .into_iter()
            .map(|(id, name)| manager.register_rider(id, name))
            .collect();
        TestDispatcher {
            manager,
            drivers,
            riders,
        }
    }
}

pub struct TestDispatcher {
    pub manager: RideManager,
    pub drivers: Vec<DriverHandle>,
    pub riders: Vec<RiderHandle>,
}

impl TestDispatcher {
    pub fn availability(&self) -> Vec<bool> {
        self.manager
            .list_drivers()
            .iter()
            .map(|driver| driver.available)
            .collect()
    }

    pub fn history_lengths(&self) -> (Vec<usize>, Vec<usize>) {
        let drivers = self
            .manager
            .list_drivers()
            .iter()
            .map(|driver| driver.history.len())
            .collect();
        let riders = self
            .manager
            .list_riders()
            .iter()
            .map(|rider| rider.history.len())
            .collect();
        (drivers, riders)
    }
}
