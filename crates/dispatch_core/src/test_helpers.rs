//! Test helpers for common test setup and utilities.
//!
//! This module provides shared test utilities to reduce duplication across test files.

use crate::dispatcher::RideManager;
use crate::ecs::{DriverHandle, RiderHandle, Vehicle};
use crate::locations::{Location, LocationId, LocationRegistry};
use crate::scenario::{DispatchConfig, DriverSeed};

/// Location "A" at distance 7.
pub const LOC_A: LocationId = LocationId(0);
/// Location "B" at distance 11.
pub const LOC_B: LocationId = LocationId(1);
/// Location "C" at distance 2.
pub const LOC_C: LocationId = LocationId(2);
/// Location "D", also at distance 7 (same proxy as "A").
pub const LOC_D: LocationId = LocationId(3);

/// Four test locations: A(7), B(11), C(2), D(7).
pub fn test_locations() -> LocationRegistry {
    LocationRegistry::new(vec![
        Location::new("A", 7),
        Location::new("B", 11),
        Location::new("C", 2),
        Location::new("D", 7),
    ])
}

/// A driver seed with a predictable name and registration.
pub fn test_driver(id: i64) -> DriverSeed {
    DriverSeed::new(
        id,
        format!("Driver {id}"),
        Vehicle::new(format!("KA 00 TS {id:04}"), "Test Hatch"),
    )
}

/// Create a dispatcher over [test_locations] with one driver per entry in `availability`
/// (ids 1..=n, in order) and a single registered rider (id 1).
pub fn dispatcher_with_pool(availability: &[bool]) -> (RideManager, Vec<DriverHandle>, RiderHandle) {
    let mut manager = RideManager::new(DispatchConfig::default(), test_locations());
    let drivers = availability
        .iter()
        .enumerate()
        .map(|(index, available)| {
            let seed = test_driver(index as i64 + 1);
            manager.add_driver(if *available { seed } else { seed.unavailable() })
        })
        .collect();
    let rider = manager.register_rider(1, "Test Rider");
    (manager, drivers, rider)
}
