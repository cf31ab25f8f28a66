//! Telemetry / KPIs: records completed rides and rejected requests.

use bevy_ecs::prelude::Resource;

use crate::ecs::{DriverHandle, RideHandle, RiderHandle};

/// One completed ride, recorded when the lifecycle reaches `Ended`.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedRideRecord {
    pub ride: RideHandle,
    pub rider: RiderHandle,
    pub driver: DriverHandle,
    pub sequence: usize,
    pub price: f64,
}

/// Collects dispatch telemetry. Inserted as a resource by the dispatcher.
#[derive(Debug, Default, Resource)]
pub struct DispatchTelemetry {
    pub completed_rides: Vec<CompletedRideRecord>,
    /// Requests turned away because no driver was free.
    pub rejected_requests: u64,
    pub released_drivers: u64,
}

impl DispatchTelemetry {
    pub fn total_fares(&self) -> f64 {
        self.completed_rides.iter().map(|record| record.price).sum()
    }
}

/// Aggregated counts at a point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchCounts {
    pub riders: usize,
    pub drivers_available: usize,
    pub drivers_unavailable: usize,
    pub rides: usize,
}

impl DispatchCounts {
    pub fn add_driver(&mut self, available: bool) {
        if available {
            self.drivers_available += 1;
        } else {
            self.drivers_unavailable += 1;
        }
    }

    pub fn drivers(&self) -> usize {
        self.drivers_available + self.drivers_unavailable
    }
}
