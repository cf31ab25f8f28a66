use std::fmt;

use bevy_ecs::prelude::{Component, Entity, Resource};
use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::locations::Location;

/// Handle to a registered rider. Cheap to copy; resolved against the dispatcher's world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RiderHandle(pub Entity);

/// Handle to a driver in the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DriverHandle(pub Entity);

/// Handle to a ride in the ride log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RideHandle(pub Entity);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    pub registration: String,
    pub model: String,
}

impl Vehicle {
    pub fn new(registration: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            registration: registration.into(),
            model: model.into(),
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vehicle: {} | Reg#: {}", self.model, self.registration)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct Rider {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Component)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub vehicle: Vehicle,
    /// Gates eligibility for new matches. Cleared on assignment, set again only by an explicit release.
    pub available: bool,
}

impl Driver {
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }
}

/// Append-only list of rides a rider or driver took part in, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Component)]
pub struct RideHistory(Vec<RideHandle>);

impl RideHistory {
    pub(crate) fn push(&mut self, ride: RideHandle) {
        self.0.push(ride);
    }

    pub fn rides(&self) -> &[RideHandle] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RideStatus {
    Created,
    Started,
    Ended,
}

impl fmt::Display for RideStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RideStatus::Created => "Created",
            RideStatus::Started => "Started",
            RideStatus::Ended => "Ended",
        };
        f.write_str(label)
    }
}

/// One matched trip. Everything but `status` is fixed at construction.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct Ride {
    /// Position in the dispatcher's ride log (0-based).
    pub sequence: usize,
    pub rider: RiderHandle,
    pub driver: DriverHandle,
    pub source: Location,
    pub destination: Location,
    pub price: f64,
    status: RideStatus,
}

impl Ride {
    pub fn new(
        sequence: usize,
        rider: RiderHandle,
        driver: DriverHandle,
        source: Location,
        destination: Location,
        price: f64,
    ) -> Self {
        Self {
            sequence,
            rider,
            driver,
            source,
            destination,
            price,
            status: RideStatus::Created,
        }
    }

    pub fn status(&self) -> RideStatus {
        self.status
    }

    pub fn start(&mut self) -> Result<(), DispatchError> {
        self.transition(RideStatus::Created, RideStatus::Started)
    }

    pub fn end(&mut self) -> Result<(), DispatchError> {
        self.transition(RideStatus::Started, RideStatus::Ended)
    }

    fn transition(&mut self, expected: RideStatus, next: RideStatus) -> Result<(), DispatchError> {
        if self.status != expected {
            return Err(DispatchError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}

/// Marker for rides that still have to run through the lifecycle schedule.
#[derive(Debug, Clone, Copy, Default, Component)]
pub struct PendingLifecycle;

/// Drivers in registration order. Selection scans this order.
#[derive(Debug, Clone, Default, Resource)]
pub struct DriverRoster(pub Vec<DriverHandle>);

/// Riders in registration order.
#[derive(Debug, Clone, Default, Resource)]
pub struct RiderRoster(pub Vec<RiderHandle>);

/// Every ride ever created, in creation order. Nothing is removed from it.
#[derive(Debug, Clone, Default, Resource)]
pub struct RideLog(pub Vec<RideHandle>);
