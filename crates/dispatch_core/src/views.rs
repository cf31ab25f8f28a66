//! Read-only snapshots of participants and rides for display and export.

use std::fmt;

use serde::Serialize;

use crate::ecs::{DriverHandle, RideHandle, RideStatus, RiderHandle, Vehicle};

/// Snapshot of one rider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiderView {
    pub handle: RiderHandle,
    pub id: i64,
    pub name: String,
    pub history: Vec<RideHandle>,
}

impl fmt::Display for RiderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rider: {}, ID: {}", self.name, self.id)
    }
}

/// Snapshot of one driver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverView {
    pub handle: DriverHandle,
    pub id: i64,
    pub name: String,
    pub vehicle: Vehicle,
    pub available: bool,
    pub history: Vec<RideHandle>,
}

impl fmt::Display for DriverView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Driver: {}, ID: {}", self.name, self.id)?;
        writeln!(f, "{}", self.vehicle)?;
        f.write_str(if self.available {
            "Available"
        } else {
            "Unavailable"
        })
    }
}

/// Snapshot of one ride, with participant ids resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideView {
    #[serde(skip)]
    pub handle: RideHandle,
    pub sequence: usize,
    pub rider_id: i64,
    pub rider_name: String,
    pub driver_id: i64,
    pub driver_name: String,
    pub source: String,
    pub destination: String,
    pub price: f64,
    pub status: RideStatus,
}

impl fmt::Display for RideView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "From {} to {} | Price: Rs. {}",
            self.source, self.destination, self.price
        )
    }
}
