//! Ride dispatch core: matches ride requests to available drivers, prices trips
//! from a distance proxy and keeps per-participant ride history.
//!
//! # Quick Start
//!
//! ```no_run
//! use dispatch_core::dispatcher::RideManager;
//! use dispatch_core::locations::LocationId;
//! use dispatch_core::scenario::{build_ride_manager, DispatchConfig, SeedCatalog};
//!
//! let mut manager = build_ride_manager(&SeedCatalog::default(), DispatchConfig::default());
//! let rider = manager.register_rider(1, "Asha");
//! let ride = manager.request_ride(rider, LocationId(0), LocationId(3)).unwrap();
//! println!("{}", manager.ride(ride).unwrap());
//! ```
//!
//! # Architecture
//!
//! - [`ecs`]: components for riders, drivers and rides, plus the roster resources
//! - [`locations`]: immutable location catalog
//! - [`pricing`]: fare calculation
//! - [`matching`]: driver selection policy
//! - [`systems`]: ride lifecycle systems run inside every dispatch
//! - [`dispatcher`]: [`dispatcher::RideManager`], the single-owner orchestrator
//! - [`shared`]: lock-guarded handle for concurrent callers
//! - [`scenario`]: seed catalog and dispatch configuration
//! - [`export`]: driver history files and ride log export

pub mod dispatcher;
pub mod ecs;
pub mod error;
pub mod export;
pub mod locations;
pub mod matching;
pub mod pricing;
pub mod scenario;
pub mod shared;
pub mod systems;
pub mod telemetry;
pub mod views;

#[cfg(feature = "test-helpers")]
pub mod test_helpers;

pub use dispatcher::RideManager;
pub use ecs::{DriverHandle, RideHandle, RideStatus, RiderHandle, Vehicle};
pub use error::DispatchError;
pub use locations::{Location, LocationId, LocationRegistry};
pub use shared::SharedDispatcher;
