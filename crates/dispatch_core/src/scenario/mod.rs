//! Dispatch configuration and the seed catalog that populates a fresh dispatcher.

mod build;
mod catalog;
mod params;

pub use build::build_ride_manager;
pub use catalog::{CatalogError, DriverSeed, SeedCatalog};
pub use params::DispatchConfig;
