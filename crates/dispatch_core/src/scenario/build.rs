use log::info;

use crate::dispatcher::RideManager;

use super::{DispatchConfig, SeedCatalog};

/// Builds a dispatcher from a seed catalog: locations first, then drivers in catalog order.
pub fn build_ride_manager(catalog: &SeedCatalog, config: DispatchConfig) -> RideManager {
    let mut manager = RideManager::new(config, catalog.location_registry());
    for seed in &catalog.drivers {
        manager.add_driver(seed.clone());
    }
    info!(
        "Dispatcher seeded with {} drivers and {} locations",
        catalog.drivers.len(),
        catalog.locations.len()
    );
    manager
}
