//! The dispatcher: owns every participant and ride, and is the only code that mutates them.
//!
//! All state lives in one [World]. Riders, drivers and rides are entities; the handles given to
//! callers are thin wrappers around their [bevy_ecs::entity::Entity] ids. A `request_ride` call
//! either completes a full match (ride created, driver taken out of the pool, lifecycle run,
//! both histories appended) or returns an error without touching anything.

use bevy_ecs::prelude::{Entity, Schedule, World};
use log::{debug, info, warn};

use crate::ecs::{
    Driver, DriverHandle, DriverRoster, PendingLifecycle, Ride, RideHandle, RideHistory, RideLog,
    RideStatus, Rider, RiderHandle, RiderRoster,
};
use crate::error::DispatchError;
use crate::locations::{Location, LocationId, LocationRegistry};
use crate::matching::{DriverCandidate, MatchingAlgorithm, MatchingAlgorithmResource};
use crate::scenario::{DispatchConfig, DriverSeed};
use crate::systems::lifecycle_schedule;
use crate::telemetry::{DispatchCounts, DispatchTelemetry};
use crate::views::{DriverView, RideView, RiderView};

pub struct RideManager {
    world: World,
    lifecycle: Schedule,
}

impl Default for RideManager {
    fn default() -> Self {
        Self::new(DispatchConfig::default(), LocationRegistry::default())
    }
}

impl RideManager {
    pub fn new(config: DispatchConfig, locations: LocationRegistry) -> Self {
        let mut world = World::new();
        world.insert_resource(config);
        world.insert_resource(locations);
        world.insert_resource(MatchingAlgorithmResource::default());
        world.insert_resource(DriverRoster::default());
        world.insert_resource(RiderRoster::default());
        world.insert_resource(RideLog::default());
        world.insert_resource(DispatchTelemetry::default());
        Self {
            world,
            lifecycle: lifecycle_schedule(),
        }
    }

    /// Replace the driver selection policy (first-available by default).
    pub fn with_matching(mut self, algorithm: Box<dyn MatchingAlgorithm>) -> Self {
        self.world
            .insert_resource(MatchingAlgorithmResource::new(algorithm));
        self
    }

    /// Append a driver to the pool. Ids are not checked for duplicates.
    pub fn add_driver(&mut self, seed: DriverSeed) -> DriverHandle {
        let DriverSeed {
            id,
            name,
            vehicle,
            available,
        } = seed;
        debug!("Adding driver {} ({}), available={}", name, id, available);
        let entity = self
            .world
            .spawn((
                Driver {
                    id,
                    name,
                    vehicle,
                    available,
                },
                RideHistory::default(),
            ))
            .id();
        let handle = DriverHandle(entity);
        self.world.resource_mut::<DriverRoster>().0.push(handle);
        handle
    }

    /// Register a rider. Ids are not checked for duplicates.
    pub fn register_rider(&mut self, id: i64, name: impl Into<String>) -> RiderHandle {
        let name = name.into();
        debug!("Registering rider {} ({})", name, id);
        let entity = self
            .world
            .spawn((Rider { id, name }, RideHistory::default()))
            .id();
        let handle = RiderHandle(entity);
        self.world.resource_mut::<RiderRoster>().0.push(handle);
        handle
    }

    /// Match `rider` with the first available driver and run the ride to completion.
    ///
    /// # Errors
    ///
    /// - [DispatchError::InvalidArgument] for an unknown rider or location, or a same-location
    ///   request when [DispatchConfig::allow_same_location] is off.
    /// - [DispatchError::NoDriversAvailable] when every driver is assigned.
    ///
    /// On error the pool, histories and ride log are unchanged. A `NoDriversAvailable` failure
    /// still bumps [DispatchTelemetry::rejected_requests].
    pub fn request_ride(
        &mut self,
        rider: RiderHandle,
        source: LocationId,
        destination: LocationId,
    ) -> Result<RideHandle, DispatchError> {
        let rider_id = self
            .world
            .get::<Rider>(rider.0)
            .map(|r| r.id)
            .ok_or_else(|| DispatchError::InvalidArgument(format!("unknown rider {:?}", rider)))?;
        let source_location = self.location_or_err(source)?.clone();
        let destination_location = self.location_or_err(destination)?.clone();

        let config = *self.world.resource::<DispatchConfig>();
        if source == destination && !config.allow_same_location {
            return Err(DispatchError::InvalidArgument(format!(
                "source and destination are both {}",
                source_location.name()
            )));
        }

        let candidates = self.driver_candidates();
        let selected = self
            .world
            .resource::<MatchingAlgorithmResource>()
            .find_match(rider, &source_location, &destination_location, &candidates)
            .filter(|driver| {
                candidates
                    .iter()
                    .any(|candidate| candidate.driver == *driver && candidate.available)
            });

        let Some(driver) = selected else {
            self.world
                .resource_mut::<DispatchTelemetry>()
                .rejected_requests += 1;
            warn!(
                "No drivers available for rider {} ({} -> {})",
                rider_id,
                source_location.name(),
                destination_location.name()
            );
            return Err(DispatchError::NoDriversAvailable);
        };

        let driver_id = self
            .world
            .get::<Driver>(driver.0)
            .map(|d| d.id)
            .ok_or_else(|| DispatchError::InvalidArgument(format!("unknown driver {:?}", driver)))?;

        let price = config
            .pricing
            .fare(&source_location, &destination_location);
        let sequence = self.world.resource::<RideLog>().0.len();
        let entity = self
            .world
            .spawn((
                Ride::new(
                    sequence,
                    rider,
                    driver,
                    source_location,
                    destination_location,
                    price,
                ),
                PendingLifecycle,
            ))
            .id();
        let handle = RideHandle(entity);
        self.world.resource_mut::<RideLog>().0.push(handle);

        if let Some(mut assigned) = self.world.get_mut::<Driver>(driver.0) {
            assigned.set_available(false);
        }

        self.lifecycle.run(&mut self.world);
        debug_assert_eq!(
            self.world.get::<Ride>(entity).map(Ride::status),
            Some(RideStatus::Ended)
        );

        info!(
            "Ride #{} matched: rider={} driver={} price={}",
            sequence, rider_id, driver_id, price
        );
        Ok(handle)
    }

    /// Return a driver to the pool. Releasing an available driver is a no-op.
    pub fn release_driver(&mut self, driver: DriverHandle) -> Result<(), DispatchError> {
        {
            let mut assigned = self.world.get_mut::<Driver>(driver.0).ok_or_else(|| {
                DispatchError::InvalidArgument(format!("unknown driver {:?}", driver))
            })?;
            if assigned.is_available() {
                debug!("Driver {} already available", assigned.id);
                return Ok(());
            }
            assigned.set_available(true);
            info!("Driver {} released back to the pool", assigned.id);
        }
        self.world
            .resource_mut::<DispatchTelemetry>()
            .released_drivers += 1;
        Ok(())
    }

    /// Drivers in registration order.
    pub fn list_drivers(&self) -> Vec<DriverView> {
        self.world
            .resource::<DriverRoster>()
            .0
            .iter()
            .filter_map(|handle| self.driver(*handle))
            .collect()
    }

    /// Riders in registration order.
    pub fn list_riders(&self) -> Vec<RiderView> {
        self.world
            .resource::<RiderRoster>()
            .0
            .iter()
            .filter_map(|handle| self.rider(*handle))
            .collect()
    }

    pub fn driver(&self, handle: DriverHandle) -> Option<DriverView> {
        let driver = self.world.get::<Driver>(handle.0)?;
        Some(DriverView {
            handle,
            id: driver.id,
            name: driver.name.clone(),
            vehicle: driver.vehicle.clone(),
            available: driver.available,
            history: self.history_of(handle.0),
        })
    }

    pub fn rider(&self, handle: RiderHandle) -> Option<RiderView> {
        let rider = self.world.get::<Rider>(handle.0)?;
        Some(RiderView {
            handle,
            id: rider.id,
            name: rider.name.clone(),
            history: self.history_of(handle.0),
        })
    }

    pub fn ride(&self, handle: RideHandle) -> Option<RideView> {
        let ride = self.world.get::<Ride>(handle.0)?;
        let rider = self.world.get::<Rider>(ride.rider.0)?;
        let driver = self.world.get::<Driver>(ride.driver.0)?;
        Some(RideView {
            handle,
            sequence: ride.sequence,
            rider_id: rider.id,
            rider_name: rider.name.clone(),
            driver_id: driver.id,
            driver_name: driver.name.clone(),
            source: ride.source.name().to_string(),
            destination: ride.destination.name().to_string(),
            price: ride.price,
            status: ride.status(),
        })
    }

    pub fn rider_history(&self, handle: RiderHandle) -> Result<Vec<RideView>, DispatchError> {
        let rider = self
            .rider(handle)
            .ok_or_else(|| DispatchError::InvalidArgument(format!("unknown rider {:?}", handle)))?;
        Ok(self.resolve(&rider.history))
    }

    pub fn driver_history(&self, handle: DriverHandle) -> Result<Vec<RideView>, DispatchError> {
        let driver = self.driver(handle).ok_or_else(|| {
            DispatchError::InvalidArgument(format!("unknown driver {:?}", handle))
        })?;
        Ok(self.resolve(&driver.history))
    }

    /// The full ride log in creation order.
    pub fn rides(&self) -> Vec<RideView> {
        self.resolve(&self.world.resource::<RideLog>().0)
    }

    pub fn locations(&self) -> &LocationRegistry {
        self.world.resource::<LocationRegistry>()
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations().get(id)
    }

    pub fn telemetry(&self) -> &DispatchTelemetry {
        self.world.resource::<DispatchTelemetry>()
    }

    pub fn counts(&self) -> DispatchCounts {
        let mut counts = DispatchCounts {
            riders: self.world.resource::<RiderRoster>().0.len(),
            rides: self.world.resource::<RideLog>().0.len(),
            ..Default::default()
        };
        for handle in &self.world.resource::<DriverRoster>().0 {
            if let Some(driver) = self.world.get::<Driver>(handle.0) {
                counts.add_driver(driver.available);
            }
        }
        counts
    }

    fn location_or_err(&self, id: LocationId) -> Result<&Location, DispatchError> {
        self.location(id)
            .ok_or_else(|| DispatchError::InvalidArgument(format!("unknown location {}", id.0)))
    }

    fn driver_candidates(&self) -> Vec<DriverCandidate> {
        self.world
            .resource::<DriverRoster>()
            .0
            .iter()
            .filter_map(|handle| {
                self.world
                    .get::<Driver>(handle.0)
                    .map(|driver| DriverCandidate {
                        driver: *handle,
                        available: driver.available,
                    })
            })
            .collect()
    }

    fn history_of(&self, entity: Entity) -> Vec<RideHandle> {
        self.world
            .get::<RideHistory>(entity)
            .map(|history| history.rides().to_vec())
            .unwrap_or_default()
    }

    fn resolve(&self, rides: &[RideHandle]) -> Vec<RideView> {
        rides.iter().filter_map(|handle| self.ride(*handle)).collect()
    }
}
