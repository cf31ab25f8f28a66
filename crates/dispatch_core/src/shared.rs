//! Thread-safe dispatcher handle.
//!
//! Every call takes the single dispatcher lock for its whole duration, so driver selection,
//! the availability flip, ride creation and both history appends form one critical section.
//! Two callers can never observe the same driver as free.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::dispatcher::RideManager;
use crate::ecs::{DriverHandle, RideHandle, RiderHandle};
use crate::error::DispatchError;
use crate::locations::LocationId;
use crate::scenario::DriverSeed;
use crate::telemetry::DispatchCounts;
use crate::views::{DriverView, RideView, RiderView};

#[derive(Clone)]
pub struct SharedDispatcher {
    inner: Arc<Mutex<RideManager>>,
}

impl SharedDispatcher {
    pub fn new(manager: RideManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    /// Run `f` with exclusive access to the dispatcher.
    pub fn with_manager<T>(&self, f: impl FnOnce(&mut RideManager) -> T) -> Result<T, DispatchError> {
        let mut guard = self.lock()?;
        Ok(f(&mut guard))
    }

    pub fn add_driver(&self, seed: DriverSeed) -> Result<DriverHandle, DispatchError> {
        self.with_manager(|manager| manager.add_driver(seed))
    }

    pub fn register_rider(&self, id: i64, name: impl Into<String>) -> Result<RiderHandle, DispatchError> {
        let name = name.into();
        self.with_manager(|manager| manager.register_rider(id, name))
    }

    pub fn request_ride(
        &self,
        rider: RiderHandle,
        source: LocationId,
        destination: LocationId,
    ) -> Result<RideHandle, DispatchError> {
        self.lock()?.request_ride(rider, source, destination)
    }

    pub fn release_driver(&self, driver: DriverHandle) -> Result<(), DispatchError> {
        self.lock()?.release_driver(driver)
    }

    pub fn list_drivers(&self) -> Result<Vec<DriverView>, DispatchError> {
        self.with_manager(|manager| manager.list_drivers())
    }

    pub fn list_riders(&self) -> Result<Vec<RiderView>, DispatchError> {
        self.with_manager(|manager| manager.list_riders())
    }

    pub fn ride(&self, handle: RideHandle) -> Result<Option<RideView>, DispatchError> {
        self.with_manager(|manager| manager.ride(handle))
    }

    pub fn rides(&self) -> Result<Vec<RideView>, DispatchError> {
        self.with_manager(|manager| manager.rides())
    }

    pub fn counts(&self) -> Result<DispatchCounts, DispatchError> {
        self.with_manager(|manager| manager.counts())
    }

    fn lock(&self) -> Result<MutexGuard<'_, RideManager>, DispatchError> {
        self.inner
            .lock()
            .map_err(|_| DispatchError::Unavailable("dispatcher lock poisoned".to_string()))
    }
}
