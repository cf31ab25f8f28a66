pub mod ride_completed;
pub mod ride_started;

use bevy_ecs::prelude::Schedule;
use bevy_ecs::schedule::{apply_deferred, IntoSystemConfigs};

use ride_completed::ride_completed_system;
use ride_started::ride_started_system;

/// Builds the ride lifecycle schedule: Created -> Started -> Ended, then history bookkeeping.
///
/// Systems are chained so a ride created in the same dispatch call passes through both
/// transitions in one run. [apply_deferred] at the end drops the pending marker before
/// control returns to the dispatcher.
pub fn lifecycle_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((ride_started_system, ride_completed_system, apply_deferred).chain());
    schedule
}
