use bevy_ecs::prelude::{Commands, Entity, Query, ResMut, With};
use log::{debug, warn};

use crate::ecs::{PendingLifecycle, Ride, RideHandle, RideHistory, RideStatus};
use crate::telemetry::{CompletedRideRecord, DispatchTelemetry};

/// Ends started rides and appends each one to its driver's and rider's history.
///
/// This is the only place histories grow, so every ride lands exactly once in each of the two
/// participants it was built with.
pub fn ride_completed_system(
    mut commands: Commands,
    mut rides: Query<(Entity, &mut Ride), With<PendingLifecycle>>,
    mut histories: Query<&mut RideHistory>,
    mut telemetry: ResMut<DispatchTelemetry>,
) {
    for (entity, mut ride) in rides.iter_mut() {
        if ride.status() != RideStatus::Started {
            continue;
        }
        if let Err(err) = ride.end() {
            warn!("Ride {:?} could not end: {}", entity, err);
            continue;
        }

        let handle = RideHandle(entity);
        if let Ok(mut history) = histories.get_mut(ride.driver.0) {
            history.push(handle);
        }
        if let Ok(mut history) = histories.get_mut(ride.rider.0) {
            history.push(handle);
        }

        telemetry.completed_rides.push(CompletedRideRecord {
            ride: handle,
            rider: ride.rider,
            driver: ride.driver,
            sequence: ride.sequence,
            price: ride.price,
        });
        debug!("Ride ended: ride={:?} price={}", entity, ride.price);

        commands.entity(entity).remove::<PendingLifecycle>();
    }
}
