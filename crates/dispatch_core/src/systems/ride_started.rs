use bevy_ecs::prelude::{Entity, Query, With};
use log::{debug, warn};

use crate::ecs::{PendingLifecycle, Ride, RideStatus};

pub fn ride_started_system(mut rides: Query<(Entity, &mut Ride), With<PendingLifecycle>>) {
    for (entity, mut ride) in rides.iter_mut() {
        if ride.status() != RideStatus::Created {
            continue;
        }
        match ride.start() {
            Ok(()) => debug!(
                "Ride started: ride={:?} from {} to {}",
                entity,
                ride.source.name(),
                ride.destination.name()
            ),
            Err(err) => warn!("Ride {:?} could not start: {}", entity, err),
        }
    }
}
