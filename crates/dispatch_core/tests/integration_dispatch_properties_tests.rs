mod support;

use std::collections::HashMap;

use dispatch_core::ecs::RideHandle;
use dispatch_core::pricing::compute_fare;
use dispatch_core::{DispatchError, Location, LocationId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use support::TestDispatcherBuilder;

const LOCATION_COUNT: usize = 4;

fn random_pool(rng: &mut StdRng, size: usize) -> Vec<bool> {
    (0..size).map(|_| rng.gen_bool(0.5)).collect()
}

fn random_route(rng: &mut StdRng) -> (LocationId, LocationId) {
    (
        LocationId(rng.gen_range(0..LOCATION_COUNT)),
        LocationId(rng.gen_range(0..LOCATION_COUNT)),
    )
}

#[test]
fn every_ride_is_in_exactly_one_rider_and_one_driver_history() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..25 {
        let size = rng.gen_range(0..8);
        let pool = random_pool(&mut rng, size);
        let mut t = TestDispatcherBuilder::new()
            .with_pool(&pool)
            .with_riders(3)
            .build();

        for _ in 0..12 {
            let rider = t.riders[rng.gen_range(0..t.riders.len())];
            let (source, destination) = random_route(&mut rng);
            let _ = t.manager.request_ride(rider, source, destination);
        }

        let mut rider_hits: HashMap<RideHandle, usize> = HashMap::new();
        let mut driver_hits: HashMap<RideHandle, usize> = HashMap::new();
        for rider in t.manager.list_riders() {
            for ride in &rider.history {
                *rider_hits.entry(*ride).or_default() += 1;
                let view = t.manager.ride(*ride).expect("ride in log");
                assert_eq!(view.rider_id, rider.id);
            }
        }
        for driver in t.manager.list_drivers() {
            for ride in &driver.history {
                *driver_hits.entry(*ride).or_default() += 1;
                let view = t.manager.ride(*ride).expect("ride in log");
                assert_eq!(view.driver_id, driver.id);
                assert!(!driver.available, "assigned driver must stay unavailable");
            }
        }

        let log = t.manager.rides();
        assert_eq!(rider_hits.len(), log.len());
        assert_eq!(driver_hits.len(), log.len());
        assert!(rider_hits.values().all(|hits| *hits == 1));
        assert!(driver_hits.values().all(|hits| *hits == 1));
    }
}

#[test]
fn rides_never_exceed_initially_available_drivers() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..25 {
        let size = rng.gen_range(1..10);
        let pool = random_pool(&mut rng, size);
        let free = pool.iter().filter(|available| **available).count();
        let mut t = TestDispatcherBuilder::new()
            .with_pool(&pool)
            .with_riders(1)
            .build();

        let mut rejected = 0;
        for _ in 0..12 {
            let (source, destination) = random_route(&mut rng);
            match t.manager.request_ride(t.riders[0], source, destination) {
                Ok(_) => {}
                Err(DispatchError::NoDriversAvailable) => rejected += 1,
                Err(other) => panic!("unexpected error: {other}"),
            }
        }

        assert_eq!(t.manager.rides().len(), free.min(12));
        assert_eq!(rejected, 12 - free.min(12));
        assert_eq!(t.manager.telemetry().rejected_requests, rejected as u64);
        assert!(t.availability().iter().all(|available| !available) || free > 12);
    }
}

#[test]
fn selection_is_repeatable_for_the_same_pool() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..20 {
        let pool = random_pool(&mut rng, 6);
        let chosen: Vec<Option<i64>> = (0..3)
            .map(|_| {
                let mut t = TestDispatcherBuilder::new()
                    .with_pool(&pool)
                    .with_riders(1)
                    .build();
                t.manager
                    .request_ride(t.riders[0], LocationId(0), LocationId(1))
                    .ok()
                    .and_then(|ride| t.manager.ride(ride))
                    .map(|view| view.driver_id)
            })
            .collect();
        let expected = pool
            .iter()
            .position(|available| *available)
            .map(|index| index as i64 + 1);
        assert!(chosen.iter().all(|pick| *pick == expected));
    }
}

#[test]
fn fare_is_symmetric_and_zero_only_for_equal_distance() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..200 {
        let a = Location::new("a", rng.gen_range(0..50));
        let b = Location::new("b", rng.gen_range(0..50));
        let ab = compute_fare(&a, &b);
        assert_eq!(ab, compute_fare(&b, &a));
        assert!(ab >= 0.0);
        assert_eq!(ab == 0.0, a.distance_from_center() == b.distance_from_center());
        assert_eq!(compute_fare(&a, &a), 0.0);
    }
}
