//! Load tests for the dispatcher. Ignored by default; run with `cargo xtask load-test`.

mod support;

use std::time::Instant;

use dispatch_core::LocationId;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use support::TestDispatcherBuilder;

#[test]
#[ignore]
fn load_test_dispatch_with_release_cycle() {
    const DRIVERS: usize = 2_000;
    const RIDERS: usize = 500;
    const REQUESTS: usize = 50_000;

    let mut t = TestDispatcherBuilder::new()
        .with_pool(&vec![true; DRIVERS])
        .with_riders(RIDERS)
        .build();
    let mut rng = StdRng::seed_from_u64(42);

    let start = Instant::now();
    let mut served = 0usize;
    for _ in 0..REQUESTS {
        let rider = t.riders[rng.gen_range(0..RIDERS)];
        let source = LocationId(rng.gen_range(0..4));
        let destination = LocationId(rng.gen_range(0..4));
        if t.manager.request_ride(rider, source, destination).is_ok() {
            served += 1;
        }
        if rng.gen_bool(0.9) {
            let driver = t.drivers[rng.gen_range(0..DRIVERS)];
            t.manager.release_driver(driver).expect("release");
        }
    }
    let elapsed = start.elapsed();

    println!(
        "Served {served}/{REQUESTS} requests with {DRIVERS} drivers in {:.2}s",
        elapsed.as_secs_f64()
    );
    assert_eq!(t.manager.rides().len(), served);
    assert_eq!(
        t.manager.telemetry().rejected_requests as usize,
        REQUESTS - served
    );
}
