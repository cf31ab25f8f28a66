mod support;

use std::fs;

use dispatch_core::export::{
    export_all_driver_histories, export_driver_history, export_rides_csv, export_rides_json,
    format_history_line, history_file_name, ExportError,
};
use dispatch_core::pricing::PricingConfig;
use dispatch_core::scenario::{build_ride_manager, DispatchConfig, SeedCatalog};
use dispatch_core::test_helpers::{LOC_A, LOC_B, LOC_C};
use dispatch_core::{DriverHandle, LocationId};
use bevy_ecs::prelude::Entity;
use support::TestDispatcherBuilder;

#[test]
fn driver_history_file_uses_legacy_line_format() {
    let mut manager = build_ride_manager(&SeedCatalog::default(), DispatchConfig::default());
    let rider = manager.register_rider(7, "Asha");
    // Brigade Road (7) -> Bellary Road (11)
    manager
        .request_ride(rider, LocationId(0), LocationId(3))
        .expect("ride");
    let rahul = manager.list_drivers()[0].handle;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = export_driver_history(&manager, rahul, dir.path()).expect("export");

    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("driver_101_history.txt"));
    let contents = fs::read_to_string(&path).expect("read");
    assert_eq!(contents, "FromBrigade RoadtoBellary Road, Price: Rs. 80\n");
}

#[test]
fn export_all_writes_one_file_per_driver() {
    let mut t = TestDispatcherBuilder::new()
        .with_pool(&[true, true, true])
        .with_riders(1)
        .build();
    t.manager.request_ride(t.riders[0], LOC_A, LOC_B).expect("1");
    t.manager.request_ride(t.riders[0], LOC_B, LOC_C).expect("2");
    t.manager.release_driver(t.drivers[0]).expect("release");
    t.manager.request_ride(t.riders[0], LOC_C, LOC_A).expect("3");

    let dir = tempfile::tempdir().expect("tempdir");
    let paths = export_all_driver_histories(&t.manager, dir.path()).expect("export");
    assert_eq!(paths.len(), 3);

    let first = fs::read_to_string(dir.path().join(history_file_name(1))).expect("driver 1");
    assert_eq!(
        first.lines().collect::<Vec<_>>(),
        vec!["FromAtoB, Price: Rs. 80", "FromCtoA, Price: Rs. 100"]
    );
    let second = fs::read_to_string(dir.path().join(history_file_name(2))).expect("driver 2");
    assert_eq!(second, "FromBtoC, Price: Rs. 180\n");
    let third = fs::read_to_string(dir.path().join(history_file_name(3))).expect("driver 3");
    assert!(third.is_empty());
}

#[test]
fn export_creates_missing_directories() {
    let t = TestDispatcherBuilder::new().with_pool(&[true]).build();
    let dir = tempfile::tempdir().expect("tempdir");
    let nested = dir.path().join("exports").join("drivers");

    let path = export_driver_history(&t.manager, t.drivers[0], &nested).expect("export");
    assert!(path.starts_with(&nested));
    assert!(path.exists());
}

#[test]
fn export_of_unknown_driver_is_an_error() {
    let t = TestDispatcherBuilder::new().with_pool(&[true]).build();
    let dir = tempfile::tempdir().expect("tempdir");
    let bogus = DriverHandle(Entity::from_raw(9_999));

    let err = export_driver_history(&t.manager, bogus, dir.path()).expect_err("unknown driver");
    assert!(matches!(err, ExportError::Dispatch(_)));
}

#[test]
fn ride_log_exports_to_csv_and_json() {
    let mut t = TestDispatcherBuilder::new()
        .with_pool(&[true, true])
        .with_riders(1)
        .build();
    t.manager.request_ride(t.riders[0], LOC_A, LOC_B).expect("1");
    t.manager.request_ride(t.riders[0], LOC_C, LOC_B).expect("2");
    let rides = t.manager.rides();

    let dir = tempfile::tempdir().expect("tempdir");
    let csv_path = dir.path().join("rides.csv");
    export_rides_csv(&rides, &csv_path).expect("csv");
    let csv_text = fs::read_to_string(&csv_path).expect("read csv");
    let mut lines = csv_text.lines();
    assert_eq!(
        lines.next(),
        Some("sequence,rider_id,rider_name,driver_id,driver_name,source,destination,price,status")
    );
    assert_eq!(lines.next(), Some("0,1,Rider 1,1,Driver 1,A,B,80,Ended"));
    assert_eq!(lines.next(), Some("1,1,Rider 1,2,Driver 2,C,B,180,Ended"));
    assert_eq!(lines.next(), None);

    let json_path = dir.path().join("rides.json");
    export_rides_json(&rides, &json_path).expect("json");
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).expect("read json")).expect("parse");
    let array = value.as_array().expect("array");
    assert_eq!(array.len(), 2);
    assert_eq!(array[1]["source"], "C");
    assert_eq!(array[1]["price"], 180.0);
    assert_eq!(array[1]["status"], "Ended");
}

#[test]
fn history_line_keeps_fractional_prices() {
    let mut t = TestDispatcherBuilder::new()
        .with_config(DispatchConfig::default().with_pricing(
            PricingConfig::new(12.5).expect("rate"),
        ))
        .with_pool(&[true])
        .with_riders(1)
        .build();
    let ride = t.manager.request_ride(t.riders[0], LOC_A, LOC_B).expect("ride");
    let view = t.manager.ride(ride).expect("view");
    assert_eq!(format_history_line(&view), "FromAtoB, Price: Rs. 50");

    let mut t = TestDispatcherBuilder::new()
        .with_config(DispatchConfig::default().with_pricing(
            PricingConfig::new(2.5).expect("rate"),
        ))
        .with_pool(&[true])
        .with_riders(1)
        .build();
    let ride = t.manager.request_ride(t.riders[0], LOC_B, LOC_C).expect("ride");
    let view = t.manager.ride(ride).expect("view");
    assert_eq!(format_history_line(&view), "FromBtoC, Price: Rs. 22.5");
}
