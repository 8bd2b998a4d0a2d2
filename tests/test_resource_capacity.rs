mod helpers;

use chrono::{NaiveDate, NaiveDateTime};
use helpers::*;
use slotdesk::database::Database;
use slotdesk::models::{Service, Store};
use slotdesk::services::AvailabilityService;

const TODAY: &str = "2026-09-01";

fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

fn now() -> NaiveDateTime {
    date(TODAY).and_hms_opt(8, 0, 0).unwrap()
}

/// Store with resources enabled, one room-typed service, and one employee
/// available 09:00-10:00 today (two 30-minute windows).
async fn seed_resource_store(db: &Database) -> (Store, Service, String) {
    let store = create_test_store(db, "acme.mystorefront.com").await;
    update_settings(db, &store.id, |s| s.use_resources = true).await;

    let room_type = create_test_resource_type(db, &store.id, "Room").await;
    let service =
        create_test_service(db, &store.id, "Massage", 30, Some(room_type.id.clone())).await;
    let emp = create_capable_employee(db, &store.id, "Ada", &service.id).await;
    db.set_day_schedule(&store.id, &emp.id, TODAY, &available_grid("09:00", "10:00", 15))
        .await
        .unwrap();

    (store, service, room_type.id)
}

#[tokio::test]
async fn test_saturated_resource_excludes_slot() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let service_layer = AvailabilityService::new(db.clone());

    let (store, service, room_type) = seed_resource_store(&db).await;
    let room = create_test_resource(&db, &store.id, &room_type, "Room 1", 2).await;

    // Two concurrent bookings exhaust quantity 2 during the first window.
    create_test_resource_booking(&db, &store.id, &room.id, TODAY, "09:00", "09:30").await;
    create_test_resource_booking(&db, &store.id, &room.id, TODAY, "09:15", "09:45").await;

    let report = service_layer
        .get_availabilities(&store.id, &service.id, Some(date(TODAY)), None, now())
        .await
        .unwrap();

    assert!(report.use_resources);
    // 09:00-09:30 is gone (both bookings overlap it); 09:30-10:00 overlaps
    // only the 09:15-09:45 booking and keeps one free unit.
    let windows: Vec<&str> = report
        .availabilities
        .iter()
        .map(|s| s.start_time.as_str())
        .collect();
    assert_eq!(windows, vec!["09:30"]);

    let available = report.availabilities[0].available_resources.as_ref().unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].quantity, 2);
    assert_eq!(available[0].available, 1);

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_partially_booked_resource_reports_remaining_units() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let service_layer = AvailabilityService::new(db.clone());

    let (store, service, room_type) = seed_resource_store(&db).await;
    let room = create_test_resource(&db, &store.id, &room_type, "Room 1", 2).await;
    create_test_resource_booking(&db, &store.id, &room.id, TODAY, "09:00", "09:30").await;

    let report = service_layer
        .get_availabilities(&store.id, &service.id, Some(date(TODAY)), None, now())
        .await
        .unwrap();

    assert_eq!(report.availabilities.len(), 2);
    let first = &report.availabilities[0];
    assert_eq!(first.start_time, "09:00");
    assert_eq!(
        first.available_resources.as_ref().unwrap()[0].available,
        1
    );
    let second = &report.availabilities[1];
    assert_eq!(
        second.available_resources.as_ref().unwrap()[0].available,
        2
    );

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_second_resource_keeps_slot_alive() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let service_layer = AvailabilityService::new(db.clone());

    let (store, service, room_type) = seed_resource_store(&db).await;
    let room1 = create_test_resource(&db, &store.id, &room_type, "Room 1", 1).await;
    create_test_resource(&db, &store.id, &room_type, "Room 2", 1).await;
    create_test_resource_booking(&db, &store.id, &room1.id, TODAY, "09:00", "10:00").await;

    let report = service_layer
        .get_availabilities(&store.id, &service.id, Some(date(TODAY)), None, now())
        .await
        .unwrap();

    // Room 1 is blocked all morning but Room 2 carries both windows.
    assert_eq!(report.availabilities.len(), 2);
    for slot in &report.availabilities {
        let available = slot.available_resources.as_ref().unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name, "Room 2");
    }

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_empty_pool_is_permissive() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let service_layer = AvailabilityService::new(db.clone());

    // Resources enabled and the service typed, but no resource instances.
    let (store, service, _room_type) = seed_resource_store(&db).await;

    let report = service_layer
        .get_availabilities(&store.id, &service.id, Some(date(TODAY)), None, now())
        .await
        .unwrap();

    assert_eq!(report.availabilities.len(), 2);
    for slot in &report.availabilities {
        assert_eq!(slot.requires_resource, Some(true));
        assert!(slot.available_resources.is_none());
    }

    teardown_test_db(test_db).await;
}

#[tokio::test]
async fn test_untyped_service_skips_resource_filter() {
    let test_db = setup_test_db().await;
    let db = test_db.db();
    let service_layer = AvailabilityService::new(db.clone());

    let store = create_test_store(&db, "acme.mystorefront.com").await;
    update_settings(&db, &store.id, |s| s.use_resources = true).await;
    let service = create_test_service(&db, &store.id, "Haircut", 30, None).await;
    let emp = create_capable_employee(&db, &store.id, "Ada", &service.id).await;
    db.set_day_schedule(&store.id, &emp.id, TODAY, &available_grid("09:00", "10:00", 15))
        .await
        .unwrap();

    let report = service_layer
        .get_availabilities(&store.id, &service.id, Some(date(TODAY)), None, now())
        .await
        .unwrap();

    assert!(!report.use_resources);
    assert_eq!(report.availabilities.len(), 2);
    assert!(report.availabilities[0].available_resources.is_none());

    teardown_test_db(test_db).await;
}
