use slotdesk::database::Database;
use slotdesk::models::{
    format_clock, parse_clock, Employee, Resource, ResourceBooking, ResourceType, Service,
    SlotRecord, Store, StoreSettings,
};

/// Create a store with default settings (Mon-Fri, 09:00-17:00, 15-minute
/// granularity, no limits).
pub async fn create_test_store(db: &Database, domain: &str) -> Store {
    let store = Store::new(domain.to_string(), "Test Store".to_string());
    db.create_store(&store).await.expect("Failed to create store");
    db.upsert_store_settings(&StoreSettings::defaults(store.id.clone()))
        .await
        .expect("Failed to create settings");
    store
}

pub async fn update_settings<F>(db: &Database, store_id: &str, mutate: F) -> StoreSettings
where
    F: FnOnce(&mut StoreSettings),
{
    let mut settings = db
        .get_store_settings(store_id)
        .await
        .expect("Failed to load settings")
        .expect("Settings missing");
    mutate(&mut settings);
    db.upsert_store_settings(&settings)
        .await
        .expect("Failed to update settings");
    settings
}

pub async fn create_test_service(
    db: &Database,
    store_id: &str,
    title: &str,
    duration_minutes: u16,
    resource_type_id: Option<String>,
) -> Service {
    let service = Service::new(
        store_id.to_string(),
        title.to_string(),
        duration_minutes,
        resource_type_id,
    );
    db.create_service(&service)
        .await
        .expect("Failed to create service");
    service
}

/// Create an active employee already capable of the given service.
pub async fn create_capable_employee(
    db: &Database,
    store_id: &str,
    name: &str,
    service_id: &str,
) -> Employee {
    let employee = Employee::new(store_id.to_string(), name.to_string());
    db.create_employee(&employee)
        .await
        .expect("Failed to create employee");
    db.assign_service(&employee.id, service_id)
        .await
        .expect("Failed to assign service");
    employee
}

/// Build grid-aligned available slot records covering [start, end) at the
/// given granularity, the way the schedule editor writes them.
pub fn available_grid(start: &str, end: &str, granularity: u16) -> Vec<SlotRecord> {
    let start = parse_clock(start).expect("bad start");
    let end = parse_clock(end).expect("bad end");

    let mut slots = Vec::new();
    let mut cursor = start;
    while cursor + granularity <= end {
        slots.push(SlotRecord {
            start_time: format_clock(cursor),
            end_time: format_clock(cursor + granularity),
            is_available: true,
            booking_id: None,
        });
        cursor += granularity;
    }
    slots
}

pub fn unavailable_slot(start: &str, end: &str, booking_id: Option<&str>) -> SlotRecord {
    SlotRecord {
        start_time: start.to_string(),
        end_time: end.to_string(),
        is_available: false,
        booking_id: booking_id.map(str::to_string),
    }
}

pub async fn create_test_resource_type(db: &Database, store_id: &str, name: &str) -> ResourceType {
    let resource_type = ResourceType::new(store_id.to_string(), name.to_string());
    db.create_resource_type(&resource_type)
        .await
        .expect("Failed to create resource type");
    resource_type
}

pub async fn create_test_resource(
    db: &Database,
    store_id: &str,
    resource_type_id: &str,
    name: &str,
    quantity: i64,
) -> Resource {
    let resource = Resource::new(
        store_id.to_string(),
        resource_type_id.to_string(),
        name.to_string(),
        quantity,
    );
    db.create_resource(&resource)
        .await
        .expect("Failed to create resource");
    resource
}

pub async fn create_test_resource_booking(
    db: &Database,
    store_id: &str,
    resource_id: &str,
    date: &str,
    start: &str,
    end: &str,
) -> ResourceBooking {
    let booking = ResourceBooking::new(
        store_id.to_string(),
        resource_id.to_string(),
        date.to_string(),
        start.to_string(),
        end.to_string(),
    );
    db.create_resource_booking(&booking)
        .await
        .expect("Failed to create resource booking");
    booking
}
