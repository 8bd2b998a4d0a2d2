use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    pub domain: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Store {
    pub fn new(domain: String, name: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            domain,
            name,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Per-store booking configuration. Working hours are local "HH:MM" clock
/// strings; open_days are weekday numbers 0=Sunday..6=Saturday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    pub store_id: String,
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub open_days: Vec<u8>,
    pub slot_granularity_minutes: u16,
    pub use_resources: bool,
    pub limit_booking_window: bool,
    pub booking_window_days: i64,
    pub limit_appointments: bool,
    pub max_appointments_displayed: usize,
    pub updated_at: String,
}

impl StoreSettings {
    /// Monday-to-Friday 09:00-17:00 defaults for a freshly created store.
    pub fn defaults(store_id: String) -> Self {
        Self {
            store_id,
            working_hours_start: "09:00".to_string(),
            working_hours_end: "17:00".to_string(),
            open_days: vec![1, 2, 3, 4, 5],
            slot_granularity_minutes: 15,
            use_resources: false,
            limit_booking_window: false,
            booking_window_days: 30,
            limit_appointments: false,
            max_appointments_displayed: 50,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn is_open_on(&self, weekday: u8) -> bool {
        self.open_days.contains(&weekday)
    }
}
