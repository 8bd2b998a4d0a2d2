use serde::{Deserialize, Serialize};

/// A named pool category, e.g. "Room" or "Massage table".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceType {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl ResourceType {
    pub fn new(store_id: String, name: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            store_id,
            name,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// A concrete pooled unit. `quantity` is how many bookings may consume it
/// concurrently.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub store_id: String,
    pub resource_type_id: String,
    pub name: String,
    pub quantity: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl Resource {
    pub fn new(store_id: String, resource_type_id: String, name: String, quantity: i64) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            store_id,
            resource_type_id,
            name,
            quantity,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// One confirmed consumption of a resource unit for an appointment window.
/// Times are local "HH:MM" clock strings, half-open.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceBooking {
    pub id: String,
    pub store_id: String,
    pub resource_id: String,
    /// "YYYY-MM-DD"
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub created_at: String,
}

impl ResourceBooking {
    pub fn new(
        store_id: String,
        resource_id: String,
        date: String,
        start_time: String,
        end_time: String,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            store_id,
            resource_id,
            date,
            start_time,
            end_time,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
