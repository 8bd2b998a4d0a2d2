use serde::{Deserialize, Serialize};

/// A bookable unit of work offered by a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub store_id: String,
    pub title: String,
    /// Appointment length in minutes. Always > 0.
    pub duration_minutes: u16,
    /// When set, booking this service consumes one unit of a resource of
    /// this type for the appointment's duration.
    pub resource_type_id: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Service {
    pub fn new(
        store_id: String,
        title: String,
        duration_minutes: u16,
        resource_type_id: Option<String>,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            store_id,
            title,
            duration_minutes,
            resource_type_id,
            active: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// The service fields echoed back in availability responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceSummary {
    pub id: String,
    pub title: String,
    pub duration: u16,
}

impl From<&Service> for ServiceSummary {
    fn from(service: &Service) -> Self {
        Self {
            id: service.id.clone(),
            title: service.title.clone(),
            duration: service.duration_minutes,
        }
    }
}
