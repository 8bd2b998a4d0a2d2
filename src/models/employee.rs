use serde::{Deserialize, Serialize};

/// A person capable of performing a subset of the store's services.
/// Capabilities live in the employee_services join table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,
    pub store_id: String,
    pub name: String,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl Employee {
    pub fn new(store_id: String, name: String) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            store_id,
            name,
            active: true,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Employee identity attached to a candidate slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotEmployee {
    pub id: String,
    pub name: String,
}

impl From<&Employee> for SlotEmployee {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id.clone(),
            name: employee.name.clone(),
        }
    }
}
