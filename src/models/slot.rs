use crate::models::{ServiceSummary, SlotEmployee};
use serde::{Deserialize, Serialize};

/// One offerable appointment window after grouping by employee. Serialized
/// camelCase to match the storefront wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateSlot {
    /// "YYYY-MM-DD"
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub employees: Vec<SlotEmployee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires_resource: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_resources: Option<Vec<AvailableResource>>,
}

/// Resource pool entry attached to a slot that survived capacity filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableResource {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    /// Units still free during the slot: quantity minus overlapping bookings.
    pub available: i64,
}

/// Full result of one availability computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport {
    pub service: ServiceSummary,
    pub use_resources: bool,
    pub availabilities: Vec<CandidateSlot>,
    /// True count before the display cap was applied.
    pub total_availabilities: usize,
    pub displayed_count: usize,
    pub limit_applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
