use serde::{Deserialize, Serialize};

// ===== Clock arithmetic =====

/// Minutes since local midnight. Day-bounded, no timezone offset.
pub type ClockMinutes = u16;

/// Parse a zero-padded "HH:MM" clock string into minutes since midnight.
pub fn parse_clock(value: &str) -> Result<ClockMinutes, ScheduleDataError> {
    let malformed = || ScheduleDataError::MalformedClock(value.to_string());

    let (hours, minutes) = value.split_once(':').ok_or_else(malformed)?;
    if hours.len() != 2 || minutes.len() != 2 {
        return Err(malformed());
    }

    let hours: u16 = hours.parse().map_err(|_| malformed())?;
    let minutes: u16 = minutes.parse().map_err(|_| malformed())?;
    if hours > 24 || minutes > 59 || (hours == 24 && minutes != 0) {
        return Err(malformed());
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight back into zero-padded "HH:MM".
pub fn format_clock(minutes: ClockMinutes) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// A half-open `[start, end)` interval of clock minutes within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockRange {
    pub start: ClockMinutes,
    pub end: ClockMinutes,
}

impl ClockRange {
    pub fn new(start: ClockMinutes, end: ClockMinutes) -> Self {
        Self { start, end }
    }

    /// Half-open overlap test: boundary-touching ranges do not overlap.
    pub fn overlaps(&self, other: &ClockRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// `other` starts exactly where `self` ends.
    pub fn abuts(&self, other: &ClockRange) -> bool {
        self.end == other.start
    }

    pub fn duration(&self) -> ClockMinutes {
        self.end.saturating_sub(self.start)
    }
}

// ===== Persisted slot records =====

/// One entry of a day schedule's slot blob. Schedules are stored as
/// loosely-typed JSON arrays; deserialization enforces this schema on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SlotRecord {
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
}

impl SlotRecord {
    /// Parse the record's clock strings, failing loudly on malformed data.
    pub fn clock_range(&self) -> Result<ClockRange, ScheduleDataError> {
        let start = parse_clock(&self.start_time)?;
        let end = parse_clock(&self.end_time)?;
        if end <= start {
            return Err(ScheduleDataError::InvertedSlot {
                start: self.start_time.clone(),
                end: self.end_time.clone(),
            });
        }
        Ok(ClockRange::new(start, end))
    }
}

/// One employee's availability for one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaySchedule {
    pub id: String,
    pub store_id: String,
    pub employee_id: String,
    /// "YYYY-MM-DD"
    pub date: String,
    pub slots: Vec<SlotRecord>,
    pub created_at: String,
    pub updated_at: String,
}

impl DaySchedule {
    pub fn new(
        store_id: String,
        employee_id: String,
        date: String,
        slots: Vec<SlotRecord>,
    ) -> Self {
        let now = chrono::Utc::now().to_rfc3339();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            store_id,
            employee_id,
            date,
            slots,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Parse a persisted slot blob. A record missing startTime/endTime or
/// carrying a non-boolean flag is corrupt availability data and must not be
/// presented as bookable.
pub fn parse_slot_blob(blob: &str) -> Result<Vec<SlotRecord>, ScheduleDataError> {
    serde_json::from_str(blob).map_err(|e| ScheduleDataError::MalformedBlob(e.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum ScheduleDataError {
    #[error("Malformed clock time: {0}")]
    MalformedClock(String),

    #[error("Slot end {end} is not after start {start}")]
    InvertedSlot { start: String, end: String },

    #[error("Malformed schedule slot data: {0}")]
    MalformedBlob(String),
}
