use crate::models::{ClockMinutes, ClockRange};
use chrono::{Datelike, NaiveDate};

/// Partition a day's working hours into the canonical ordered sequence of
/// fixed-width windows. Returns an empty grid when the date's weekday is not
/// an open day. A final partial window that would cross the end boundary is
/// dropped.
pub fn generate_grid(
    date: NaiveDate,
    working_start: ClockMinutes,
    working_end: ClockMinutes,
    open_days: &[u8],
    granularity: ClockMinutes,
) -> Vec<ClockRange> {
    if granularity == 0 || working_end <= working_start {
        return Vec::new();
    }

    let weekday = date.weekday().num_days_from_sunday() as u8;
    if !open_days.contains(&weekday) {
        return Vec::new();
    }

    let mut grid = Vec::new();
    let mut cursor = working_start;
    while cursor + granularity <= working_end {
        grid.push(ClockRange::new(cursor, cursor + granularity));
        cursor += granularity;
    }
    grid
}
