use crate::models::{ClockRange, ScheduleDataError, SlotRecord};

/// One employee's day, reduced to merged availability blocks plus the
/// discrete ranges that block placement.
#[derive(Debug, Clone, Default)]
pub struct ResolvedDay {
    /// Maximal runs of contiguous available slots, sorted by start.
    pub available_blocks: Vec<ClockRange>,
    /// Booked or blocked ranges. Kept discrete: only overlap testing is
    /// needed downstream, so merging them buys nothing.
    pub unavailable_ranges: Vec<ClockRange>,
}

impl ResolvedDay {
    pub fn has_availability(&self) -> bool {
        !self.available_blocks.is_empty()
    }
}

/// Split a day's slot records into availability blocks and blocking ranges.
///
/// Available slots are sorted by start time and merged only when one slot's
/// end exactly equals the next slot's start; a gap starts a new block.
/// Malformed records abort the whole resolution: corrupt schedule data must
/// never be presented as bookable.
pub fn resolve_day(slots: &[SlotRecord]) -> Result<ResolvedDay, ScheduleDataError> {
    let mut available = Vec::new();
    let mut unavailable = Vec::new();

    for slot in slots {
        let range = slot.clock_range()?;
        if slot.is_available {
            available.push(range);
        } else {
            unavailable.push(range);
        }
    }

    available.sort_by_key(|r| r.start);

    let mut blocks: Vec<ClockRange> = Vec::new();
    for range in available {
        match blocks.last_mut() {
            Some(block) if block.abuts(&range) => block.end = range.end,
            _ => blocks.push(range),
        }
    }

    Ok(ResolvedDay {
        available_blocks: blocks,
        unavailable_ranges: unavailable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(start: &str, end: &str, available: bool) -> SlotRecord {
        SlotRecord {
            start_time: start.to_string(),
            end_time: end.to_string(),
            is_available: available,
            booking_id: None,
        }
    }

    #[test]
    fn test_abutting_slots_merge_into_one_block() {
        let day = resolve_day(&[slot("09:00", "09:15", true), slot("09:15", "09:30", true)])
            .unwrap();
        assert_eq!(day.available_blocks, vec![ClockRange::new(540, 570)]);
    }

    #[test]
    fn test_gap_breaks_block() {
        let day = resolve_day(&[slot("09:00", "09:15", true), slot("09:30", "09:45", true)])
            .unwrap();
        assert_eq!(
            day.available_blocks,
            vec![ClockRange::new(540, 555), ClockRange::new(570, 585)]
        );
    }

    #[test]
    fn test_unsorted_input_is_sorted_before_merging() {
        let day = resolve_day(&[
            slot("10:00", "10:15", true),
            slot("09:00", "09:15", true),
            slot("09:15", "09:30", true),
        ])
        .unwrap();
        assert_eq!(
            day.available_blocks,
            vec![ClockRange::new(540, 570), ClockRange::new(600, 615)]
        );
    }

    #[test]
    fn test_unavailable_slots_stay_discrete() {
        let day = resolve_day(&[
            slot("09:00", "09:30", false),
            slot("09:30", "10:00", false),
            slot("10:00", "11:00", true),
        ])
        .unwrap();
        assert_eq!(day.unavailable_ranges.len(), 2);
        assert_eq!(day.available_blocks, vec![ClockRange::new(600, 660)]);
    }

    #[test]
    fn test_zero_available_slots_yields_no_blocks() {
        let day = resolve_day(&[slot("09:00", "09:30", false)]).unwrap();
        assert!(!day.has_availability());
        assert!(day.available_blocks.is_empty());
    }

    #[test]
    fn test_empty_schedule_resolves_empty() {
        let day = resolve_day(&[]).unwrap();
        assert!(!day.has_availability());
        assert!(day.unavailable_ranges.is_empty());
    }

    #[test]
    fn test_malformed_slot_fails_fast() {
        assert!(resolve_day(&[slot("nine", "09:30", true)]).is_err());
        assert!(resolve_day(&[slot("09:30", "09:00", true)]).is_err());
    }
}
