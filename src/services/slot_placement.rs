use crate::models::{ClockMinutes, ClockRange};

/// Enumerate the appointment windows of exactly `duration` minutes that fit
/// inside `block` without touching any unavailable range.
///
/// The walk advances from the block's start in full-duration steps, so
/// candidate windows are disjoint and back-to-back: two employees sharing a
/// block alignment can never offer the same time point twice at different
/// start offsets. The cursor advances whether or not a window was emitted.
pub fn place_windows(
    block: ClockRange,
    duration: ClockMinutes,
    unavailable: &[ClockRange],
) -> Vec<ClockRange> {
    let mut windows = Vec::new();
    if duration == 0 {
        return windows;
    }

    let mut cursor = block.start;
    while cursor + duration <= block.end {
        let candidate = ClockRange::new(cursor, cursor + duration);
        if !unavailable.iter().any(|range| candidate.overlaps(range)) {
            windows.push(candidate);
        }
        cursor += duration;
    }
    windows
}
