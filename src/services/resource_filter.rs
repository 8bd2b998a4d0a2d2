use crate::models::{
    parse_clock, AvailableResource, CandidateSlot, ClockRange, Resource, ResourceBooking,
};

/// Keep only slots with at least one free unit in the service's resource
/// pool, attaching the per-resource availability that survives.
///
/// `resources` is the store's full pool; it is restricted here to the
/// service's resource type. An empty restricted pool is treated permissively:
/// every slot passes through flagged as resource-requiring, with no pool
/// attached. A resource is free for a slot when the count of bookings on it
/// overlapping the slot's interval is below its quantity.
pub fn filter_by_resources(
    slots: Vec<CandidateSlot>,
    resource_type_id: &str,
    resources: &[Resource],
    bookings: &[ResourceBooking],
) -> Vec<CandidateSlot> {
    let pool: Vec<&Resource> = resources
        .iter()
        .filter(|r| r.resource_type_id == resource_type_id)
        .collect();

    if pool.is_empty() {
        tracing::warn!(
            resource_type_id,
            "resource filtering requested with an empty pool, passing slots through"
        );
        return slots
            .into_iter()
            .map(|mut slot| {
                slot.requires_resource = Some(true);
                slot
            })
            .collect();
    }

    let mut surviving = Vec::new();
    for mut slot in slots {
        let interval = match slot_interval(&slot) {
            Some(interval) => interval,
            None => continue,
        };

        let mut available = Vec::new();
        for resource in &pool {
            let overlapping = bookings
                .iter()
                .filter(|b| b.resource_id == resource.id && b.date == slot.date)
                .filter(|b| booking_overlaps(b, &interval))
                .count() as i64;

            if overlapping < resource.quantity {
                available.push(AvailableResource {
                    id: resource.id.clone(),
                    name: resource.name.clone(),
                    quantity: resource.quantity,
                    available: resource.quantity - overlapping,
                });
            }
        }

        if !available.is_empty() {
            slot.requires_resource = Some(true);
            slot.available_resources = Some(available);
            surviving.push(slot);
        }
    }
    surviving
}

fn slot_interval(slot: &CandidateSlot) -> Option<ClockRange> {
    let start = parse_clock(&slot.start_time).ok()?;
    let end = parse_clock(&slot.end_time).ok()?;
    Some(ClockRange::new(start, end))
}

fn booking_overlaps(booking: &ResourceBooking, interval: &ClockRange) -> bool {
    match (parse_clock(&booking.start_time), parse_clock(&booking.end_time)) {
        (Ok(start), Ok(end)) => ClockRange::new(start, end).overlaps(interval),
        // Unreadable booking rows cannot be counted against capacity;
        // fall back to not blocking the slot.
        _ => {
            tracing::warn!(booking_id = %booking.id, "skipping malformed resource booking");
            false
        }
    }
}
