use crate::api::middleware::error::{ApiError, ApiResult};
use crate::database::Database;
use crate::models::{
    format_clock, parse_clock, AvailabilityReport, CandidateSlot, ClockRange, Employee,
    ScheduleDataError, ServiceSummary, SlotEmployee, SlotRecord, StoreSettings,
};
use crate::services::{filter_by_resources, generate_grid, place_windows, resolve_day};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use std::collections::HashMap;

/// Default horizon when no booking-window limit and no explicit date bound
/// the search.
const MAX_HORIZON_DAYS: i64 = 365;

/// Runs the full availability pipeline: snapshot reads, per-employee
/// per-date resolution and placement, grouping, resource capacity
/// filtering, past-time filtering and the display cap.
#[derive(Clone)]
pub struct AvailabilityService {
    db: Database,
}

/// One placement window before grouping, tagged with its contributor.
#[derive(Debug, Clone)]
struct TaggedWindow {
    date: String,
    window: ClockRange,
    employee: SlotEmployee,
}

impl AvailabilityService {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Compute bookable slots for a service. `now` is the store-local wall
    /// clock; the engine itself never reads the system time.
    pub async fn get_availabilities(
        &self,
        store_id: &str,
        service_id: &str,
        requested_date: Option<NaiveDate>,
        employee_filter: Option<&str>,
        now: NaiveDateTime,
    ) -> ApiResult<AvailabilityReport> {
        let settings = self
            .db
            .get_store_settings(store_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Store settings not found".to_string()))?;

        let service = self
            .db
            .get_service(store_id, service_id)
            .await?
            .filter(|s| s.active)
            .ok_or_else(|| ApiError::NotFound(format!("Service not found: {}", service_id)))?;

        let mut employees = self
            .db
            .list_employees_for_service(store_id, service_id)
            .await?;
        if let Some(filter_id) = employee_filter {
            employees.retain(|e| e.id == filter_id);
        }

        let summary = ServiceSummary::from(&service);
        let use_resources = settings.use_resources && service.resource_type_id.is_some();

        if employees.is_empty() {
            tracing::debug!(service_id, "no qualifying employees for service");
            return Ok(empty_report(
                summary,
                use_resources,
                "No employees are assigned to this service".to_string(),
            ));
        }

        let today = now.date();
        let range_end = booking_horizon(today, requested_date, &settings);

        // Single snapshot of everything the computation needs; the engine
        // never goes back to storage mid-flight.
        let employee_ids: Vec<String> = employees.iter().map(|e| e.id.clone()).collect();
        let schedules = self
            .db
            .get_day_schedules_in_range(
                &employee_ids,
                &today.to_string(),
                &range_end.to_string(),
            )
            .await?;

        let mut by_employee_date: HashMap<(String, String), Vec<SlotRecord>> = HashMap::new();
        for schedule in schedules {
            by_employee_date.insert((schedule.employee_id.clone(), schedule.date.clone()), schedule.slots);
        }

        let tagged = collect_windows(
            &employees,
            &by_employee_date,
            &settings,
            service.duration_minutes,
            today,
            range_end,
        )?;

        let mut slots = group_windows(tagged);

        if use_resources {
            let resource_type_id = service
                .resource_type_id
                .as_deref()
                .unwrap_or_default();
            let resources = self.db.list_resources(store_id).await?;
            let bookings = self
                .db
                .list_resource_bookings_in_range(
                    store_id,
                    &today.to_string(),
                    &range_end.to_string(),
                )
                .await?;
            slots = filter_by_resources(slots, resource_type_id, &resources, &bookings);
        }

        let slots = drop_past_slots(slots, now);

        let total = slots.len();
        let (slots, limit_applied) = if settings.limit_appointments {
            let capped: Vec<CandidateSlot> = slots
                .into_iter()
                .take(settings.max_appointments_displayed)
                .collect();
            let truncated = capped.len() < total;
            (capped, truncated)
        } else {
            (slots, false)
        };

        let displayed = slots.len();
        tracing::info!(
            service_id,
            total,
            displayed,
            limit_applied,
            "computed availabilities"
        );

        let message = if slots.is_empty() {
            Some("No available time slots in the requested period".to_string())
        } else {
            None
        };

        Ok(AvailabilityReport {
            service: summary,
            use_resources,
            availabilities: slots,
            total_availabilities: total,
            displayed_count: displayed,
            limit_applied,
            message,
        })
    }

    /// The editable-grid template for one day: the store's canonical slot
    /// grid with every window flagged not available.
    pub async fn day_grid_template(
        &self,
        store_id: &str,
        date: NaiveDate,
    ) -> ApiResult<Vec<SlotRecord>> {
        let settings = self
            .db
            .get_store_settings(store_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Store settings not found".to_string()))?;

        let (start, end) = working_hours(&settings)?;
        let grid = generate_grid(date, start, end, &settings.open_days, settings.slot_granularity_minutes);

        Ok(grid
            .into_iter()
            .map(|window| SlotRecord {
                start_time: format_clock(window.start),
                end_time: format_clock(window.end),
                is_available: false,
                booking_id: None,
            })
            .collect())
    }
}

fn working_hours(settings: &StoreSettings) -> Result<(u16, u16), ScheduleDataError> {
    Ok((
        parse_clock(&settings.working_hours_start)?,
        parse_clock(&settings.working_hours_end)?,
    ))
}

/// Where the date walk stops: an explicit requested date wins, else the
/// booking-window cutoff, else one year out.
fn booking_horizon(
    today: NaiveDate,
    requested_date: Option<NaiveDate>,
    settings: &StoreSettings,
) -> NaiveDate {
    if let Some(date) = requested_date {
        return date;
    }
    if settings.limit_booking_window {
        return today + Duration::days(settings.booking_window_days);
    }
    today + Duration::days(MAX_HORIZON_DAYS)
}

/// Run resolve + place for every (employee, open date) pair that has a
/// schedule, in employee iteration order per date.
fn collect_windows(
    employees: &[Employee],
    schedules: &HashMap<(String, String), Vec<SlotRecord>>,
    settings: &StoreSettings,
    duration_minutes: u16,
    start: NaiveDate,
    end: NaiveDate,
) -> ApiResult<Vec<TaggedWindow>> {
    let mut tagged = Vec::new();

    let mut date = start;
    while date <= end {
        let weekday = date.weekday().num_days_from_sunday() as u8;
        if settings.is_open_on(weekday) {
            let date_str = date.to_string();
            for employee in employees {
                let key = (employee.id.clone(), date_str.clone());
                let Some(slots) = schedules.get(&key) else {
                    continue;
                };

                let resolved = resolve_day(slots)?;
                if !resolved.has_availability() {
                    continue;
                }

                for block in &resolved.available_blocks {
                    for window in
                        place_windows(*block, duration_minutes, &resolved.unavailable_ranges)
                    {
                        tagged.push(TaggedWindow {
                            date: date_str.clone(),
                            window,
                            employee: SlotEmployee::from(employee),
                        });
                    }
                }
            }
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    Ok(tagged)
}

/// Collapse windows sharing (date, start, end) into one candidate slot,
/// accumulating contributing employees in iteration order, then sort by
/// date and start time. Zero-padded strings make the lexicographic sort the
/// chronological one.
fn group_windows(tagged: Vec<TaggedWindow>) -> Vec<CandidateSlot> {
    let mut slots: Vec<CandidateSlot> = Vec::new();
    let mut index: HashMap<(String, String, String), usize> = HashMap::new();

    for item in tagged {
        let start_time = format_clock(item.window.start);
        let end_time = format_clock(item.window.end);
        let key = (item.date.clone(), start_time.clone(), end_time.clone());

        match index.get(&key) {
            Some(&i) => slots[i].employees.push(item.employee),
            None => {
                index.insert(key, slots.len());
                slots.push(CandidateSlot {
                    date: item.date,
                    start_time,
                    end_time,
                    employees: vec![item.employee],
                    requires_resource: None,
                    available_resources: None,
                });
            }
        }
    }

    slots.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
    slots
}

/// Drop slots whose (date, start) is not strictly in the future.
fn drop_past_slots(slots: Vec<CandidateSlot>, now: NaiveDateTime) -> Vec<CandidateSlot> {
    let today = now.date().to_string();
    let clock = format_clock((now.hour() * 60 + now.minute()) as u16);

    slots
        .into_iter()
        .filter(|slot| slot.date > today || (slot.date == today && slot.start_time > clock))
        .collect()
}

fn empty_report(service: ServiceSummary, use_resources: bool, message: String) -> AvailabilityReport {
    AvailabilityReport {
        service,
        use_resources,
        availabilities: Vec::new(),
        total_availabilities: 0,
        displayed_count: 0,
        limit_applied: false,
        message: Some(message),
    }
}
