use crate::models::{parse_slot_blob, DaySchedule, SlotRecord};
use crate::{database::Database, ApiError, ApiResult};
use sqlx::Row;

impl Database {
    /// Write one employee's availability for one date, replacing any
    /// existing slot list wholesale.
    pub async fn set_day_schedule(
        &self,
        store_id: &str,
        employee_id: &str,
        date: &str,
        slots: &[SlotRecord],
    ) -> ApiResult<()> {
        let blob = serde_json::to_string(slots)
            .map_err(|e| ApiError::Internal(format!("Failed to encode schedule slots: {}", e)))?;
        let schedule = DaySchedule::new(
            store_id.to_string(),
            employee_id.to_string(),
            date.to_string(),
            slots.to_vec(),
        );

        sqlx::query(
            "INSERT INTO day_schedules (id, store_id, employee_id, date, slots, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(employee_id, date) DO UPDATE SET
                    slots = excluded.slots,
                    updated_at = excluded.updated_at",
        )
        .bind(&schedule.id)
        .bind(store_id)
        .bind(employee_id)
        .bind(date)
        .bind(&blob)
        .bind(&schedule.created_at)
        .bind(&schedule.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn delete_day_schedule(&self, employee_id: &str, date: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM day_schedules WHERE employee_id = ? AND date = ?")
            .bind(employee_id)
            .bind(date)
            .execute(self.pool())
            .await?;

        Ok(())
    }

    pub async fn get_day_schedule(
        &self,
        employee_id: &str,
        date: &str,
    ) -> ApiResult<Option<DaySchedule>> {
        let row = sqlx::query(
            "SELECT id, store_id, employee_id, date, slots, created_at, updated_at
             FROM day_schedules WHERE employee_id = ? AND date = ?",
        )
        .bind(employee_id)
        .bind(date)
        .fetch_optional(self.pool())
        .await?;

        row.map(schedule_from_row).transpose()
    }

    /// All schedules for a set of employees inside a date range, inclusive
    /// on both ends. Dates are zero-padded YYYY-MM-DD strings, so string
    /// comparison in SQL is chronological.
    pub async fn get_day_schedules_in_range(
        &self,
        employee_ids: &[String],
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<Vec<DaySchedule>> {
        if employee_ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; employee_ids.len()].join(", ");
        let sql = format!(
            "SELECT id, store_id, employee_id, date, slots, created_at, updated_at
             FROM day_schedules
             WHERE employee_id IN ({}) AND date >= ? AND date <= ?
             ORDER BY date ASC",
            placeholders
        );

        let mut query = sqlx::query(&sql);
        for id in employee_ids {
            query = query.bind(id);
        }
        let rows = query
            .bind(start_date)
            .bind(end_date)
            .fetch_all(self.pool())
            .await?;

        rows.into_iter().map(schedule_from_row).collect()
    }
}

fn schedule_from_row(row: sqlx::any::AnyRow) -> ApiResult<DaySchedule> {
    let blob: String = row.try_get("slots")?;
    let slots = parse_slot_blob(&blob)?;

    Ok(DaySchedule {
        id: row.try_get("id")?,
        store_id: row.try_get("store_id")?,
        employee_id: row.try_get("employee_id")?,
        date: row.try_get("date")?,
        slots,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
