use crate::{database::Database, ApiError, ApiResult};
use crate::models::{Store, StoreSettings};
use sqlx::Row;

impl Database {
    pub async fn create_store(&self, store: &Store) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO stores (id, domain, name, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&store.id)
        .bind(&store.domain)
        .bind(&store.name)
        .bind(&store.created_at)
        .bind(&store.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn get_store(&self, id: &str) -> ApiResult<Option<Store>> {
        let row = sqlx::query(
            "SELECT id, domain, name, created_at, updated_at FROM stores WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        row.map(store_from_row).transpose()
    }

    pub async fn get_store_by_domain(&self, domain: &str) -> ApiResult<Option<Store>> {
        let row = sqlx::query(
            "SELECT id, domain, name, created_at, updated_at FROM stores WHERE domain = ?",
        )
        .bind(domain)
        .fetch_optional(self.pool())
        .await?;

        row.map(store_from_row).transpose()
    }

    pub async fn get_store_settings(&self, store_id: &str) -> ApiResult<Option<StoreSettings>> {
        let row = sqlx::query(
            "SELECT store_id, working_hours_start, working_hours_end, open_days,
                    slot_granularity_minutes, use_resources, limit_booking_window,
                    booking_window_days, limit_appointments, max_appointments_displayed,
                    updated_at
             FROM store_settings WHERE store_id = ?",
        )
        .bind(store_id)
        .fetch_optional(self.pool())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let open_days_blob: String = row.try_get("open_days")?;
        let open_days: Vec<u8> = serde_json::from_str(&open_days_blob)
            .map_err(|e| ApiError::Internal(format!("Corrupt open_days for store: {}", e)))?;

        Ok(Some(StoreSettings {
            store_id: row.try_get("store_id")?,
            working_hours_start: row.try_get("working_hours_start")?,
            working_hours_end: row.try_get("working_hours_end")?,
            open_days,
            slot_granularity_minutes: row.try_get::<i64, _>("slot_granularity_minutes")? as u16,
            use_resources: row.try_get::<i64, _>("use_resources")? != 0,
            limit_booking_window: row.try_get::<i64, _>("limit_booking_window")? != 0,
            booking_window_days: row.try_get("booking_window_days")?,
            limit_appointments: row.try_get::<i64, _>("limit_appointments")? != 0,
            max_appointments_displayed: row.try_get::<i64, _>("max_appointments_displayed")?
                as usize,
            updated_at: row.try_get("updated_at")?,
        }))
    }

    /// Settings are written as one row per store, replaced wholesale.
    pub async fn upsert_store_settings(&self, settings: &StoreSettings) -> ApiResult<()> {
        let open_days = serde_json::to_string(&settings.open_days)
            .map_err(|e| ApiError::Internal(format!("Failed to encode open_days: {}", e)))?;
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO store_settings (store_id, working_hours_start, working_hours_end,
                    open_days, slot_granularity_minutes, use_resources, limit_booking_window,
                    booking_window_days, limit_appointments, max_appointments_displayed, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
             ON CONFLICT(store_id) DO UPDATE SET
                    working_hours_start = excluded.working_hours_start,
                    working_hours_end = excluded.working_hours_end,
                    open_days = excluded.open_days,
                    slot_granularity_minutes = excluded.slot_granularity_minutes,
                    use_resources = excluded.use_resources,
                    limit_booking_window = excluded.limit_booking_window,
                    booking_window_days = excluded.booking_window_days,
                    limit_appointments = excluded.limit_appointments,
                    max_appointments_displayed = excluded.max_appointments_displayed,
                    updated_at = excluded.updated_at",
        )
        .bind(&settings.store_id)
        .bind(&settings.working_hours_start)
        .bind(&settings.working_hours_end)
        .bind(&open_days)
        .bind(settings.slot_granularity_minutes as i64)
        .bind(settings.use_resources as i64)
        .bind(settings.limit_booking_window as i64)
        .bind(settings.booking_window_days)
        .bind(settings.limit_appointments as i64)
        .bind(settings.max_appointments_displayed as i64)
        .bind(&now)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    // Operator tokens

    pub async fn create_operator_token(&self, token: &str, store_id: &str) -> ApiResult<()> {
        let now = chrono::Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO operator_tokens (token, store_id, created_at) VALUES (?, ?, ?)",
        )
        .bind(token)
        .bind(store_id)
        .bind(&now)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Resolve an operator bearer token to its store.
    pub async fn get_store_id_by_token(&self, token: &str) -> ApiResult<Option<String>> {
        let row = sqlx::query("SELECT store_id FROM operator_tokens WHERE token = ?")
            .bind(token)
            .fetch_optional(self.pool())
            .await?;

        row.map(|r| r.try_get("store_id").map_err(ApiError::from))
            .transpose()
    }

    pub async fn store_has_operator_token(&self, store_id: &str) -> ApiResult<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM operator_tokens WHERE store_id = ?",
        )
        .bind(store_id)
        .fetch_one(self.pool())
        .await?;

        Ok(count > 0)
    }
}

fn store_from_row(row: sqlx::any::AnyRow) -> ApiResult<Store> {
    Ok(Store {
        id: row.try_get("id")?,
        domain: row.try_get("domain")?,
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
