use crate::models::{Resource, ResourceBooking, ResourceType};
use crate::{database::Database, ApiResult};
use sqlx::Row;

impl Database {
    pub async fn create_resource_type(&self, resource_type: &ResourceType) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO resource_types (id, store_id, name, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&resource_type.id)
        .bind(&resource_type.store_id)
        .bind(&resource_type.name)
        .bind(&resource_type.created_at)
        .bind(&resource_type.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn create_resource(&self, resource: &Resource) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO resources (id, store_id, resource_type_id, name, quantity,
                    created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&resource.id)
        .bind(&resource.store_id)
        .bind(&resource.resource_type_id)
        .bind(&resource.name)
        .bind(resource.quantity)
        .bind(&resource.created_at)
        .bind(&resource.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn list_resources(&self, store_id: &str) -> ApiResult<Vec<Resource>> {
        let rows = sqlx::query(
            "SELECT id, store_id, resource_type_id, name, quantity, created_at, updated_at
             FROM resources WHERE store_id = ? ORDER BY created_at ASC, id ASC",
        )
        .bind(store_id)
        .fetch_all(self.pool())
        .await?;

        let mut resources = Vec::with_capacity(rows.len());
        for row in rows {
            resources.push(Resource {
                id: row.try_get("id")?,
                store_id: row.try_get("store_id")?,
                resource_type_id: row.try_get("resource_type_id")?,
                name: row.try_get("name")?,
                quantity: row.try_get("quantity")?,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            });
        }

        Ok(resources)
    }

    pub async fn create_resource_booking(&self, booking: &ResourceBooking) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO resource_bookings (id, store_id, resource_id, date, start_time,
                    end_time, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&booking.id)
        .bind(&booking.store_id)
        .bind(&booking.resource_id)
        .bind(&booking.date)
        .bind(&booking.start_time)
        .bind(&booking.end_time)
        .bind(&booking.created_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Resource bookings inside a date range, inclusive on both ends.
    pub async fn list_resource_bookings_in_range(
        &self,
        store_id: &str,
        start_date: &str,
        end_date: &str,
    ) -> ApiResult<Vec<ResourceBooking>> {
        let rows = sqlx::query(
            "SELECT id, store_id, resource_id, date, start_time, end_time, created_at
             FROM resource_bookings
             WHERE store_id = ? AND date >= ? AND date <= ?
             ORDER BY date ASC, start_time ASC",
        )
        .bind(store_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(self.pool())
        .await?;

        let mut bookings = Vec::with_capacity(rows.len());
        for row in rows {
            bookings.push(ResourceBooking {
                id: row.try_get("id")?,
                store_id: row.try_get("store_id")?,
                resource_id: row.try_get("resource_id")?,
                date: row.try_get("date")?,
                start_time: row.try_get("start_time")?,
                end_time: row.try_get("end_time")?,
                created_at: row.try_get("created_at")?,
            });
        }

        Ok(bookings)
    }
}
