use crate::models::{Employee, Service};
use crate::{database::Database, ApiResult};
use sqlx::Row;

impl Database {
    pub async fn create_service(&self, service: &Service) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO services (id, store_id, title, duration_minutes, resource_type_id,
                    active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&service.id)
        .bind(&service.store_id)
        .bind(&service.title)
        .bind(service.duration_minutes as i64)
        .bind(&service.resource_type_id)
        .bind(service.active as i64)
        .bind(&service.created_at)
        .bind(&service.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    pub async fn get_service(&self, store_id: &str, id: &str) -> ApiResult<Option<Service>> {
        let row = sqlx::query(
            "SELECT id, store_id, title, duration_minutes, resource_type_id, active,
                    created_at, updated_at
             FROM services WHERE store_id = ? AND id = ?",
        )
        .bind(store_id)
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(Service {
            id: row.try_get("id")?,
            store_id: row.try_get("store_id")?,
            title: row.try_get("title")?,
            duration_minutes: row.try_get::<i64, _>("duration_minutes")? as u16,
            resource_type_id: row.try_get("resource_type_id")?,
            active: row.try_get::<i64, _>("active")? != 0,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        }))
    }

    pub async fn create_employee(&self, employee: &Employee) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO employees (id, store_id, name, active, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&employee.id)
        .bind(&employee.store_id)
        .bind(&employee.name)
        .bind(employee.active as i64)
        .bind(&employee.created_at)
        .bind(&employee.updated_at)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Grant an employee the capability to perform a service.
    pub async fn assign_service(&self, employee_id: &str, service_id: &str) -> ApiResult<()> {
        sqlx::query(
            "INSERT INTO employee_services (employee_id, service_id) VALUES (?, ?)
             ON CONFLICT(employee_id, service_id) DO NOTHING",
        )
        .bind(employee_id)
        .bind(service_id)
        .execute(self.pool())
        .await?;

        Ok(())
    }

    /// Active employees whose capability set contains the service, in stable
    /// creation order. This order is the grouping order of the engine.
    pub async fn list_employees_for_service(
        &self,
        store_id: &str,
        service_id: &str,
    ) -> ApiResult<Vec<Employee>> {
        let rows = sqlx::query(
            "SELECT e.id, e.store_id, e.name, e.active, e.created_at, e.updated_at
             FROM employees e
             JOIN employee_services es ON es.employee_id = e.id
             WHERE e.store_id = ? AND es.service_id = ? AND e.active = 1
             ORDER BY e.created_at ASC, e.id ASC",
        )
        .bind(store_id)
        .bind(service_id)
        .fetch_all(self.pool())
        .await?;

        let mut employees = Vec::with_capacity(rows.len());
        for row in rows {
            employees.push(Employee {
                id: row.try_get("id")?,
                store_id: row.try_get("store_id")?,
                name: row.try_get("name")?,
                active: row.try_get::<i64, _>("active")? != 0,
                created_at: row.try_get("created_at")?,
                updated_at: row.try_get("updated_at")?,
            });
        }

        Ok(employees)
    }
}
