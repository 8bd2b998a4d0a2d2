use axum::{
    extract::{Query, State},
    http::HeaderMap,
    Extension, Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    api::middleware::{resolve_store_context, ApiError, ApiResult, AppState, StoreContext},
    models::{AvailabilityReport, SlotRecord},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitiesQuery {
    pub service_id: Option<String>,
    /// Optional "YYYY-MM-DD" upper bound for the search window.
    pub date: Option<String>,
    pub employee_id: Option<String>,
    /// Storefront domain for the public unauthenticated mode.
    pub shop: Option<String>,
}

/// Compute bookable slots for a service.
/// GET /availabilities?serviceId=..&date=..&employeeId=..&shop=..
pub async fn list_availabilities(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AvailabilitiesQuery>,
) -> ApiResult<Json<AvailabilityReport>> {
    let context = resolve_store_context(&state, query.shop.as_deref(), &headers).await?;

    let service_id = query
        .service_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing required parameter: serviceId".to_string()))?;

    let requested_date = query.date.as_deref().map(parse_date).transpose()?;

    let now = chrono::Local::now().naive_local();
    let report = state
        .availability_service
        .get_availabilities(
            &context.store.id,
            service_id,
            requested_date,
            query.employee_id.as_deref(),
            now,
        )
        .await?;

    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct ScheduleTemplateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScheduleTemplateResponse {
    pub date: String,
    pub slots: Vec<SlotRecord>,
}

/// The editable availability grid for one day, every window unmarked.
/// GET /schedule-template?date=YYYY-MM-DD (operator only)
pub async fn get_schedule_template(
    State(state): State<AppState>,
    Extension(context): Extension<StoreContext>,
    Query(query): Query<ScheduleTemplateQuery>,
) -> ApiResult<Json<ScheduleTemplateResponse>> {
    let date = query
        .date
        .as_deref()
        .ok_or_else(|| ApiError::BadRequest("Missing required parameter: date".to_string()))?;
    let date = parse_date(date)?;

    let slots = state
        .availability_service
        .day_grid_template(&context.store.id, date)
        .await?;

    Ok(Json(ScheduleTemplateResponse {
        date: date.to_string(),
        slots,
    }))
}

fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest(format!("Malformed date parameter: {}", value)))
}
