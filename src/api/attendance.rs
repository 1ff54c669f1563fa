use actix_web::{HttpResponse, web};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::{IntoParams, ToSchema};

use crate::clock::Clock;
use crate::error::ApiError;
use crate::model::attendance::{Attendance, AttendanceStatus, AttendanceWithEmployee};
use crate::service::attendance::{self, ClockInRequest, ClockOutRequest};

#[derive(Serialize, ToSchema)]
pub struct AttendanceResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 3)]
    pub employee_id: i64,
    #[schema(example = "2024-03-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = "present")]
    pub status: AttendanceStatus,
    #[schema(example = "09:00:00", value_type = Option<String>)]
    pub clock_in: Option<NaiveTime>,
    #[schema(example = "17:30:00", value_type = Option<String>)]
    pub clock_out: Option<NaiveTime>,
    /// Whole hours between clock-in and clock-out; null until both are set.
    #[schema(example = 8, nullable = true)]
    pub hours_worked: Option<i64>,
}

impl From<Attendance> for AttendanceResponse {
    fn from(record: Attendance) -> Self {
        let hours_worked = record.hours_worked();
        Self {
            id: record.id,
            employee_id: record.employee_id,
            date: record.date,
            status: record.status,
            clock_in: record.clock_in,
            clock_out: record.clock_out,
            hours_worked,
        }
    }
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct AttendanceQuery {
    /// Restrict to one employee's history
    #[schema(example = 3)]
    pub employee_id: Option<i64>,
    #[schema(example = 1)]
    pub page: Option<u32>,
    #[schema(example = 10)]
    pub per_page: Option<u32>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceListResponse {
    pub data: Vec<AttendanceWithEmployee>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 10)]
    pub per_page: u32,
    #[schema(example = 120)]
    pub total: i64,
}

/// Clock-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/clock-in",
    request_body = ClockInRequest,
    responses(
        (status = 200, description = "Clocked in successfully", body = AttendanceResponse),
        (status = 400, description = "Missing or malformed date"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Already clocked in today", body = Object, example = json!({
            "error": "conflict",
            "message": "Already clocked in today"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn clock_in(
    pool: web::Data<SqlitePool>,
    clock: web::Data<dyn Clock>,
    payload: web::Json<ClockInRequest>,
) -> Result<HttpResponse, ApiError> {
    let record = attendance::clock_in(pool.get_ref(), clock.get_ref(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(AttendanceResponse::from(record)))
}

/// Clock-out endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/clock-out",
    request_body = ClockOutRequest,
    responses(
        (status = 200, description = "Clocked out successfully", body = AttendanceResponse),
        (status = 404, description = "No clock-in recorded for this date", body = Object, example = json!({
            "error": "not_found",
            "message": "Cannot clock out: no clock-in recorded for this date"
        })),
        (status = 409, description = "Already clocked out today"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn clock_out(
    pool: web::Data<SqlitePool>,
    clock: web::Data<dyn Clock>,
    payload: web::Json<ClockOutRequest>,
) -> Result<HttpResponse, ApiError> {
    let record =
        attendance::clock_out(pool.get_ref(), clock.get_ref(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(AttendanceResponse::from(record)))
}

/// Attendance listing. With `employee_id` this is one employee's history;
/// without, the paginated administrative view joined with employee names.
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceQuery),
    responses(
        (status = 200, description = "Attendance records, most recent date first", body = AttendanceListResponse),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    pool: web::Data<SqlitePool>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    if let Some(employee_id) = query.employee_id {
        let records = attendance::list_for_employee(pool.get_ref(), employee_id).await?;
        let data: Vec<AttendanceResponse> =
            records.into_iter().map(AttendanceResponse::from).collect();
        return Ok(HttpResponse::Ok().json(json!({ "data": data })));
    }

    let per_page = query.per_page.unwrap_or(10).min(100);
    let page = query.page.unwrap_or(1).max(1);
    let (data, total) = attendance::list_all(pool.get_ref(), page, per_page).await?;

    Ok(HttpResponse::Ok().json(AttendanceListResponse {
        data,
        page,
        per_page,
        total,
    }))
}
