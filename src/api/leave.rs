use actix_web::{HttpResponse, web};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::clock::Clock;
use crate::error::ApiError;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::service::leave::{self, LeaveFilter, SubmitLeaveRequest};

#[derive(Serialize, ToSchema)]
pub struct LeaveResponse {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 7)]
    pub employee_id: i64,
    #[schema(example = "sick")]
    pub leave_type: String,
    #[schema(example = "2024-01-10", value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(example = "2024-01-12", value_type = String, format = "date")]
    pub end_date: NaiveDate,
    #[schema(example = "flu")]
    pub reason: String,
    #[schema(example = "pending")]
    pub status: LeaveStatus,
    #[schema(example = "2024-01-09", value_type = String, format = "date")]
    pub applied_date: NaiveDate,
    /// Inclusive length of the requested leave
    #[schema(example = 3)]
    pub span_days: i64,
}

impl From<LeaveRequest> for LeaveResponse {
    fn from(leave: LeaveRequest) -> Self {
        let span_days = leave.span_days();
        Self {
            id: leave.id,
            employee_id: leave.employee_id,
            leave_type: leave.leave_type,
            start_date: leave.start_date,
            end_date: leave.end_date,
            reason: leave.reason,
            status: leave.status,
            applied_date: leave.applied_date,
            span_days,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct LeaveListResponse {
    pub data: Vec<LeaveResponse>,
    #[schema(example = 1)]
    pub page: u32,
    #[schema(example = 10)]
    pub per_page: u32,
    #[schema(example = 1)]
    pub total: i64,
}

/// Submit a leave request
#[utoipa::path(
    post,
    path = "/api/leave",
    request_body = SubmitLeaveRequest,
    responses(
        (status = 200, description = "Leave request submitted", body = LeaveResponse),
        (status = 400, description = "Missing fields or end_date before start_date"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn create_leave(
    pool: web::Data<SqlitePool>,
    clock: web::Data<dyn Clock>,
    payload: web::Json<SubmitLeaveRequest>,
) -> Result<HttpResponse, ApiError> {
    let leave = leave::submit(pool.get_ref(), clock.get_ref(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(LeaveResponse::from(leave)))
}

/// Approve a pending leave request
#[utoipa::path(
    put,
    path = "/api/leave/{leave_id}/approve",
    params(
        ("leave_id" = i64, Path, description = "ID of the leave request to approve")
    ),
    responses(
        (status = 200, description = "Leave approved", body = LeaveResponse),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Leave request already processed", body = Object, example = json!({
            "error": "conflict",
            "message": "Leave request already processed"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn approve_leave(
    pool: web::Data<SqlitePool>,
    clock: web::Data<dyn Clock>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let leave = leave::update_status(
        pool.get_ref(),
        clock.get_ref(),
        path.into_inner(),
        LeaveStatus::Approved,
    )
    .await?;
    Ok(HttpResponse::Ok().json(LeaveResponse::from(leave)))
}

/// Reject a pending leave request
#[utoipa::path(
    put,
    path = "/api/leave/{leave_id}/reject",
    params(
        ("leave_id" = i64, Path, description = "ID of the leave request to reject")
    ),
    responses(
        (status = 200, description = "Leave rejected", body = LeaveResponse),
        (status = 404, description = "Leave request not found"),
        (status = 409, description = "Leave request already processed"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn reject_leave(
    pool: web::Data<SqlitePool>,
    clock: web::Data<dyn Clock>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let leave = leave::update_status(
        pool.get_ref(),
        clock.get_ref(),
        path.into_inner(),
        LeaveStatus::Rejected,
    )
    .await?;
    Ok(HttpResponse::Ok().json(LeaveResponse::from(leave)))
}

/// Fetch one leave request
#[utoipa::path(
    get,
    path = "/api/leave/{leave_id}",
    params(
        ("leave_id" = i64, Path, description = "ID of the leave request to fetch")
    ),
    responses(
        (status = 200, description = "Leave request found", body = LeaveResponse),
        (status = 404, description = "Leave request not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let leave = leave::get(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(LeaveResponse::from(leave)))
}

/// Filtered, paginated leave listing
#[utoipa::path(
    get,
    path = "/api/leave",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Paginated leave list", body = LeaveListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Leave"
)]
pub async fn leave_list(
    pool: web::Data<SqlitePool>,
    query: web::Query<LeaveFilter>,
) -> Result<HttpResponse, ApiError> {
    let filter = query.into_inner();
    let (leaves, total) = leave::list(pool.get_ref(), &filter).await?;

    Ok(HttpResponse::Ok().json(LeaveListResponse {
        data: leaves.into_iter().map(LeaveResponse::from).collect(),
        page: filter.page.unwrap_or(1).max(1),
        per_page: filter.per_page.unwrap_or(10).min(100),
        total,
    }))
}
