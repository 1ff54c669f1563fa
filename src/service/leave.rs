use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::{IntoParams, ToSchema};

use crate::clock::Clock;
use crate::error::ApiError;
use crate::model::leave_request::{LeaveRequest, LeaveStatus};
use crate::service::employee;
use crate::service::notification::{self, EmitNotification};

const LEAVE_COLUMNS: &str =
    "id, employee_id, leave_type, start_date, end_date, reason, status, applied_date";

#[derive(Deserialize, ToSchema)]
pub struct SubmitLeaveRequest {
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
}

#[derive(Deserialize, IntoParams, ToSchema)]
pub struct LeaveFilter {
    /// Filter by employee ID
    #[schema(example = 7)]
    pub employee_id: Option<i64>,
    /// Filter by leave status
    #[schema(example = "pending")]
    pub status: Option<LeaveStatus>,
    /// Pagination page number (1-based)
    #[schema(example = 1)]
    pub page: Option<u32>,
    /// Items per page
    #[schema(example = 10)]
    pub per_page: Option<u32>,
}

// Helper enum for typed sqlx binding of optional filters.
enum FilterValue {
    I64(i64),
    Status(LeaveStatus),
}

/// Create a leave request. Requests always enter the workflow as Pending,
/// stamped with the clock's current date; approval happens separately.
pub async fn submit(
    pool: &SqlitePool,
    clock: &dyn Clock,
    req: SubmitLeaveRequest,
) -> Result<LeaveRequest, ApiError> {
    if req.leave_type.trim().is_empty() {
        return Err(ApiError::InvalidArgument("leave_type is required".to_string()));
    }
    if req.reason.trim().is_empty() {
        return Err(ApiError::InvalidArgument("reason is required".to_string()));
    }
    if req.end_date < req.start_date {
        return Err(ApiError::InvalidArgument(
            "end_date cannot be before start_date".to_string(),
        ));
    }

    employee::lookup(pool, req.employee_id).await?;

    let applied_date = clock.today();

    let result = sqlx::query(
        r#"
        INSERT INTO leave_requests
            (employee_id, leave_type, start_date, end_date, reason, status, applied_date)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(req.employee_id)
    .bind(&req.leave_type)
    .bind(req.start_date)
    .bind(req.end_date)
    .bind(&req.reason)
    .bind(LeaveStatus::Pending)
    .bind(applied_date)
    .execute(pool)
    .await?;

    Ok(LeaveRequest {
        id: result.last_insert_rowid(),
        employee_id: req.employee_id,
        leave_type: req.leave_type,
        start_date: req.start_date,
        end_date: req.end_date,
        reason: req.reason,
        status: LeaveStatus::Pending,
        applied_date,
    })
}

/// Move a pending request to Approved or Rejected and notify the owner.
///
/// The transition is a compare-and-swap on `status = 'pending'`: a request
/// already in a terminal state comes back as `Conflict` rather than being
/// silently re-transitioned.
pub async fn update_status(
    pool: &SqlitePool,
    clock: &dyn Clock,
    leave_id: i64,
    new_status: LeaveStatus,
) -> Result<LeaveRequest, ApiError> {
    if new_status == LeaveStatus::Pending {
        return Err(ApiError::InvalidArgument(
            "Status must be approved or rejected".to_string(),
        ));
    }

    let leave = get(pool, leave_id).await?;

    let result = sqlx::query(
        r#"
        UPDATE leave_requests
        SET status = ?
        WHERE id = ? AND status = ?
        "#,
    )
    .bind(new_status)
    .bind(leave_id)
    .bind(LeaveStatus::Pending)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::Conflict(
            "Leave request already processed".to_string(),
        ));
    }

    notification::emit(
        pool,
        clock,
        EmitNotification {
            employee_id: Some(leave.employee_id),
            message: format!(
                "Your {} leave from {} to {} has been {}",
                leave.leave_type, leave.start_date, leave.end_date, new_status
            ),
            action: Some("leave-status".to_string()),
        },
    )
    .await?;

    Ok(LeaveRequest {
        status: new_status,
        ..leave
    })
}

pub async fn get(pool: &SqlitePool, leave_id: i64) -> Result<LeaveRequest, ApiError> {
    let sql = format!("SELECT {LEAVE_COLUMNS} FROM leave_requests WHERE id = ?");
    sqlx::query_as::<_, LeaveRequest>(&sql)
        .bind(leave_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Leave request {leave_id} not found")))
}

/// Filtered, paginated listing. With an employee filter this is the
/// employee's own history; without, the full administrative view.
pub async fn list(
    pool: &SqlitePool,
    filter: &LeaveFilter,
) -> Result<(Vec<LeaveRequest>, i64), ApiError> {
    let per_page = filter.per_page.unwrap_or(10).min(100);
    let page = filter.page.unwrap_or(1).max(1);
    // Offset math in i64: page is caller-controlled and u32 would overflow.
    let offset = (i64::from(page) - 1) * i64::from(per_page);

    let mut where_sql = String::from(" WHERE 1=1");
    let mut args: Vec<FilterValue> = Vec::new();

    if let Some(employee_id) = filter.employee_id {
        where_sql.push_str(" AND employee_id = ?");
        args.push(FilterValue::I64(employee_id));
    }
    if let Some(status) = filter.status {
        where_sql.push_str(" AND status = ?");
        args.push(FilterValue::Status(status));
    }

    let count_sql = format!("SELECT COUNT(*) FROM leave_requests{where_sql}");
    let mut count_q = sqlx::query_scalar::<_, i64>(&count_sql);
    for arg in &args {
        count_q = match arg {
            FilterValue::I64(v) => count_q.bind(*v),
            FilterValue::Status(s) => count_q.bind(*s),
        };
    }
    let total = count_q.fetch_one(pool).await?;

    let data_sql = format!(
        r#"
        SELECT {LEAVE_COLUMNS}
        FROM leave_requests
        {where_sql}
        ORDER BY applied_date DESC, id DESC
        LIMIT ? OFFSET ?
        "#
    );
    let mut data_q = sqlx::query_as::<_, LeaveRequest>(&data_sql);
    for arg in args {
        data_q = match arg {
            FilterValue::I64(v) => data_q.bind(v),
            FilterValue::Status(s) => data_q.bind(s),
        };
    }

    let leaves = data_q
        .bind(per_page)
        .bind(offset)
        .fetch_all(pool)
        .await?;

    Ok((leaves, total))
}
