use serde::Serialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::clock::Clock;
use crate::error::ApiError;
use crate::model::announcement::Announcement;
use crate::model::attendance::Attendance;
use crate::model::employee::Employee;
use crate::model::notification::Notification;
use crate::service::{announcement, employee, notification};

/// Administrative dashboard counters, computed at call time.
#[derive(Debug, Serialize, ToSchema)]
pub struct DashboardStats {
    #[schema(example = 42)]
    pub total_employees: i64,
    #[schema(example = 1200)]
    pub total_attendance_records: i64,
    #[schema(example = 87)]
    pub total_leave_requests: i64,
    #[schema(example = 5)]
    pub total_announcements: i64,
    #[schema(example = 35)]
    pub present_today: i64,
    #[schema(example = 7)]
    pub absent_today: i64,
}

/// Everything the employee self-service landing page needs in one call.
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeeDashboard {
    pub employee: Employee,
    pub attendance_today: Option<Attendance>,
    pub announcements: Vec<Announcement>,
    pub notifications: Vec<Notification>,
}

async fn count(pool: &SqlitePool, sql: &str) -> Result<i64, ApiError> {
    Ok(sqlx::query_scalar::<_, i64>(sql).fetch_one(pool).await?)
}

pub async fn dashboard_stats(pool: &SqlitePool, clock: &dyn Clock) -> Result<DashboardStats, ApiError> {
    let today = clock.today();

    let total_employees = count(pool, "SELECT COUNT(*) FROM employees").await?;
    let total_attendance_records = count(pool, "SELECT COUNT(*) FROM attendance").await?;
    let total_leave_requests = count(pool, "SELECT COUNT(*) FROM leave_requests").await?;
    let total_announcements = count(pool, "SELECT COUNT(*) FROM announcements").await?;

    let present_today = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM attendance WHERE date = ? AND status = 'present'",
    )
    .bind(today)
    .fetch_one(pool)
    .await?;

    let marked_today = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM attendance WHERE date = ? AND status != 'absent'",
    )
    .bind(today)
    .fetch_one(pool)
    .await?;

    // Employees with no non-absent record today count as absent.
    let absent_today = (total_employees - marked_today).max(0);

    Ok(DashboardStats {
        total_employees,
        total_attendance_records,
        total_leave_requests,
        total_announcements,
        present_today,
        absent_today,
    })
}

pub async fn employee_dashboard(
    pool: &SqlitePool,
    clock: &dyn Clock,
    employee_id: i64,
) -> Result<EmployeeDashboard, ApiError> {
    let employee = employee::lookup(pool, employee_id).await?;

    let attendance_today = sqlx::query_as::<_, Attendance>(
        r#"
        SELECT id, employee_id, date, status, clock_in, clock_out
        FROM attendance
        WHERE employee_id = ? AND date = ?
        "#,
    )
    .bind(employee_id)
    .bind(clock.today())
    .fetch_optional(pool)
    .await?;

    let announcements = announcement::list(pool).await?;
    let notifications = notification::list_for(pool, employee_id).await?;

    Ok(EmployeeDashboard {
        employee,
        attendance_today,
        announcements,
        notifications,
    })
}
