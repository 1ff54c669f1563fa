use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::clock::Clock;
use crate::error::ApiError;
use crate::model::attendance::{Attendance, AttendanceStatus, AttendanceWithEmployee};
use crate::service::employee;
use crate::service::notification::{self, EmitNotification};

const ATTENDANCE_COLUMNS: &str = "id, employee_id, date, status, clock_in, clock_out";

#[derive(Deserialize, ToSchema)]
pub struct ClockInRequest {
    #[schema(example = 3)]
    pub employee_id: i64,
    #[schema(example = "2024-03-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    /// Overrides the default "present" status, e.g. for an on-leave marker.
    #[schema(example = "present")]
    pub status: Option<AttendanceStatus>,
}

#[derive(Deserialize, ToSchema)]
pub struct ClockOutRequest {
    #[schema(example = 3)]
    pub employee_id: i64,
    #[schema(example = "2024-03-01", value_type = String, format = "date")]
    pub date: NaiveDate,
}

/// Open an attendance record for (employee, date).
///
/// The duplicate check is not read-then-write: the insert relies on the
/// store's UNIQUE(employee_id, date) constraint, so two racing clock-ins
/// resolve to exactly one row and one `Conflict`.
pub async fn clock_in(
    pool: &SqlitePool,
    clock: &dyn Clock,
    req: ClockInRequest,
) -> Result<Attendance, ApiError> {
    let employee = employee::lookup(pool, req.employee_id).await?;
    let status = req.status.unwrap_or(AttendanceStatus::Present);
    let clock_in = clock.time_of_day();

    let result = sqlx::query(
        r#"
        INSERT INTO attendance (employee_id, date, status, clock_in)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(req.employee_id)
    .bind(req.date)
    .bind(status)
    .bind(clock_in)
    .execute(pool)
    .await;

    let result = match result {
        Ok(result) => result,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(ApiError::Conflict("Already clocked in today".to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    notification::emit(
        pool,
        clock,
        EmitNotification {
            employee_id: None,
            message: format!(
                "{} clocked in at {} on {}",
                employee.name,
                clock_in.format("%H:%M"),
                req.date
            ),
            action: Some("clock-in".to_string()),
        },
    )
    .await?;

    Ok(Attendance {
        id: result.last_insert_rowid(),
        employee_id: req.employee_id,
        date: req.date,
        status,
        clock_in: Some(clock_in),
        clock_out: None,
    })
}

/// Close the attendance record for (employee, date).
///
/// The update is a compare-and-swap on `clock_out IS NULL`, so at most one
/// of several racing clock-outs lands. Notification emission here is
/// fire-and-forget: a notify failure never unwinds the recorded clock-out.
pub async fn clock_out(
    pool: &SqlitePool,
    clock: &dyn Clock,
    req: ClockOutRequest,
) -> Result<Attendance, ApiError> {
    let employee = employee::lookup(pool, req.employee_id).await?;
    let clock_out = clock.time_of_day();

    let result = sqlx::query(
        r#"
        UPDATE attendance
        SET clock_out = ?
        WHERE employee_id = ? AND date = ? AND clock_out IS NULL
        "#,
    )
    .bind(clock_out)
    .bind(req.employee_id)
    .bind(req.date)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return match fetch(pool, req.employee_id, req.date).await? {
            None => Err(ApiError::NotFound(
                "Cannot clock out: no clock-in recorded for this date".to_string(),
            )),
            Some(_) => Err(ApiError::Conflict("Already clocked out today".to_string())),
        };
    }

    let record = fetch(pool, req.employee_id, req.date)
        .await?
        .ok_or_else(|| ApiError::Unavailable("Attendance record vanished".to_string()))?;

    let notify = notification::emit(
        pool,
        clock,
        EmitNotification {
            employee_id: None,
            message: format!(
                "{} clocked out at {} on {}",
                employee.name,
                clock_out.format("%H:%M"),
                req.date
            ),
            action: Some("clock-out".to_string()),
        },
    )
    .await;

    if let Err(e) = notify {
        tracing::warn!(error = %e, employee_id = req.employee_id, "Clock-out notification failed");
    }

    Ok(record)
}

async fn fetch(
    pool: &SqlitePool,
    employee_id: i64,
    date: NaiveDate,
) -> Result<Option<Attendance>, ApiError> {
    let sql = format!(
        "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE employee_id = ? AND date = ?"
    );
    Ok(sqlx::query_as::<_, Attendance>(&sql)
        .bind(employee_id)
        .bind(date)
        .fetch_optional(pool)
        .await?)
}

/// All records for one employee, most recent date first.
pub async fn list_for_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> Result<Vec<Attendance>, ApiError> {
    employee::lookup(pool, employee_id).await?;

    let sql = format!(
        "SELECT {ATTENDANCE_COLUMNS} FROM attendance WHERE employee_id = ? ORDER BY date DESC, id DESC"
    );
    Ok(sqlx::query_as::<_, Attendance>(&sql)
        .bind(employee_id)
        .fetch_all(pool)
        .await?)
}

/// Administrative listing joined with employee names, paginated.
pub async fn list_all(
    pool: &SqlitePool,
    page: u32,
    per_page: u32,
) -> Result<(Vec<AttendanceWithEmployee>, i64), ApiError> {
    // Offset math in i64: page is caller-controlled and u32 would overflow.
    let offset = (i64::from(page.max(1)) - 1) * i64::from(per_page);

    let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance")
        .fetch_one(pool)
        .await?;

    let records = sqlx::query_as::<_, AttendanceWithEmployee>(
        r#"
        SELECT a.id, a.employee_id, e.name AS employee_name,
               a.date, a.status, a.clock_in, a.clock_out
        FROM attendance a
        JOIN employees e ON e.id = a.employee_id
        ORDER BY a.date DESC, a.id DESC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(per_page)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok((records, total))
}
