use actix_web::{HttpResponse, web};
use sqlx::SqlitePool;

use crate::clock::Clock;
use crate::error::ApiError;
use crate::service::report;

/// Administrative dashboard counters
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    responses(
        (status = 200, description = "Aggregated counters", body = crate::service::report::DashboardStats),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn dashboard_stats(
    pool: web::Data<SqlitePool>,
    clock: web::Data<dyn Clock>,
) -> Result<HttpResponse, ApiError> {
    let stats = report::dashboard_stats(pool.get_ref(), clock.get_ref()).await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Employee self-service dashboard: profile, today's attendance,
/// announcements and notifications in one response
#[utoipa::path(
    get,
    path = "/api/dashboard/employee/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "ID of the employee")
    ),
    responses(
        (status = 200, description = "Dashboard payload", body = crate::service::report::EmployeeDashboard),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn employee_dashboard(
    pool: web::Data<SqlitePool>,
    clock: web::Data<dyn Clock>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let dashboard =
        report::employee_dashboard(pool.get_ref(), clock.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(dashboard))
}
