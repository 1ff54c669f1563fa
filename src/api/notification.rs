use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::service::notification;

#[derive(Deserialize, IntoParams)]
pub struct NotificationQuery {
    /// Employee whose notifications to fetch; broadcasts are always included
    pub employee_id: i64,
}

/// Notifications for one employee, merged with broadcasts, newest first
#[utoipa::path(
    get,
    path = "/api/notifications",
    params(NotificationQuery),
    responses(
        (status = 200, description = "Notification list", body = [crate::model::notification::Notification]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notifications"
)]
pub async fn list_notifications(
    pool: web::Data<SqlitePool>,
    query: web::Query<NotificationQuery>,
) -> Result<HttpResponse, ApiError> {
    let notifications = notification::list_for(pool.get_ref(), query.employee_id).await?;
    Ok(HttpResponse::Ok().json(notifications))
}

/// Mark a notification as read
#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    params(
        ("notification_id" = i64, Path, description = "ID of the notification")
    ),
    responses(
        (status = 200, description = "Marked as read"),
        (status = 404, description = "Notification not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Notifications"
)]
pub async fn mark_read(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    notification::mark_read(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Notification marked as read" })))
}
