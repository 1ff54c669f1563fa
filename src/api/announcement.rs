use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::SqlitePool;

use crate::clock::Clock;
use crate::error::ApiError;
use crate::service::announcement::{self, CreateAnnouncement};

/// Publish an announcement (broadcast to all employees)
#[utoipa::path(
    post,
    path = "/api/announcements",
    request_body = CreateAnnouncement,
    responses(
        (status = 200, description = "Announcement published", body = crate::model::announcement::Announcement),
        (status = 400, description = "Missing fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Announcements"
)]
pub async fn create_announcement(
    pool: web::Data<SqlitePool>,
    clock: web::Data<dyn Clock>,
    payload: web::Json<CreateAnnouncement>,
) -> Result<HttpResponse, ApiError> {
    let created =
        announcement::create(pool.get_ref(), clock.get_ref(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(created))
}

/// List announcements, most recent validity window first
#[utoipa::path(
    get,
    path = "/api/announcements",
    responses(
        (status = 200, description = "Announcement list", body = [crate::model::announcement::Announcement]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Announcements"
)]
pub async fn list_announcements(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let announcements = announcement::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(announcements))
}

/// Delete an announcement
#[utoipa::path(
    delete,
    path = "/api/announcements/{announcement_id}",
    params(
        ("announcement_id" = i64, Path, description = "ID of the announcement")
    ),
    responses(
        (status = 200, description = "Announcement deleted"),
        (status = 404, description = "Announcement not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Announcements"
)]
pub async fn delete_announcement(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    announcement::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Announcement deleted" })))
}
