use chrono::NaiveDate;
use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::clock::Clock;
use crate::error::ApiError;
use crate::model::announcement::Announcement;
use crate::service::notification::{self, EmitNotification};

#[derive(Deserialize, ToSchema)]
pub struct CreateAnnouncement {
    #[schema(example = "Office closed for Eid")]
    pub title: String,
    #[schema(example = "2024-04-10", value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(example = "2024-04-12", value_type = String, format = "date")]
    pub end_date: NaiveDate,
    #[schema(example = "The office will remain closed during the holidays.")]
    pub description: String,
}

/// Publish an announcement and fan it out as a broadcast notification.
pub async fn create(
    pool: &SqlitePool,
    clock: &dyn Clock,
    req: CreateAnnouncement,
) -> Result<Announcement, ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::InvalidArgument("title is required".to_string()));
    }
    if req.description.trim().is_empty() {
        return Err(ApiError::InvalidArgument("description is required".to_string()));
    }
    if req.end_date < req.start_date {
        return Err(ApiError::InvalidArgument(
            "end_date cannot be before start_date".to_string(),
        ));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO announcements (title, start_date, end_date, description)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&req.title)
    .bind(req.start_date)
    .bind(req.end_date)
    .bind(&req.description)
    .execute(pool)
    .await?;

    notification::emit(
        pool,
        clock,
        EmitNotification {
            employee_id: None,
            message: format!("New announcement: {}", req.title),
            action: Some("announcement".to_string()),
        },
    )
    .await?;

    Ok(Announcement {
        id: result.last_insert_rowid(),
        title: req.title,
        start_date: req.start_date,
        end_date: req.end_date,
        description: req.description,
    })
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Announcement>, ApiError> {
    let announcements = sqlx::query_as::<_, Announcement>(
        r#"
        SELECT id, title, start_date, end_date, description
        FROM announcements
        ORDER BY start_date DESC, id DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(announcements)
}

pub async fn delete(pool: &SqlitePool, announcement_id: i64) -> Result<(), ApiError> {
    let result = sqlx::query("DELETE FROM announcements WHERE id = ?")
        .bind(announcement_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!(
            "Announcement {announcement_id} not found"
        )));
    }
    Ok(())
}
