use sqlx::SqlitePool;

use crate::clock::Clock;
use crate::error::ApiError;
use crate::model::notification::Notification;

/// Emission request. A missing employee_id makes the notification a
/// broadcast, visible to every employee and to the admin views.
pub struct EmitNotification {
    pub employee_id: Option<i64>,
    pub message: String,
    pub action: Option<String>,
}

/// Append a notification record. The only failure mode is the store itself.
pub async fn emit(
    pool: &SqlitePool,
    clock: &dyn Clock,
    req: EmitNotification,
) -> Result<Notification, ApiError> {
    let created_at = clock.now();

    let result = sqlx::query(
        r#"
        INSERT INTO notifications (employee_id, message, created_at, action)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(req.employee_id)
    .bind(&req.message)
    .bind(created_at)
    .bind(&req.action)
    .execute(pool)
    .await?;

    Ok(Notification {
        id: result.last_insert_rowid(),
        employee_id: req.employee_id,
        message: req.message,
        created_at,
        action: req.action,
        is_read: false,
    })
}

/// Employee-specific and broadcast notifications merged, newest first.
/// Creation-time ties resolve by insertion order.
pub async fn list_for(pool: &SqlitePool, employee_id: i64) -> Result<Vec<Notification>, ApiError> {
    let notifications = sqlx::query_as::<_, Notification>(
        r#"
        SELECT id, employee_id, message, created_at, action, is_read
        FROM notifications
        WHERE employee_id = ? OR employee_id IS NULL
        ORDER BY created_at DESC, id DESC
        "#,
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;

    Ok(notifications)
}

pub async fn mark_read(pool: &SqlitePool, notification_id: i64) -> Result<(), ApiError> {
    let result = sqlx::query("UPDATE notifications SET is_read = 1 WHERE id = ?")
        .bind(notification_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!(
            "Notification {notification_id} not found"
        )));
    }
    Ok(())
}
