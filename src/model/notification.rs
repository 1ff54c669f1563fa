use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Append-only event record. A row with no employee_id is a broadcast,
/// visible to everyone. Only the read flag is ever mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Notification {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 7, nullable = true)]
    pub employee_id: Option<i64>,
    #[schema(example = "Your sick leave from 2024-01-10 to 2024-01-12 has been approved")]
    pub message: String,
    #[schema(example = "2024-01-09T10:15:00", value_type = String, format = "date-time")]
    pub created_at: NaiveDateTime,
    #[schema(example = "leave-status", nullable = true)]
    pub action: Option<String>,
    pub is_read: bool,
}
