use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Announcement {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Office closed for Eid")]
    pub title: String,
    #[schema(example = "2024-04-10", value_type = String, format = "date")]
    pub start_date: NaiveDate,
    #[schema(example = "2024-04-12", value_type = String, format = "date")]
    pub end_date: NaiveDate,
    #[schema(example = "The office will remain closed during the holidays.")]
    pub description: String,
}
