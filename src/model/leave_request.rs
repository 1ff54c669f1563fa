use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Leave request status. `Pending` is the only creatable state; `Approved`
/// and `Rejected` are terminal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    sqlx::Type,
    strum::Display,
    strum::EnumString,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = 1)]
    pub id: i64,
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
    #[schema(example = "pending")]
    pub status: LeaveStatus,
    #[schema(example = "2024-01-09", value_type = String, format = "date")]
    pub applied_date: NaiveDate,
}

impl LeaveRequest {
    /// Inclusive span of the request in days, always >= 1 for a valid request.
    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
