use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Presence status for one employee on one calendar day.
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
#[serde(rename_all = "kebab-case")]
#[sqlx(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    OnLeave,
}

/// One employee's presence for one calendar date.
///
/// At most one row exists per (employee_id, date); the store enforces this
/// with a unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = 3)]
    pub employee_id: i64,
    #[schema(example = "2024-03-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    #[schema(example = "present")]
    pub status: AttendanceStatus,
    #[schema(example = "09:00:00", value_type = Option<String>)]
    pub clock_in: Option<NaiveTime>,
    #[schema(example = "17:30:00", value_type = Option<String>)]
    pub clock_out: Option<NaiveTime>,
}

impl Attendance {
    /// Whole hours between clock-in and clock-out, fraction truncated.
    /// Undefined until both times are set.
    pub fn hours_worked(&self) -> Option<i64> {
        match (self.clock_in, self.clock_out) {
            (Some(clock_in), Some(clock_out)) => Some((clock_out - clock_in).num_hours()),
            _ => None,
        }
    }
}

/// Attendance row joined with the employee's identity, for the admin listing.
#[derive(Debug, Serialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceWithEmployee {
    pub id: i64,
    pub employee_id: i64,
    #[schema(example = "John Doe")]
    pub employee_name: String,
    #[schema(example = "2024-03-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[schema(value_type = Option<String>)]
    pub clock_in: Option<NaiveTime>,
    #[schema(value_type = Option<String>)]
    pub clock_out: Option<NaiveTime>,
}
