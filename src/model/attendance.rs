use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::{IntoParams, ToSchema};

/// Presence tag of an attendance record. Stored verbatim as `Present` / `Absent`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    sqlx::Type,
    ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

/// Attendance row joined with the owner's name and department.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "2024-02-01", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: AttendanceStatus,

    #[schema(value_type = String, format = DateTime)]
    pub created_at: NaiveDateTime,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

/// One employee's attendance history, joined with their name only.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct EmployeeAttendance {
    pub id: i64,
    pub employee_id: String,
    #[schema(example = "2024-02-01", value_type = String, format = "date")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: NaiveDateTime,
    pub full_name: String,
}

/// `status` stays a string so that an unknown value is reported as an
/// input error by the service instead of a generic deserialization failure.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct MarkAttendance {
    #[schema(example = "EMP010")]
    pub employee_id: String,

    #[schema(example = "2024-03-01", format = "date")]
    pub date: String,

    #[schema(example = "Present")]
    pub status: String,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct AttendanceFilter {
    /// Only records of this employee
    pub employee_id: Option<String>,
    /// Only records of this calendar date (`YYYY-MM-DD`)
    pub date: Option<String>,
}
