use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

/// Closed set of attendance states. The wire and storage tokens are exactly
/// "Present" and "Absent"; any other token fails deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, Display, ToSchema,
)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP001",
        "date": "2026-02-06",
        "status": "Present",
        "created_at": "2026-02-06T09:00:00"
    })
)]
pub struct Attendance {
    #[schema(example = 1)]
    pub id: i64,

    /// References `employees.employee_id`.
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "2026-02-06", value_type = String, format = "date")]
    pub date: NaiveDate,

    pub status: AttendanceStatus,

    #[schema(
        example = "2026-02-06T09:00:00",
        value_type = String,
        format = "date-time"
    )]
    pub created_at: NaiveDateTime,
}
