use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "id": 1,
        "employee_id": "EMP001",
        "full_name": "John Doe",
        "email": "john@example.com",
        "department": "Engineering",
        "created_at": "2026-02-06T09:00:00"
    })
)]
pub struct Employee {
    /// Store-assigned surrogate key.
    #[schema(example = 1)]
    pub id: i64,

    /// Externally assigned identifier, unique across all employees.
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john@example.com", format = "email")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(
        example = "2026-02-06T09:00:00",
        value_type = String,
        format = "date-time"
    )]
    pub created_at: NaiveDateTime,
}
