use actix_web::{HttpResponse, web};
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::HashMap;
use utoipa::ToSchema;

use crate::{
    api::percentage,
    error::ApiError,
    model::attendance::AttendanceStatus,
};

#[derive(Serialize, ToSchema)]
#[schema(
    example = json!({
        "total_employees": 10,
        "total_attendance": 150,
        "present": 140,
        "absent": 10,
        "attendance_rate": 93.33,
        "total_departments": 3,
        "employees_by_department": {
            "Engineering": 5,
            "HR": 2,
            "Sales": 3
        }
    })
)]
pub struct DashboardSummary {
    pub total_employees: i64,
    pub total_attendance: i64,
    pub present: i64,
    pub absent: i64,
    pub attendance_rate: f64,
    pub total_departments: i64,
    pub employees_by_department: HashMap<String, i64>,
}

/// Dashboard Summary
///
/// Read-only whole-store scan: employee and attendance totals plus the
/// per-department employee breakdown.
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Organization-wide statistics", body = DashboardSummary),
        (status = 500, description = "Internal server error")
    ),
    tag = "Dashboard"
)]
pub async fn dashboard_summary(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let total_employees = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM employees")
        .fetch_one(pool.get_ref())
        .await?;

    let total_attendance = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance")
        .fetch_one(pool.get_ref())
        .await?;

    let present = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance WHERE status = ?")
        .bind(AttendanceStatus::Present)
        .fetch_one(pool.get_ref())
        .await?;

    let absent = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance WHERE status = ?")
        .bind(AttendanceStatus::Absent)
        .fetch_one(pool.get_ref())
        .await?;

    let dept_counts = sqlx::query_as::<_, (String, i64)>(
        "SELECT department, COUNT(*) FROM employees GROUP BY department",
    )
    .fetch_all(pool.get_ref())
    .await?;

    let employees_by_department: HashMap<String, i64> = dept_counts.into_iter().collect();
    let total_departments = employees_by_department.len() as i64;

    Ok(HttpResponse::Ok().json(DashboardSummary {
        total_employees,
        total_attendance,
        present,
        absent,
        attendance_rate: percentage(present, total_attendance),
        total_departments,
        employees_by_department,
    }))
}
