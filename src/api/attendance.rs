use actix_web::{HttpResponse, web};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    api::{employee::employee_exists, percentage},
    error::ApiError,
    model::attendance::{Attendance, AttendanceStatus},
};

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "date": "2026-02-06",
        "status": "Present"
    })
)]
pub struct MarkAttendance {
    #[validate(length(min = 1))]
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[schema(example = "2026-02-06", value_type = String, format = "date")]
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AttendanceQuery {
    #[schema(example = "2026-02-01", value_type = Option<String>, format = "date")]
    pub start_date: Option<NaiveDate>,
    #[schema(example = "2026-02-28", value_type = Option<String>, format = "date")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Serialize, ToSchema)]
pub struct AttendanceList {
    pub records: Vec<Attendance>,
    #[schema(example = 1)]
    pub total: i64,
}

#[derive(Serialize, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "total_records": 20,
        "present": 18,
        "absent": 2,
        "attendance_percentage": 90.0
    })
)]
pub struct AttendanceSummary {
    pub employee_id: String,
    pub total_records: i64,
    pub present: i64,
    pub absent: i64,
    pub attendance_percentage: f64,
}

/// Mark Attendance
///
/// One record per employee per calendar day.
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked", body = Attendance),
        (status = 400, description = "Validation failure", body = Object, example = json!({
            "detail": "Validation failed: employee_id: length"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP001' not found"
        })),
        (status = 409, description = "Attendance already marked for this day", body = Object, example = json!({
            "detail": "Attendance record already exists for employee 'EMP001' on 2026-02-06"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    pool: web::Data<SqlitePool>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    if !employee_exists(pool.get_ref(), &payload.employee_id).await? {
        return Err(ApiError::NotFound(format!(
            "Employee with ID '{}' not found",
            payload.employee_id
        )));
    }

    let duplicate =
        sqlx::query_scalar::<_, i64>("SELECT id FROM attendance WHERE employee_id = ? AND date = ?")
            .bind(&payload.employee_id)
            .bind(payload.date)
            .fetch_optional(pool.get_ref())
            .await?;

    if duplicate.is_some() {
        return Err(ApiError::Conflict(format!(
            "Attendance record already exists for employee '{}' on {}",
            payload.employee_id, payload.date
        )));
    }

    let result = sqlx::query_as::<_, Attendance>(
        r#"
        INSERT INTO attendance (employee_id, date, status, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, employee_id, date, status, created_at
        "#,
    )
    .bind(&payload.employee_id)
    .bind(payload.date)
    .bind(payload.status)
    .bind(Utc::now().naive_utc())
    .fetch_one(pool.get_ref())
    .await;

    match result {
        Ok(record) => {
            debug!(
                employee_id = %record.employee_id,
                date = %record.date,
                status = %record.status,
                "Attendance marked"
            );
            Ok(HttpResponse::Created().json(record))
        }
        // Lost the race between the duplicate check and the insert.
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Err(
            ApiError::Conflict("Duplicate attendance entry".to_string()),
        ),
        // Employee deleted between the existence check and the insert.
        Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
            Err(ApiError::NotFound(format!(
                "Employee with ID '{}' not found",
                payload.employee_id
            )))
        }
        Err(e) => Err(e.into()),
    }
}

/// List Attendance for Employee
#[utoipa::path(
    get,
    path = "/api/attendance/employee/{employee_id}",
    params(
        ("employee_id", Path, description = "External employee identifier"),
        ("start_date", Query, description = "Inclusive lower date bound (YYYY-MM-DD)"),
        ("end_date", Query, description = "Inclusive upper date bound (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Attendance records with total count", body = AttendanceList),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP001' not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_employee_attendance(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    if !employee_exists(pool.get_ref(), &employee_id).await? {
        return Err(ApiError::NotFound(format!(
            "Employee with ID '{employee_id}' not found"
        )));
    }

    // ---------- build WHERE clause dynamically ----------
    let mut sql = String::from(
        "SELECT id, employee_id, date, status, created_at FROM attendance WHERE employee_id = ?",
    );
    if query.start_date.is_some() {
        sql.push_str(" AND date >= ?");
    }
    if query.end_date.is_some() {
        sql.push_str(" AND date <= ?");
    }
    sql.push_str(" ORDER BY date");

    debug!(
        sql = %sql,
        employee_id = %employee_id,
        start_date = ?query.start_date,
        end_date = ?query.end_date,
        "Fetching attendance"
    );

    let mut data_query = sqlx::query_as::<_, Attendance>(&sql).bind(&employee_id);
    if let Some(start_date) = query.start_date {
        data_query = data_query.bind(start_date);
    }
    if let Some(end_date) = query.end_date {
        data_query = data_query.bind(end_date);
    }

    let records = data_query.fetch_all(pool.get_ref()).await?;
    let total = records.len() as i64;

    Ok(HttpResponse::Ok().json(AttendanceList { records, total }))
}

/// Attendance Summary for Employee
#[utoipa::path(
    get,
    path = "/api/attendance/employee/{employee_id}/summary",
    params(
        ("employee_id", Path, description = "External employee identifier")
    ),
    responses(
        (status = 200, description = "Aggregated counts and percentage", body = AttendanceSummary),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP001' not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn attendance_summary(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    if !employee_exists(pool.get_ref(), &employee_id).await? {
        return Err(ApiError::NotFound(format!(
            "Employee with ID '{employee_id}' not found"
        )));
    }

    let total_records =
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM attendance WHERE employee_id = ?")
            .bind(&employee_id)
            .fetch_one(pool.get_ref())
            .await?;

    let present = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM attendance WHERE employee_id = ? AND status = ?",
    )
    .bind(&employee_id)
    .bind(AttendanceStatus::Present)
    .fetch_one(pool.get_ref())
    .await?;

    let absent = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM attendance WHERE employee_id = ? AND status = ?",
    )
    .bind(&employee_id)
    .bind(AttendanceStatus::Absent)
    .fetch_one(pool.get_ref())
    .await?;

    Ok(HttpResponse::Ok().json(AttendanceSummary {
        employee_id,
        total_records,
        present,
        absent,
        attendance_percentage: percentage(present, total_records),
    }))
}

/// List All Attendance
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "Every attendance record with total count", body = AttendanceList),
        (status = 500, description = "Internal server error")
    ),
    tag = "Attendance"
)]
pub async fn list_all_attendance(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let records = sqlx::query_as::<_, Attendance>(
        "SELECT id, employee_id, date, status, created_at FROM attendance ORDER BY id",
    )
    .fetch_all(pool.get_ref())
    .await?;

    let total = records.len() as i64;

    Ok(HttpResponse::Ok().json(AttendanceList { records, total }))
}
