use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use tracing::debug;
use utoipa::ToSchema;
use validator::Validate;

use crate::{error::ApiError, model::employee::Employee};

#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "full_name": "John Doe",
        "email": "john@example.com",
        "department": "Engineering"
    })
)]
pub struct CreateEmployee {
    #[validate(length(min = 1, max = 20))]
    #[schema(example = "EMP001")]
    pub employee_id: String,
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "John Doe")]
    pub full_name: String,
    #[validate(email)]
    #[schema(example = "john@example.com", format = "email")]
    pub email: String,
    #[validate(length(min = 1, max = 50))]
    #[schema(example = "Engineering")]
    pub department: String,
}

#[derive(Serialize, ToSchema)]
pub struct EmployeeList {
    pub employees: Vec<Employee>,
    #[schema(example = 1)]
    pub total: i64,
}

pub(crate) async fn employee_exists(
    pool: &SqlitePool,
    employee_id: &str,
) -> Result<bool, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i64>("SELECT id FROM employees WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_optional(pool)
        .await?;
    Ok(id.is_some())
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failure", body = Object, example = json!({
            "detail": "Validation failed: employee_id: length"
        })),
        (status = 409, description = "Employee ID or email already exists", body = Object, example = json!({
            "detail": "Employee ID 'EMP001' already exists"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    payload.validate()?;

    // Pre-check so the common case gets a specific message; the unique
    // constraints remain the final arbiter under concurrent creates.
    let existing = sqlx::query_as::<_, (String, String)>(
        "SELECT employee_id, email FROM employees WHERE employee_id = ? OR email = ? LIMIT 1",
    )
    .bind(&payload.employee_id)
    .bind(&payload.email)
    .fetch_optional(pool.get_ref())
    .await?;

    if let Some((employee_id, _)) = existing {
        return Err(if employee_id == payload.employee_id {
            ApiError::Conflict(format!(
                "Employee ID '{}' already exists",
                payload.employee_id
            ))
        } else {
            ApiError::Conflict(format!("Email '{}' already exists", payload.email))
        });
    }

    let result = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (employee_id, full_name, email, department, created_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id, employee_id, full_name, email, department, created_at
        "#,
    )
    .bind(&payload.employee_id)
    .bind(&payload.full_name)
    .bind(&payload.email)
    .bind(&payload.department)
    .bind(Utc::now().naive_utc())
    .fetch_one(pool.get_ref())
    .await;

    match result {
        Ok(employee) => {
            debug!(employee_id = %employee.employee_id, id = employee.id, "Employee created");
            Ok(HttpResponse::Created().json(employee))
        }
        // Lost the race between pre-check and insert.
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(ApiError::Conflict("Duplicate entry detected".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees with total count", body = EmployeeList),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = sqlx::query_as::<_, Employee>(
        "SELECT id, employee_id, full_name, email, department, created_at FROM employees ORDER BY id",
    )
    .fetch_all(pool.get_ref())
    .await?;

    let total = employees.len() as i64;

    Ok(HttpResponse::Ok().json(EmployeeList { employees, total }))
}

/// Get Employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "External employee identifier")
    ),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP001' not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    let employee = sqlx::query_as::<_, Employee>(
        "SELECT id, employee_id, full_name, email, department, created_at FROM employees WHERE employee_id = ?",
    )
    .bind(&employee_id)
    .fetch_optional(pool.get_ref())
    .await?;

    match employee {
        Some(employee) => Ok(HttpResponse::Ok().json(employee)),
        None => Err(ApiError::NotFound(format!(
            "Employee with ID '{employee_id}' not found"
        ))),
    }
}

/// Delete Employee
///
/// Removes the employee and all of its attendance records in one transaction.
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "External employee identifier")
    ),
    responses(
        (status = 204, description = "Employee and its attendance records deleted"),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "detail": "Employee with ID 'EMP001' not found"
        })),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let employee_id = path.into_inner();

    if !employee_exists(pool.get_ref(), &employee_id).await? {
        return Err(ApiError::NotFound(format!(
            "Employee with ID '{employee_id}' not found"
        )));
    }

    let mut tx = pool.get_ref().begin().await?;

    sqlx::query("DELETE FROM attendance WHERE employee_id = ?")
        .bind(&employee_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM employees WHERE employee_id = ?")
        .bind(&employee_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    debug!(employee_id = %employee_id, "Employee deleted");

    Ok(HttpResponse::NoContent().finish())
}
