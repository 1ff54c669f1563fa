use actix_web::{HttpResponse, web};
use serde_json::json;
use sqlx::SqlitePool;

use crate::error::ApiError;
use crate::service::employee::{self, CreateEmployee, UpdateEmployee};

/// Register an employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 200, description = "Employee created", body = crate::model::employee::Employee),
        (status = 400, description = "Missing fields"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    pool: web::Data<SqlitePool>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let created = employee::create(pool.get_ref(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(created))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "Employee list", body = [crate::model::employee::Employee]),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn list_employees(pool: web::Data<SqlitePool>) -> Result<HttpResponse, ApiError> {
    let employees = employee::list(pool.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Fetch one employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "ID of the employee")
    ),
    responses(
        (status = 200, description = "Employee found", body = crate::model::employee::Employee),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let found = employee::lookup(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(found))
}

/// Update profile fields
#[utoipa::path(
    put,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "ID of the employee")
    ),
    request_body = UpdateEmployee,
    responses(
        (status = 200, description = "Employee updated", body = crate::model::employee::Employee),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Email already registered"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
    payload: web::Json<UpdateEmployee>,
) -> Result<HttpResponse, ApiError> {
    let updated =
        employee::update(pool.get_ref(), path.into_inner(), payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// Delete an employee; attendance, leaves and notifications cascade
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id" = i64, Path, description = "ID of the employee")
    ),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 404, description = "Employee not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    pool: web::Data<SqlitePool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    employee::delete(pool.get_ref(), path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Employee deleted" })))
}
