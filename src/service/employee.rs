use serde::Deserialize;
use sqlx::SqlitePool;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::model::employee::Employee;

const EMPLOYEE_COLUMNS: &str = "id, name, email, department, position, phone, address";

#[derive(Deserialize, ToSchema)]
pub struct CreateEmployee {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: Option<String>,
    #[schema(example = "Backend Developer")]
    pub position: Option<String>,
    #[schema(example = "+8801712345678")]
    pub phone: Option<String>,
    #[schema(example = "Dhaka")]
    pub address: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateEmployee {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Resolve an employee id to its record, or `NotFound`.
pub async fn lookup(pool: &SqlitePool, employee_id: i64) -> Result<Employee, ApiError> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = ?");
    sqlx::query_as::<_, Employee>(&sql)
        .bind(employee_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Employee {employee_id} not found")))
}

pub async fn create(pool: &SqlitePool, req: CreateEmployee) -> Result<Employee, ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::InvalidArgument("name is required".to_string()));
    }
    if req.email.trim().is_empty() {
        return Err(ApiError::InvalidArgument("email is required".to_string()));
    }

    let result = sqlx::query(
        r#"
        INSERT INTO employees (name, email, department, position, phone, address)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&req.name)
    .bind(&req.email)
    .bind(&req.department)
    .bind(&req.position)
    .bind(&req.phone)
    .bind(&req.address)
    .execute(pool)
    .await;

    let result = match result {
        Ok(result) => result,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            return Err(ApiError::Conflict(format!(
                "Email {} is already registered",
                req.email
            )));
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Employee {
        id: result.last_insert_rowid(),
        name: req.name,
        email: req.email,
        department: req.department,
        position: req.position,
        phone: req.phone,
        address: req.address,
    })
}

pub async fn list(pool: &SqlitePool) -> Result<Vec<Employee>, ApiError> {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees ORDER BY id");
    Ok(sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?)
}

/// Partial profile update; absent fields keep their current value.
pub async fn update(
    pool: &SqlitePool,
    employee_id: i64,
    req: UpdateEmployee,
) -> Result<Employee, ApiError> {
    let result = sqlx::query(
        r#"
        UPDATE employees SET
            name = COALESCE(?, name),
            email = COALESCE(?, email),
            department = COALESCE(?, department),
            position = COALESCE(?, position),
            phone = COALESCE(?, phone),
            address = COALESCE(?, address)
        WHERE id = ?
        "#,
    )
    .bind(&req.name)
    .bind(&req.email)
    .bind(&req.department)
    .bind(&req.position)
    .bind(&req.phone)
    .bind(&req.address)
    .bind(employee_id)
    .execute(pool)
    .await;

    match result {
        Ok(result) if result.rows_affected() == 0 => {
            Err(ApiError::NotFound(format!("Employee {employee_id} not found")))
        }
        Ok(_) => lookup(pool, employee_id).await,
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            Err(ApiError::Conflict("Email is already registered".to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Deletes the employee; attendance, leaves and notifications cascade.
pub async fn delete(pool: &SqlitePool, employee_id: i64) -> Result<(), ApiError> {
    let result = sqlx::query("DELETE FROM employees WHERE id = ?")
        .bind(employee_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!("Employee {employee_id} not found")));
    }
    Ok(())
}
