use sqlx::SqliteConnection;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::db::Store;
use crate::error::{AppError, AppResult, Conflict};
use crate::model::employee::{CreateEmployee, Employee};
use crate::utils::db_utils::{ConstraintViolation, constraint_violation};

const SELECT_EMPLOYEE: &str = r#"
    SELECT employee_id, full_name, email, department, created_at
    FROM employees
"#;

/// Looks an employee up on an already acquired connection.
pub(crate) async fn find_employee(
    conn: &mut SqliteConnection,
    employee_id: &str,
) -> Result<Option<Employee>, sqlx::Error> {
    sqlx::query_as::<_, Employee>(&format!("{SELECT_EMPLOYEE} WHERE employee_id = ?"))
        .bind(employee_id)
        .fetch_optional(conn)
        .await
}

/// All employees, newest first.
pub async fn list_employees(store: &Store) -> AppResult<Vec<Employee>> {
    store
        .with_connection(|conn| {
            Box::pin(async move {
                let sql = format!("{SELECT_EMPLOYEE} ORDER BY created_at DESC, rowid DESC");
                debug!(sql = %sql, "Fetching employees");

                let employees = sqlx::query_as::<_, Employee>(&sql)
                    .fetch_all(&mut *conn)
                    .await?;
                Ok::<_, AppError>(employees)
            })
        })
        .await
}

pub async fn get_employee(store: &Store, employee_id: &str) -> AppResult<Employee> {
    let employee_id = employee_id.to_owned();

    store
        .with_connection(move |conn| {
            Box::pin(async move {
                let employee = find_employee(conn, &employee_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Employee not found".to_string()))?;
                Ok::<_, AppError>(employee)
            })
        })
        .await
}

/// Inserts a new employee and returns it as stored.
///
/// A taken `employee_id` and a taken `email` are reported as different
/// conflicts; any other constraint failure is an invalid request.
pub async fn create_employee(store: &Store, payload: CreateEmployee) -> AppResult<Employee> {
    payload
        .validate()
        .map_err(|e| AppError::Invalid(e.to_string()))?;

    store
        .with_connection(move |conn| {
            Box::pin(async move {
                let inserted = sqlx::query(
                    r#"
                    INSERT INTO employees (employee_id, full_name, email, department)
                    VALUES (?, ?, ?, ?)
                    "#,
                )
                .bind(&payload.employee_id)
                .bind(&payload.full_name)
                .bind(&payload.email)
                .bind(&payload.department)
                .execute(&mut *conn)
                .await;

                if let Err(e) = inserted {
                    let err = insert_error(e);
                    warn!(employee_id = %payload.employee_id, error = %err, "Employee rejected");
                    return Err(err);
                }

                info!(employee_id = %payload.employee_id, "Employee created");

                let employee = find_employee(conn, &payload.employee_id)
                    .await?
                    .ok_or(sqlx::Error::RowNotFound)?;
                Ok::<_, AppError>(employee)
            })
        })
        .await
}

/// Removes the employee; the store drops their attendance rows with it.
pub async fn delete_employee(store: &Store, employee_id: &str) -> AppResult<()> {
    let employee_id = employee_id.to_owned();

    store
        .with_connection(move |conn| {
            Box::pin(async move {
                let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?")
                    .bind(&employee_id)
                    .execute(&mut *conn)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound("Employee not found".to_string()));
                }

                info!(employee_id = %employee_id, "Employee deleted");
                Ok::<_, AppError>(())
            })
        })
        .await
}

fn insert_error(err: sqlx::Error) -> AppError {
    match constraint_violation(&err) {
        Some(ConstraintViolation::PrimaryKey) => Conflict::EmployeeId.into(),
        Some(ConstraintViolation::Unique) => Conflict::Email.into(),
        Some(_) => AppError::Invalid("Failed to create employee".to_string()),
        None => AppError::Database(err),
    }
}
