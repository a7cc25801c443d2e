use chrono::NaiveDate;
use sqlx::{QueryBuilder, Sqlite};
use tracing::{debug, info, warn};

use crate::db::Store;
use crate::error::{AppError, AppResult, Conflict};
use crate::model::attendance::{
    AttendanceFilter, AttendanceRecord, AttendanceStatus, EmployeeAttendance, MarkAttendance,
};
use crate::service::employee::find_employee;
use crate::utils::db_utils::{ConstraintViolation, constraint_violation};

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    let invalid = || AppError::Invalid("Date must be a valid calendar date (YYYY-MM-DD)".to_string());

    if raw.len() != 10 {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid())
}

pub fn parse_status(raw: &str) -> AppResult<AttendanceStatus> {
    raw.parse()
        .map_err(|_| AppError::Invalid("Status must be 'Present' or 'Absent'".to_string()))
}

/// Attendance joined with the owner's name and department, newest date first.
/// Both filters are plain equality matches; absent or empty fields do not
/// restrict the result, and a date nothing was stored under matches nothing.
pub async fn list_attendance(
    store: &Store,
    filter: AttendanceFilter,
) -> AppResult<Vec<AttendanceRecord>> {
    let employee_id = filter.employee_id.filter(|id| !id.is_empty());
    let date = filter.date.filter(|date| !date.is_empty());

    store
        .with_connection(move |conn| {
            Box::pin(async move {
                let mut qb = QueryBuilder::<Sqlite>::new(
                    r#"
                    SELECT a.id, a.employee_id, a.date, a.status, a.created_at,
                           e.full_name, e.department
                    FROM attendance a
                    JOIN employees e ON a.employee_id = e.employee_id
                    WHERE 1 = 1
                    "#,
                );

                if let Some(employee_id) = employee_id {
                    qb.push(" AND a.employee_id = ").push_bind(employee_id);
                }
                if let Some(date) = date {
                    qb.push(" AND a.date = ").push_bind(date);
                }
                qb.push(" ORDER BY a.date DESC, a.created_at DESC, a.id DESC");

                debug!(sql = %qb.sql(), "Fetching attendance");

                let records = qb
                    .build_query_as::<AttendanceRecord>()
                    .fetch_all(&mut *conn)
                    .await?;
                Ok::<_, AppError>(records)
            })
        })
        .await
}

pub async fn list_attendance_for_employee(
    store: &Store,
    employee_id: &str,
) -> AppResult<Vec<EmployeeAttendance>> {
    let employee_id = employee_id.to_owned();

    store
        .with_connection(move |conn| {
            Box::pin(async move {
                if find_employee(conn, &employee_id).await?.is_none() {
                    return Err(AppError::NotFound("Employee not found".to_string()));
                }

                let records = sqlx::query_as::<_, EmployeeAttendance>(
                    r#"
                    SELECT a.id, a.employee_id, a.date, a.status, a.created_at, e.full_name
                    FROM attendance a
                    JOIN employees e ON a.employee_id = e.employee_id
                    WHERE a.employee_id = ?
                    ORDER BY a.date DESC
                    "#,
                )
                .bind(&employee_id)
                .fetch_all(&mut *conn)
                .await?;
                Ok::<_, AppError>(records)
            })
        })
        .await
}

/// Records one day's presence for an employee and returns the new row id.
pub async fn mark_attendance(store: &Store, payload: MarkAttendance) -> AppResult<i64> {
    store
        .with_connection(move |conn| {
            Box::pin(async move {
                if find_employee(conn, &payload.employee_id).await?.is_none() {
                    return Err(AppError::NotFound("Employee not found".to_string()));
                }

                let status = parse_status(&payload.status)?;
                let date = parse_date(&payload.date)?;

                let inserted = sqlx::query(
                    "INSERT INTO attendance (employee_id, date, status) VALUES (?, ?, ?)",
                )
                .bind(&payload.employee_id)
                .bind(date)
                .bind(status)
                .execute(&mut *conn)
                .await;

                let id = match inserted {
                    Ok(result) => result.last_insert_rowid(),
                    Err(e) => {
                        let err = insert_error(e);
                        warn!(employee_id = %payload.employee_id, %date, error = %err, "Attendance rejected");
                        return Err(err);
                    }
                };

                info!(id, employee_id = %payload.employee_id, %date, %status, "Attendance marked");
                Ok::<_, AppError>(id)
            })
        })
        .await
}

pub async fn delete_attendance(store: &Store, id: i64) -> AppResult<()> {
    store
        .with_connection(move |conn| {
            Box::pin(async move {
                let result = sqlx::query("DELETE FROM attendance WHERE id = ?")
                    .bind(id)
                    .execute(&mut *conn)
                    .await?;

                if result.rows_affected() == 0 {
                    return Err(AppError::NotFound(
                        "Attendance record not found".to_string(),
                    ));
                }

                info!(id, "Attendance deleted");
                Ok::<_, AppError>(())
            })
        })
        .await
}

fn insert_error(err: sqlx::Error) -> AppError {
    match constraint_violation(&err) {
        Some(ConstraintViolation::Unique) => Conflict::AttendanceDate.into(),
        // the employee vanished between the existence check and the insert
        Some(ConstraintViolation::ForeignKey) => {
            AppError::NotFound("Employee not found".to_string())
        }
        Some(_) => AppError::Invalid("Failed to mark attendance".to_string()),
        None => AppError::Database(err),
    }
}
