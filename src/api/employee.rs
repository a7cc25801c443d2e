use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::db::Store;
use crate::error::AppError;
use crate::model::employee::CreateEmployee;
use crate::service::{attendance, employee};

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees, newest first", body = [crate::model::employee::Employee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let employees = employee::list_employees(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(employees))
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = crate::model::employee::Employee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found",
            "code": "not_found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let employee = employee::get_employee(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(employee))
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/api/employees",
    request_body = CreateEmployee,
    responses(
        (status = 201, description = "Employee created successfully", body = Object, example = json!({
            "message": "Employee created successfully",
            "employee_id": "EMP010"
        })),
        (status = 400, description = "Duplicate employee ID or email, or malformed payload", body = Object, example = json!({
            "message": "Email already exists",
            "code": "duplicate_email"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<Store>,
    payload: web::Json<CreateEmployee>,
) -> Result<HttpResponse, AppError> {
    let created = employee::create_employee(store.get_ref(), payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee created successfully",
        "employee_id": created.employee_id
    })))
}

/// Delete Employee
///
/// Attendance records of the employee are removed with it.
#[utoipa::path(
    delete,
    path = "/api/employees/{employee_id}",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Employee deleted successfully"
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    employee::delete_employee(store.get_ref(), &path).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee deleted successfully"
    })))
}

/// Attendance history of one employee
#[utoipa::path(
    get,
    path = "/api/employees/{employee_id}/attendance",
    params(
        ("employee_id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Attendance records, newest date first", body = [crate::model::attendance::EmployeeAttendance]),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn employee_attendance(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let records = attendance::list_attendance_for_employee(store.get_ref(), &path).await?;
    Ok(HttpResponse::Ok().json(records))
}
