use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::db::Store;
use crate::error::AppError;
use crate::model::attendance::{AttendanceFilter, MarkAttendance};
use crate::service::attendance;

/// List attendance records
#[utoipa::path(
    get,
    path = "/api/attendance",
    params(AttendanceFilter),
    responses(
        (status = 200, description = "Matching records, newest date first", body = [crate::model::attendance::AttendanceRecord])
    ),
    tag = "Attendance"
)]
pub async fn list_attendance(
    store: web::Data<Store>,
    query: web::Query<AttendanceFilter>,
) -> Result<HttpResponse, AppError> {
    let records = attendance::list_attendance(store.get_ref(), query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Mark attendance
#[utoipa::path(
    post,
    path = "/api/attendance",
    request_body = MarkAttendance,
    responses(
        (status = 201, description = "Attendance marked successfully", body = Object, example = json!({
            "message": "Attendance marked successfully",
            "id": 5
        })),
        (status = 400, description = "Bad status or date, or already marked for that day", body = Object, example = json!({
            "message": "Attendance already marked for this employee on this date",
            "code": "duplicate_attendance"
        })),
        (status = 404, description = "Employee not found")
    ),
    tag = "Attendance"
)]
pub async fn mark_attendance(
    store: web::Data<Store>,
    payload: web::Json<MarkAttendance>,
) -> Result<HttpResponse, AppError> {
    let id = attendance::mark_attendance(store.get_ref(), payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Attendance marked successfully",
        "id": id
    })))
}

/// Delete attendance record
#[utoipa::path(
    delete,
    path = "/api/attendance/{attendance_id}",
    params(
        ("attendance_id", Path, description = "Attendance record ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted", body = Object, example = json!({
            "message": "Attendance record deleted successfully"
        })),
        (status = 404, description = "Attendance record not found")
    ),
    tag = "Attendance"
)]
pub async fn delete_attendance(
    store: web::Data<Store>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    attendance::delete_attendance(store.get_ref(), path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Attendance record deleted successfully"
    })))
}
