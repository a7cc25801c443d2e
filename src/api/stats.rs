use actix_web::{HttpResponse, web};

use crate::db::Store;
use crate::error::AppError;
use crate::service::stats;

/// Attendance statistics per employee
#[utoipa::path(
    get,
    path = "/api/stats/employees",
    responses(
        (status = 200, description = "Present and total days for every employee, by name", body = [crate::model::stats::EmployeeStats])
    ),
    tag = "Stats"
)]
pub async fn employee_stats(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let stats = stats::employee_stats(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(stats))
}
