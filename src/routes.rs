use crate::{
    api::{attendance, employee, stats},
    config::Config,
    error::AppError,
};
use actix_cors::Cors;
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;
use std::sync::Arc;

/// Service name and version
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service info", body = Object, example = json!({
            "message": "HRMS Lite API",
            "version": "1.0.0"
        }))
    ),
    tag = "Info"
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "HRMS Lite API",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

// Per-IP limiter. A rate of zero is treated as one request per minute.
fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
    let requests_per_min = requests_per_min.max(1);
    let per_ms = (60_000 / requests_per_min as u64).max(1);

    let cfg = GovernorConfigBuilder::default()
        .per_millisecond(per_ms)
        .burst_size(requests_per_min)
        .key_extractor(PeerIpKeyExtractor)
        .finish()
        .expect("period and burst size are non-zero");
    Governor::new(&cfg)
}

/// Browser access for the configured front-end origins, with credentials and
/// any method or header. An unparsable origin panics at startup.
pub fn build_cors(config: &Config) -> Cors {
    config
        .cors_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allow_any_method()
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    let api_limiter = Arc::new(build_limiter(config.rate_api_per_min));

    // Malformed bodies and query strings share the error shape of the service.
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::Invalid(err.to_string()).into()),
    )
    .app_data(
        web::QueryConfig::default()
            .error_handler(|err, _req| AppError::Invalid(err.to_string()).into()),
    );

    cfg.service(index);

    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(api_limiter) // rate limiting
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{employee_id}
                    .service(
                        web::resource("/{employee_id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    )
                    // /employees/{employee_id}/attendance
                    .service(
                        web::resource("/{employee_id}/attendance")
                            .route(web::get().to(employee::employee_attendance)),
                    ),
            )
            .service(
                web::scope("/attendance")
                    // /attendance
                    .service(
                        web::resource("")
                            .route(web::get().to(attendance::list_attendance))
                            .route(web::post().to(attendance::mark_attendance)),
                    )
                    // /attendance/{attendance_id}
                    .service(
                        web::resource("/{attendance_id}")
                            .route(web::delete().to(attendance::delete_attendance)),
                    ),
            )
            .service(
                web::scope("/stats")
                    .service(web::resource("/employees").route(web::get().to(stats::employee_stats))),
            ),
    );
}
