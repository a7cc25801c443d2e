use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

/// Which uniqueness rule a write collided with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Conflict {
    #[error("Employee ID already exists")]
    EmployeeId,
    #[error("Email already exists")]
    Email,
    #[error("Attendance already marked for this employee on this date")]
    AttendanceDate,
}

impl Conflict {
    pub fn code(&self) -> &'static str {
        match self {
            Conflict::EmployeeId => "duplicate_employee_id",
            Conflict::Email => "duplicate_email",
            Conflict::AttendanceDate => "duplicate_attendance",
        }
    }
}

/// Errors surfaced by the record service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The referenced employee or attendance record does not exist.
    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Conflict(#[from] Conflict),

    /// Malformed input, or a write the store refused for a non-uniqueness reason.
    #[error("{0}")]
    Invalid(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(conflict) => conflict.code(),
            AppError::Invalid(_) => "invalid",
            AppError::Database(_) => "internal",
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::Invalid(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            AppError::Database(e) => {
                tracing::error!(error = %e, "Database error");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(json!({
            "message": message,
            "code": self.code(),
        }))
    }
}
