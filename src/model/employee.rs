use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "employee_id": "EMP001",
        "full_name": "John Doe",
        "email": "john.doe@company.com",
        "department": "Engineering",
        "created_at": "2024-02-01T09:15:00.000"
    })
)]
pub struct Employee {
    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "john.doe@company.com")]
    pub email: String,

    #[schema(example = "Engineering")]
    pub department: String,

    #[schema(value_type = String, format = DateTime)]
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateEmployee {
    #[validate(length(min = 1, message = "employee_id must not be empty"))]
    #[schema(example = "EMP010")]
    pub employee_id: String,

    #[validate(length(min = 1, message = "full_name must not be empty"))]
    #[schema(example = "Ann Lee")]
    pub full_name: String,

    #[validate(email(message = "email must be a valid address"))]
    #[schema(example = "ann@x.com", format = "email")]
    pub email: String,

    #[validate(length(min = 1, message = "department must not be empty"))]
    #[schema(example = "Ops")]
    pub department: String,
}
