use crate::model::attendance::{
    AttendanceFilter, AttendanceRecord, AttendanceStatus, EmployeeAttendance, MarkAttendance,
};
use crate::model::employee::{CreateEmployee, Employee};
use crate::model::stats::EmployeeStats;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "HRMS Lite API",
        version = "1.0.0",
        description = r#"
## HRMS Lite

A small Human Resources record keeper.

### 🔹 Key Features
- **Employee Management**
  - Create, list, view and delete employees
- **Attendance Management**
  - Mark one `Present` / `Absent` entry per employee per day, filter by employee and date
- **Statistics**
  - Present and total days per employee

### 📦 Response Format
- JSON responses
- Errors carry a `message` and a machine readable `code`

---
Built with **Rust**, **Actix Web**, **SQLx**, and **Utoipa**.
"#,
    ),
    paths(
        crate::routes::index,

        crate::api::employee::list_employees,
        crate::api::employee::get_employee,
        crate::api::employee::create_employee,
        crate::api::employee::delete_employee,
        crate::api::employee::employee_attendance,

        crate::api::attendance::list_attendance,
        crate::api::attendance::mark_attendance,
        crate::api::attendance::delete_attendance,

        crate::api::stats::employee_stats
    ),
    components(
        schemas(
            Employee,
            CreateEmployee,
            AttendanceStatus,
            AttendanceRecord,
            EmployeeAttendance,
            MarkAttendance,
            AttendanceFilter,
            EmployeeStats
        )
    ),
    tags(
        (name = "Info", description = "Service information"),
        (name = "Employee", description = "Employee management APIs"),
        (name = "Attendance", description = "Attendance management APIs"),
        (name = "Stats", description = "Attendance statistics APIs"),
    )
)]
pub struct ApiDoc;
