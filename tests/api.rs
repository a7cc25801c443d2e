//! Integration tests for the HTTP surface.

mod common;

use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::{Value, json};

use common::{build_app, delete, get, post_json, preflight};

fn ann() -> Value {
    json!({
        "employee_id": "EMP010",
        "full_name": "Ann Lee",
        "email": "ann@x.com",
        "department": "Ops"
    })
}

// ---------------------------------------------------------------------------
// Root
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn root_reports_name_and_version() {
    let app = test::init_service(build_app(common::store(false).await)).await;

    let resp = test::call_service(&app, get("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "HRMS Lite API");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn preflight_from_front_end_origin_is_allowed() {
    let app = test::init_service(build_app(common::store(false).await)).await;

    let resp = test::call_service(
        &app,
        preflight("/api/employees", "http://localhost:5173").to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let headers = resp.headers();
    assert_eq!(
        headers
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
    assert_eq!(
        headers
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[actix_web::test]
async fn simple_request_from_front_end_gets_allow_origin() {
    let app = test::init_service(build_app(common::store(true).await)).await;

    let resp = test::call_service(
        &app,
        get("/api/employees")
            .insert_header(("Origin", "http://localhost:5173"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn employee_create_get_list_delete() {
    let app = test::init_service(build_app(common::store(false).await)).await;

    let resp = test::call_service(&app, post_json("/api/employees", ann()).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["employee_id"], "EMP010");

    let resp = test::call_service(&app, get("/api/employees/EMP010").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["full_name"], "Ann Lee");
    assert_eq!(body["email"], "ann@x.com");
    assert_eq!(body["department"], "Ops");
    assert!(body["created_at"].is_string());

    let resp = test::call_service(&app, get("/api/employees").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    let resp = test::call_service(&app, delete("/api/employees/EMP010").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, get("/api/employees/EMP010").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, delete("/api/employees/EMP010").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn duplicate_id_and_email_are_reported_separately() {
    let app = test::init_service(build_app(common::store(false).await)).await;
    test::call_service(&app, post_json("/api/employees", ann()).to_request()).await;

    let mut same_id = ann();
    same_id["email"] = json!("someone.else@x.com");
    let resp = test::call_service(&app, post_json("/api/employees", same_id).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "duplicate_employee_id");
    assert_eq!(body["message"], "Employee ID already exists");

    let mut same_email = ann();
    same_email["employee_id"] = json!("EMP011");
    let resp = test::call_service(&app, post_json("/api/employees", same_email).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "duplicate_email");
    assert_eq!(body["message"], "Email already exists");
}

#[actix_web::test]
async fn malformed_employee_payload_is_rejected() {
    let app = test::init_service(build_app(common::store(false).await)).await;

    let resp = test::call_service(
        &app,
        post_json("/api/employees", json!({ "employee_id": "EMP010" })).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "invalid");
}

#[actix_web::test]
async fn trailing_slash_is_ignored() {
    let app = test::init_service(build_app(common::store(true).await)).await;

    let resp = test::call_service(&app, get("/api/employees/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(3));
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn second_mark_for_same_day_is_rejected() {
    let app = test::init_service(build_app(common::store(false).await)).await;
    test::call_service(&app, post_json("/api/employees", ann()).to_request()).await;

    let first = json!({ "employee_id": "EMP010", "date": "2024-03-01", "status": "Present" });
    let resp = test::call_service(&app, post_json("/api/attendance", first).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["id"].is_i64());

    let second = json!({ "employee_id": "EMP010", "date": "2024-03-01", "status": "Absent" });
    let resp = test::call_service(&app, post_json("/api/attendance", second).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "duplicate_attendance");

    let resp = test::call_service(
        &app,
        get("/api/attendance?employee_id=EMP010").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["status"], "Present");
    assert_eq!(rows[0]["date"], "2024-03-01");
    assert_eq!(rows[0]["full_name"], "Ann Lee");
    assert_eq!(rows[0]["department"], "Ops");
}

#[actix_web::test]
async fn marking_validates_employee_status_and_date() {
    let app = test::init_service(build_app(common::store(true).await)).await;

    let missing = json!({ "employee_id": "NOPE", "date": "2024-03-01", "status": "Present" });
    let resp = test::call_service(&app, post_json("/api/attendance", missing).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let bad_status = json!({ "employee_id": "EMP003", "date": "2024-03-01", "status": "Late" });
    let resp = test::call_service(&app, post_json("/api/attendance", bad_status).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Status must be 'Present' or 'Absent'");

    let bad_date = json!({ "employee_id": "EMP003", "date": "2024-13-01", "status": "Present" });
    let resp = test::call_service(&app, post_json("/api/attendance", bad_date).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn attendance_filters_by_date() {
    let app = test::init_service(build_app(common::store(true).await)).await;

    let resp = test::call_service(&app, get("/api/attendance?date=2024-02-01").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["date"] == "2024-02-01"));

    let resp = test::call_service(&app, get("/api/attendance").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let dates: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|r| r["date"].as_str())
        .collect();
    assert_eq!(dates, ["2024-02-02", "2024-02-02", "2024-02-01", "2024-02-01"]);
}

#[actix_web::test]
async fn unmatched_date_filter_returns_empty_list() {
    let app = test::init_service(build_app(common::store(true).await)).await;

    let resp = test::call_service(&app, get("/api/attendance?date=2024-2-1").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn same_day_rows_list_latest_mark_first() {
    let app = test::init_service(build_app(common::store(true).await)).await;

    for employee_id in ["EMP001", "EMP002"] {
        let mark = json!({ "employee_id": employee_id, "date": "2024-04-01", "status": "Present" });
        let resp = test::call_service(&app, post_json("/api/attendance", mark).to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = test::call_service(&app, get("/api/attendance").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let rows = body.as_array().expect("array");
    assert_eq!(rows[0]["date"], "2024-04-01");
    assert_eq!(rows[0]["employee_id"], "EMP002");
    assert_eq!(rows[1]["date"], "2024-04-01");
    assert_eq!(rows[1]["employee_id"], "EMP001");
}

#[actix_web::test]
async fn employee_attendance_requires_existing_employee() {
    let app = test::init_service(build_app(common::store(true).await)).await;

    let resp = test::call_service(&app, get("/api/employees/NOPE/attendance").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, get("/api/employees/EMP001/attendance").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let rows = body.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["date"], "2024-02-02");
    assert_eq!(rows[0]["full_name"], "John Doe");
}

#[actix_web::test]
async fn deleting_employee_takes_attendance_with_it() {
    let app = test::init_service(build_app(common::store(true).await)).await;

    let resp = test::call_service(&app, delete("/api/employees/EMP001").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, get("/api/employees/EMP001/attendance").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, get("/api/attendance?employee_id=EMP001").to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn attendance_delete_by_id() {
    let app = test::init_service(build_app(common::store(false).await)).await;
    test::call_service(&app, post_json("/api/employees", ann()).to_request()).await;

    let mark = json!({ "employee_id": "EMP010", "date": "2024-03-01", "status": "Absent" });
    let resp = test::call_service(&app, post_json("/api/attendance", mark).to_request()).await;
    let body: Value = test::read_body_json(resp).await;
    let id = body["id"].as_i64().expect("id");

    let uri = format!("/api/attendance/{id}");
    let resp = test::call_service(&app, delete(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, delete(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[actix_web::test]
async fn stats_cover_every_employee() {
    let app = test::init_service(build_app(common::store(true).await)).await;

    let resp = test::call_service(&app, get("/api/stats/employees").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(
        body,
        json!([
            {
                "employee_id": "EMP003",
                "full_name": "Bob Johnson",
                "email": "bob.johnson@company.com",
                "department": "Sales",
                "present_days": 0,
                "total_days": 0
            },
            {
                "employee_id": "EMP002",
                "full_name": "Jane Smith",
                "email": "jane.smith@company.com",
                "department": "Marketing",
                "present_days": 1,
                "total_days": 2
            },
            {
                "employee_id": "EMP001",
                "full_name": "John Doe",
                "email": "john.doe@company.com",
                "department": "Engineering",
                "present_days": 2,
                "total_days": 2
            }
        ])
    );
}
