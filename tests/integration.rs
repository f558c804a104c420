//! End-to-end tests of the HR API.
//!
//! Requests go through the full router with an in-memory store and a clock
//! frozen on 2026-03-15:
//! - identity headers and role checks
//! - employee and department records
//! - the payroll calculate, approve and pay flow
//! - absence requests and leave balances
//! - contracts and recruitment
//! - request validation

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use hr_engine::api::{AppState, USER_ID_HEADER, USER_ROLE_HEADER, create_router};
use hr_engine::clock::{Clock, FixedClock};
use hr_engine::config::{AppSettings, ConfigLoader};
use hr_engine::store::MemoryStore;

// =============================================================================
// Test Helpers
// =============================================================================

fn clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()))
}

/// A router over an empty store: no absence types, no payroll parameters.
fn empty_router() -> Router {
    let clock = clock();
    let state = AppState::new(
        Arc::new(MemoryStore::new(clock.clone())),
        clock,
        AppSettings::default(),
    );
    create_router(state)
}

/// A router over a store seeded from the default configuration.
fn seeded_router() -> Router {
    let loader = ConfigLoader::load("./config/default").expect("Failed to load config");
    let clock = clock();
    let store = MemoryStore::seeded(clock.clone(), loader.config()).expect("Failed to seed store");
    let state = AppState::new(Arc::new(store), clock, loader.settings().clone());
    create_router(state)
}

async fn send(
    router: &Router,
    method: &str,
    uri: &str,
    role: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(role) = role {
        builder = builder
            .header(USER_ID_HEADER, Uuid::new_v4().to_string())
            .header(USER_ROLE_HEADER, role);
    }
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn hire(router: &Router, first_name: &str, salary: &str) -> Value {
    let (status, employee) = send(
        router,
        "POST",
        "/api/employees",
        Some("admin"),
        Some(json!({
            "first_name": first_name,
            "last_name": "Test",
            "hire_date": "2024-01-15",
            "base_salary": salary
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "hire failed: {}", employee);
    employee
}

fn march_request(employee_id: &str) -> Value {
    json!({
        "employee_id": employee_id,
        "pay_period_start": "2026-03-01",
        "pay_period_end": "2026-03-31"
    })
}

// =============================================================================
// Identity
// =============================================================================

#[tokio::test]
async fn test_health_is_public() {
    let router = empty_router();
    let (status, body) = send(&router, "GET", "/api/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_missing_identity_is_unauthorized() {
    let router = empty_router();
    let (status, body) = send(&router, "GET", "/api/employees", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_unknown_role_is_unauthorized() {
    let router = empty_router();
    let (status, _) = send(&router, "GET", "/api/employees", Some("superuser"), None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_employee_role_cannot_hire() {
    let router = empty_router();
    let (status, body) = send(
        &router,
        "POST",
        "/api/employees",
        Some("employee"),
        Some(json!({
            "first_name": "Amal",
            "last_name": "Test",
            "hire_date": "2024-01-15"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

// =============================================================================
// Employees and departments
// =============================================================================

#[tokio::test]
async fn test_create_then_list_employees() {
    let router = empty_router();
    hire(&router, "Amal", "2000").await;
    hire(&router, "Bilel", "2500").await;

    let (status, page) = send(
        &router,
        "GET",
        "/api/employees?sort=first_name&order=asc",
        Some("employee"),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["pagination"]["total"], 2);
    assert_eq!(page["data"][0]["first_name"], "Amal");
    assert_eq!(page["data"][1]["first_name"], "Bilel");
}

#[tokio::test]
async fn test_search_filters_employees() {
    let router = empty_router();
    hire(&router, "Amal", "2000").await;
    hire(&router, "Bilel", "2500").await;

    let (status, page) = send(&router, "GET", "/api/employees?search=bil", Some("admin"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page["pagination"]["total"], 1);
    assert_eq!(page["data"][0]["first_name"], "Bilel");
}

#[tokio::test]
async fn test_unknown_employee_is_not_found() {
    let router = empty_router();
    let uri = format!("/api/employees/{}", Uuid::new_v4());
    let (status, body) = send(&router, "GET", &uri, Some("admin"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_terminate_employee() {
    let router = empty_router();
    let employee = hire(&router, "Amal", "2000").await;
    let uri = format!("/api/employees/{}", employee["id"].as_str().unwrap());

    let (status, terminated) = send(&router, "DELETE", &uri, Some("admin"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(terminated["employment_status"], "terminated");
    assert_eq!(terminated["termination_date"], "2026-03-15");
}

#[tokio::test]
async fn test_department_headcount() {
    let router = empty_router();
    let (status, department) = send(
        &router,
        "POST",
        "/api/departments",
        Some("admin"),
        Some(json!({ "name": "Finance", "code": "FIN" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let department_id = department["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &router,
        "POST",
        "/api/employees",
        Some("admin"),
        Some(json!({
            "first_name": "Amal",
            "last_name": "Test",
            "hire_date": "2024-01-15",
            "department_id": department_id,
            "base_salary": "2000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, departments) = send(&router, "GET", "/api/departments", Some("manager"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(departments[0]["code"], "FIN");
    assert_eq!(departments[0]["employee_count"], 1);

    let uri = format!("/api/departments/{}", department_id);
    let (status, detail) = send(&router, "GET", &uri, Some("manager"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["employees"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_duplicate_department_code_conflicts() {
    let router = empty_router();
    let body = json!({ "name": "Finance", "code": "FIN" });
    send(&router, "POST", "/api/departments", Some("admin"), Some(body.clone())).await;

    let (status, error) = send(&router, "POST", "/api/departments", Some("admin"), Some(body)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(error["code"], "CONFLICT");
}

// =============================================================================
// Payroll
// =============================================================================

#[tokio::test]
async fn test_calculate_approve_pay() {
    let router = empty_router();
    let employee = hire(&router, "Amal", "2000").await;
    let employee_id = employee["id"].as_str().unwrap();

    let (status, result) = send(
        &router,
        "POST",
        "/api/payroll/calculate",
        Some("admin"),
        Some(march_request(employee_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "calculate failed: {}", result);
    assert_eq!(result["payslip"]["status"], "calculated");
    assert_eq!(result["payslip"]["net_salary"], "1471.81");
    assert_eq!(result["payslip"]["pay_date"], "2026-03-31");
    assert!(!result["audit_trace"]["steps"].as_array().unwrap().is_empty());

    let payslip_id = result["payslip"]["id"].as_str().unwrap();

    let uri = format!("/api/payroll/{}/approve", payslip_id);
    let (status, approved) = send(&router, "PATCH", &uri, Some("hr_manager"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");

    let uri = format!("/api/payroll/{}/pay", payslip_id);
    let (status, paid) = send(&router, "PATCH", &uri, Some("admin"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paid["status"], "paid");
}

#[tokio::test]
async fn test_paying_unapproved_payslip_is_rejected() {
    let router = empty_router();
    let employee = hire(&router, "Amal", "2000").await;
    let (_, result) = send(
        &router,
        "POST",
        "/api/payroll/calculate",
        Some("admin"),
        Some(march_request(employee["id"].as_str().unwrap())),
    )
    .await;
    let payslip_id = result["payslip"]["id"].as_str().unwrap();

    let uri = format!("/api/payroll/{}/pay", payslip_id);
    let (status, error) = send(&router, "PATCH", &uri, Some("admin"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "PAYSLIP_NOT_PAYABLE");

    let uri = format!("/api/payroll/{}", payslip_id);
    let (_, payslip) = send(&router, "GET", &uri, Some("admin"), None).await;
    assert_eq!(payslip["status"], "calculated");
}

#[tokio::test]
async fn test_calculate_for_unknown_employee_is_not_found() {
    let router = empty_router();
    let (status, error) = send(
        &router,
        "POST",
        "/api/payroll/calculate",
        Some("admin"),
        Some(march_request(&Uuid::new_v4().to_string())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_manager_cannot_calculate() {
    let router = empty_router();
    let employee = hire(&router, "Amal", "2000").await;
    let (status, _) = send(
        &router,
        "POST",
        "/api/payroll/calculate",
        Some("manager"),
        Some(march_request(employee["id"].as_str().unwrap())),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_seeded_parameters_feed_the_calculation() {
    let router = seeded_router();
    let employee = hire(&router, "Amal", "2000").await;

    let (status, parameters) = send(&router, "GET", "/api/payroll/parameters", Some("admin"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parameters.as_array().unwrap().len(), 4);

    let (status, result) = send(
        &router,
        "POST",
        "/api/payroll/calculate",
        Some("admin"),
        Some(march_request(employee["id"].as_str().unwrap())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(result["payslip"]["allowances"], "100.00");
}

#[tokio::test]
async fn test_payslips_filtered_by_month() {
    let router = empty_router();
    let employee = hire(&router, "Amal", "2000").await;
    send(
        &router,
        "POST",
        "/api/payroll/calculate",
        Some("admin"),
        Some(march_request(employee["id"].as_str().unwrap())),
    )
    .await;

    let (status, march) = send(&router, "GET", "/api/payroll?month=3&year=2026", Some("admin"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(march["pagination"]["total"], 1);

    let (_, april) = send(&router, "GET", "/api/payroll?month=4&year=2026", Some("admin"), None).await;
    assert_eq!(april["pagination"]["total"], 0);
}

// =============================================================================
// Absences
// =============================================================================

#[tokio::test]
async fn test_absence_request_and_balance() {
    let router = seeded_router();
    let employee = hire(&router, "Amal", "2000").await;
    let employee_id = employee["id"].as_str().unwrap();

    let (status, types) = send(&router, "GET", "/api/absences/types", Some("employee"), None).await;
    assert_eq!(status, StatusCode::OK);
    let annual = types
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["code"] == "CP")
        .expect("annual leave type seeded");
    let annual_id = annual["id"].as_str().unwrap();

    let (status, absence) = send(
        &router,
        "POST",
        "/api/absences",
        Some("employee"),
        Some(json!({
            "employee_id": employee_id,
            "absence_type_id": annual_id,
            "start_date": "2026-04-06",
            "end_date": "2026-04-10"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "request failed: {}", absence);
    assert_eq!(absence["status"], "pending");
    assert_eq!(absence["total_days"], "5");

    let uri = format!("/api/absences/{}/approve", absence["id"].as_str().unwrap());
    let (status, approved) = send(&router, "PATCH", &uri, Some("manager"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(approved["status"], "approved");

    let uri = format!("/api/absences/balance/{}", employee_id);
    let (status, balance) = send(&router, "GET", &uri, Some("employee"), None).await;
    assert_eq!(status, StatusCode::OK);
    let annual_row = balance
        .as_array()
        .unwrap()
        .iter()
        .find(|row| row["code"] == "CP")
        .unwrap();
    assert_eq!(annual_row["used_days"], "5");
    assert_eq!(annual_row["remaining_days"], "25");
}

#[tokio::test]
async fn test_employee_cannot_approve_absence() {
    let router = seeded_router();
    let employee = hire(&router, "Amal", "2000").await;
    let (_, types) = send(&router, "GET", "/api/absences/types", Some("employee"), None).await;
    let type_id = types[0]["id"].as_str().unwrap();
    let (_, absence) = send(
        &router,
        "POST",
        "/api/absences",
        Some("employee"),
        Some(json!({
            "employee_id": employee["id"],
            "absence_type_id": type_id,
            "start_date": "2026-04-06",
            "end_date": "2026-04-06"
        })),
    )
    .await;

    let uri = format!("/api/absences/{}/approve", absence["id"].as_str().unwrap());
    let (status, _) = send(&router, "PATCH", &uri, Some("employee"), None).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_absence_with_unknown_type_is_rejected() {
    let router = seeded_router();
    let employee = hire(&router, "Amal", "2000").await;
    let (status, error) = send(
        &router,
        "POST",
        "/api/absences",
        Some("employee"),
        Some(json!({
            "employee_id": employee["id"],
            "absence_type_id": Uuid::new_v4(),
            "start_date": "2026-04-06",
            "end_date": "2026-04-07"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_REFERENCE");
}

// =============================================================================
// Contracts and recruitment
// =============================================================================

#[tokio::test]
async fn test_contract_create_and_filter() {
    let router = empty_router();
    let employee = hire(&router, "Amal", "2000").await;
    let (status, contract) = send(
        &router,
        "POST",
        "/api/contracts",
        Some("hr_manager"),
        Some(json!({
            "employee_id": employee["id"],
            "contract_type": "cdd",
            "start_date": "2026-01-01",
            "end_date": "2026-12-31",
            "salary": "2000"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", contract);
    assert_eq!(contract["status"], "active");

    let (_, cdd) = send(&router, "GET", "/api/contracts?type=cdd", Some("admin"), None).await;
    assert_eq!(cdd["pagination"]["total"], 1);

    let (_, cdi) = send(&router, "GET", "/api/contracts?type=cdi", Some("admin"), None).await;
    assert_eq!(cdi["pagination"]["total"], 0);
}

#[tokio::test]
async fn test_recruitment_pipeline() {
    let router = empty_router();
    let (status, posting) = send(
        &router,
        "POST",
        "/api/recruitment",
        Some("manager"),
        Some(json!({ "title": "Payroll officer" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(posting["status"], "open");
    let posting_id = posting["id"].as_str().unwrap();

    let uri = format!("/api/recruitment/{}/candidates", posting_id);
    let (status, candidate) = send(
        &router,
        "POST",
        &uri,
        Some("manager"),
        Some(json!({
            "first_name": "Sana",
            "last_name": "Test",
            "email": "sana@example.com"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(candidate["status"], "applied");

    let uri = format!("/api/recruitment/candidates/{}", candidate["id"].as_str().unwrap());
    let (status, hired) = send(
        &router,
        "PATCH",
        &uri,
        Some("manager"),
        Some(json!({ "status": "hired", "rating": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hired["status"], "hired");

    let (status, postings) = send(&router, "GET", "/api/recruitment", Some("employee"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(postings[0]["total_candidates"], 1);
    assert_eq!(postings[0]["hired_count"], 1);
}

#[tokio::test]
async fn test_candidate_for_unknown_posting_is_not_found() {
    let router = empty_router();
    let uri = format!("/api/recruitment/{}/candidates", Uuid::new_v4());
    let (status, _) = send(
        &router,
        "POST",
        &uri,
        Some("manager"),
        Some(json!({
            "first_name": "Sana",
            "last_name": "Test",
            "email": "sana@example.com"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn test_dashboard_requires_reports_access() {
    let router = empty_router();
    hire(&router, "Amal", "2000").await;

    let (status, _) = send(&router, "GET", "/api/dashboard/stats", Some("manager"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&router, "GET", "/api/dashboard/kpi", Some("admin"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&router, "GET", "/api/dashboard/stats", Some("employee"), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

// =============================================================================
// Request validation
// =============================================================================

#[tokio::test]
async fn test_oversized_page_is_rejected() {
    let router = empty_router();
    let (status, error) = send(&router, "GET", "/api/employees?limit=500", Some("admin"), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_month_is_rejected() {
    let router = empty_router();
    let (status, error) = send(&router, "GET", "/api/payroll?month=13&year=2026", Some("admin"), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_invalid_identifier_is_rejected() {
    let router = empty_router();
    let (status, error) = send(&router, "GET", "/api/employees/not-a-uuid", Some("admin"), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let router = empty_router();
    let request = Request::builder()
        .method("POST")
        .uri("/api/employees")
        .header(USER_ID_HEADER, Uuid::new_v4().to_string())
        .header(USER_ROLE_HEADER, "admin")
        .header("Content-Type", "application/json")
        .body(Body::from("{ invalid json }"))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(error["code"], "MALFORMED_JSON");
}

#[tokio::test]
async fn test_missing_required_field_is_validation_error() {
    let router = empty_router();
    let (status, error) = send(
        &router,
        "POST",
        "/api/employees",
        Some("admin"),
        Some(json!({ "first_name": "Amal" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}
