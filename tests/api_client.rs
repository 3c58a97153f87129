// Integration tests for the HTTP client against a mocked backend

use chrono::NaiveDate;
use hrm_client::api::{ApiClient, AttendanceApi, EmployeeApi};
use hrm_client::error::ApiError;
use hrm_client::model::{AttendanceRecord, AttendanceStatus, EmployeeId, NewEmployee};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn alice() -> serde_json::Value {
    json!({
        "employee_id": "0b6c7f52-7f0e-4a4e-9d0f-1f2a3b4c5d6e",
        "employee_code": "EMP-001",
        "full_name": "Alice Johnson",
        "email": "alice@example.com",
        "department": "Engineering"
    })
}

#[tokio::test]
async fn test_get_employees() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([alice()])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let employees = client.get_employees().await.unwrap();

    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].full_name, "Alice Johnson");
    assert_eq!(employees[0].employee_code.as_deref(), Some("EMP-001"));
}

#[tokio::test]
async fn test_add_employee_posts_json() {
    let server = MockServer::start().await;
    let payload = NewEmployee {
        employee_code: "EMP-001".into(),
        full_name: "Alice Johnson".into(),
        email: "alice@example.com".into(),
        department: "Engineering".into(),
    };
    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .and(body_json(json!({
            "employee_code": "EMP-001",
            "full_name": "Alice Johnson",
            "email": "alice@example.com",
            "department": "Engineering"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(alice()))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let created = client.add_employee(&payload).await.unwrap().unwrap();

    assert_eq!(
        created.employee_id,
        Some(EmployeeId::from("0b6c7f52-7f0e-4a4e-9d0f-1f2a3b4c5d6e"))
    );
}

#[tokio::test]
async fn test_delete_employee() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/employees/e-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let confirmation = client.delete_employee(&EmployeeId::from("e-7")).await.unwrap();
    assert!(confirmation.deleted);
}

#[tokio::test]
async fn test_clear_employees() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees/clear"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cleared": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    assert!(client.clear_employees().await.unwrap().cleared);
}

#[tokio::test]
async fn test_mark_and_get_attendance() {
    let server = MockServer::start().await;
    let row = json!({"employee_id": "e-7", "date": "2026-02-11", "status": "Present"});
    Mock::given(method("POST"))
        .and(path("/api/attendance"))
        .and(body_json(row.clone()))
        .respond_with(ResponseTemplate::new(201).set_body_json(row.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/attendance/e-7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            row,
            {"employee_id": "e-7", "date": "2026-02-10", "status": "Absent"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let record = AttendanceRecord {
        employee_id: EmployeeId::from("e-7"),
        date: NaiveDate::from_ymd_opt(2026, 2, 11).unwrap(),
        status: AttendanceStatus::Present,
    };

    let created = client.mark_attendance(&record).await.unwrap();
    assert_eq!(created, record);

    let history = client.get_attendance(&EmployeeId::from("e-7")).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1].status, AttendanceStatus::Absent);
}

#[tokio::test]
async fn test_error_body_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream store unreachable"))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let err = client.get_employees().await.unwrap_err();

    assert_eq!(err.to_string(), "upstream store unreachable");
    assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
}

#[tokio::test]
async fn test_empty_error_body_uses_status_reason() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let err = client
        .delete_employee(&EmployeeId::from("missing"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Status { .. }));
    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let err = client.get_employees().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn test_find_employee_by_email() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([alice()])))
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let found = client.find_employee_by_email("alice@example.com").await.unwrap();
    assert_eq!(found.map(|e| e.full_name), Some("Alice Johnson".to_string()));
    assert!(client.find_employee_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/_health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"ok": true, "status_code": 200, "body": []})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let health = client.health().await.unwrap();
    assert!(health.ok);
    assert_eq!(health.status_code, 200);
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    // Nothing listens on port 9 locally
    let client = ApiClient::new("http://127.0.0.1:9").unwrap();
    let err = client.get_employees().await.unwrap_err();
    assert!(matches!(err, ApiError::Http(_)));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_add_employee_accepts_created_without_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&server.uri()).unwrap();
    let payload = NewEmployee {
        full_name: "Alice Johnson".into(),
        email: "alice@example.com".into(),
        department: "Engineering".into(),
        ..Default::default()
    };

    let created = client.add_employee(&payload).await.unwrap();
    assert_eq!(created, None);
}
