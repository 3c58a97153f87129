// Seeding against a mocked backend

use hrm_client::api::ApiClient;
use hrm_client::seed::{self, SeedPlan, SeedReport};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_seed_creates_employees_then_attendance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "employee_id": "a-1",
            "full_name": "Alice Johnson",
            "email": "alice@example.com",
            "department": "Engineering"
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "employee_id": "a-1",
            "full_name": "Alice Johnson",
            "email": "alice@example.com",
            "department": "Engineering"
        }])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/attendance"))
        .and(body_json(json!({"employee_id": "a-1", "date": "2026-02-11", "status": "Present"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(
            json!({"employee_id": "a-1", "date": "2026-02-11", "status": "Present"}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let plan: SeedPlan = serde_json::from_value(json!({
        "employees": [
            {"full_name": "Alice Johnson", "email": "alice@example.com", "department": "Engineering"},
            {"full_name": "Bob Smith", "email": "bob@example.com", "department": "Sales"}
        ],
        "attendance": [
            {"employee_email": "alice@example.com", "date": "2026-02-11", "status": "Present"},
            {"employee_email": "bob@example.com", "date": "2026-02-11", "status": "Absent"}
        ]
    }))
    .unwrap();

    let client = ApiClient::new(&server.uri()).unwrap();
    let report = seed::run(&client, &plan).await;

    // bob is not in the listing, so his attendance cannot be resolved
    assert_eq!(
        report,
        SeedReport {
            employees_created: 2,
            attendance_marked: 1,
            failures: 1,
        }
    );
}

#[tokio::test]
async fn test_seed_keeps_going_after_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .respond_with(ResponseTemplate::new(409).set_body_string("duplicate email"))
        .expect(2)
        .mount(&server)
        .await;

    let plan: SeedPlan = serde_json::from_value(json!({
        "employees": [
            {"full_name": "Alice Johnson", "email": "alice@example.com", "department": "Engineering"},
            {"full_name": "Cara Lee", "email": "cara@example.com", "department": "HR"}
        ]
    }))
    .unwrap();

    let client = ApiClient::new(&server.uri()).unwrap();
    let report = seed::run(&client, &plan).await;

    assert_eq!(report.employees_created, 0);
    assert_eq!(report.failures, 2);
}
