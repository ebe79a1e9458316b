//! Event and workshop detail, create, approve and the CSV template.

use http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use yugam_entity::Role;

use crate::helpers::{REMOTE_TOKEN, TestApp};

async fn mount_workshop(app: &TestApp) {
    app.mock_get(
        "/workshops/w-1",
        json!({
            "id": "w-1",
            "title": "Rust 101",
            "status": "APPROVED",
            "dateTime": "2024-12-25T10:00:00Z",
            "creator": { "id": "lead-1", "name": "Lead" }
        }),
    )
    .await;
    app.mock_get(
        "/expenses/workshop/w-1",
        json!([
            { "id": "x-1", "item": "Hall", "amount": 500.0 },
            { "id": "x-2", "itemName": "Lunch", "amount": 700.0 }
        ]),
    )
    .await;
}

#[tokio::test]
async fn test_detail_aggregates() {
    let app = TestApp::new().await;
    mount_workshop(&app).await;
    app.mock_get(
        "/budgets/workshop/w-1",
        json!([
            { "id": "b-1", "amount": 1000.0, "status": "PENDING" },
            { "id": "b-2", "amount": 2000.0, "approvedAmount": 1800.0, "status": "APPROVED" }
        ]),
    )
    .await;
    let token = app.session_for("coord-1", Role::WorkshopCoordinator);

    let response = app.request("GET", "/workshops/w-1", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["kind"], "WORKSHOP");
    assert_eq!(data["item"]["title"], "Rust 101");
    assert_eq!(data["badge"]["label"], "Approved");
    assert_eq!(data["summary"]["totalBudget"], 3000.0);
    assert_eq!(data["summary"]["totalApproved"], 2800.0);
    assert_eq!(data["summary"]["totalExpenses"], 1200.0);
    assert_eq!(data["summary"]["utilization"], 42);
    assert_eq!(data["summary"]["tier"], "green");
    assert_eq!(data["summary"]["remaining"], 1600.0);
    assert_eq!(data["budgets"][0]["badge"]["label"], "Pending");
    assert_eq!(data["toasts"], json!([]));
}

#[tokio::test]
async fn test_detail_degrades_when_budgets_fail() {
    let app = TestApp::new().await;
    mount_workshop(&app).await;
    Mock::given(method("GET"))
        .and(path("/api/budgets/workshop/w-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.remote)
        .await;
    let token = app.session_for("u-1", Role::Admin);

    let response = app.request("GET", "/workshops/w-1", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["budgets"], json!([]));
    assert_eq!(data["summary"]["utilization"], 0);
    assert_eq!(
        data["toasts"],
        json!([{ "kind": "error", "message": "Failed to fetch budgets" }])
    );
}

#[tokio::test]
async fn test_event_row_link_opens_event_detail() {
    let app = TestApp::new().await;
    let event = json!({
        "id": "e-1",
        "title": "Hackathon",
        "status": "PENDING",
        "dateTime": "2024-12-25T10:00",
        "creator": { "id": "admin-1", "name": "Admin" }
    });
    app.mock_get("/events", json!([event.clone()])).await;
    app.mock_get("/events/e-1", event).await;
    app.mock_get(
        "/budgets/event/e-1",
        json!([{ "id": "b-1", "amount": 2000.0, "approvedAmount": 2000.0 }]),
    )
    .await;
    app.mock_get(
        "/expenses/event/e-1",
        json!([{ "id": "x-1", "item": "Stage", "amount": 1500.0 }]),
    )
    .await;
    let token = app.session_for("admin-1", Role::Admin);

    let list = app.request("GET", "/admin/events", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::OK);
    let link = list.rows()[0]["link"].as_str().unwrap().to_string();
    assert_eq!(link, "/events/e-1");
    assert_eq!(list.rows()[0]["date"], "2024-12-25");

    let response = app.request("GET", &link, None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["kind"], "EVENT");
    assert_eq!(data["item"]["title"], "Hackathon");
    assert_eq!(data["badge"]["label"], "Pending");
    assert_eq!(data["summary"]["utilization"], 75);
    assert_eq!(data["summary"]["tier"], "yellow");
    assert_eq!(data["summary"]["barClass"], "bg-yellow-500");
    assert_eq!(data["toasts"], json!([]));
}

#[tokio::test]
async fn test_event_detail_requires_sign_in() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/events/e-1", None, None).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
}

#[tokio::test]
async fn test_csv_template_download() {
    let app = TestApp::new().await;
    let token = app.session_for("admin-1", Role::Admin);

    let response = app
        .request("GET", "/admin/workshops/template.csv", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers["content-type"].to_str().unwrap(),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        response.headers["content-disposition"].to_str().unwrap(),
        "attachment; filename=\"workshops_template.csv\""
    );
    let lines: Vec<&str> = response.text.lines().collect();
    assert_eq!(lines[0], "Title,Type,Description,CoordinatorEmail,DateTime");
    assert_eq!(lines.len(), 3);
}

#[tokio::test]
async fn test_lead_creates_workshop_and_is_redirected() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/workshops"))
        .and(header("Authorization", format!("Bearer {REMOTE_TOKEN}").as_str()))
        .and(body_json(json!({
            "title": "Embedded Rust",
            "expectedParticipants": 40,
            "coordinatorEmail": "coord@yugam.in"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "w-9",
            "title": "Embedded Rust",
            "status": "PENDING",
            "creator": { "id": "lead-1" }
        })))
        .expect(1)
        .mount(&app.remote)
        .await;
    let token = app.session_for("lead-1", Role::WorkshopTeamLead);

    let response = app
        .request(
            "POST",
            "/workshop-leads/workshops/create",
            Some(json!({
                "title": "Embedded Rust",
                "description": "",
                "expectedParticipants": 40,
                "coordinatorEmail": "coord@yugam.in"
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/workshop-leads/workshops"));
}

#[tokio::test]
async fn test_create_rejects_blank_title() {
    let app = TestApp::new().await;
    let token = app.session_for("admin-1", Role::Admin);

    let response = app
        .request(
            "POST",
            "/admin/workshops/create",
            Some(json!({ "title": "" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_surfaces_remote_failure() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/workshops"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.remote)
        .await;
    let token = app.session_for("admin-1", Role::Admin);

    let response = app
        .request(
            "POST",
            "/admin/workshops/create",
            Some(json!({ "title": "Embedded Rust" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_admin_approves_workshop() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/workshops/w-1/approve"))
        .and(body_json(json!({ "status": "APPROVED", "remarks": "Looks good" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "w-1", "status": "APPROVED" })),
        )
        .expect(1)
        .mount(&app.remote)
        .await;
    let token = app.session_for("admin-1", Role::Admin);

    let response = app
        .request(
            "POST",
            "/admin/workshops/w-1/approve",
            Some(json!({ "status": "APPROVED", "remarks": "Looks good" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "APPROVED");
}

#[tokio::test]
async fn test_approval_requires_decision_status() {
    let app = TestApp::new().await;
    let token = app.session_for("fin-1", Role::FinanceTeam);

    let response = app
        .request(
            "POST",
            "/finance/budgets/b-1/approve",
            Some(json!({ "status": "PENDING" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
