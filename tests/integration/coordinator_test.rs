//! Scoped list pages: coordinators and team leads.

use http::StatusCode;
use serde_json::{Value, json};

use yugam_entity::Role;

use crate::helpers::TestApp;

fn events() -> Value {
    json!([
        {
            "id": "e-1", "title": "Hackathon", "status": "APPROVED",
            "dateTime": "2024-12-20T09:00:00Z",
            "creator": { "id": "lead-1", "name": "Event Lead" },
            "coordinator": { "id": "coord-1", "name": "Coord" }
        },
        {
            "id": "e-2", "title": "Quiz", "status": "PENDING",
            "creator": { "id": "lead-2", "name": "Other Lead" },
            "coordinator": { "id": "coord-2", "name": "Someone" }
        },
        {
            "id": "e-3", "title": "Expo", "status": "ARCHIVED",
            "creator": { "id": "lead-1", "name": "Event Lead" }
        }
    ])
}

fn workshops() -> Value {
    json!([
        {
            "id": "w-1", "title": "Rust 101", "status": "PENDING",
            "creator": { "id": "wlead-1", "name": "Workshop Lead" },
            "coordinator": { "id": "coord-1", "name": "Coord" }
        }
    ])
}

#[tokio::test]
async fn test_coordinator_sees_only_coordinated_items() {
    let app = TestApp::new().await;
    app.mock_get("/events", events()).await;
    app.mock_get("/workshops", workshops()).await;
    let token = app.session_for("coord-1", Role::EventCoordinator);

    let response = app
        .request("GET", "/coordinator/events", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let rows = response.rows();
    let ids: Vec<&str> = rows.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["e-1", "w-1"]);
    assert_eq!(rows[0]["type"], "EVENT");
    assert_eq!(rows[0]["link"], "/events/e-1");
    assert_eq!(rows[1]["type"], "WORKSHOP");
    assert_eq!(rows[1]["link"], "/workshops/w-1");
    assert_eq!(rows[1]["creator"]["name"], "Workshop Lead");
    assert_eq!(rows[1]["date"], "TBD");
}

#[tokio::test]
async fn test_coordinator_type_and_date_filters() {
    let app = TestApp::new().await;
    app.mock_get("/events", events()).await;
    app.mock_get("/workshops", workshops()).await;
    let token = app.session_for("coord-1", Role::WorkshopCoordinator);

    let response = app
        .request("GET", "/coordinator/events?type=WORKSHOP", None, Some(&token))
        .await;
    let ids: Vec<&str> = response
        .rows()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["w-1"]);

    let response = app
        .request(
            "GET",
            "/coordinator/events?dateFrom=2024-12-20&dateTo=2024-12-20",
            None,
            Some(&token),
        )
        .await;
    let ids: Vec<&str> = response
        .rows()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["e-1"]);
    assert_eq!(response.body["data"]["filter"]["dateFrom"], "2024-12-20");
}

#[tokio::test]
async fn test_event_lead_sees_own_events_with_neutral_badge() {
    let app = TestApp::new().await;
    app.mock_get("/events", events()).await;
    let token = app.session_for("lead-1", Role::EventTeamLead);

    let response = app
        .request("GET", "/event-leads/events", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let rows = response.rows();
    let ids: Vec<&str> = rows.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["e-1", "e-3"]);
    assert_eq!(rows[0]["badge"]["background"], "bg-green-100");
    assert_eq!(rows[1]["badge"]["label"], "Unknown");
    assert_eq!(rows[1]["badge"]["background"], "bg-gray-100");
}

#[tokio::test]
async fn test_admin_sees_all_lead_events() {
    let app = TestApp::new().await;
    app.mock_get("/events", events()).await;
    let token = app.session_for("admin-1", Role::Admin);

    let response = app
        .request("GET", "/event-leads/events?status=PENDING", None, Some(&token))
        .await;

    let ids: Vec<&str> = response
        .rows()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["e-2"]);
}

#[tokio::test]
async fn test_list_degrades_when_remote_down() {
    let app = TestApp::new().await;
    let token = app.session_for("fin-1", Role::FinanceTeam);

    // No mocks mounted: the remote answers 404 for everything.
    let response = app.request("GET", "/finance/events", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.rows().len(), 0);
    assert_eq!(
        response.body["data"]["toasts"][0]["message"],
        "Failed to fetch events"
    );
}

#[tokio::test]
async fn test_dashboard_counts_for_finance() {
    let app = TestApp::new().await;
    app.mock_get("/events", events()).await;
    app.mock_get("/workshops", workshops()).await;
    app.mock_get(
        "/budgets",
        json!([
            { "id": "b-1", "amount": 1000.0, "status": "PENDING", "eventId": "e-1" },
            { "id": "b-2", "amount": 2000.0, "approvedAmount": 1800.0, "status": "APPROVED", "workshopId": "w-1" }
        ]),
    )
    .await;
    app.mock_get(
        "/expenses",
        json!([
            { "id": "x-1", "item": "Hall", "amount": 500.0, "eventId": "e-1" },
            { "id": "x-2", "item": "Lunch", "amount": 700.0, "workshopId": "w-1" }
        ]),
    )
    .await;
    let token = app.session_for("fin-1", Role::FinanceTeam);

    let response = app.request("GET", "/", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = &response.body["data"];
    assert_eq!(data["role"], "FINANCE_TEAM");
    assert_eq!(data["counts"]["total"], 4);
    assert_eq!(data["pendingBudgets"], 1);
    assert_eq!(data["summary"]["totalApproved"], 2800.0);
    assert_eq!(data["summary"]["utilization"], 42);
}
