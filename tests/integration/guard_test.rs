//! Route guard: redirects for anonymous users and wrong roles.

use http::StatusCode;
use serde_json::json;

use yugam_entity::Role;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health_is_public() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_anonymous_is_sent_to_login() {
    let app = TestApp::new().await;

    for path in ["/", "/profile", "/admin/users", "/finance/budgets", "/workshops/w-1"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::SEE_OTHER, "{path}");
        assert_eq!(response.location(), Some("/login"), "{path}");
    }
}

#[tokio::test]
async fn test_invalid_token_counts_as_anonymous() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/admin/users", None, Some("not-a-session"))
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
}

#[tokio::test]
async fn test_wrong_role_is_sent_to_unauthorized() {
    let app = TestApp::new().await;
    let token = app.session_for("fin-1", Role::FinanceTeam);

    let response = app.request("GET", "/admin/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/unauthorized"));
}

#[tokio::test]
async fn test_signed_in_user_skips_login_page() {
    let app = TestApp::new().await;
    let token = app.session_for("u-1", Role::EventCoordinator);

    let response = app.request("GET", "/login", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/"));
}

#[tokio::test]
async fn test_coordinator_pages_follow_role_table() {
    let app = TestApp::new().await;
    app.mock_get("/events", json!([])).await;
    app.mock_get("/workshops", json!([])).await;

    for role in Role::ALL {
        let token = app.session_for("u-1", role);
        let response = app
            .request("GET", "/coordinator/events", None, Some(&token))
            .await;

        let allowed = matches!(
            role,
            Role::Admin | Role::EventCoordinator | Role::WorkshopCoordinator
        );
        if allowed {
            assert_eq!(response.status, StatusCode::OK, "{role:?}");
        } else {
            assert_eq!(response.status, StatusCode::SEE_OTHER, "{role:?}");
            assert_eq!(response.location(), Some("/unauthorized"), "{role:?}");
        }
    }
}

#[tokio::test]
async fn test_admin_lists_users() {
    let app = TestApp::new().await;
    app.mock_get(
        "/users",
        json!([
            { "id": "u-1", "name": "Asha", "email": "asha@yugam.in", "role": "ADMIN" },
            { "id": "u-2", "name": "Ravi", "email": "ravi@yugam.in", "role": "FINANCE_TEAM" }
        ]),
    )
    .await;
    let token = app.session_for("admin-1", Role::Admin);

    let response = app.request("GET", "/admin/users", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.rows().len(), 2);
    assert_eq!(response.body["data"]["total"], 2);
    assert_eq!(response.body["data"]["toasts"], json!([]));
}

#[tokio::test]
async fn test_cookie_session_is_accepted() {
    let app = TestApp::new().await;
    app.mock_get("/notifications", json!([])).await;
    let token = app.session_for("u-1", Role::FacilitiesTeam);

    let response = app
        .request_with_cookie("GET", "/notifications", None, &token)
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_path_is_not_found_once_signed_in() {
    let app = TestApp::new().await;
    let token = app.session_for("u-1", Role::Admin);

    let response = app.request("GET", "/nowhere", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    let id = response.headers["x-request-id"].to_str().unwrap();
    assert_eq!(id.len(), 36);
}
