//! Sign-in and sign-out through the remote API.

use http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use yugam_entity::Role;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_login_sets_session_cookie() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({ "email": "asha@yugam.in", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "remote-abc",
            "user": { "id": "u-1", "name": "Asha", "email": "asha@yugam.in", "role": "FINANCE_TEAM" }
        })))
        .expect(1)
        .mount(&app.remote)
        .await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "asha@yugam.in", "password": "secret" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], "u-1");
    assert_eq!(response.body["data"]["role"], "FINANCE_TEAM");

    let cookie = response
        .set_cookies()
        .into_iter()
        .find(|c| c.starts_with("yugam_session="))
        .expect("session cookie not set");
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
}

#[tokio::test]
async fn test_session_forwards_remote_token() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "remote-abc",
            "user": { "id": "u-1", "name": "Asha", "email": "asha@yugam.in", "role": "ADMIN" }
        })))
        .mount(&app.remote)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("Authorization", "Bearer remote-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u-1", "name": "Asha", "email": "asha@yugam.in", "role": "ADMIN"
        })))
        .expect(1)
        .mount(&app.remote)
        .await;

    let login = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "asha@yugam.in", "password": "secret" })),
            None,
        )
        .await;
    let cookie = login
        .set_cookies()
        .into_iter()
        .find(|c| c.starts_with("yugam_session="))
        .expect("session cookie not set");
    let token = cookie
        .trim_start_matches("yugam_session=")
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let response = app.request_with_cookie("GET", "/profile", None, &token).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["account"]["email"], "asha@yugam.in");
    assert_eq!(response.body["data"]["session"]["role"], "ADMIN");
    assert!(response.body["data"]["session"].get("apiToken").is_none());
}

#[tokio::test]
async fn test_login_rejected_by_remote() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&app.remote)
        .await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "asha@yugam.in", "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert!(response.set_cookies().is_empty());
}

#[tokio::test]
async fn test_login_validates_before_calling_remote() {
    let app = TestApp::new().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.remote)
        .await;

    let response = app
        .request(
            "POST",
            "/login",
            Some(json!({ "email": "not-an-email", "password": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_login_remote_down_is_503() {
    let app = TestApp::new().await;
    let mut config = app.config.clone();
    config.backend.base_url = "http://127.0.0.1:1/api".to_string();
    let state = yugam_api::AppState::new(config).unwrap();
    let router = yugam_api::build_app(state);

    let request = http::Request::builder()
        .method("POST")
        .uri("/login")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from(
            json!({ "email": "asha@yugam.in", "password": "secret" }).to_string(),
        ))
        .unwrap();
    let response = tower::ServiceExt::oneshot(router, request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;
    let token = app.session_for("u-1", Role::EventTeamLead);

    let response = app.request_with_cookie("POST", "/logout", None, &token).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/login"));
    let cleared = response
        .set_cookies()
        .into_iter()
        .find(|c| c.starts_with("yugam_session="))
        .expect("removal cookie not set");
    assert!(cleared.contains("Max-Age=0"));
}
