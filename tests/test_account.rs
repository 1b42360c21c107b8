//! Login, dashboard, and profile integration tests.

mod common;

use common::{Route, TestServer};
use printrack_sdk::PrintrackError;
use serde_json::json;

#[test]
fn login_installs_the_token_on_the_sdk() {
    let server = TestServer::start(vec![Route::json(
        "POST",
        "/auth/login",
        json!({
            "access_token": "jwt-abc",
            "user": {"id": 7, "email": "admin@example.com"}
        }),
    )]);
    let sdk = server.sdk();
    assert!(sdk.token().is_none());

    let response = sdk.login("admin@example.com", "secret").unwrap();
    assert_eq!(response.user.id, 7);
    assert_eq!(response.user.email, "admin@example.com");
    assert_eq!(sdk.token().as_deref(), Some("jwt-abc"));
}

#[test]
fn login_failure_surfaces_backend_message() {
    let server = TestServer::start(vec![Route {
        method: "POST",
        path: "/auth/login",
        status: 401,
        body: json!({"message": "Identifiants invalides"}).to_string(),
    }]);

    let err = server.sdk().login("admin@example.com", "wrong").unwrap_err();
    match err {
        PrintrackError::Api { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Identifiants invalides"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn dashboard_stats_carries_the_bearer_token() {
    let server = TestServer::start(vec![Route::json(
        "GET",
        "/impressions/stats",
        json!({
            "totalImpressions": 42,
            "totalEncreUtilisee": 12.5,
            "totalCopies": 180,
            "monthlyData": [
                {"month": "Jan", "total": 10.0},
                {"month": "Feb", "total": 32.0}
            ]
        }),
    )]);
    let sdk = server.sdk();
    sdk.set_token(Some("jwt-abc".to_string()));

    let stats = sdk.dashboard().stats().unwrap();
    assert_eq!(stats.total_impressions, 42);
    assert_eq!(stats.total_ink_used, 12.5);
    assert_eq!(stats.total_copies, 180);
    assert_eq!(stats.monthly_data.len(), 2);
    assert_eq!(stats.monthly_data[1].month, "Feb");

    assert_eq!(
        server.authorizations()[0].as_deref(),
        Some("Bearer jwt-abc")
    );
}

#[test]
fn dashboard_stats_defaults_missing_fields_to_zero() {
    let server = TestServer::start(vec![Route::json("GET", "/impressions/stats", json!({}))]);
    let stats = server.sdk().dashboard().stats().unwrap();
    assert_eq!(stats.total_impressions, 0);
    assert_eq!(stats.total_copies, 0);
    assert!(stats.monthly_data.is_empty());
}

#[test]
fn profile_roundtrip() {
    let server = TestServer::start(vec![
        Route::json("GET", "/api/user/profile", json!({"email": "admin@example.com"})),
        Route::json("PUT", "/api/user/profile", json!({})),
        Route::json("PUT", "/api/user/change-password", json!({})),
    ]);
    let sdk = server.sdk();

    let profile = sdk.profile().get(7).unwrap();
    assert_eq!(profile.email, "admin@example.com");

    sdk.profile().update_email(7, "new@example.com").unwrap();
    sdk.profile().change_password(7, "old", "new").unwrap();

    let lines = server.request_lines();
    assert!(lines[0].starts_with("GET /api/user/profile?id=7"));
    assert!(lines[1].starts_with("PUT /api/user/profile?id=7"));
    assert!(lines[2].starts_with("PUT /api/user/change-password?id=7"));
}
