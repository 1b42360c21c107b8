//! Print-job fetch integration tests.

mod common;

use chrono::NaiveDate;
use common::{Route, TestServer};
use printrack_sdk::PrintrackError;
use serde_json::json;

fn job_rows() -> serde_json::Value {
    json!([
        {"id": 1, "quantite": 3, "largeur": 10.0, "hauteur": 5.0, "mode": "Noir & Blanc"},
        {"id": 2, "quantite": 1, "largeur": 210.0, "hauteur": 297.0, "mode": "Photo HD"}
    ])
}

#[test]
fn by_date_sends_iso_date_and_parses_jobs() {
    let server = TestServer::start(vec![Route::json("GET", "/maintop/by-date", job_rows())]);
    let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    let jobs = server.sdk().jobs().by_date(date).unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].quantity, 3);
    assert_eq!(jobs[0].width, 10.0);
    assert_eq!(jobs[1].mode, "Photo HD");

    let lines = server.request_lines();
    assert!(lines[0].contains("date=2026-03-14"));
}

#[test]
fn by_month_sends_zero_padded_month() {
    let server = TestServer::start(vec![Route::json("GET", "/maintop/by-month", json!([]))]);
    let jobs = server.sdk().jobs().by_month(2026, 3).unwrap();
    assert!(jobs.is_empty());

    let lines = server.request_lines();
    assert!(lines[0].contains("year=2026"));
    assert!(lines[0].contains("month=03"));
}

#[test]
fn by_date_surfaces_errors_strictly() {
    let server = TestServer::start(vec![Route::status("GET", "/maintop/by-date", 500)]);
    let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    let err = server.sdk().jobs().by_date(date).unwrap_err();
    assert!(matches!(err, PrintrackError::Api { status: 500, .. }));
}

#[test]
fn or_empty_variants_degrade_to_empty() {
    let server = TestServer::start(vec![
        Route::status("GET", "/maintop/by-date", 404),
        Route::json("GET", "/maintop/by-month", json!("not an array")),
    ]);
    let sdk = server.sdk();
    let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    assert!(sdk.jobs().by_date_or_empty(date).is_empty());
    assert!(sdk.jobs().by_month_or_empty(2026, 3).is_empty());
}
