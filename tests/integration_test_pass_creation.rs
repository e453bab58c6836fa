mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use common::{parse_body, TestApp};
use serde_json::json;

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn ts(value: &serde_json::Value) -> DateTime<Utc> {
    value.as_str().unwrap().parse().unwrap()
}

async fn setup_profiled_pass_type(app: &TestApp, profile: serde_json::Value) -> String {
    let profile_id = app.create_profile(profile).await;
    app.create_pass_type(json!({
        "org_id": "org-1",
        "name": "Entry Pass",
        "duration_hours": 24.0,
        "price_cents": 2000,
        "profile_id": profile_id
    }))
    .await
}

#[tokio::test]
async fn test_end_of_day_window_ignores_time_of_day() {
    let app = TestApp::new().await;
    let pass_type_id = setup_profiled_pass_type(&app, json!({
        "site_id": "site-1",
        "code": "end_of_day",
        "name": "Day Pass Profile",
        "profile_type": "date_select",
        "checkout_time": "23:59:00",
        "future_booking_enabled": true
    }))
    .await;

    for start in ["2025-02-03T09:00:00Z", "2025-02-03T14:30:00Z"] {
        let res = app.post_json("/api/v1/passes", json!({
            "pass_type_id": pass_type_id,
            "guest_name": "Ada",
            "guest_email": "ada@example.com",
            "booked_from": start,
            "booked_to": "2025-02-03T18:00:00Z"
        })).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = parse_body(res).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["booking_mode"], true);
        assert_eq!(ts(&body["valid_from"]), utc(start));
        assert_eq!(ts(&body["valid_to"]), utc("2025-02-03T23:59:00Z"));
        assert_eq!(body["price_cents"], 2000);
        assert!(body["pass_number"].as_str().unwrap().starts_with("PS-"));
    }
}

#[tokio::test]
async fn test_nights_checkout_window() {
    let app = TestApp::new().await;
    let pass_type_id = setup_profiled_pass_type(&app, json!({
        "site_id": "site-1",
        "code": "nights_checkout",
        "name": "Camping Profile",
        "profile_type": "date_select",
        "checkout_time": "10:00:00",
        "future_booking_enabled": true
    }))
    .await;

    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": pass_type_id,
        "guest_name": "Ada",
        "guest_email": "ada@example.com",
        "booked_from": "2025-02-03T12:00:00Z",
        "booked_to": "2025-02-04T10:00:00Z",
        "nights": 1
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(ts(&body["valid_to"]), utc("2025-02-04T10:00:00Z"));

    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": pass_type_id,
        "guest_name": "Ada",
        "guest_email": "ada@example.com",
        "booked_from": "2025-02-03T15:00:00Z",
        "booked_to": "2025-02-06T10:00:00Z",
        "nights": 3
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(ts(&body["valid_to"]), utc("2025-02-06T10:00:00Z"));
}

#[tokio::test]
async fn test_no_profile_uses_pass_type_duration() {
    let app = TestApp::new().await;
    let pass_type_id = app.create_pass_type(json!({
        "org_id": "org-1",
        "name": "Legacy 24h Pass",
        "duration_hours": 24.0,
        "price_cents": 1500
    })).await;

    let before = Utc::now();
    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": pass_type_id,
        "guest_name": "Ada",
        "guest_email": "ada@example.com"
    })).await;
    let after = Utc::now();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let valid_from = ts(&body["valid_from"]);
    let valid_to = ts(&body["valid_to"]);
    assert_eq!(valid_to - valid_from, Duration::hours(24));
    assert!(valid_from >= before && valid_from <= after);
    assert!(body.get("booking_mode").is_none() || body["booking_mode"].is_null());
}

#[tokio::test]
async fn test_generic_profile_applies_buffers_to_booked_range() {
    let app = TestApp::new().await;
    let pass_type_id = setup_profiled_pass_type(&app, json!({
        "site_id": "site-1",
        "code": "hourly_slot",
        "name": "Hourly Slot",
        "profile_type": "datetime_select",
        "entry_buffer_minutes": 15,
        "exit_buffer_minutes": 30,
        "future_booking_enabled": true
    }))
    .await;

    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": pass_type_id,
        "guest_name": "Ada",
        "guest_email": "ada@example.com",
        "booked_from": "2025-02-03T10:00:00Z",
        "booked_to": "2025-02-03T12:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(ts(&body["valid_from"]), utc("2025-02-03T09:45:00Z"));
    assert_eq!(ts(&body["valid_to"]), utc("2025-02-03T12:30:00Z"));
    // Booked range is stored as selected, without buffers.
    assert_eq!(ts(&body["booked_from"]), utc("2025-02-03T10:00:00Z"));
    assert_eq!(ts(&body["booked_to"]), utc("2025-02-03T12:00:00Z"));
}

#[tokio::test]
async fn test_exit_buffer_does_not_move_checkout() {
    let app = TestApp::new().await;
    let pass_type_id = setup_profiled_pass_type(&app, json!({
        "site_id": "site-1",
        "code": "end_of_day",
        "name": "Day Pass Profile",
        "profile_type": "date_select",
        "checkout_time": "23:59:00",
        "exit_buffer_minutes": 45,
        "future_booking_enabled": true
    }))
    .await;

    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": pass_type_id,
        "guest_name": "Ada",
        "guest_email": "ada@example.com",
        "booked_from": "2025-02-03T09:00:00Z",
        "booked_to": "2025-02-03T18:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(ts(&body["valid_to"]), utc("2025-02-03T23:59:00Z"));
}

#[tokio::test]
async fn test_booking_times_ignored_when_future_booking_disabled() {
    let app = TestApp::new().await;
    let pass_type_id = setup_profiled_pass_type(&app, json!({
        "site_id": "site-1",
        "code": "instant_access",
        "name": "Instant Profile",
        "profile_type": "instant",
        "duration_minutes": 120,
        "future_booking_enabled": false
    }))
    .await;

    let before = Utc::now();
    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": pass_type_id,
        "guest_name": "Ada",
        "guest_email": "ada@example.com",
        "booked_from": "2030-06-01T10:00:00Z",
        "booked_to": "2030-06-01T12:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    // Enter-now flow: window anchored at request time, booking fields absent.
    let valid_from = ts(&body["valid_from"]);
    assert!(valid_from >= before);
    assert!(valid_from < utc("2030-01-01T00:00:00Z"));
    assert_eq!(ts(&body["valid_to"]) - valid_from, Duration::minutes(120));
    assert!(body.get("booked_from").is_none() || body["booked_from"].is_null());
    assert!(body.get("booking_mode").is_none() || body["booking_mode"].is_null());
}

#[tokio::test]
async fn test_invalid_interval_rejected() {
    let app = TestApp::new().await;
    let pass_type_id = setup_profiled_pass_type(&app, json!({
        "site_id": "site-1",
        "code": "hourly_slot",
        "name": "Hourly Slot",
        "profile_type": "datetime_select",
        "future_booking_enabled": true
    }))
    .await;

    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": pass_type_id,
        "guest_name": "Ada",
        "guest_email": "ada@example.com",
        "booked_from": "2025-02-03T12:00:00Z",
        "booked_to": "2025-02-03T10:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Equal endpoints are just as invalid.
    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": pass_type_id,
        "guest_name": "Ada",
        "guest_email": "ada@example.com",
        "booked_from": "2025-02-03T12:00:00Z",
        "booked_to": "2025-02-03T12:00:00Z"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_input_validation() {
    let app = TestApp::new().await;

    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": "not-a-uuid",
        "guest_name": "Ada",
        "guest_email": "ada@example.com"
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": uuid::Uuid::new_v4().to_string(),
        "guest_name": "",
        "guest_email": ""
    })).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    // Well-formed but unknown pass type
    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": uuid::Uuid::new_v4().to_string(),
        "guest_name": "Ada",
        "guest_email": "ada@example.com"
    })).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_pass_lookup_by_number() {
    let app = TestApp::new().await;
    let pass_type_id = app.create_pass_type(json!({
        "org_id": "org-1",
        "name": "Legacy Pass",
        "duration_hours": 4.0,
        "price_cents": 900
    })).await;

    let res = app.post_json("/api/v1/passes", json!({
        "pass_type_id": pass_type_id,
        "guest_name": "Grace",
        "guest_email": "grace@example.com"
    })).await;
    let created = parse_body(res).await;
    let pass_number = created["pass_number"].as_str().unwrap();

    let res = app.get(&format!("/api/v1/passes?pass_number={}", pass_number)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["guest_name"], "Grace");
    assert_eq!(body["data"]["status"], "pending");
    assert_eq!(body["data"]["pass_type"]["name"], "Legacy Pass");

    let res = app.get("/api/v1/passes").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
