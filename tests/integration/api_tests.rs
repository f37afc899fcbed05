//! API integration tests
//!
//! Run against a live server with an empty database:
//! `cargo test -- --ignored`

use chrono::{Duration, Utc};
use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

use navalha_server::models::staff::{StaffClaims, StaffRole};

const BASE_URL: &str = "http://localhost:8080/api/v1";
const JWT_SECRET: &str = "change-this-secret-in-production";

/// Mint a staff token the way the identity provider would
fn staff_token(role: StaffRole) -> (String, Uuid) {
    let barbershop_id = Uuid::new_v4();
    let now = Utc::now();
    let claims = StaffClaims {
        sub: "integration-tests".to_string(),
        staff_id: Uuid::new_v4(),
        barbershop_id,
        role,
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };
    (
        claims.create_token(JWT_SECRET).expect("Failed to sign token"),
        barbershop_id,
    )
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_unauthorized_access() {
    let client = Client::new();

    let response = client
        .get(format!("{}/appointments?date=2025-03-10", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 401);
}

#[tokio::test]
#[ignore]
async fn test_public_services_listing() {
    let client = Client::new();

    let response = client
        .get(format!(
            "{}/booking/services?barbershop_id={}",
            BASE_URL,
            Uuid::new_v4()
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.is_array());
}

#[tokio::test]
#[ignore]
async fn test_availability_falls_back_to_default_window() {
    let client = Client::new();

    // Unknown barbershop and barber: default 09:00-19:00 window, no bookings
    let response = client
        .get(format!(
            "{}/booking/availability?barbershop_id={}&barber_id={}&service_id={}&date=2025-03-10",
            BASE_URL,
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4()
        ))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    let slots = body["slots"].as_array().expect("No slots in response");
    assert_eq!(slots.len(), 20);
    assert_eq!(slots[0], "09:00");
    assert_eq!(slots[19], "18:30");
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_missing_fields() {
    let client = Client::new();

    let response = client
        .post(format!("{}/booking/appointments", BASE_URL))
        .json(&json!({
            "barbershop_id": Uuid::new_v4(),
            "service_id": Uuid::new_v4(),
            "barber_id": Uuid::new_v4(),
            "date": "2025-03-10",
            "time": "10:00",
            "client_name": "J",
            "client_phone": "not-a-phone",
            "client_email": "not-an-email"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_booking_rejects_unknown_client() {
    let client = Client::new();

    let response = client
        .post(format!("{}/booking/appointments", BASE_URL))
        .json(&json!({
            "barbershop_id": Uuid::new_v4(),
            "service_id": Uuid::new_v4(),
            "barber_id": Uuid::new_v4(),
            "date": "2025-03-10",
            "time": "10:00",
            "client_name": "Test Client",
            "client_phone": "+55 11 99999-0000",
            "client_email": "client@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 422);
}

#[tokio::test]
#[ignore]
async fn test_schedule_get_falls_back_to_defaults() {
    let client = Client::new();
    let (token, _) = staff_token(StaffRole::Manager);

    let response = client
        .get(format!("{}/schedules/2025-03-10", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["configured"], false);
    assert_eq!(body["opens_at"], "09:00:00");
    assert_eq!(body["closes_at"], "19:00:00");
}

#[tokio::test]
#[ignore]
async fn test_schedule_upsert_rejects_inverted_hours() {
    let client = Client::new();
    let (token, _) = staff_token(StaffRole::Manager);

    let response = client
        .put(format!("{}/schedules/2025-03-10", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "opens_at": "18:00",
            "closes_at": "09:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);
}

#[tokio::test]
#[ignore]
async fn test_schedule_upsert_forbidden_for_barbers() {
    let client = Client::new();
    let (token, _) = staff_token(StaffRole::Barber);

    let response = client
        .put(format!("{}/schedules/2025-03-10", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .json(&json!({
            "opens_at": "09:00",
            "closes_at": "19:00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 403);
}

#[tokio::test]
#[ignore]
async fn test_free_check_on_empty_calendar() {
    let client = Client::new();
    let (token, _) = staff_token(StaffRole::Barber);

    let response = client
        .get(format!(
            "{}/availability/check?barber_id={}&starts_at=2025-03-10T10%3A00%3A00Z&duration_minutes=60",
            BASE_URL,
            Uuid::new_v4()
        ))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["free"], true);
}

#[tokio::test]
#[ignore]
async fn test_day_agenda_empty() {
    let client = Client::new();
    let (token, _) = staff_token(StaffRole::Manager);

    let response = client
        .get(format!("{}/appointments?date=2025-03-10", BASE_URL))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body.as_array().map(|a| a.is_empty()).unwrap_or(false));
}
