mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seed_room_type(app: &TestApp) {
    app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/room-types")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "id": "rt-1", "name": "Double Bed Room", "totalCapacity": 10,
                "basePrice": 2800.0, "floorPrice": 1800.0, "ceilingPrice": 5000.0,
                "baseOccupancy": 2, "roomNumbers": ["101", "102"]
            }).to_string())).unwrap()
    ).await.unwrap();
}

async fn create_booking_with_guest(app: &TestApp, check_in: &str, details: Value) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/bookings")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "roomTypeId": "rt-1", "roomNumber": "Unassigned",
                "guestName": details["name"].as_str().unwrap_or("Guest"),
                "source": "Direct", "checkIn": check_in,
                "checkOut": "2030-01-20", "amount": 1000.0,
                "guestDetails": details
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

async fn list_guests(app: &TestApp, search: Option<&str>) -> Value {
    let uri = match search {
        Some(q) => format!("/api/guests?search={}", q),
        None => "/api/guests".to_string(),
    };
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
    ).await.unwrap();
    parse_body(res).await
}

#[tokio::test]
async fn test_identical_details_resolve_to_one_profile() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;

    let details = json!({
        "name": "Asha Rao", "phoneNumber": "9811111111",
        "email": "asha@example.com", "idType": "Aadhar", "idNumber": "1234-5678",
        "address": "Deoghar", "nationality": "Indian"
    });

    let first = create_booking_with_guest(&app, "2030-01-10", details.clone()).await;
    let second = create_booking_with_guest(&app, "2030-01-10", details).await;

    assert_eq!(first["guestDetails"]["profileId"], second["guestDetails"]["profileId"]);

    let guests = list_guests(&app, None).await;
    let list = guests.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "Asha Rao");
    assert_eq!(list[0]["idNumber"], "1234-5678");
    assert_eq!(list[0]["lastCheckIn"], "2030-01-10");
}

#[tokio::test]
async fn test_merge_is_field_level_non_empty_wins() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;

    create_booking_with_guest(&app, "2030-01-10", json!({
        "name": "Asha Rao", "phoneNumber": "9811111111", "address": "Deoghar"
    })).await;

    // later form omits the address but adds an e-mail
    create_booking_with_guest(&app, "2030-02-01", json!({
        "name": "Asha Rao", "phoneNumber": "9811111111", "email": "asha@example.com"
    })).await;

    let guests = list_guests(&app, None).await;
    let list = guests.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["address"], "Deoghar");
    assert_eq!(list[0]["email"], "asha@example.com");
    assert_eq!(list[0]["lastCheckIn"], "2030-02-01");
}

#[tokio::test]
async fn test_phone_only_match_reuses_the_profile() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;

    create_booking_with_guest(&app, "2030-01-10", json!({
        "name": "Asha Rao", "phoneNumber": "9811111111"
    })).await;

    // same phone, differently spelled name: still the same person
    create_booking_with_guest(&app, "2030-02-01", json!({
        "name": "A. Rao", "phoneNumber": "9811111111"
    })).await;

    let guests = list_guests(&app, None).await;
    let list = guests.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "A. Rao");
}

#[tokio::test]
async fn test_anonymous_details_create_no_profile() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;

    let booking = create_booking_with_guest(&app, "2030-01-10", json!({
        "nationality": "Indian"
    })).await;
    assert!(booking["guestDetails"]["profileId"].is_null());

    let guests = list_guests(&app, None).await;
    assert_eq!(guests.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;

    create_booking_with_guest(&app, "2030-01-10", json!({
        "name": "Asha Rao", "phoneNumber": "9811111111"
    })).await;
    create_booking_with_guest(&app, "2030-01-10", json!({
        "name": "Vikram Singh", "phoneNumber": "9822222222"
    })).await;

    let hits = list_guests(&app, Some("asha")).await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["name"], "Asha Rao");

    let misses = list_guests(&app, Some("zzz")).await;
    assert_eq!(misses.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_guest_update_and_delete() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;

    let booking = create_booking_with_guest(&app, "2030-01-10", json!({
        "name": "Asha Rao", "phoneNumber": "9811111111"
    })).await;
    let profile_id = booking["guestDetails"]["profileId"].as_i64().unwrap();

    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri(format!("/api/guests/{}", profile_id))
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "preferences": "Ground floor" }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["preferences"], "Ground floor");

    let res = app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(format!("/api/guests/{}", profile_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/guests/{}", profile_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
