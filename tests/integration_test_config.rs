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

async fn get(app: &TestApp, uri: &str) -> (StatusCode, Value) {
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
    ).await.unwrap();
    let status = res.status();
    (status, parse_body(res).await)
}

async fn send_json(app: &TestApp, method: &str, uri: &str, body: Value) -> (StatusCode, Value) {
    let res = app.router.clone().oneshot(
        Request::builder().method(method).uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string())).unwrap()
    ).await.unwrap();
    let status = res.status();
    (status, parse_body(res).await)
}

#[tokio::test]
async fn test_settings_roundtrip() {
    let app = TestApp::new().await;

    let (status, settings) = get(&app, "/api/settings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(settings["id"], "default");
    assert_eq!(settings["gstRate"], 12.0);
    assert_eq!(settings["checkoutTime"], "11:00");
    assert_eq!(settings["invoiceSeq"], 0);

    let (status, updated) = send_json(&app, "PUT", "/api/settings", json!({
        "name": "Hotel Shanti", "gstRate": 18.0, "gstNumber": "20AAAA0000A1Z5",
        "loyaltyTiers": [{ "name": "Gold", "minStays": 5, "discountPercent": 10.0 }]
    })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Hotel Shanti");
    assert_eq!(updated["gstRate"], 18.0);
    assert_eq!(updated["loyaltyTiers"][0]["name"], "Gold");
    // untouched fields survive the partial update
    assert_eq!(updated["checkoutTime"], "11:00");
}

#[tokio::test]
async fn test_seeded_connections_and_update() {
    let app = TestApp::new().await;

    let (status, connections) = get(&app, "/api/connections").await;
    assert_eq!(status, StatusCode::OK);
    let list = connections.as_array().unwrap();
    assert_eq!(list.len(), 3);
    let ids: Vec<&str> = list.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert!(ids.contains(&"mmt") && ids.contains(&"booking") && ids.contains(&"expedia"));

    let (status, updated) = send_json(&app, "PUT", "/api/connections/mmt", json!({
        "key": "mkmt_live_key", "status": "connected", "isVisible": true,
        "markupType": "percentage", "markupValue": 5.0
    })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "connected");
    assert_eq!(updated["markupValue"], 5.0);

    let (status, _) = send_json(&app, "PUT", "/api/connections/mmt", json!({
        "status": "bogus"
    })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_json(&app, "PUT", "/api/connections/nope", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_rate_rules_and_quotes() {
    let app = TestApp::new().await;

    send_json(&app, "POST", "/api/room-types", json!({
        "id": "rt-1", "name": "Delux Room (AC)", "totalCapacity": 10,
        "basePrice": 4500.0, "floorPrice": 3000.0, "ceilingPrice": 8000.0,
        "baseOccupancy": 2, "roomNumbers": ["101"]
    })).await;

    let (status, rules) = get(&app, "/api/rates/rules").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rules["weeklyRules"]["isActive"], true);

    let (status, _) = send_json(&app, "PUT", "/api/rates/rules", json!({
        "weeklyRules": {
            "isActive": true, "activeDays": [5, 6],
            "modifierType": "percentage", "modifierValue": 1.2
        },
        "specialEvents": [{
            "id": "ev-1", "name": "Diwali Festival",
            "startDate": "2030-01-10", "endDate": "2030-01-12",
            "modifierType": "percentage", "modifierValue": 1.5
        }]
    })).await;
    assert_eq!(status, StatusCode::OK);

    // inside the event window: 4500 * 1.5
    let (status, quote) = get(&app, "/api/rates/quote?roomTypeId=rt-1&date=2030-01-11").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(quote["price"], 6750.0);
    assert_eq!(quote["appliedRule"], "Diwali Festival");

    // 2030-01-05 is a Saturday: weekly weekend multiplier applies
    let (_, quote) = get(&app, "/api/rates/quote?roomTypeId=rt-1&date=2030-01-05").await;
    assert_eq!(quote["price"], 5400.0);
    assert_eq!(quote["appliedRule"], "Weekly");

    // 2030-01-08 is a Tuesday: base price
    let (_, quote) = get(&app, "/api/rates/quote?roomTypeId=rt-1&date=2030-01-08").await;
    assert_eq!(quote["price"], 4500.0);
    assert!(quote["appliedRule"].is_null());

    let (status, _) = send_json(&app, "PUT", "/api/rates/rules", json!({
        "weeklyRules": {
            "isActive": false, "activeDays": [],
            "modifierType": "percentage", "modifierValue": 1.0
        },
        "specialEvents": [{
            "id": "ev-2", "name": "Backwards",
            "startDate": "2030-01-12", "endDate": "2030-01-10",
            "modifierType": "fixed", "modifierValue": 500.0
        }]
    })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_notification_read_and_dismiss_flow() {
    let app = TestApp::new().await;

    send_json(&app, "POST", "/api/room-types", json!({
        "id": "rt-1", "name": "Room", "totalCapacity": 1,
        "basePrice": 1000.0, "floorPrice": 500.0, "ceilingPrice": 2000.0,
        "baseOccupancy": 1, "roomNumbers": ["101"]
    })).await;
    send_json(&app, "POST", "/api/bookings", json!({
        "roomTypeId": "rt-1", "roomNumber": "101", "guestName": "Asha Rao",
        "source": "Direct", "checkIn": "2030-01-10", "checkOut": "2030-01-12"
    })).await;

    let (_, unread) = get(&app, "/api/notifications?unread=true").await;
    let list = unread.as_array().unwrap();
    assert_eq!(list.len(), 1);
    let id = list[0]["id"].as_str().unwrap().to_string();

    let (status, _) = send_json(&app, "POST", &format!("/api/notifications/{}/read", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);

    let (_, unread) = get(&app, "/api/notifications?unread=true").await;
    assert_eq!(unread.as_array().unwrap().len(), 0);

    // still listed until dismissed
    let (_, all) = get(&app, "/api/notifications").await;
    assert_eq!(all.as_array().unwrap().len(), 1);

    let (status, _) = send_json(&app, "POST", &format!("/api/notifications/{}/dismiss", id), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let (_, all) = get(&app, "/api/notifications").await;
    assert_eq!(all.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_hotels_crud_and_ai_endpoints() {
    let app = TestApp::new().await;

    let (status, hotel) = send_json(&app, "POST", "/api/hotels", json!({
        "id": "h-1", "name": "Hotel Satsangi", "location": "Deoghar",
        "color": "indigo", "otaConfig": { "mmt": "active" }
    })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hotel["otaConfig"]["mmt"], "active");

    let (_, hotels) = get(&app, "/api/hotels").await;
    assert_eq!(hotels.as_array().unwrap().len(), 1);

    let (status, scanned) = send_json(&app, "POST", "/api/scan/document", json!({
        "imageBase64": "aGVsbG8=", "documentType": "id"
    })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(scanned["name"], "Scanned Guest");

    let (status, _) = send_json(&app, "POST", "/api/scan/document", json!({
        "imageBase64": "aGVsbG8=", "documentType": "mystery"
    })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, parsed) = send_json(&app, "POST", "/api/email/parse", json!({
        "subject": "New booking", "body": "Guest arriving on 2030-01-10"
    })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parsed["name"], "Scanned Guest");
}
