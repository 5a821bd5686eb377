mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{Datelike, Duration, Utc};
use common::TestApp;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Stay dates computed on the property clock (Asia/Kolkata by default).
fn property_today() -> chrono::NaiveDate {
    Utc::now().with_timezone(&chrono_tz::Asia::Kolkata).date_naive()
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

async fn set_checkout_time(app: &TestApp, cutoff: &str) {
    let res = app.router.clone().oneshot(
        Request::builder().method("PUT").uri("/api/settings")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({ "checkoutTime": cutoff }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

async fn create_booking(app: &TestApp, payload: Value) -> Value {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/bookings")
            .header("Content-Type", "application/json")
            .body(Body::from(payload.to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

async fn checkout(app: &TestApp, booking_id: &str) -> (StatusCode, Value) {
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri(format!("/api/bookings/{}/checkout", booking_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let status = res.status();
    (status, parse_body(res).await)
}

fn two_night_stay_ending_today(room: &str) -> Value {
    let today = property_today();
    json!({
        "roomTypeId": "rt-1", "roomNumber": room, "guestName": "Asha Rao",
        "source": "Direct", "status": "CheckedIn",
        "checkIn": (today - Duration::days(2)).format("%Y-%m-%d").to_string(),
        "checkOut": today.format("%Y-%m-%d").to_string(),
        "amount": 2000.0
    })
}

#[tokio::test]
async fn test_on_time_checkout_keeps_amount_and_dates() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;
    set_checkout_time(&app, "23:59").await;

    let today = property_today();
    let booking = create_booking(&app, two_night_stay_ending_today("101")).await;
    let (status, body) = checkout(&app, booking["id"].as_str().unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["booking"]["amount"], 2000.0);
    assert_eq!(body["booking"]["checkOut"], today.format("%Y-%m-%d").to_string());
    assert_eq!(body["booking"]["status"], "CheckedOut");
    assert_eq!(body["booking"]["isSettled"], true);
    assert_eq!(body["invoiceNumber"], format!("INV-{}-0001", today.year()));
    assert_eq!(body["booking"]["invoiceNumber"], body["invoiceNumber"]);
}

#[tokio::test]
async fn test_late_checkout_adds_a_night_and_rescales() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;
    // midnight cutoff: any real-world checkout time counts as late
    set_checkout_time(&app, "00:00").await;

    let today = property_today();
    let booking = create_booking(&app, two_night_stay_ending_today("101")).await;
    let (status, body) = checkout(&app, booking["id"].as_str().unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    // the 2-night 2000 stay becomes 3 nights, 3000
    assert_eq!(body["booking"]["amount"], 3000.0);
    assert_eq!(
        body["booking"]["checkOut"],
        (today + Duration::days(1)).format("%Y-%m-%d").to_string()
    );
}

#[tokio::test]
async fn test_invoice_numbers_increase_across_checkouts() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;
    set_checkout_time(&app, "23:59").await;

    let today = property_today();
    let first = create_booking(&app, two_night_stay_ending_today("101")).await;
    let second = create_booking(&app, two_night_stay_ending_today("102")).await;

    let (_, body1) = checkout(&app, first["id"].as_str().unwrap()).await;
    let (_, body2) = checkout(&app, second["id"].as_str().unwrap()).await;

    assert_eq!(body1["invoiceNumber"], format!("INV-{}-0001", today.year()));
    assert_eq!(body2["invoiceNumber"], format!("INV-{}-0002", today.year()));

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/settings").body(Body::empty()).unwrap()
    ).await.unwrap();
    let settings = parse_body(res).await;
    assert_eq!(settings["invoiceSeq"], 2);
}

#[tokio::test]
async fn test_checkout_settles_unpaid_folio_items() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;
    set_checkout_time(&app, "23:59").await;

    let mut payload = two_night_stay_ending_today("101");
    payload["folio"] = json!([
        { "id": "f-1", "description": "Dinner", "amount": 450.0, "category": "F&B",
          "timestamp": "2030-01-10T20:00:00Z" },
        { "id": "f-2", "description": "Laundry", "amount": 150.0, "category": "Laundry",
          "timestamp": "2030-01-10T21:00:00Z", "isPaid": true, "paymentMethod": "Cash" }
    ]);
    let booking = create_booking(&app, payload).await;
    let (status, body) = checkout(&app, booking["id"].as_str().unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    let folio = body["booking"]["folio"].as_array().unwrap();
    assert!(folio.iter().all(|i| i["isPaid"] == true));
    assert_eq!(folio[0]["paymentMethod"], "Settled");
    // the pre-paid line keeps its original method
    assert_eq!(folio[1]["paymentMethod"], "Cash");
    // money changed hands before settlement, so a receipt is rendered
    assert!(body["receiptPath"].as_str().is_some());
}

#[tokio::test]
async fn test_checkout_without_prior_payments_skips_receipt() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;
    set_checkout_time(&app, "23:59").await;

    let booking = create_booking(&app, two_night_stay_ending_today("101")).await;
    let (status, body) = checkout(&app, booking["id"].as_str().unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["receiptPath"].is_null());
    assert!(body["invoicePath"].as_str().is_some());
}

#[tokio::test]
async fn test_double_checkout_is_rejected() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;
    set_checkout_time(&app, "23:59").await;

    let booking = create_booking(&app, two_night_stay_ending_today("101")).await;
    let id = booking["id"].as_str().unwrap();

    let (first, _) = checkout(&app, id).await;
    assert_eq!(first, StatusCode::OK);
    let (second, _) = checkout(&app, id).await;
    assert_eq!(second, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_pdf_failure_rolls_back_the_checkout() {
    let app = TestApp::with_failing_documents().await;
    seed_room_type(&app).await;
    set_checkout_time(&app, "23:59").await;

    let booking = create_booking(&app, two_night_stay_ending_today("101")).await;
    let id = booking["id"].as_str().unwrap();

    let (status, _) = checkout(&app, id).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);

    // booking must be untouched and the counter unconsumed
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/bookings/{}", id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    let body = parse_body(res).await;
    assert_eq!(body["status"], "CheckedIn");
    assert_eq!(body["isSettled"], false);
    assert!(body["invoiceNumber"].is_null());

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/settings").body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(parse_body(res).await["invoiceSeq"], 0);
}

#[tokio::test]
async fn test_checkout_unknown_booking_is_not_found() {
    let app = TestApp::new().await;
    let (status, _) = checkout(&app, "no-such-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checkout_with_unparseable_dates_is_rejected() {
    let app = TestApp::new().await;
    seed_room_type(&app).await;

    let booking = create_booking(&app, json!({
        "roomTypeId": "rt-1", "roomNumber": "101", "guestName": "Asha Rao",
        "source": "Direct", "checkIn": "not-a-date", "checkOut": "also-junk",
        "amount": 2000.0
    })).await;

    let (status, _) = checkout(&app, booking["id"].as_str().unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
