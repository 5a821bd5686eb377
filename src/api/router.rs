use axum::{
    Router,
    body::Body,
    extract::Request,
    routing::{get, post, put},
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{
    ai, booking, connection, guest, health, hotel, notification, payment, rate_rules, room_type,
    settings, stats,
};
use crate::state::AppState;
use tower_http::{
    classify::ServerErrorsFailureClass,
    cors::CorsLayer,
    trace::TraceLayer,
};
use tracing::{Span, error, info, info_span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Property
        .route("/api/hotels", get(hotel::list_hotels).post(hotel::create_hotel))
        .route("/api/hotels/{id}", get(hotel::get_hotel))
        .route("/api/settings", get(settings::get_settings).put(settings::update_settings))

        // Inventory
        .route("/api/room-types", get(room_type::list_room_types).post(room_type::create_room_type))
        .route(
            "/api/room-types/{id}",
            get(room_type::get_room_type)
                .put(room_type::update_room_type)
                .delete(room_type::delete_room_type),
        )

        // Booking lifecycle
        .route("/api/bookings", get(booking::list_bookings).post(booking::create_booking))
        .route("/api/bookings/bulk", post(booking::create_bulk))
        .route(
            "/api/bookings/{id}",
            get(booking::get_booking)
                .put(booking::update_booking)
                .delete(booking::delete_booking),
        )
        .route("/api/bookings/{id}/transfer", post(booking::transfer_booking))
        .route("/api/bookings/{id}/checkout", post(booking::checkout_booking))

        // Guest registry
        .route("/api/guests", get(guest::list_guests))
        .route(
            "/api/guests/{id}",
            get(guest::get_guest).put(guest::update_guest).delete(guest::delete_guest),
        )

        // Channel manager & rates
        .route("/api/connections", get(connection::list_connections))
        .route("/api/connections/{id}", put(connection::update_connection))
        .route("/api/rates/rules", get(rate_rules::get_rules).put(rate_rules::update_rules))
        .route("/api/rates/quote", get(rate_rules::quote_rate))

        // Notifications
        .route("/api/notifications", get(notification::list_notifications))
        .route("/api/notifications/read-all", post(notification::mark_all_read))
        .route("/api/notifications/{id}/read", post(notification::mark_read))
        .route("/api/notifications/{id}/dismiss", post(notification::dismiss))

        // Reporting
        .route("/api/statistics", get(stats::get_statistics))

        // Payments
        .route("/api/payments/order", post(payment::create_order))
        .route("/api/payments/verify", post(payment::verify_payment))

        // AI assistance
        .route("/api/scan/document", post(ai::scan_document))
        .route("/api/email/parse", post(ai::parse_email))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
