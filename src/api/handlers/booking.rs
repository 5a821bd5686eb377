use axum::{Json, extract::{Path, State}, response::IntoResponse};
use chrono::{Datelike, Utc};
use crate::api::dtos::requests::{BookingPayload, BulkBookingRequest, RoomTransferRequest};
use crate::api::dtos::responses::{CheckoutResponse, TransferResponse};
use crate::domain::models::booking::{Booking, BookingStatus, PaymentStatus};
use crate::domain::services::availability::{UNASSIGNED_ROOM, has_conflict};
use crate::domain::services::settlement;
use crate::error::AppError;
use crate::state::AppState;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

fn to_booking(payload: BookingPayload) -> Booking {
    Booking {
        id: Uuid::new_v4().to_string(),
        room_type_id: payload.room_type_id,
        room_number: payload.room_number,
        guest_name: payload.guest_name,
        source: payload.source,
        status: payload.status.unwrap_or(BookingStatus::Confirmed),
        timestamp: Utc::now().timestamp_millis(),
        check_in: payload.check_in,
        check_out: payload.check_out,
        amount: payload.amount,
        reservation_id: payload.reservation_id,
        channel_sync: payload.channel_sync,
        rejection_reason: payload.rejection_reason,
        guest_details: payload.guest_details,
        number_of_rooms: payload.number_of_rooms,
        pax: payload.pax,
        accessory_guests: payload.accessory_guests,
        extra_beds: payload.extra_beds,
        special_requests: payload.special_requests,
        is_vip: payload.is_vip,
        is_settled: false,
        folio: payload.folio,
        payments: payload.payments,
        invoice_number: None,
        invoice_date: None,
    }
}

/// Merges the booking's guest snapshot into the profile registry and links
/// the resolved profile id back into the snapshot.
async fn sync_guest_details(state: &AppState, booking: &mut Booking) -> Result<(), AppError> {
    let check_in = booking.check_in.clone();
    if let Some(details) = booking.guest_details.as_mut()
        && let Some(profile_id) = state.guest_registry.sync_profile(details, &check_in).await?
    {
        details.profile_id = Some(profile_id);
    }
    Ok(())
}

async fn notify_new_reservation(state: &AppState, booking: &Booking) {
    state
        .notifier
        .emit(
            "new_reservation",
            "booking",
            "New Reservation",
            &format!(
                "{} booked {} ({} to {})",
                booking.guest_name,
                booking.room_number.as_deref().unwrap_or(UNASSIGNED_ROOM),
                booking.check_in,
                booking.check_out
            ),
            "normal",
            Some(booking.id.clone()),
            booking.room_number.clone(),
            None,
        )
        .await;
}

pub async fn list_bookings(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, AppError> {
    let bookings = state.booking_repo.list().await?;
    Ok(Json(bookings))
}

pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    Ok(Json(booking))
}

/// Single-booking creation deliberately performs no availability check: the
/// front desk uses it to force an assignment regardless of what the calendar
/// says. The checked path is the bulk endpoint.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    let mut booking = to_booking(payload);
    sync_guest_details(&state, &mut booking).await?;

    let created = state.booking_repo.create(&booking).await?;
    info!("Created booking {} for {}", created.id, created.guest_name);

    notify_new_reservation(&state, &created).await;
    Ok(Json(created))
}

/// Availability-checked creation. Each assigned room is checked against the
/// store and against earlier entries of the same request; the first conflict
/// fails the whole call and nothing is committed.
pub async fn create_bulk(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BulkBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.bookings.is_empty() {
        return Err(AppError::Validation("No bookings supplied".into()));
    }

    let mut bookings: Vec<Booking> = payload.bookings.into_iter().map(to_booking).collect();

    for i in 0..bookings.len() {
        let Some(room) = bookings[i]
            .room_number
            .clone()
            .filter(|r| r.as_str() != UNASSIGNED_ROOM)
        else {
            continue;
        };
        let (check_in, check_out) = (bookings[i].check_in.clone(), bookings[i].check_out.clone());

        let existing = state.booking_repo.list_active_by_room(&room).await?;
        if has_conflict(&existing, &room, &check_in, &check_out, None)
            || has_conflict(&bookings[..i], &room, &check_in, &check_out, None)
        {
            warn!("Bulk booking rejected: room {} already occupied", room);
            return Err(AppError::Conflict(format!(
                "Room {} is not available for the selected dates",
                room
            )));
        }
    }

    for booking in &mut bookings {
        sync_guest_details(&state, booking).await?;
    }

    let created = state.booking_repo.create_many(&bookings).await?;
    info!("Created {} bookings in bulk", created.len());

    for booking in &created {
        notify_new_reservation(&state, booking).await;
    }
    if created.len() > 1 {
        let rooms: Vec<&str> = created
            .iter()
            .map(|b| b.room_number.as_deref().unwrap_or(UNASSIGNED_ROOM))
            .collect();
        state
            .notifier
            .emit(
                "group_booking",
                "booking",
                "Group Reservation",
                &format!(
                    "{} booked {} rooms ({})",
                    created[0].guest_name,
                    created.len(),
                    rooms.join(", ")
                ),
                "high",
                Some(created[0].id.clone()),
                None,
                Some(json!({ "rooms": rooms, "count": created.len() })),
            )
            .await;
    }

    Ok(Json(created))
}

/// Full-record overwrite of the mutable fields. Folio growth and status
/// transitions are detected here and emitted as notifications after the row
/// is written.
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<BookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state
        .booking_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let mut updated = to_booking(payload);
    updated.id = existing.id.clone();
    updated.timestamp = existing.timestamp;
    // settlement state is owned by checkout, not the update surface
    updated.is_settled = existing.is_settled;
    updated.invoice_number = existing.invoice_number.clone();
    updated.invoice_date = existing.invoice_date.clone();

    if updated.guest_details.is_some() {
        sync_guest_details(&state, &mut updated).await?;
    }

    let folio_grew = updated.folio.len() > existing.folio.len();
    let status_changed = updated.status != existing.status;

    let saved = state.booking_repo.update(&updated).await?;
    info!("Updated booking {}", saved.id);

    if folio_grew && let Some(newest) = saved.folio.last() {
        state
            .notifier
            .emit(
                "service_order",
                "service",
                "New Service Order",
                &format!(
                    "{} added to room {}",
                    newest.description,
                    saved.room_number.as_deref().unwrap_or(UNASSIGNED_ROOM)
                ),
                "normal",
                Some(saved.id.clone()),
                saved.room_number.clone(),
                Some(json!({ "description": newest.description, "amount": newest.amount })),
            )
            .await;
    }

    if status_changed {
        let transition = match saved.status {
            BookingStatus::CheckedIn => Some(("checked_in", "Guest Checked In", "normal")),
            BookingStatus::CheckedOut => Some(("checked_out", "Guest Checked Out", "normal")),
            BookingStatus::Cancelled => Some(("cancelled", "Booking Cancelled", "high")),
            _ => None,
        };
        if let Some((notif_type, title, priority)) = transition {
            state
                .notifier
                .emit(
                    notif_type,
                    "booking",
                    title,
                    &format!(
                        "{} ({})",
                        saved.guest_name,
                        saved.room_number.as_deref().unwrap_or(UNASSIGNED_ROOM)
                    ),
                    priority,
                    Some(saved.id.clone()),
                    saved.room_number.clone(),
                    None,
                )
                .await;
        }
    }

    Ok(Json(saved))
}

pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.booking_repo.delete(&id).await?;
    info!("Deleted booking {}", id);
    Ok(Json(json!({ "status": "deleted" })))
}

/// Same-date requests move the stay in place; a mid-stay effective date
/// splits it into two segments linked by a shared reservation id.
pub async fn transfer_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<RoomTransferRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut booking = state
        .booking_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let new_room_type = state
        .room_type_repo
        .find_by_id(&payload.new_room_type_id)
        .await?
        .ok_or(AppError::NotFound("Room type not found".into()))?;

    if payload.effective_date == booking.check_in {
        booking.room_type_id = new_room_type.id.clone();
        booking.room_number = Some(payload.new_room_number.clone());
        if !payload.keep_rate {
            let nights = settlement::nights_between(&booking.check_in, &booking.check_out)
                .unwrap_or(1)
                .max(1);
            booking.amount = Some(new_room_type.base_price * nights as f64);
        }

        let updated = state.booking_repo.update(&booking).await?;
        info!("Transferred booking {} to room {}", updated.id, payload.new_room_number);
        return Ok(Json(TransferResponse { original: updated, transferred: None }));
    }

    if payload.effective_date.as_str() <= booking.check_in.as_str()
        || payload.effective_date.as_str() >= booking.check_out.as_str()
    {
        return Err(AppError::Validation("Effective date must fall within the stay".into()));
    }

    let original_check_out = booking.check_out.clone();
    let reservation_id = booking
        .reservation_id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    booking.reservation_id = Some(reservation_id.clone());

    let original_nights = settlement::nights_between(&booking.check_in, &original_check_out)
        .unwrap_or(1)
        .max(1);
    let per_night_rate = booking.amount.map(|a| a / original_nights as f64);

    // truncate the original segment and rescale its amount to what it now covers
    booking.check_out = payload.effective_date.clone();
    let head_nights = settlement::nights_between(&booking.check_in, &booking.check_out)
        .unwrap_or(1)
        .max(1);
    if let Some(rate) = per_night_rate {
        booking.amount = Some(rate * head_nights as f64);
    }

    let tail_nights = settlement::nights_between(&payload.effective_date, &original_check_out)
        .unwrap_or(1)
        .max(1);
    let tail_amount = if payload.keep_rate {
        per_night_rate.map(|rate| rate * tail_nights as f64)
    } else {
        Some(new_room_type.base_price * tail_nights as f64)
    };

    let mut segment = Booking {
        id: Uuid::new_v4().to_string(),
        room_type_id: new_room_type.id.clone(),
        room_number: Some(payload.new_room_number.clone()),
        guest_name: booking.guest_name.clone(),
        source: booking.source,
        status: booking.status,
        timestamp: Utc::now().timestamp_millis(),
        check_in: payload.effective_date.clone(),
        check_out: original_check_out,
        amount: tail_amount,
        reservation_id: Some(reservation_id),
        channel_sync: booking.channel_sync.clone(),
        rejection_reason: None,
        guest_details: booking.guest_details.clone(),
        number_of_rooms: booking.number_of_rooms,
        pax: booking.pax,
        accessory_guests: booking.accessory_guests.clone(),
        extra_beds: booking.extra_beds,
        special_requests: booking.special_requests.clone(),
        is_vip: booking.is_vip,
        is_settled: false,
        folio: Vec::new(),
        payments: Vec::new(),
        invoice_number: None,
        invoice_date: None,
    };
    if payload.transfer_folio {
        segment.folio = std::mem::take(&mut booking.folio);
    }

    let updated = state.booking_repo.update(&booking).await?;
    let created = state.booking_repo.create(&segment).await?;
    info!(
        "Split booking {} at {}: new segment {} in room {}",
        updated.id, payload.effective_date, created.id, payload.new_room_number
    );

    Ok(Json(TransferResponse { original: updated, transferred: Some(created) }))
}

/// Checkout settlement: re-derives the billable nights against the property
/// cutoff clock, allocates the invoice number, settles the folio and renders
/// the documents. PDFs are generated before any row is written, so a
/// rendering failure leaves the booking untouched.
pub async fn checkout_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;
    if booking.is_settled {
        return Err(AppError::Conflict("Booking is already settled".into()));
    }

    let settings = state
        .settings_repo
        .get()
        .await?
        .ok_or(AppError::NotFound("Property settings not found".into()))?;

    let tz: chrono_tz::Tz = settings.timezone.parse().unwrap_or(chrono_tz::Asia::Kolkata);
    let now_local = Utc::now().with_timezone(&tz);
    let today = now_local.date_naive();
    let cutoff = settlement::parse_cutoff(&settings.checkout_time);

    let adjustment = settlement::adjust_stay(
        &booking.check_in,
        &booking.check_out,
        today,
        now_local.time(),
        cutoff,
    )
    .ok_or(AppError::Validation("Booking has unparseable stay dates".into()))?;

    let mut settled = booking.clone();
    if adjustment.new_nights != adjustment.original_nights {
        info!(
            "Stay for booking {} adjusted from {} to {} nights",
            settled.id, adjustment.original_nights, adjustment.new_nights
        );
        if let Some(amount) = settled.amount {
            settled.amount = Some(settlement::rescale_amount(
                amount,
                adjustment.original_nights,
                adjustment.new_nights,
            ));
        }
        settled.check_out = adjustment.new_check_out.format("%Y-%m-%d").to_string();
    }

    let invoice_number = settlement::format_invoice_number(today.year(), settings.invoice_seq + 1);

    // a receipt is rendered only when money changed hands before settlement
    let payments_total: f64 = settled
        .payments
        .iter()
        .filter(|p| p.status == PaymentStatus::Completed)
        .map(|p| p.amount)
        .sum();
    let paid_folio_total: f64 = settled.folio.iter().filter(|i| i.is_paid).map(|i| i.amount).sum();
    let wants_receipt = payments_total + paid_folio_total > 0.0;

    for item in settled.folio.iter_mut().filter(|i| !i.is_paid) {
        item.is_paid = true;
        item.payment_method = Some("Settled".to_string());
    }
    settled.status = BookingStatus::CheckedOut;
    settled.is_settled = true;
    settled.invoice_number = Some(invoice_number.clone());
    settled.invoice_date = Some(today.format("%Y-%m-%d").to_string());

    let invoice_path = state
        .document_service
        .generate_invoice(&settled, &settings, &invoice_number)
        .await?;
    let receipt_path = if wants_receipt {
        Some(
            state
                .document_service
                .generate_receipt(&settled, &settings, &invoice_number)
                .await?,
        )
    } else {
        None
    };

    let saved = state.booking_repo.settle(&settled).await?;
    info!("Checked out booking {} with invoice {}", saved.id, invoice_number);

    state
        .notifier
        .emit(
            "checked_out",
            "booking",
            "Guest Checked Out",
            &format!(
                "{} settled room {} ({})",
                saved.guest_name,
                saved.room_number.as_deref().unwrap_or(UNASSIGNED_ROOM),
                invoice_number
            ),
            "normal",
            Some(saved.id.clone()),
            saved.room_number.clone(),
            None,
        )
        .await;

    Ok(Json(CheckoutResponse {
        booking: saved,
        invoice_number,
        invoice_path,
        receipt_path,
    }))
}
