use crate::domain::models::booking::Booking;

/// Bookings parked on this pseudo-room await manual assignment and never
/// count towards occupancy conflicts.
pub const UNASSIGNED_ROOM: &str = "Unassigned";

/// Returns true when an active booking already holds `room_number` for any
/// part of `[check_in, check_out)`.
///
/// Half-open interval semantics: a stay ending on the day another begins is
/// not a conflict. ISO `YYYY-MM-DD` strings compare correctly as text, so no
/// date parsing happens here; callers decide what to do with the answer.
pub fn has_conflict(
    existing: &[Booking],
    room_number: &str,
    check_in: &str,
    check_out: &str,
    exclude_booking_id: Option<&str>,
) -> bool {
    if room_number == UNASSIGNED_ROOM {
        return false;
    }

    existing.iter().any(|b| {
        if Some(b.id.as_str()) == exclude_booking_id {
            return false;
        }
        if !b.status.is_active() {
            return false;
        }
        let Some(existing_room) = b.room_number.as_deref() else {
            return false;
        };
        if existing_room != room_number || existing_room == UNASSIGNED_ROOM {
            return false;
        }
        b.check_in.as_str() < check_out && b.check_out.as_str() > check_in
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::booking::{BookingSource, BookingStatus};

    fn booking(id: &str, room: &str, check_in: &str, check_out: &str, status: BookingStatus) -> Booking {
        Booking {
            id: id.to_string(),
            room_type_id: "rt-1".to_string(),
            room_number: Some(room.to_string()),
            guest_name: "Guest".to_string(),
            source: BookingSource::Direct,
            status,
            timestamp: 0,
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            amount: Some(1000.0),
            reservation_id: None,
            channel_sync: Default::default(),
            rejection_reason: None,
            guest_details: None,
            number_of_rooms: None,
            pax: None,
            accessory_guests: vec![],
            extra_beds: None,
            special_requests: None,
            is_vip: false,
            is_settled: false,
            folio: vec![],
            payments: vec![],
            invoice_number: None,
            invoice_date: None,
        }
    }

    #[test]
    fn overlapping_interval_conflicts() {
        let existing = vec![booking("b1", "101", "2026-08-10", "2026-08-12", BookingStatus::Confirmed)];
        assert!(has_conflict(&existing, "101", "2026-08-11", "2026-08-13", None));
        assert!(has_conflict(&existing, "101", "2026-08-09", "2026-08-11", None));
        assert!(has_conflict(&existing, "101", "2026-08-10", "2026-08-12", None));
    }

    #[test]
    fn touching_intervals_do_not_conflict() {
        let existing = vec![booking("b1", "101", "2026-08-10", "2026-08-12", BookingStatus::Confirmed)];
        assert!(!has_conflict(&existing, "101", "2026-08-12", "2026-08-14", None));
        assert!(!has_conflict(&existing, "101", "2026-08-08", "2026-08-10", None));
    }

    #[test]
    fn different_room_does_not_conflict() {
        let existing = vec![booking("b1", "101", "2026-08-10", "2026-08-12", BookingStatus::Confirmed)];
        assert!(!has_conflict(&existing, "102", "2026-08-10", "2026-08-12", None));
    }

    #[test]
    fn terminal_statuses_do_not_conflict() {
        for status in [BookingStatus::Cancelled, BookingStatus::Rejected, BookingStatus::CheckedOut] {
            let existing = vec![booking("b1", "101", "2026-08-10", "2026-08-12", status)];
            assert!(!has_conflict(&existing, "101", "2026-08-10", "2026-08-12", None));
        }
        let existing = vec![booking("b1", "101", "2026-08-10", "2026-08-12", BookingStatus::CheckedIn)];
        assert!(has_conflict(&existing, "101", "2026-08-10", "2026-08-12", None));
    }

    #[test]
    fn unassigned_rooms_are_exempt() {
        let existing = vec![
            booking("b1", UNASSIGNED_ROOM, "2026-08-10", "2026-08-12", BookingStatus::Confirmed),
            booking("b2", UNASSIGNED_ROOM, "2026-08-10", "2026-08-12", BookingStatus::Confirmed),
        ];
        assert!(!has_conflict(&existing, UNASSIGNED_ROOM, "2026-08-10", "2026-08-12", None));
    }

    #[test]
    fn exclusion_skips_the_named_booking() {
        let existing = vec![booking("b1", "101", "2026-08-10", "2026-08-12", BookingStatus::Confirmed)];
        assert!(!has_conflict(&existing, "101", "2026-08-10", "2026-08-12", Some("b1")));
        assert!(has_conflict(&existing, "101", "2026-08-10", "2026-08-12", Some("b2")));
    }
}
