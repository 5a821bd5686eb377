use chrono::{Duration, NaiveDate, NaiveTime};

/// Result of re-deriving the stay length at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct StayAdjustment {
    pub new_check_out: NaiveDate,
    pub original_nights: i64,
    pub new_nights: i64,
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Whole nights between two ISO dates; None when either fails to parse.
pub fn nights_between(check_in: &str, check_out: &str) -> Option<i64> {
    let start = parse_date(check_in)?;
    let end = parse_date(check_out)?;
    Some((end - start).num_days())
}

/// The checkout date the guest is billed for. A departure after the
/// configured cutoff time-of-day is billed one day beyond today (late
/// checkout); a stay always bills at least one night.
pub fn effective_checkout(
    check_in: NaiveDate,
    today: NaiveDate,
    now: NaiveTime,
    cutoff: NaiveTime,
) -> NaiveDate {
    let mut effective = today;
    if now > cutoff {
        effective += Duration::days(1);
    }
    let min_checkout = check_in + Duration::days(1);
    effective.max(min_checkout)
}

/// Recomputes the stay against the cutoff clock. None when the stored dates
/// are unparseable.
pub fn adjust_stay(
    check_in: &str,
    check_out: &str,
    today: NaiveDate,
    now: NaiveTime,
    cutoff: NaiveTime,
) -> Option<StayAdjustment> {
    let check_in_date = parse_date(check_in)?;
    let original_check_out = parse_date(check_out)?;
    let original_nights = (original_check_out - check_in_date).num_days().max(1);
    let new_check_out = effective_checkout(check_in_date, today, now, cutoff);
    let new_nights = (new_check_out - check_in_date).num_days().max(1);
    Some(StayAdjustment {
        new_check_out,
        original_nights,
        new_nights,
    })
}

/// Linear rescale of the room amount to the recomputed night count.
pub fn rescale_amount(amount: f64, original_nights: i64, new_nights: i64) -> f64 {
    if original_nights <= 0 {
        return amount;
    }
    amount * new_nights as f64 / original_nights as f64
}

/// Invoice numbers embed the calendar year for display but draw from a
/// single persistent sequence that never resets.
pub fn format_invoice_number(year: i32, seq: i64) -> String {
    format!("INV-{}-{:04}", year, seq)
}

pub fn parse_cutoff(cutoff: &str) -> NaiveTime {
    NaiveTime::parse_from_str(cutoff, "%H:%M").unwrap_or_else(|_| NaiveTime::from_hms_opt(11, 0, 0).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    #[test]
    fn on_time_checkout_keeps_the_booked_stay() {
        let adj = adjust_stay("2026-08-04", "2026-08-06", d("2026-08-06"), t("09:30"), t("11:00")).unwrap();
        assert_eq!(adj.original_nights, 2);
        assert_eq!(adj.new_nights, 2);
        assert_eq!(adj.new_check_out, d("2026-08-06"));
    }

    #[test]
    fn late_checkout_bills_an_extra_night() {
        // the 2-night ₹2000 stay leaving after cutoff becomes 3 nights ₹3000
        let adj = adjust_stay("2026-08-04", "2026-08-06", d("2026-08-06"), t("14:45"), t("11:00")).unwrap();
        assert_eq!(adj.original_nights, 2);
        assert_eq!(adj.new_nights, 3);
        assert_eq!(adj.new_check_out, d("2026-08-07"));
        assert_eq!(rescale_amount(2000.0, adj.original_nights, adj.new_nights), 3000.0);
    }

    #[test]
    fn early_departure_shortens_the_stay() {
        let adj = adjust_stay("2026-08-04", "2026-08-08", d("2026-08-06"), t("10:00"), t("11:00")).unwrap();
        assert_eq!(adj.original_nights, 4);
        assert_eq!(adj.new_nights, 2);
        assert_eq!(rescale_amount(4000.0, 4, 2), 2000.0);
    }

    #[test]
    fn same_day_departure_still_bills_one_night() {
        let adj = adjust_stay("2026-08-06", "2026-08-07", d("2026-08-06"), t("08:00"), t("11:00")).unwrap();
        assert_eq!(adj.new_nights, 1);
        assert_eq!(adj.new_check_out, d("2026-08-07"));
    }

    #[test]
    fn unparseable_dates_yield_none() {
        assert!(adjust_stay("garbage", "2026-08-06", d("2026-08-06"), t("09:00"), t("11:00")).is_none());
        assert!(nights_between("2026-08-04", "not-a-date").is_none());
    }

    #[test]
    fn invoice_number_format() {
        assert_eq!(format_invoice_number(2026, 7), "INV-2026-0007");
        assert_eq!(format_invoice_number(2027, 12345), "INV-2027-12345");
    }
}
