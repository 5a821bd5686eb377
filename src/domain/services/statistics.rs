use crate::domain::models::booking::{Booking, BookingStatus};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

const DAILY_WINDOW: usize = 14;
const WEEKLY_WINDOW: usize = 12;
const MONTHLY_WINDOW: usize = 12;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub summary: Summary,
    pub revenue_share: Vec<ChannelShare>,
    pub trends: Trends,
    pub popularity: Vec<RoomTypePopularity>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_revenue: f64,
    pub total_bookings: i64,
    pub total_nights: i64,
    pub average_daily_rate: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelShare {
    pub channel: String,
    pub revenue: f64,
    pub bookings: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
    pub daily: Vec<TrendPoint>,
    pub weekly: Vec<TrendPoint>,
    pub monthly: Vec<TrendPoint>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub period: String,
    pub revenue: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypePopularity {
    pub room_type_id: String,
    pub bookings: i64,
    pub revenue: f64,
}

fn tail(buckets: BTreeMap<String, f64>, window: usize) -> Vec<TrendPoint> {
    let skip = buckets.len().saturating_sub(window);
    buckets
        .into_iter()
        .skip(skip)
        .map(|(period, revenue)| TrendPoint { period, revenue })
        .collect()
}

/// Full-scan rollup over every non-cancelled booking. Summary figures are
/// year-to-date; trend series cover the whole history, truncated to trailing
/// windows. A booking whose dates fail to parse is skipped, not fatal.
pub fn compute(bookings: &[Booking], today: NaiveDate) -> Statistics {
    let mut summary = Summary {
        total_revenue: 0.0,
        total_bookings: 0,
        total_nights: 0,
        average_daily_rate: 0.0,
    };
    let mut shares: HashMap<&'static str, (f64, i64)> = HashMap::new();
    let mut daily: BTreeMap<String, f64> = BTreeMap::new();
    let mut weekly: BTreeMap<String, f64> = BTreeMap::new();
    let mut monthly: BTreeMap<String, f64> = BTreeMap::new();
    let mut popularity: HashMap<String, (i64, f64)> = HashMap::new();

    for booking in bookings {
        if booking.status == BookingStatus::Cancelled {
            continue;
        }

        let parsed = NaiveDate::parse_from_str(&booking.check_in, "%Y-%m-%d").and_then(|ci| {
            NaiveDate::parse_from_str(&booking.check_out, "%Y-%m-%d").map(|co| (ci, co))
        });
        let (check_in, check_out) = match parsed {
            Ok(dates) => dates,
            Err(_) => {
                warn!(
                    booking_id = %booking.id,
                    "Skipping booking with unparseable dates in statistics"
                );
                continue;
            }
        };

        let revenue = booking.amount.unwrap_or(0.0);
        let nights = (check_out - check_in).num_days().max(0);

        if check_in.year() == today.year() {
            summary.total_revenue += revenue;
            summary.total_bookings += 1;
            summary.total_nights += nights;
        }

        let entry = shares.entry(booking.source.as_str()).or_insert((0.0, 0));
        entry.0 += revenue;
        entry.1 += 1;

        *daily.entry(check_in.format("%Y-%m-%d").to_string()).or_default() += revenue;
        let iso = check_in.iso_week();
        *weekly
            .entry(format!("{}-W{:02}", iso.year(), iso.week()))
            .or_default() += revenue;
        *monthly.entry(check_in.format("%Y-%m").to_string()).or_default() += revenue;

        let pop = popularity.entry(booking.room_type_id.clone()).or_insert((0, 0.0));
        pop.0 += 1;
        pop.1 += revenue;
    }

    if summary.total_nights > 0 {
        summary.average_daily_rate = summary.total_revenue / summary.total_nights as f64;
    }

    let mut revenue_share: Vec<ChannelShare> = shares
        .into_iter()
        .map(|(channel, (revenue, bookings))| ChannelShare {
            channel: channel.to_string(),
            revenue,
            bookings,
        })
        .collect();
    revenue_share.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));

    let mut popularity: Vec<RoomTypePopularity> = popularity
        .into_iter()
        .map(|(room_type_id, (bookings, revenue))| RoomTypePopularity {
            room_type_id,
            bookings,
            revenue,
        })
        .collect();
    popularity.sort_by(|a, b| b.bookings.cmp(&a.bookings).then(a.room_type_id.cmp(&b.room_type_id)));

    Statistics {
        summary,
        revenue_share,
        trends: Trends {
            daily: tail(daily, DAILY_WINDOW),
            weekly: tail(weekly, WEEKLY_WINDOW),
            monthly: tail(monthly, MONTHLY_WINDOW),
        },
        popularity,
    }
}
