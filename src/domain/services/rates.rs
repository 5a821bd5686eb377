use crate::domain::models::{
    rate_rules::{ModifierType, RateRulesConfig},
    room_type::RoomType,
};
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct RateQuote {
    pub price: f64,
    pub applied_rule: Option<String>,
}

fn apply_modifier(price: f64, modifier_type: ModifierType, value: f64) -> f64 {
    match modifier_type {
        ModifierType::Percentage => price * value,
        ModifierType::Fixed => price + value,
    }
}

/// Quotes a room type for a date: a covering special event wins over the
/// weekly rule, and the result is clamped to the type's price band.
pub fn quote(room_type: &RoomType, rules: &RateRulesConfig, date: NaiveDate) -> RateQuote {
    let date_str = date.format("%Y-%m-%d").to_string();
    let mut price = room_type.base_price;
    let mut applied_rule = None;

    let event = rules
        .special_events
        .iter()
        .find(|ev| ev.start_date.as_str() <= date_str.as_str() && date_str.as_str() <= ev.end_date.as_str());

    if let Some(ev) = event {
        price = apply_modifier(price, ev.modifier_type, ev.modifier_value);
        applied_rule = Some(ev.name.clone());
    } else if rules.weekly_rules.is_active {
        let weekday = date.weekday().num_days_from_sunday() as u8;
        if rules.weekly_rules.active_days.contains(&weekday) {
            price = apply_modifier(price, rules.weekly_rules.modifier_type, rules.weekly_rules.modifier_value);
            applied_rule = Some("Weekly".to_string());
        }
    }

    RateQuote {
        price: price.clamp(room_type.floor_price, room_type.ceiling_price),
        applied_rule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::rate_rules::{SpecialEvent, WeeklyRule};

    fn room_type() -> RoomType {
        RoomType {
            id: "rt-1".to_string(),
            name: "Delux Room (AC)".to_string(),
            total_capacity: 10,
            base_price: 4500.0,
            floor_price: 3000.0,
            ceiling_price: 8000.0,
            base_occupancy: 2,
            amenities: vec![],
            room_numbers: vec![],
            extra_bed_charge: None,
        }
    }

    fn rules() -> RateRulesConfig {
        RateRulesConfig {
            weekly_rules: WeeklyRule {
                is_active: true,
                active_days: vec![5, 6],
                modifier_type: ModifierType::Percentage,
                modifier_value: 1.2,
            },
            special_events: vec![SpecialEvent {
                id: "ev-1".to_string(),
                name: "Diwali Festival".to_string(),
                start_date: "2026-11-06".to_string(),
                end_date: "2026-11-12".to_string(),
                modifier_type: ModifierType::Percentage,
                modifier_value: 1.5,
            }],
        }
    }

    #[test]
    fn weekday_without_rules_quotes_base() {
        // 2026-08-05 is a Wednesday
        let q = quote(&room_type(), &rules(), NaiveDate::from_ymd_opt(2026, 8, 5).unwrap());
        assert_eq!(q.price, 4500.0);
        assert!(q.applied_rule.is_none());
    }

    #[test]
    fn weekend_applies_the_weekly_multiplier() {
        // 2026-08-08 is a Saturday (day 6)
        let q = quote(&room_type(), &rules(), NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());
        assert_eq!(q.price, 5400.0);
        assert_eq!(q.applied_rule.as_deref(), Some("Weekly"));
    }

    #[test]
    fn special_event_wins_over_weekly_rule() {
        // 2026-11-07 is a Saturday inside the Diwali window
        let q = quote(&room_type(), &rules(), NaiveDate::from_ymd_opt(2026, 11, 7).unwrap());
        assert_eq!(q.price, 6750.0);
        assert_eq!(q.applied_rule.as_deref(), Some("Diwali Festival"));
    }

    #[test]
    fn quote_clamps_to_the_price_band() {
        let mut rt = room_type();
        rt.ceiling_price = 5000.0;
        let q = quote(&rt, &rules(), NaiveDate::from_ymd_opt(2026, 11, 7).unwrap());
        assert_eq!(q.price, 5000.0);
    }
}
