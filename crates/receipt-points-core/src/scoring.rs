//! Points scoring rules.
//!
//! A receipt's score is the sum of independent rule contributions:
//!
//! | Rule | Points |
//! |------|--------|
//! | Retailer name | 1 per ASCII letter or digit |
//! | Round dollar | 50 if the total has no cents |
//! | Quarter multiple | 25 if the total in cents is a multiple of 25 |
//! | Item pairs | 5 for every two items |
//! | Item descriptions | `ceil(price * 0.2)` for each item whose trimmed description length is a multiple of 3 |
//! | Odd day | 6 if the purchase day of month is odd |
//! | Afternoon | 10 if the purchase hour is in `14..16` |
//!
//! # Parse failures
//!
//! Scoring never fails. Malformed fields fall back to neutral values:
//!
//! - an amount that does not parse as a finite decimal counts as `0.0`
//!   (so a malformed total still earns the round-dollar and quarter bonuses,
//!   and a malformed item price earns nothing);
//! - a date that does not parse as `YYYY-MM-DD` has no day, so the odd-day
//!   bonus is not awarded;
//! - a time that does not parse as `HH:MM` has no hour, so the afternoon
//!   bonus is not awarded.
//!
//! # Very large amounts
//!
//! Points saturate at `u64::MAX` instead of overflowing: a per-item
//! contribution too large for `u64` is capped there, and the item sum and
//! the receipt total use saturating addition. A total whose cent value does
//! not fit in `i64` (e.g. `"1e300"`) never earns the quarter bonus; it can
//! still earn the round-dollar bonus.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::models::{Item, Receipt};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const AFTERNOON_HOURS: std::ops::Range<u32> = 14..16;

/// Per-rule contributions to a receipt's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        self.rules()
            .iter()
            .fold(0u64, |acc, (_, points)| acc.saturating_add(*points))
    }

    /// Rule names paired with their contributions, in scoring order.
    pub fn rules(&self) -> [(&'static str, u64); 7] {
        [
            ("retailer", self.retailer),
            ("round_dollar", self.round_dollar),
            ("quarter_multiple", self.quarter_multiple),
            ("item_pairs", self.item_pairs),
            ("item_descriptions", self.item_descriptions),
            ("odd_day", self.odd_day),
            ("afternoon", self.afternoon),
        ]
    }
}

/// Computes the total points for a receipt.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total()
}

/// Applies every rule to `receipt` and reports each contribution.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = parse_amount(&receipt.total);

    PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_dollar: if total.fract() == 0.0 {
            ROUND_DOLLAR_POINTS
        } else {
            0
        },
        quarter_multiple: if to_cents(total).is_some_and(|cents| cents % 25 == 0) {
            QUARTER_MULTIPLE_POINTS
        } else {
            0
        },
        item_pairs: ((receipt.items.len() / 2) as u64).saturating_mul(ITEM_PAIR_POINTS),
        item_descriptions: receipt
            .items
            .iter()
            .map(description_points)
            .fold(0u64, u64::saturating_add),
        odd_day: match parse_day(&receipt.purchase_date) {
            Some(day) if day % 2 == 1 => ODD_DAY_POINTS,
            _ => 0,
        },
        afternoon: match parse_hour(&receipt.purchase_time) {
            Some(hour) if AFTERNOON_HOURS.contains(&hour) => AFTERNOON_POINTS,
            _ => 0,
        },
    }
}

fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u64
}

fn description_points(item: &Item) -> u64 {
    if item.short_description.trim().chars().count() % 3 != 0 {
        return 0;
    }
    let points = (parse_amount(&item.price) * DESCRIPTION_PRICE_MULTIPLIER).ceil();
    if points > 0.0 {
        // saturating cast: anything above u64::MAX becomes u64::MAX
        points as u64
    } else {
        0
    }
}

/// Amount in whole cents, or `None` when it does not fit in `i64`.
fn to_cents(amount: f64) -> Option<i64> {
    let cents = (amount * 100.0).round();
    if cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
        Some(cents as i64)
    } else {
        None
    }
}

/// Parses a decimal amount, returning `0.0` when the string is not a
/// finite number.
pub fn parse_amount(s: &str) -> f64 {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Day of month of a `YYYY-MM-DD` date, or `None` if it does not parse.
pub fn parse_day(s: &str) -> Option<u32> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.day())
}

/// Hour of a 24-hour `HH:MM` time, or `None` if it does not parse.
pub fn parse_hour(s: &str) -> Option<u32> {
    NaiveTime::parse_from_str(s, "%H:%M").ok().map(|t| t.hour())
}
