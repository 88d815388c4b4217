//! Duration and rounding helpers shared by the calculators.

use chrono::{Duration, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};

const SECONDS_PER_HOUR: i64 = 3600;

/// Full-precision decimal hours for a duration. Punch data has second
/// granularity at best, so sub-second remainders are ignored.
pub fn hours_from_duration(d: Duration) -> Decimal {
    Decimal::from(d.num_seconds()) / Decimal::from(SECONDS_PER_HOUR)
}

/// Tenth-of-an-hour rounding, applied once at the presentation edge.
/// Internal accumulation stays at full precision.
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Cent rounding, applied once at the presentation edge.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Timestamps as the hosted store writes them, with the ISO "T" form
/// accepted as well.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}
