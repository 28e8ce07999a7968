//! Shared test utilities.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

/// Calendar date shorthand.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Midnight UTC of the given day.
pub fn midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid UTC date")
}
