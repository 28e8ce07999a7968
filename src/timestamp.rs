//! Unix timestamp conversion.
//!
//! Market data providers mix second and millisecond timestamps. The unit is
//! sniffed from the number of decimal digits: 10 digits are seconds, 13
//! digits are milliseconds. Anything else is rejected rather than mapped to
//! an arbitrary instant.

use chrono::{DateTime, Utc};

use crate::analysis::AnalysisError;

/// Resolution of a raw unix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampUnit {
    Seconds,
    Milliseconds,
}

impl TimestampUnit {
    /// Detects the unit of `timestamp` from its digit count.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnsupportedTimestamp`] for negative values and
    /// for any digit count other than 10 or 13 (e.g. 16-digit microseconds).
    pub fn detect(timestamp: i64) -> Result<Self, AnalysisError> {
        let digits = digit_count(timestamp);
        match (timestamp.is_negative(), digits) {
            (false, 10) => Ok(Self::Seconds),
            (false, 13) => Ok(Self::Milliseconds),
            _ => Err(AnalysisError::UnsupportedTimestamp { timestamp, digits }),
        }
    }
}

/// Converts a 10- or 13-digit unix timestamp to a UTC date-time.
///
/// # Errors
///
/// Returns [`AnalysisError::UnsupportedTimestamp`] when the unit cannot be
/// detected.
pub fn to_datetime(timestamp: i64) -> Result<DateTime<Utc>, AnalysisError> {
    let converted = match TimestampUnit::detect(timestamp)? {
        TimestampUnit::Seconds => DateTime::from_timestamp(timestamp, 0),
        TimestampUnit::Milliseconds => DateTime::from_timestamp_millis(timestamp),
    };
    converted.ok_or(AnalysisError::UnsupportedTimestamp {
        timestamp,
        digits: digit_count(timestamp),
    })
}

/// Converts a UTC date-time to unix seconds, dropping sub-second precision.
pub fn unix_seconds(time: DateTime<Utc>) -> i64 {
    time.timestamp()
}

/// Number of decimal digits in `value`, ignoring the sign.
fn digit_count(value: i64) -> usize {
    value.unsigned_abs().checked_ilog10().map_or(1, |log| log as usize + 1)
}
