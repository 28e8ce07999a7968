//! Dated observations and ordered series of them.

use std::ops::Deref;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::analysis::AnalysisError;
use crate::timestamp;

/// A single observation: a unix timestamp and its value.
///
/// The timestamp is validated on construction, so every `Datapoint` has a
/// well-defined UTC time and calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datapoint {
    timestamp: i64,
    value: Decimal,
    time: DateTime<Utc>,
}

impl Datapoint {
    /// Creates a datapoint from a 10-digit (seconds) or 13-digit
    /// (milliseconds) unix timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::UnsupportedTimestamp`] for any other
    /// timestamp length.
    pub fn new(timestamp: i64, value: Decimal) -> Result<Self, AnalysisError> {
        let time = timestamp::to_datetime(timestamp)?;
        Ok(Self {
            timestamp,
            value,
            time,
        })
    }

    /// Raw unix timestamp as supplied by the provider.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Point in time of the observation (UTC).
    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }

    /// Calendar date (UTC) the observation falls on.
    pub fn date(&self) -> NaiveDate {
        self.time.date_naive()
    }
}

/// An ordered, immutable sequence of datapoints for one metric.
///
/// Order is significant: trend and profit analysis read it left to right.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Series(Vec<Datapoint>);

impl Series {
    pub fn new(points: Vec<Datapoint>) -> Self {
        Self(points)
    }
}

impl Deref for Series {
    type Target = [Datapoint];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
