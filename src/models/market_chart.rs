//! Market chart payload as delivered by the upstream data provider.

use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One raw `[timestamp, value]` sample, before normalization.
///
/// Deserializes from a two-element JSON array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSample(pub i64, pub Decimal);

impl RawSample {
    pub fn timestamp(&self) -> i64 {
        self.0
    }

    pub fn value(&self) -> Decimal {
        self.1
    }
}

impl From<(i64, Decimal)> for RawSample {
    fn from((timestamp, value): (i64, Decimal)) -> Self {
        Self(timestamp, value)
    }
}

/// Price and volume series for one coin over a requested time range.
///
/// Samples are sorted oldest first. Granularity depends on the span that was
/// requested (minutes, hours or days).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<RawSample>,
    #[serde(default)]
    pub market_caps: Vec<RawSample>,
    #[serde(default)]
    pub total_volumes: Vec<RawSample>,
}

impl MarketChart {
    /// Parses a market chart from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`KachingError::Json`](crate::KachingError::Json) if the
    /// document does not match the expected shape.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a market chart from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }
}
