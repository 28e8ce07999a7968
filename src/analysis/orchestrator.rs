//! Sequencing of normalization and the three analyzers.

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use super::{
    AnalysisError, BuySellDates, VolumeDay, best_buy_sell, highest_volume_day,
    longest_downward_run, normalize,
};
use crate::models::market_chart::RawSample;
use crate::timestamp;

/// Seconds added to the end of a range when querying the provider, so the
/// sample at the end date's midnight is included.
const END_PADDING_SECS: i64 = 3_600;

/// A validated time range with `end` strictly after `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    /// `end` plus the query padding.
    padded_end: DateTime<Utc>,
}

impl DateRange {
    /// Creates a range.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidRange`] if `end` equals or precedes
    /// `start`, or if padding `end` by one hour leaves the representable
    /// time range.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, AnalysisError> {
        if end == start {
            return Err(AnalysisError::InvalidRange {
                reason: "end date can not be same as start date",
            });
        }
        if end < start {
            return Err(AnalysisError::InvalidRange {
                reason: "end date can not be earlier than start date",
            });
        }
        let padded_end = end
            .checked_add_signed(Duration::seconds(END_PADDING_SECS))
            .ok_or(AnalysisError::InvalidRange {
                reason: "end date is too far in the future",
            })?;
        Ok(Self {
            start,
            end,
            padded_end,
        })
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Unix-second `(from, to)` bounds for the provider query, with the end
    /// extended by one hour.
    pub fn query_bounds(&self) -> (i64, i64) {
        (
            timestamp::unix_seconds(self.start),
            timestamp::unix_seconds(self.padded_end),
        )
    }

    /// Whether `time` falls inside the queried window.
    pub fn contains(&self, time: DateTime<Utc>) -> bool {
        time >= self.start && time <= self.padded_end
    }
}

/// Aggregate outcome of a successful pipeline run.
///
/// Analyzer failures stay local to their field; a caller must inspect each
/// sub-result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketAnalysis {
    /// Number of days in the normalized price series.
    pub price_days: usize,
    /// Number of days in the normalized volume series.
    pub volume_days: usize,
    pub longest_downward_run: usize,
    pub highest_volume: Result<VolumeDay, AnalysisError>,
    pub best_trade: Result<BuySellDates, AnalysisError>,
}

impl MarketAnalysis {
    /// Attaches a currency label to the volume result, if it succeeded.
    #[must_use]
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.highest_volume = self
            .highest_volume
            .map(|volume| volume.with_currency(currency));
        self
    }
}

/// Normalizes both raw series and runs every analyzer.
///
/// The trend and profit analyzers read the price series, the volume analyzer
/// reads the volume series. Their failures are independent of each other.
///
/// # Errors
///
/// - [`AnalysisError::UnsupportedTimestamp`] if normalization fails.
/// - [`AnalysisError::NoData`] if both normalized series are empty.
pub fn analyze(
    raw_prices: &[RawSample],
    raw_volumes: &[RawSample],
) -> Result<MarketAnalysis, AnalysisError> {
    let prices = normalize(raw_prices)?;
    let volumes = normalize(raw_volumes)?;

    if prices.is_empty() && volumes.is_empty() {
        warn!("Both price and volume series are empty");
        return Err(AnalysisError::NoData);
    }

    info!(
        price_days = prices.len(),
        volume_days = volumes.len(),
        "Running market analysis"
    );

    let analysis = MarketAnalysis {
        price_days: prices.len(),
        volume_days: volumes.len(),
        longest_downward_run: longest_downward_run(&prices),
        highest_volume: highest_volume_day(&volumes),
        best_trade: best_buy_sell(&prices),
    };

    if let Err(e) = &analysis.highest_volume {
        warn!(error = %e, "Highest volume analysis failed");
    }
    if let Err(e) = &analysis.best_trade {
        warn!(error = %e, "Buy/sell analysis failed");
    }

    Ok(analysis)
}

/// Restricts both raw series to `range` and analyzes what remains.
///
/// The window runs from `range.start()` to one hour past `range.end()`,
/// mirroring the span the provider would be queried for.
///
/// # Errors
///
/// Same as [`analyze`]; samples with unsupported timestamps fail before any
/// clipping takes place.
pub fn analyze_range(
    range: &DateRange,
    raw_prices: &[RawSample],
    raw_volumes: &[RawSample],
) -> Result<MarketAnalysis, AnalysisError> {
    let prices = clip(range, raw_prices)?;
    let volumes = clip(range, raw_volumes)?;

    debug!(
        start = %range.start(),
        end = %range.end(),
        prices_kept = prices.len(),
        prices_total = raw_prices.len(),
        volumes_kept = volumes.len(),
        volumes_total = raw_volumes.len(),
        "Clipped raw samples to date range"
    );

    analyze(&prices, &volumes)
}

fn clip(range: &DateRange, raw: &[RawSample]) -> Result<Vec<RawSample>, AnalysisError> {
    let mut kept = Vec::with_capacity(raw.len());
    for sample in raw {
        if range.contains(timestamp::to_datetime(sample.timestamp())?) {
            kept.push(*sample);
        }
    }
    Ok(kept)
}
