//! Market statistics over daily price and volume series.
//!
//! Raw provider samples are first reduced to one datapoint per calendar day
//! ([`normalize`]), then three independent analyzers run over the result:
//! the longest run of daily price declines ([`longest_downward_run`]), the
//! day with the highest trading volume ([`highest_volume_day`]) and the best
//! day pair to buy and later sell ([`best_buy_sell`]). [`analyze`] sequences
//! all of them.
//!
//! Every analyzer is a pure function over a borrowed slice. Failures are
//! values of [`AnalysisError`], never panics.

pub mod normalize;
pub mod orchestrator;
pub mod profit;
pub mod trend;
pub mod volume;

use std::fmt;

use serde::Serialize;

pub use normalize::normalize;
pub use orchestrator::{DateRange, MarketAnalysis, analyze, analyze_range};
pub use profit::{BuySellDates, best_buy_sell};
pub use trend::longest_downward_run;
pub use volume::{VolumeDay, highest_volume_day};

/// Reason an analysis step could not produce a result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// The requested date range is empty or reversed.
    #[error("{reason}")]
    InvalidRange { reason: &'static str },

    /// Both normalized series are empty.
    #[error("there is no data to run analysis")]
    NoData,

    /// An analyzer received fewer datapoints than it needs.
    #[error("not enough datapoints to run analysis: need at least {required}, found {found}")]
    InsufficientData { required: usize, found: usize },

    /// Prices never rose after any buy day.
    #[error("there were no good days to buy and sell")]
    NoProfitablePair,

    /// A timestamp is neither 10-digit seconds nor 13-digit milliseconds.
    #[error(
        "unsupported timestamp {timestamp}: expected 10 (seconds) or 13 (milliseconds) digits, got {digits}"
    )]
    UnsupportedTimestamp { timestamp: i64, digits: usize },
}

impl AnalysisError {
    /// Pipeline stage that produced this error.
    pub fn stage(&self) -> AnalysisStage {
        match self {
            Self::InvalidRange { .. } => AnalysisStage::Range,
            Self::NoData | Self::UnsupportedTimestamp { .. } => AnalysisStage::Normalize,
            Self::InsufficientData { .. } | Self::NoProfitablePair => AnalysisStage::Analyze,
        }
    }
}

/// Stages of the analysis pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    /// Date range validation.
    Range,
    /// Conversion of raw samples into daily series.
    Normalize,
    /// One of the three analyzers.
    Analyze,
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Range => "range",
            Self::Normalize => "normalize",
            Self::Analyze => "analyze",
        };
        f.write_str(name)
    }
}
