//! Serializable success/failure envelopes for analysis results.
//!
//! Library callers work with `Result` values; these types flatten them into
//! the `{ "success": bool, "message": string, ... }` shape consumed by
//! front ends. A failed envelope carries no payload fields at all.

use serde::Serialize;

use crate::analysis::{AnalysisError, AnalysisStage, BuySellDates, MarketAnalysis, VolumeDay};

/// Outcome of a single analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome<T> {
    pub success: bool,
    /// Empty on success.
    pub message: String,
    #[serde(flatten)]
    pub data: Option<T>,
}

impl<T: Clone> From<&Result<T, AnalysisError>> for Outcome<T> {
    fn from(result: &Result<T, AnalysisError>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                message: String::new(),
                data: Some(data.clone()),
            },
            Err(e) => Self {
                success: false,
                message: e.to_string(),
                data: None,
            },
        }
    }
}

/// Aggregate report over one price/volume data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub success: bool,
    pub message: String,
    /// Stage that stopped the pipeline, only set on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_stage: Option<AnalysisStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_days: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_days: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_downward_trend: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highest_trading_volume: Option<Outcome<VolumeDay>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_days_to_buy_and_sell: Option<Outcome<BuySellDates>>,
}

impl AnalysisReport {
    /// Builds a report from the orchestrator's result.
    pub fn new(result: &Result<MarketAnalysis, AnalysisError>) -> Self {
        match result {
            Ok(analysis) => Self {
                success: true,
                message: String::new(),
                failed_stage: None,
                coin: None,
                price_days: Some(analysis.price_days),
                volume_days: Some(analysis.volume_days),
                longest_downward_trend: Some(analysis.longest_downward_run),
                highest_trading_volume: Some(Outcome::from(&analysis.highest_volume)),
                best_days_to_buy_and_sell: Some(Outcome::from(&analysis.best_trade)),
            },
            Err(e) => Self {
                success: false,
                message: e.to_string(),
                failed_stage: Some(e.stage()),
                coin: None,
                price_days: None,
                volume_days: None,
                longest_downward_trend: None,
                highest_trading_volume: None,
                best_days_to_buy_and_sell: None,
            },
        }
    }

    /// Labels the report with the coin it describes.
    #[must_use]
    pub fn with_coin(mut self, coin: impl Into<String>) -> Self {
        self.coin = Some(coin.into());
        self
    }

    /// Serializes the report as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`KachingError::Json`](crate::KachingError::Json) if
    /// serialization fails.
    pub fn to_json(&self, pretty: bool) -> crate::Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failed_outcome_has_message_and_no_payload() {
        let result: Result<VolumeDay, AnalysisError> = Err(AnalysisError::NoProfitablePair);

        let value = serde_json::to_value(Outcome::from(&result)).unwrap();

        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "there were no good days to buy and sell"
            })
        );
    }

    #[test]
    fn failed_aggregate_reports_stage() {
        let report = AnalysisReport::new(&Err(AnalysisError::NoData)).with_coin("bitcoin");

        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(
            value,
            json!({
                "success": false,
                "message": "there is no data to run analysis",
                "failed_stage": "normalize",
                "coin": "bitcoin"
            })
        );
    }
}
