//! Serialization tests for analysis reports and market chart loading.

use std::io::Write;

use serde_json::json;

use kaching::KachingError;
use kaching::analysis::{AnalysisError, DateRange, MarketAnalysis, analyze};
use kaching::models::{AnalysisReport, MarketChart};

const MARKET_CHART_JSON: &str = include_str!("fixtures/market_chart.json");
const FALLING_MARKET_JSON: &str = include_str!("fixtures/falling_market.json");

#[test]
fn test_successful_report_serializes() {
    let chart = MarketChart::from_json(MARKET_CHART_JSON).unwrap();
    let result = analyze(&chart.prices, &chart.total_volumes).map(|a| a.with_currency("eur"));

    let report = AnalysisReport::new(&result).with_coin("bitcoin");
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(
        value,
        json!({
            "success": true,
            "message": "",
            "coin": "bitcoin",
            "price_days": 6,
            "volume_days": 6,
            "longest_downward_trend": 2,
            "highest_trading_volume": {
                "success": true,
                "message": "",
                "volume": "900",
                "date": "2021-01-05",
                "time": "2021-01-05T00:04:00Z",
                "currency": "eur"
            },
            "best_days_to_buy_and_sell": {
                "success": true,
                "message": "",
                "buy_date": "2021-01-03",
                "sell_date": "2021-01-06",
                "buy_value": "80",
                "sell_value": "150",
                "profit": "70"
            }
        })
    );
}

#[test]
fn test_sub_failures_do_not_fail_report() {
    let chart = MarketChart::from_json(FALLING_MARKET_JSON).unwrap();
    let result = analyze(&chart.prices, &chart.total_volumes);

    let report = AnalysisReport::new(&result);

    assert!(report.success);
    let trade = report.best_days_to_buy_and_sell.unwrap();
    assert!(!trade.success);
    assert_eq!(trade.message, AnalysisError::NoProfitablePair.to_string());
    assert!(trade.data.is_none());
    assert!(!report.highest_trading_volume.unwrap().success);
}

#[test]
fn test_invalid_range_report() {
    let start = chrono::DateTime::from_timestamp(1_609_459_200, 0).unwrap();
    let result: Result<MarketAnalysis, AnalysisError> =
        Err(DateRange::new(start, start).unwrap_err());

    let json = AnalysisReport::new(&result).to_json(false).unwrap();

    assert_eq!(
        json,
        r#"{"success":false,"message":"end date can not be same as start date","failed_stage":"range"}"#
    );
}

#[test]
fn test_load_market_chart_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MARKET_CHART_JSON.as_bytes()).unwrap();

    let chart = MarketChart::load(file.path()).unwrap();

    assert_eq!(chart.prices.len(), 18);
    assert_eq!(chart.market_caps.len(), 6);
    assert_eq!(chart.total_volumes.len(), 18);
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = MarketChart::load(&dir.path().join("missing.json")).unwrap_err();

    assert!(matches!(err, KachingError::Io(_)));
}

#[test]
fn test_load_invalid_json_is_json_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{\"prices\": \"not an array\"}").unwrap();

    let err = MarketChart::load(file.path()).unwrap_err();

    assert!(matches!(err, KachingError::Json(_)));
}
