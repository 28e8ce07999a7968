//! Best day pair to buy and sell.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::AnalysisError;
use crate::models::datapoint::Datapoint;

/// Buy and sell days yielding the maximum single-trade profit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuySellDates {
    pub buy_date: NaiveDate,
    pub sell_date: NaiveDate,
    pub buy_value: Decimal,
    pub sell_value: Decimal,
    pub profit: Decimal,
}

/// Finds the buy day `b` and sell day `s >= b` maximizing
/// `value[s] - value[b]`.
///
/// Single left-to-right pass tracking the lowest value seen so far. A pair
/// is accepted only when it beats the best profit strictly, starting from
/// zero, so the first pair reaching the maximum wins ties and a series that
/// never rises yields no pair. A new running minimum found after the best
/// pair never revisits it.
///
/// # Errors
///
/// - [`AnalysisError::InsufficientData`] for fewer than two datapoints.
/// - [`AnalysisError::NoProfitablePair`] when no later value exceeds an
///   earlier one.
pub fn best_buy_sell(series: &[Datapoint]) -> Result<BuySellDates, AnalysisError> {
    if series.len() < 2 {
        return Err(AnalysisError::InsufficientData {
            required: 2,
            found: series.len(),
        });
    }

    let mut lowest = &series[0];
    let mut best: Option<(&Datapoint, &Datapoint)> = None;
    let mut best_profit = Decimal::ZERO;

    for point in &series[1..] {
        let profit = point.value() - lowest.value();
        if profit > best_profit {
            best = Some((lowest, point));
            best_profit = profit;
        }
        if point.value() < lowest.value() {
            lowest = point;
        }
    }

    let (buy, sell) = best.ok_or(AnalysisError::NoProfitablePair)?;
    Ok(BuySellDates {
        buy_date: buy.date(),
        sell_date: sell.date(),
        buy_value: buy.value(),
        sell_value: sell.value(),
        profit: best_profit,
    })
}
