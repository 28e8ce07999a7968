//! Highest trading volume day.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::AnalysisError;
use crate::models::datapoint::Datapoint;

/// The day with the highest trading volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VolumeDay {
    pub volume: Decimal,
    pub date: NaiveDate,
    pub time: DateTime<Utc>,
    /// Quote currency of `volume`, attached by the caller.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl VolumeDay {
    /// Labels the volume with the currency it is quoted in.
    #[must_use]
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }
}

/// Finds the datapoint with the highest volume.
///
/// Ties go to the earliest maximal datapoint; the running maximum is only
/// replaced on a strictly greater value.
///
/// # Errors
///
/// Returns [`AnalysisError::InsufficientData`] for an empty series.
pub fn highest_volume_day(series: &[Datapoint]) -> Result<VolumeDay, AnalysisError> {
    let (first, rest) = series
        .split_first()
        .ok_or(AnalysisError::InsufficientData {
            required: 1,
            found: 0,
        })?;

    let highest = rest.iter().fold(first, |highest, point| {
        if point.value() > highest.value() {
            point
        } else {
            highest
        }
    });

    Ok(VolumeDay {
        volume: highest.value(),
        date: highest.date(),
        time: highest.time(),
        currency: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const START: i64 = 1_609_459_200;

    fn day(offset: i64, value: Decimal) -> Datapoint {
        Datapoint::new(START + offset * 86_400, value).unwrap()
    }

    #[test]
    fn empty_series_fails() {
        let err = highest_volume_day(&[]).unwrap_err();
        assert_eq!(
            err,
            AnalysisError::InsufficientData {
                required: 1,
                found: 0
            }
        );
    }

    #[test]
    fn highest_volume_first_day() {
        let points = [
            day(0, dec!(100)),
            day(1, dec!(1)),
            day(2, dec!(2)),
            day(3, dec!(3)),
        ];

        let result = highest_volume_day(&points).unwrap();

        assert_eq!(result.volume, dec!(100));
        assert_eq!(result.date, points[0].date());
        assert!(result.currency.is_none());
    }

    #[test]
    fn ties_keep_first_maximum() {
        let points = [day(0, dec!(5)), day(1, dec!(9)), day(2, dec!(9.0))];

        let result = highest_volume_day(&points).unwrap();

        assert_eq!(result.date, points[1].date());
    }

    #[test]
    fn single_point_is_its_own_maximum() {
        let points = [day(4, dec!(0.5))];

        let result = highest_volume_day(&points).unwrap();

        assert_eq!(result.volume, dec!(0.5));
        assert_eq!(result.time, points[0].time());
    }

    #[test]
    fn currency_label_is_attached_afterwards() {
        let result = highest_volume_day(&[day(0, dec!(7))])
            .unwrap()
            .with_currency("eur");
        assert_eq!(result.currency.as_deref(), Some("eur"));
    }
}
