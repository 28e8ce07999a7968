//! Reduction of raw samples to one datapoint per calendar day.

use std::collections::HashSet;

use tracing::debug;

use super::AnalysisError;
use crate::models::datapoint::{Datapoint, Series};
use crate::models::market_chart::RawSample;

/// Converts raw `[timestamp, value]` samples into a daily series.
///
/// For each UTC calendar date only the sample that appears first in input
/// order is kept; later samples of the same date are dropped whatever their
/// time of day. Input order is otherwise preserved and never re-sorted. For
/// sorted daily or intraday data the kept sample is the one nearest to
/// midnight.
///
/// Empty input yields an empty series.
///
/// # Errors
///
/// Returns [`AnalysisError::UnsupportedTimestamp`] if any sample carries a
/// timestamp that is neither seconds nor milliseconds.
pub fn normalize(raw: &[RawSample]) -> Result<Series, AnalysisError> {
    let (_, points) = raw.iter().try_fold(
        (HashSet::new(), Vec::new()),
        |(mut seen, mut points), sample| {
            let point = Datapoint::new(sample.timestamp(), sample.value())?;
            if seen.insert(point.date()) {
                points.push(point);
            }
            Ok::<_, AnalysisError>((seen, points))
        },
    )?;

    debug!(
        samples = raw.len(),
        days = points.len(),
        dropped = raw.len() - points.len(),
        "Normalized series to daily datapoints"
    );

    Ok(Series::new(points))
}
