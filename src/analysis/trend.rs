//! Longest downward (bear) trend.

use crate::models::datapoint::Datapoint;

/// Returns the length of the longest run of consecutive strict declines.
///
/// Each pair `(i - 1, i)` with `value[i] < value[i - 1]` extends the current
/// run; an equal or higher value resets it. A run of `n` falling days after
/// a starting day has length `n`, so a strictly decreasing series of length
/// `n` yields `n - 1`. Series shorter than two points yield 0.
pub fn longest_downward_run(series: &[Datapoint]) -> usize {
    let (_, longest) = series
        .windows(2)
        .fold((0, 0), |(current, longest), pair| {
            if pair[1].value() < pair[0].value() {
                let current = current + 1;
                (current, longest.max(current))
            } else {
                (0, longest)
            }
        });
    longest
}
