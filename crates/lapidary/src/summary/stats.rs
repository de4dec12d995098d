//! Missing-value aware aggregation helpers.

use std::collections::HashSet;

/// Sum the present, non-NaN values. Empty input sums to `0.0`.
pub fn safe_sum(values: impl IntoIterator<Item = Option<f64>>) -> f64 {
    present(values).sum()
}

/// Mean of the present, non-NaN values, or `None` when there are none.
pub fn safe_mean(values: impl IntoIterator<Item = Option<f64>>) -> Option<f64> {
    let (sum, count) = present(values).fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Number of distinct non-empty values.
pub fn distinct_count<'a>(values: impl IntoIterator<Item = &'a str>) -> usize {
    values
        .into_iter()
        .filter(|v| !v.is_empty())
        .collect::<HashSet<_>>()
        .len()
}

fn present(values: impl IntoIterator<Item = Option<f64>>) -> impl Iterator<Item = f64> {
    values.into_iter().flatten().filter(|v| !v.is_nan())
}
