use crate::descriptive;

/// Precomputed percentile values for a sample.
///
/// Stores percentile-value pairs so several percentiles of one sample can be
/// looked up without re-sorting.
///
/// # Examples
///
/// ```
/// use eyeball_stats::percentiles::Percentiles;
///
/// let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let percentiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
///
/// assert_eq!(percentiles.get(50.0), Some(3.0));
/// assert_eq!(percentiles.get(25.0), Some(2.0));
/// ```
#[derive(Debug, Clone)]
pub struct Percentiles {
    /// Percentile-value pairs in the order they were requested.
    /// Each tuple contains (percentile, value) where percentile is 0.0-100.0.
    values: Vec<(f64, f64)>,
}

impl Percentiles {
    /// Computes percentiles from sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64], percentile_points: &[f64]) -> Self {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let values = percentile_points
            .iter()
            .map(|&p| (p, compute_percentile(sorted_values, p)))
            .collect();
        Self { values }
    }

    /// Computes percentiles from unsorted values.
    ///
    /// The input is copied and sorted; it is never modified.
    #[must_use]
    pub fn new(values: &[f64], percentile_points: &[f64]) -> Self {
        Self::from_sorted(&descriptive::sorted(values), percentile_points)
    }

    /// Gets the value at a specific percentile.
    ///
    /// Returns `None` if the percentile was not precomputed.
    #[must_use]
    pub fn get(&self, percentile: f64) -> Option<f64> {
        self.values.iter().find_map(|(p, value)| {
            if (*p - percentile).abs() < f64::EPSILON {
                Some(*value)
            } else {
                None
            }
        })
    }

    /// Returns an iterator over all (percentile, value) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.iter().copied()
    }
}

/// Value at percentile `p` (0.0 to 100.0) of an unsorted sample.
///
/// See [`compute_percentile`] for the interpolation rule.
///
/// # Examples
///
/// ```
/// use eyeball_stats::percentiles::percentile;
///
/// assert_eq!(percentile(&[4.0, 1.0, 3.0, 2.0], 75.0), 3.25);
/// ```
#[must_use]
pub fn percentile(values: &[f64], p: f64) -> f64 {
    compute_percentile(&descriptive::sorted(values), p)
}

/// Computes a single percentile value from sorted data.
///
/// Uses linear interpolation between closest ranks. The fractional rank is
/// `r = p / 100 * (n - 1)`; when `r` is integral the value at that rank is
/// returned, otherwise the values at `floor(r)` and `floor(r) + 1` (clamped to
/// the last index) are blended by the fractional part of `r`.
///
/// Returns `f64::NAN` if the input is empty.
///
/// # Examples
///
/// ```
/// use eyeball_stats::percentiles::compute_percentile;
///
/// let values = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(compute_percentile(&values, 50.0), 3.0);
/// assert!((compute_percentile(&values, 90.0) - 4.6).abs() < 1e-12);
/// ```
#[expect(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]
#[must_use]
pub fn compute_percentile(sorted_values: &[f64], percentile: f64) -> f64 {
    let Some(last) = sorted_values.len().checked_sub(1) else {
        return f64::NAN;
    };
    let rank = percentile / 100.0 * last as f64;
    if rank.fract() == 0.0 {
        return sorted_values[(rank as usize).min(last)];
    }
    let lower = (rank.floor() as usize).min(last);
    let upper = (lower + 1).min(last);
    let weight = rank - lower as f64;
    sorted_values[lower] * (1.0 - weight) + sorted_values[upper] * weight
}
