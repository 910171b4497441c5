/// Arithmetic mean of a sample.
///
/// Returns `NaN` for an empty sample.
///
/// # Examples
///
/// ```
/// # use eyeball_stats::descriptive::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of a sample.
///
/// For an odd number of values this is the middle value of the sorted sample;
/// for an even number it is the average of the two middle values.
///
/// # Examples
///
/// ```
/// # use eyeball_stats::descriptive::median;
/// assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
/// ```
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    median_of_sorted(&sorted(values))
}

/// Population standard deviation of a sample (divides by `n`, not `n - 1`).
///
/// # Examples
///
/// ```
/// # use eyeball_stats::descriptive::std_dev;
/// let sd = std_dev(&[1.0, 2.0, 3.0, 4.0]);
/// assert!((sd - 1.25_f64.sqrt()).abs() < 1e-12);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    let mean = mean(values);
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Returns an ascending copy of `values`, leaving the input untouched.
#[must_use]
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

fn median_of_sorted(sorted_values: &[f64]) -> f64 {
    let len = sorted_values.len();
    if len == 0 {
        return f64::NAN;
    }
    let mid = len / 2;
    if len % 2 == 1 {
        sorted_values[mid]
    } else {
        f64::midpoint(sorted_values[mid - 1], sorted_values[mid])
    }
}

/// Descriptive statistics summarizing a sample.
///
/// Bundles the measures the game uses as ground truth so a round can compute
/// them in one pass over a single sorted copy.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// The minimum value in the sample.
    pub min: f64,
    /// The maximum value in the sample.
    pub max: f64,
    /// The arithmetic mean of the sample.
    pub mean: f64,
    /// The median of the sample.
    pub median: f64,
    /// The population standard deviation of the sample.
    pub std_dev: f64,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// # Returns
    ///
    /// * `Some(DescriptiveStats)` - if the sample contains at least one value
    /// * `None` - if the sample is empty
    ///
    /// # Examples
    ///
    /// ```
    /// # use eyeball_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([5.0, 2.0, 4.0, 1.0, 3.0]).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        Some(Self {
            min,
            max,
            mean: mean(sorted_values),
            median: median_of_sorted(sorted_values),
            std_dev: std_dev(sorted_values),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_four_value_sample() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert!((mean(&values) - 2.5).abs() < EPS);
        assert!((median(&values) - 2.5).abs() < EPS);
        assert!((std_dev(&values) - 1.118_033_988_749_895).abs() < EPS);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median(&[7.0]), 7.0);
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[10.0, 1.0, 3.0, 2.0]), 2.5);
    }

    #[test]
    fn test_median_does_not_mutate_input() {
        let values = vec![3.0, 1.0, 2.0];
        let _ = median(&values);
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_std_dev_of_constant_sample_is_zero() {
        assert_eq!(std_dev(&[4.0, 4.0, 4.0]), 0.0);
    }

    #[test]
    fn test_population_not_sample_std_dev() {
        // Sample standard deviation of [2, 4] would be sqrt(2).
        assert!((std_dev(&[2.0, 4.0]) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_descriptive_stats_matches_free_functions() {
        let values = [9.0, 1.0, 4.0, 7.0, 2.0, 2.0];
        let stats = DescriptiveStats::new(values).unwrap();
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 9.0);
        assert!((stats.mean - mean(&values)).abs() < EPS);
        assert!((stats.median - median(&values)).abs() < EPS);
        assert!((stats.std_dev - std_dev(&values)).abs() < EPS);
    }

    #[test]
    fn test_descriptive_stats_empty() {
        assert!(DescriptiveStats::new([]).is_none());
    }

    #[test]
    fn test_empty_sample_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(median(&[]).is_nan());
    }
}
