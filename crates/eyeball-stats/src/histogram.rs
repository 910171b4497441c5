use std::ops::Range;

/// A histogram of a sample over a fixed value range.
///
/// The range is split into bins of equal width. Values outside the range are
/// counted in the nearest edge bin, so every value of the sample is counted
/// exactly once.
#[derive(Debug, Clone)]
pub struct Histogram {
    /// The bins comprising the histogram, in ascending order of range.
    pub bins: Vec<HistogramBin>,
}

/// A single bin in a histogram.
#[derive(Debug, Clone)]
pub struct HistogramBin {
    /// The range of values covered by this bin (inclusive start, exclusive end).
    pub range: Range<f64>,
    /// The number of values that fall within this bin's range.
    pub count: u64,
}

impl Histogram {
    /// Creates a histogram with `num_bins` equal-width bins spanning `[min, max]`.
    ///
    /// A degenerate range (`max == min`) is treated as a range of width 1 so
    /// that a sample of one repeated value still produces a valid histogram.
    /// The maximum value lands in the last bin.
    ///
    /// # Examples
    ///
    /// ```
    /// # use eyeball_stats::histogram::Histogram;
    /// let values = [0.0, 1.0, 5.0, 9.9, 10.0];
    /// let histogram = Histogram::equal_width(&values, 2, 0.0, 10.0);
    /// assert_eq!(histogram.counts(), vec![2, 3]);
    /// assert_eq!(histogram.max_count(), 3);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::cast_possible_truncation
    )]
    #[must_use]
    pub fn equal_width(values: &[f64], num_bins: usize, min: f64, max: f64) -> Self {
        if num_bins == 0 {
            return Self { bins: vec![] };
        }

        let range = if max - min == 0.0 { 1.0 } else { max - min };
        let bin_width = range / num_bins as f64;
        let mut bins = (0..num_bins)
            .map(|i| HistogramBin {
                range: (min + i as f64 * bin_width)..(min + (i + 1) as f64 * bin_width),
                count: 0,
            })
            .collect::<Vec<_>>();

        for &value in values {
            let index = ((value - min) / bin_width).floor();
            let index = if index < 0.0 {
                0
            } else {
                (index as usize).min(num_bins - 1)
            };
            bins[index].count += 1;
        }

        Self { bins }
    }

    /// Returns the count of each bin in order.
    #[must_use]
    pub fn counts(&self) -> Vec<u64> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Returns the largest bin count, or 0 for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }
}
