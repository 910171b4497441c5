use std::fmt;

use arrayvec::ArrayVec;
use eyeball_stats::{descriptive, percentiles};
use serde::{Deserialize, Serialize};

use super::sample::Sample;

/// A single value the player places on the chart.
///
/// Every guess and every ground-truth value is tagged with exactly one
/// measure. Renderers key their colors off this tag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
pub enum Measure {
    #[display("Mean")]
    Mean,
    #[display("Median")]
    Median,
    #[display("P90")]
    P90,
    #[display("P95")]
    P95,
    #[display("P99")]
    P99,
    /// Lower boundary of the one-standard-deviation band (`mean - sd`).
    #[display("-1 SD")]
    StdDevLower,
    /// Upper boundary of the one-standard-deviation band (`mean + sd`).
    #[display("+1 SD")]
    StdDevUpper,
}

impl Measure {
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        Self::Mean,
        Self::Median,
        Self::P90,
        Self::P95,
        Self::P99,
        Self::StdDevLower,
        Self::StdDevUpper,
    ];

    /// Computes the ground-truth value of this measure on `sample`.
    ///
    /// Sums run over the values in their original order.
    ///
    /// # Example
    ///
    /// ```
    /// use eyeball_engine::{Measure, Sample};
    ///
    /// let sample = Sample::new("demo", "", vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(Measure::Mean.compute(&sample), 2.5);
    /// assert_eq!(Measure::Median.compute(&sample), 2.5);
    /// ```
    #[must_use]
    pub fn compute(self, sample: &Sample) -> f64 {
        let values = sample.values();
        match self {
            Self::Mean => descriptive::mean(values),
            Self::Median => descriptive::median(values),
            Self::P90 => percentiles::percentile(values, 90.0),
            Self::P95 => percentiles::percentile(values, 95.0),
            Self::P99 => percentiles::percentile(values, 99.0),
            Self::StdDevLower => descriptive::mean(values) - descriptive::std_dev(values),
            Self::StdDevUpper => descriptive::mean(values) + descriptive::std_dev(values),
        }
    }
}

/// A statistical target of a section.
///
/// Most objectives are a single value. The standard deviation objective is an
/// interval whose two boundaries are estimated separately, always lower first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    Scalar(Measure),
    Interval { lower: Measure, upper: Measure },
}

impl Objective {
    pub const MEAN: Self = Self::Scalar(Measure::Mean);
    pub const MEDIAN: Self = Self::Scalar(Measure::Median);
    pub const P90: Self = Self::Scalar(Measure::P90);
    pub const P95: Self = Self::Scalar(Measure::P95);
    pub const P99: Self = Self::Scalar(Measure::P99);
    pub const STD_DEV: Self = Self::Interval {
        lower: Measure::StdDevLower,
        upper: Measure::StdDevUpper,
    };

    /// Measures to estimate for this objective, in placement order.
    #[must_use]
    pub fn slots(self) -> ArrayVec<Measure, 2> {
        let mut slots = ArrayVec::new();
        match self {
            Self::Scalar(measure) => slots.push(measure),
            Self::Interval { lower, upper } => {
                slots.push(lower);
                slots.push(upper);
            }
        }
        slots
    }

    #[must_use]
    pub fn slot_count(self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Interval { .. } => 2,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(measure) => write!(f, "{measure}"),
            Self::Interval { lower, upper } => write!(f, "{lower} / {upper}"),
        }
    }
}
