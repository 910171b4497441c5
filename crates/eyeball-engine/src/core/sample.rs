use eyeball_stats::{descriptive::DescriptiveStats, percentiles::Percentiles};
use serde::{Deserialize, Serialize};

use super::scale::ChartScale;

/// A dataset record as supplied by the dataset generator.
///
/// This is the only contract between the engine and the data source:
/// a label, an educational tip and a finite, non-empty list of values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    pub tip: String,
    pub data: Vec<f64>,
}

/// The immutable data of one round.
///
/// Summary statistics are computed once at construction; the values
/// themselves are never reordered.
#[derive(Debug, Clone)]
pub struct Sample {
    label: String,
    tip: String,
    values: Vec<f64>,
    stats: DescriptiveStats,
}

impl Sample {
    /// Creates a sample.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or contains a non-finite number. Both are
    /// violations of the dataset input contract.
    #[must_use]
    pub fn new(label: impl Into<String>, tip: impl Into<String>, values: Vec<f64>) -> Self {
        assert!(
            values.iter().all(|v| v.is_finite()),
            "sample values must be finite"
        );
        let stats =
            DescriptiveStats::new(values.iter().copied()).expect("sample must not be empty");
        Self {
            label: label.into(),
            tip: tip.into(),
            values,
            stats,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn tip(&self) -> &str {
        &self.tip
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> &DescriptiveStats {
        &self.stats
    }

    /// Value range of this sample for coordinate mapping.
    #[must_use]
    pub fn scale(&self) -> ChartScale {
        ChartScale::new(self.stats.min, self.stats.max)
    }

    /// Five-number summary drawn when the player asks for a hint.
    #[must_use]
    pub fn box_plot(&self) -> BoxPlot {
        let quartiles = Percentiles::new(&self.values, &[25.0, 75.0]);
        BoxPlot {
            min: self.stats.min,
            q1: quartiles.get(25.0).unwrap_or(self.stats.min),
            median: self.stats.median,
            q3: quartiles.get(75.0).unwrap_or(self.stats.max),
            max: self.stats.max,
        }
    }
}

impl From<Dataset> for Sample {
    fn from(dataset: Dataset) -> Self {
        Self::new(dataset.label, dataset.tip, dataset.data)
    }
}

/// Five-number summary of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPlot {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// The ordered pool of samples rounds are drawn from.
///
/// Round `n` of a playthrough (counting across sections) uses sample
/// `n % len`.
#[derive(Debug, Clone)]
pub struct DatasetCollection {
    samples: Vec<Sample>,
}

impl DatasetCollection {
    /// Builds a collection from dataset records.
    ///
    /// # Panics
    ///
    /// Panics if `datasets` is empty, or if any record violates the
    /// [`Sample::new`] contract.
    #[must_use]
    pub fn new<I>(datasets: I) -> Self
    where
        I: IntoIterator<Item = Dataset>,
    {
        let samples = datasets.into_iter().map(Sample::from).collect::<Vec<_>>();
        assert!(!samples.is_empty(), "dataset collection must not be empty");
        Self { samples }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample used for the given global round number.
    #[must_use]
    pub fn for_round(&self, round: usize) -> &Sample {
        &self.samples[round % self.samples.len()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter()
    }
}
