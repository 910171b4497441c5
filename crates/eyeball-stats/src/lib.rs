//! Ground-truth statistics for the Eyeball estimation game.
//!
//! Every function in this crate is pure: inputs are never mutated, and
//! order-dependent measures work on a sorted copy of the data.
//!
//! - **Descriptive statistics**: mean, median and population standard deviation
//! - **Percentiles**: linear interpolation between closest ranks
//! - **Histogram generation**: equal-width binning over a fixed value range
//!
//! # Modules
//!
//! - [`descriptive`]: Central tendency and dispersion
//! - [`percentiles`]: Percentile computation and storage
//! - [`histogram`]: Equal-width frequency distributions for the chart
//!
//! # Input contract
//!
//! Samples handed to these functions must be non-empty. An empty sample is a
//! caller bug, not a recoverable condition: the scalar functions return `NaN`
//! for it and [`descriptive::DescriptiveStats::new`] returns `None`.
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use eyeball_stats::descriptive::{self, DescriptiveStats};
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(descriptive::mean(&values), 2.5);
//! assert_eq!(descriptive::median(&values), 2.5);
//!
//! let stats = DescriptiveStats::new(values).unwrap();
//! assert!((stats.std_dev - 1.25_f64.sqrt()).abs() < 1e-12);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use eyeball_stats::percentiles::{self, Percentiles};
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(percentiles::percentile(&values, 75.0), 3.25);
//!
//! let quartiles = Percentiles::new(&values, &[25.0, 50.0, 75.0]);
//! assert_eq!(quartiles.get(50.0), Some(2.5));
//! ```
//!
//! ## Creating a histogram
//!
//! ```
//! use eyeball_stats::histogram::Histogram;
//!
//! let values = [1.0, 2.0, 2.5, 9.0];
//! let histogram = Histogram::equal_width(&values, 4, 1.0, 9.0);
//! assert_eq!(histogram.counts(), vec![3, 0, 0, 1]);
//! ```

pub mod descriptive;
pub mod histogram;
pub mod percentiles;
