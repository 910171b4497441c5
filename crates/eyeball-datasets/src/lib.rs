//! Seeded synthetic samples for the estimation game.
//!
//! [`generate`] turns a [`DatasetSeed`] into the fixed set of ten samples the
//! game cycles through. Every sample is clamped to [`VALUE_RANGE`] and carries
//! a label and an educational tip. [`scatter_jitter`] supplies the per-round
//! vertical offsets renderers use to spread points in a scatter strip.
//!
//! # Example
//!
//! ```
//! use eyeball_datasets::{DatasetSeed, generate};
//! use rand::Rng as _;
//!
//! let seed: DatasetSeed = rand::rng().random();
//! let datasets = generate(seed);
//! assert_eq!(datasets.len(), 10);
//! assert_eq!(datasets, generate(seed));
//! ```

use std::ops::RangeInclusive;

use eyeball_engine::{Dataset, DatasetCollection};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;

pub use self::{jitter::*, recipe::*, seed::*};

mod jitter;
mod recipe;
mod seed;

/// Every generated value lies in this range.
pub const VALUE_RANGE: RangeInclusive<f64> = 0.0..=150.0;

/// Generates all samples of [`RECIPES`] from `seed`, in order.
#[must_use]
pub fn generate(seed: DatasetSeed) -> Vec<Dataset> {
    let mut rng = Pcg32::from_seed(seed.to_bytes());
    RECIPES
        .iter()
        .map(|recipe| {
            let data = recipe
                .shape
                .sample(&mut rng)
                .into_iter()
                .map(|value| value.clamp(*VALUE_RANGE.start(), *VALUE_RANGE.end()))
                .collect();
            Dataset {
                label: recipe.label.to_owned(),
                tip: recipe.tip.to_owned(),
                data,
            }
        })
        .collect()
}

/// Like [`generate`], but ready to hand to a game session.
#[must_use]
pub fn collection(seed: DatasetSeed) -> DatasetCollection {
    DatasetCollection::new(generate(seed))
}
