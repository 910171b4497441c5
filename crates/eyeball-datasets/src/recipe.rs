use rand::Rng;
use rand_distr::StandardNormal;

/// A named sample generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Recipe {
    pub label: &'static str,
    pub tip: &'static str,
    pub shape: Shape,
}

/// Distribution family and parameters of a generated sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Normal {
        mean: f64,
        std_dev: f64,
        len: usize,
    },
    /// Normal values bent by a quadratic term, rescaled to `10..=140`.
    ///
    /// Positive `skew` gives a right tail, negative a left tail.
    Skewed {
        mean: f64,
        std_dev: f64,
        skew: f64,
        len: usize,
    },
    /// Even mixture of two normal distributions, as `(mean, std_dev)`.
    Bimodal {
        first: (f64, f64),
        second: (f64, f64),
        len: usize,
    },
    Uniform {
        max: f64,
        len: usize,
    },
    /// Normal bulk followed by fixed extreme values.
    WithOutliers {
        mean: f64,
        std_dev: f64,
        len: usize,
        outliers: &'static [f64],
    },
}

const SKEWED_MIN: f64 = 10.0;
const SKEWED_SPAN: f64 = 130.0;

fn normal<R: Rng>(rng: &mut R, mean: f64, std_dev: f64) -> f64 {
    let z: f64 = rng.sample(StandardNormal);
    mean + z * std_dev
}

impl Shape {
    /// Number of values [`Shape::sample`] produces.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Normal { len, .. }
            | Self::Skewed { len, .. }
            | Self::Bimodal { len, .. }
            | Self::Uniform { len, .. } => *len,
            Self::WithOutliers { len, outliers, .. } => len + outliers.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Vec<f64> {
        match *self {
            Self::Normal { mean, std_dev, len } => {
                (0..len).map(|_| normal(rng, mean, std_dev)).collect()
            }
            Self::Skewed {
                mean,
                std_dev,
                skew,
                len,
            } => {
                let bent = (0..len)
                    .map(|_| bend(normal(rng, mean, std_dev), skew))
                    .collect::<Vec<_>>();
                rescale(&bent, SKEWED_MIN, SKEWED_SPAN)
            }
            Self::Bimodal { first, second, len } => (0..len)
                .map(|_| {
                    let (mean, std_dev) = if rng.random::<f64>() < 0.5 {
                        first
                    } else {
                        second
                    };
                    normal(rng, mean, std_dev)
                })
                .collect(),
            Self::Uniform { max, len } => (0..len).map(|_| rng.random::<f64>() * max).collect(),
            Self::WithOutliers {
                mean,
                std_dev,
                len,
                outliers,
            } => (0..len)
                .map(|_| normal(rng, mean, std_dev))
                .chain(outliers.iter().copied())
                .collect(),
        }
    }
}

fn bend(value: f64, skew: f64) -> f64 {
    value + skew.signum() * value.powi(2) * skew.abs()
}

/// Linearly maps `values` onto `[start, start + span]`.
fn rescale(values: &[f64], start: f64, span: f64) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };
    values
        .iter()
        .map(|value| start + (value - min) / range * span)
        .collect()
}

/// The samples a game cycles through, in round order.
pub const RECIPES: [Recipe; 10] = [
    Recipe {
        label: "Normal",
        tip: "Symmetric data: the mean and the median sit together in the middle.",
        shape: Shape::Normal {
            mean: 75.0,
            std_dev: 15.0,
            len: 150,
        },
    },
    Recipe {
        label: "Right-skewed",
        tip: "A long right tail pulls the mean above the median.",
        shape: Shape::Skewed {
            mean: 50.0,
            std_dev: 20.0,
            skew: 0.8,
            len: 200,
        },
    },
    Recipe {
        label: "Left-skewed",
        tip: "A long left tail drags the mean below the median.",
        shape: Shape::Skewed {
            mean: 100.0,
            std_dev: 20.0,
            skew: -0.8,
            len: 180,
        },
    },
    Recipe {
        label: "Bimodal",
        tip: "With two clusters the mean can land where there is almost no data.",
        shape: Shape::Bimodal {
            first: (50.0, 10.0),
            second: (100.0, 10.0),
            len: 200,
        },
    },
    Recipe {
        label: "Uniform",
        tip: "Flat data spreads its percentiles evenly across the range.",
        shape: Shape::Uniform {
            max: 150.0,
            len: 200,
        },
    },
    Recipe {
        label: "Outliers",
        tip: "A few extreme values move the mean but barely touch the median.",
        shape: Shape::WithOutliers {
            mean: 50.0,
            std_dev: 5.0,
            len: 120,
            outliers: &[1.0, 149.0, 2.0, 148.0],
        },
    },
    Recipe {
        label: "Steep right skew",
        tip: "The steeper the tail, the further P99 sits from the bulk of the data.",
        shape: Shape::Skewed {
            mean: 40.0,
            std_dev: 15.0,
            skew: 0.9,
            len: 150,
        },
    },
    Recipe {
        label: "Steep left skew",
        tip: "With a left tail the high percentiles crowd up against the maximum.",
        shape: Shape::Skewed {
            mean: 110.0,
            std_dev: 15.0,
            skew: -0.9,
            len: 160,
        },
    },
    Recipe {
        label: "Low variance",
        tip: "Tightly packed data makes the one standard deviation band narrow.",
        shape: Shape::Normal {
            mean: 75.0,
            std_dev: 5.0,
            len: 250,
        },
    },
    Recipe {
        label: "High variance",
        tip: "Widely spread data stretches the one standard deviation band.",
        shape: Shape::Normal {
            mean: 75.0,
            std_dev: 30.0,
            len: 100,
        },
    },
];

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_len_matches_sample() {
        let mut rng = Pcg32::seed_from_u64(3);
        for recipe in &RECIPES {
            assert_eq!(recipe.shape.sample(&mut rng).len(), recipe.shape.len(), "{}", recipe.label);
        }
    }

    #[test]
    fn test_skewed_is_rescaled() {
        let values = RECIPES[1].shape.sample(&mut Pcg32::seed_from_u64(5));
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!((min - 10.0).abs() < 1e-9);
        assert!((max - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_bend_direction() {
        assert!(bend(120.0, 0.8) > bend(80.0, 0.8));
        assert!(bend(120.0, -0.8) < bend(80.0, -0.8));
    }

    #[test]
    fn test_outliers_are_appended() {
        let values = RECIPES[5].shape.sample(&mut Pcg32::seed_from_u64(9));
        assert_eq!(values[120..], [1.0, 149.0, 2.0, 148.0]);
    }

    #[test]
    fn test_rescale_degenerate() {
        assert_eq!(rescale(&[4.0, 4.0], 10.0, 130.0), [10.0, 10.0]);
    }
}
