use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use crate::DatasetSeed;

/// Vertical scatter offsets for the points of one round.
///
/// Each value lies in `[-0.5, 0.5)`. The offsets depend only on `seed` and
/// the round number, so redrawing a round never makes its points jump.
#[must_use]
pub fn scatter_jitter(seed: DatasetSeed, round: usize, len: usize) -> Vec<f64> {
    let mut bytes = seed.to_bytes();
    let round = u64::try_from(round).unwrap_or(u64::MAX).to_be_bytes();
    for (byte, salt) in bytes[8..].iter_mut().zip(round) {
        *byte ^= salt;
    }
    let mut rng = Pcg32::from_seed(bytes);
    (0..len).map(|_| rng.random::<f64>() - 0.5).collect()
}
