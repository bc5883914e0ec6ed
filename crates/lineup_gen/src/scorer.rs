//! Bounded multiplicative noise applied to projections and ownership.

use rand::prelude::*;

/// Source of uniform draws used by the scorer.
pub trait NoiseSource {
    /// Uniform sample in `[low, high)`; `low < high` is guaranteed by callers
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

/// `NoiseSource` backed by a `rand` generator
#[derive(Debug, Clone)]
pub struct RngNoise<R = StdRng> {
    rng: R,
}

impl RngNoise<StdRng> {
    /// Seeded for reproducible batches, or from OS entropy when `seed` is `None`
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

impl<R: Rng> RngNoise<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NoiseSource for RngNoise<R> {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..high)
    }
}

/// Scales `value` by `1 + r` with `r` drawn uniformly from the half-open
/// interval `[-factor, factor)`.
///
/// The draw is taken on `[-1, 1)` and scaled afterwards, so any finite
/// `factor` is safe. A zero, negative or non-finite `factor` leaves the value
/// untouched and consumes no entropy.
pub fn perturb<N: NoiseSource + ?Sized>(noise: &mut N, value: f64, factor: f64) -> f64 {
    if !(factor.is_finite() && factor > 0.0) {
        return value;
    }
    value * (1.0 + factor * noise.uniform(-1.0, 1.0))
}
