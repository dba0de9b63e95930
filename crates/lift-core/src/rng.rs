//! Deterministic RNG for the dispatcher's coin flips.
//!
//! Only the idle-routing tie between two equidistant calls is random.  A
//! seeded `SmallRng` keeps runs reproducible: the same seed and the same
//! event stream always produce the same commands.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Dispatcher-level RNG.
///
/// Used only from the single active event handler; never shared.
pub struct DispatchRng(SmallRng);

impl DispatchRng {
    pub fn new(seed: u64) -> Self {
        DispatchRng(SmallRng::seed_from_u64(seed))
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Pick one of two values with equal probability.
    #[inline]
    pub fn pick<T>(&mut self, a: T, b: T) -> T {
        if self.gen_bool(0.5) { a } else { b }
    }
}
