use derive_more::DebugCustom;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

/// A dynamically dispatched, thread-safe wrapper for any type that implements [`rand::RngCore`].
#[derive(DebugCustom, Clone)]
#[debug(fmt = "Random")]
pub struct Random(Arc<Mutex<dyn RngCore + Send + 'static>>);

impl Random {
    /// Constructs [`Random`] from any type that implements [`rand::RngCore`].
    pub fn new<R: RngCore + Send + 'static>(rng: R) -> Self {
        Random(Arc::new(Mutex::new(rng)))
    }

    /// Constructs a reproducible [`Random`] from a seed.
    pub fn seeded(seed: u64) -> Self {
        Random::new(StdRng::seed_from_u64(seed))
    }

    /// Uniformly samples an index in the range `0..n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn sample(&self, n: usize) -> usize {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..n)
    }
}

/// Initializes a [`rand::rngs::StdRng`] seeded by [system entropy].
///
/// [system entropy]: rand::rngs::StdRng::from_entropy
impl Default for Random {
    fn default() -> Self {
        Random::new(StdRng::from_entropy())
    }
}
