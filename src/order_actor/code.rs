use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Draws `ORD-<n>` labels with `n` uniform in `0..upper_bound`.
///
/// Seeded once; uniqueness is enforced by the ledger, which redraws on collision.
pub struct OrderCodeGenerator {
    rng: StdRng,
    upper_bound: u32,
}

impl OrderCodeGenerator {
    pub const DEFAULT_UPPER_BOUND: u32 = 100_000;

    pub fn new(upper_bound: u32) -> Self {
        Self::with_rng(StdRng::from_os_rng(), upper_bound)
    }

    /// Deterministic sequence, for tests and reproducible runs.
    pub fn seeded(upper_bound: u32, seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), upper_bound)
    }

    fn with_rng(rng: StdRng, upper_bound: u32) -> Self {
        Self {
            rng,
            upper_bound: upper_bound.max(1),
        }
    }

    pub fn generate(&mut self) -> String {
        format!("ORD-{}", self.rng.random_range(0..self.upper_bound))
    }
}

impl Default for OrderCodeGenerator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_UPPER_BOUND)
    }
}
