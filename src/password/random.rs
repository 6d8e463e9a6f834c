use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

/// Source of uniform indices for sampling the character pool
pub trait IndexSource {
    /// Returns an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Index source backed by a `rand` generator
pub struct RandomIndex<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomIndex<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomIndex<OsRng> {
    pub fn os() -> Self {
        Self::new(OsRng::default())
    }
}

impl RandomIndex<StdRng> {
    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> IndexSource for RandomIndex<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_bounds() {
        let mut source = RandomIndex::os();

        for bound in 1..80 {
            assert!(source.next_index(bound) < bound);
        }
    }

    #[test]
    fn single_slot() {
        let mut source = RandomIndex::seeded(7);

        for _ in 0..16 {
            assert_eq!(source.next_index(1), 0);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RandomIndex::seeded(42);
        let mut b = RandomIndex::seeded(42);

        let a: Vec<usize> = (0..32).map(|_| a.next_index(75)).collect();
        let b: Vec<usize> = (0..32).map(|_| b.next_index(75)).collect();

        assert_eq!(a, b);
    }
}
