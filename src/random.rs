use rand::Rng;

const MULTIPLIER_A: i64 = 1103515245;
const INCREMENT_C: i64 = 12345;
const DEFAULT_SEED: i64 = 3819201;

/// Source of uniform choices for randomized opponents.
///
/// The minimax search itself is fully deterministic; this trait only backs the
/// baseline players used by demos and tests.
pub trait RandomGenerator {
    /// Returns an index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Picks a uniformly random element from a non-empty slice.
    fn pick<'a, K>(&mut self, items: &'a [K]) -> &'a K {
        &items[self.next_index(items.len())]
    }
}

/// A generator backed by the thread-local RNG.
#[derive(Default)]
pub struct StandardRandomGenerator;

impl RandomGenerator for StandardRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// A seeded linear congruential generator for reproducible games.
pub struct SeededRandomGenerator {
    seed: i64,
}

impl SeededRandomGenerator {
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }

    fn next(&mut self) -> i64 {
        self.seed = (self.seed * MULTIPLIER_A + INCREMENT_C) % (i32::MAX as i64);
        self.seed
    }
}

impl Default for SeededRandomGenerator {
    fn default() -> Self {
        SeededRandomGenerator::new(DEFAULT_SEED)
    }
}

impl RandomGenerator for SeededRandomGenerator {
    fn next_index(&mut self, len: usize) -> usize {
        (self.next() % len as i64).unsigned_abs() as usize
    }
}
