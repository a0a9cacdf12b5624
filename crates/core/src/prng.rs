//! Injected randomness for the sketches.
//!
//! Every random decision a sketch makes goes through a [`RandomSource`], so a
//! run is fully reproducible from its seed. [`Xorshift64`] is the production
//! generator; [`Replay`] plays back a fixed list of draws for tests.

/// A uniform random source in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next uniformly distributed value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a uniformly distributed value in `[min, max)`.
    fn next_range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Uses the standard shift parameters (13, 7, 17). Seed of 0 is replaced with
/// a non-zero fallback to avoid the all-zeros fixed point.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }
}

impl RandomSource for Xorshift64 {
    /// Upper 53 bits of `next_u64()` divided by 2^53.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Plays back a fixed sequence of draws, cycling when exhausted.
///
/// An empty sequence behaves as a constant `0.0`. Values are clamped into
/// `[0, 1)` so a replay can never break the `RandomSource` contract.
#[derive(Debug, Clone)]
pub struct Replay {
    values: Vec<f64>,
    cursor: usize,
    draws: usize,
}

impl Replay {
    const MAX_BELOW_ONE: f64 = 1.0 - f64::EPSILON;

    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// A replay that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for Replay {
    fn next_f64(&mut self) -> f64 {
        self.draws += 1;
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        v.clamp(0.0, Self::MAX_BELOW_ONE)
    }
}
