use crate::domain::model::Seed;

pub const MULTIPLIER: u64 = 9301;
pub const INCREMENT: u64 = 49297;
pub const MODULUS: u64 = 233_280;

/// Linear congruential generator used for visual variation only.
///
/// The constants are a compatibility contract with previously published
/// artwork: changing any of them changes every generated image. Each
/// generation call owns its own instance.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    pub fn new(seed: Seed) -> Self {
        Self { state: seed.value() }
    }

    /// Advances the state and returns a value in `[0, 1)`.
    pub fn next(&mut self) -> f64 {
        // same residue as (state * a + c) mod m, without overflow for large seeds
        self.state = ((self.state % MODULUS) * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }
}
