//! Domain recipes.
//!
//! Every generator owns a fresh [`SeededRandom`](crate::core::rng::SeededRandom)
//! and draws from it in a fixed order; the order of draws inside each module
//! is as much a part of the output as the palette.

pub mod education;
pub mod regulatory;
pub mod safety;
pub mod social;

use crate::core::svg::{NoiseSpec, RadialAccent};
use crate::domain::model::{Domain, Seed};

/// A value drawn as `min + r * span`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f64,
    pub span: f64,
}

impl Span {
    pub const fn new(min: f64, span: f64) -> Self {
        Self { min, span }
    }

    pub fn sample(&self, r: f64) -> f64 {
        self.min + r * self.span
    }

    /// Supremum of the drawn values (never reached, `r < 1`).
    pub fn max(&self) -> f64 {
        self.min + self.span
    }
}

/// A count drawn as `min + floor(r * span)`, i.e. `min..=min + span - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub span: u32,
}

impl CountRange {
    pub const fn new(min: u32, span: u32) -> Self {
        Self { min, span }
    }

    pub fn sample(&self, r: f64) -> u32 {
        self.min + (r * f64::from(self.span)).floor() as u32
    }

    pub fn max(&self) -> u32 {
        self.min + self.span - 1
    }

    pub fn contains(&self, count: u32) -> bool {
        (self.min..=self.max()).contains(&count)
    }
}

/// Rotation drawn as `(r - 0.5) * spread`, so within `±spread / 2` degrees.
pub fn sample_rotation(spread: f64, r: f64) -> f64 {
    (r - 0.5) * spread
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
    pub accent: Option<RadialAccent>,
    pub shape_fill: &'static str,
    pub secondary_fill: Option<&'static str>,
}

/// Fixed recipe of one domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternSpec {
    pub palette: Palette,
    pub noise: NoiseSpec,
    pub texture_opacity: &'static str,
    pub shapes: CountRange,
    pub curves: Option<CountRange>,
    pub opacity: Span,
    pub rotation_spread: Option<f64>,
}

impl Domain {
    pub fn pattern_spec(self) -> &'static PatternSpec {
        match self {
            Domain::Safety => &safety::RECIPE,
            Domain::Regulatory => &regulatory::RECIPE,
            Domain::Social => &social::RECIPE,
            Domain::Education => &education::RECIPE,
        }
    }

    /// Renders this domain's recipe. Each call constructs its own RNG.
    pub fn generate(self, seed: Seed, width: f64, height: f64) -> String {
        match self {
            Domain::Safety => safety::generate(seed, width, height),
            Domain::Regulatory => regulatory::generate(seed, width, height),
            Domain::Social => social::generate(seed, width, height),
            Domain::Education => education::generate(seed, width, height),
        }
    }
}
