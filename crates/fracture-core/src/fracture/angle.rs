//! Sources of rotation angles for the fracture sampler.
//!
//! The sampler never touches a global generator. Callers pass an
//! [`AngleSource`]: [`RandomAngles`] for real runs, [`FixedAngles`] when the
//! output has to be reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest angle that can be drawn (inclusive).
pub const MIN_ANGLE: i32 = 10;

/// Upper bound for drawn angles (exclusive).
pub const MAX_ANGLE: i32 = 360;

/// Supplies integer rotation angles, one per draw.
pub trait AngleSource {
    fn next_angle(&mut self) -> i32;
}

impl<A: AngleSource + ?Sized> AngleSource for &mut A {
    fn next_angle(&mut self) -> i32 {
        (**self).next_angle()
    }
}

/// Uniform draws from `[MIN_ANGLE, MAX_ANGLE)`.
#[derive(Debug, Clone)]
pub struct RandomAngles<R = StdRng> {
    rng: R,
}

impl RandomAngles<StdRng> {
    /// Seed from OS entropy. Output differs from run to run.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Seed deterministically.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomAngles<R> {
    /// Draw from any caller-supplied generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> AngleSource for RandomAngles<R> {
    fn next_angle(&mut self) -> i32 {
        self.rng.gen_range(MIN_ANGLE..MAX_ANGLE)
    }
}

/// Replays a fixed sequence of angles, starting over when it runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedAngles {
    angles: Vec<i32>,
    cursor: usize,
}

impl FixedAngles {
    /// Returns `None` for an empty sequence.
    pub fn new(angles: Vec<i32>) -> Option<Self> {
        if angles.is_empty() {
            return None;
        }
        Some(Self { angles, cursor: 0 })
    }

    /// A source that always yields `angle`.
    pub fn constant(angle: i32) -> Self {
        Self {
            angles: vec![angle],
            cursor: 0,
        }
    }

    /// Number of angles handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl AngleSource for FixedAngles {
    fn next_angle(&mut self) -> i32 {
        let angle = self.angles[self.cursor % self.angles.len()];
        self.cursor += 1;
        angle
    }
}
