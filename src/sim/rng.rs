//! Injectable randomness for power-up triggers
//!
//! The simulation only ever needs two kinds of draws, so the source is a
//! tiny trait: seeded PCG for real runs, constants for tests.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the uniform draws the integrator consumes
pub trait RandomSource {
    /// Uniform in [0, 1)
    fn unit(&mut self) -> f32;
    /// Uniform angle in [0, 2π)
    fn angle(&mut self) -> f32;
}

/// Reproducible PCG-backed source
#[derive(Debug, Clone)]
pub struct SeededSource {
    seed: u64,
    rng: Pcg32,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Underlying generator (for driver-side draws such as initial placement)
    pub fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

impl RandomSource for SeededSource {
    fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    fn angle(&mut self) -> f32 {
        let theta = self.rng.random_range(0.0..TAU);
        // Float rounding can land exactly on the upper bound
        if theta < TAU { theta } else { 0.0 }
    }
}

/// Returns the same draws every time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedSource {
    pub unit: f32,
    pub angle: f32,
}

impl FixedSource {
    /// Draws that always trigger a power-up, boosting along +x
    pub const ALWAYS: Self = Self {
        unit: 0.0,
        angle: 0.0,
    };
    /// Draws that never trigger a power-up
    pub const NEVER: Self = Self {
        unit: 0.999_999,
        angle: 0.0,
    };
}

impl RandomSource for FixedSource {
    fn unit(&mut self) -> f32 {
        self.unit
    }

    fn angle(&mut self) -> f32 {
        self.angle
    }
}
