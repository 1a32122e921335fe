//! Sources of fault lines.
//!
//! The sculptor never draws random numbers itself; it asks a
//! [`FaultSource`] for the next line. Seeded sources make whole builds
//! reproducible and scripted sources pin individual faults in tests.

use std::f32::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use relief_math::{DomainBounds, FaultLine, Vec2};
use relief_types::{ReliefError, ReliefResult};

/// Produces the fault line for each iteration.
pub trait FaultSource {
    /// Returns the next fault for a terrain spanning `bounds`.
    fn next_fault(&mut self, bounds: &DomainBounds) -> FaultLine;
}

/// Uniformly random faults from a seeded `ChaCha8Rng`.
///
/// The point is uniform over the domain rectangle and the normal is
/// uniform over the unit circle. Identical seeds give identical
/// sequences on every platform.
pub struct SeededFaultSource {
    rng: ChaCha8Rng,
}

impl SeededFaultSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl FaultSource for SeededFaultSource {
    fn next_fault(&mut self, bounds: &DomainBounds) -> FaultLine {
        let point = Vec2::new(
            self.rng.gen_range(bounds.min_x..bounds.max_x),
            self.rng.gen_range(bounds.min_y..bounds.max_y),
        );
        let angle = self.rng.gen_range(0.0..TAU);
        FaultLine::from_angle(point, angle)
    }
}

/// Replays a fixed list of faults, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedFaultSource {
    faults: Vec<FaultLine>,
    cursor: usize,
}

impl ScriptedFaultSource {
    /// # Errors
    /// [`ReliefError::InvalidConfig`] if `faults` is empty.
    pub fn new(faults: Vec<FaultLine>) -> ReliefResult<Self> {
        if faults.is_empty() {
            return Err(ReliefError::InvalidConfig(
                "scripted fault source needs at least one fault".into(),
            ));
        }
        Ok(Self { faults, cursor: 0 })
    }

    /// Number of faults handed out so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl FaultSource for ScriptedFaultSource {
    fn next_fault(&mut self, _bounds: &DomainBounds) -> FaultLine {
        let fault = self.faults[self.cursor % self.faults.len()];
        self.cursor += 1;
        fault
    }
}
