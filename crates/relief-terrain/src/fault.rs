//! Fault displacement.
//!
//! Every iteration draws a fault line and moves each vertex vertically:
//! up on the side the fault normal points to, down on the other side,
//! untouched when exactly on the line. The move is scaled by a smooth
//! falloff of the vertex's distance to the line,
//!
//! ```text
//! w(d) = (1 - (d / R)^2)^2   for d < R
//! w(d) = 0                   otherwise
//! ```
//!
//! where `R` is half the domain width. After each iteration the step
//! `delta` is divided by `2^H`, so later faults add finer detail.
//!
//! Iterations are strictly sequential: each reads the heights the
//! previous one wrote. Only Z is ever written.

use relief_math::{DomainBounds, FaultLine};
use relief_telemetry::{EventBus, EventKind, GenerationEvent, Stage};
use relief_types::constants::FALLOFF_RADIUS_FRACTION;

use crate::config::FaultConfig;
use crate::source::FaultSource;

/// Outcome of one fault iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaultStep {
    /// Vertices moved up.
    pub raised: u32,
    /// Vertices moved down.
    pub lowered: u32,
}

/// Applies a configured sequence of faults to a height field.
#[derive(Debug, Clone)]
pub struct FaultSculptor {
    config: FaultConfig,
    bounds: DomainBounds,
    radius: f32,
}

impl FaultSculptor {
    /// Creates a sculptor for terrains spanning `bounds`.
    ///
    /// The falloff radius is fixed here for the whole run.
    pub fn new(config: FaultConfig, bounds: DomainBounds) -> Self {
        let radius = FALLOFF_RADIUS_FRACTION * bounds.width();
        Self {
            config,
            bounds,
            radius,
        }
    }

    /// Distance beyond which a fault has no effect.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Runs all configured iterations over interleaved `positions`.
    ///
    /// Emits one [`EventKind::FaultApplied`] per iteration on `bus`.
    /// Returns the step size the next iteration would have used.
    pub fn sculpt(
        &self,
        positions: &mut [f32],
        source: &mut dyn FaultSource,
        bus: Option<&EventBus>,
    ) -> f32 {
        let decay = 2.0f32.powf(self.config.falloff_exponent);
        let mut delta = self.config.initial_delta;

        for iteration in 0..self.config.iterations {
            let fault = source.next_fault(&self.bounds);
            let step = self.apply(positions, &fault, delta);

            if let Some(bus) = bus {
                bus.emit(GenerationEvent::new(
                    Stage::Sculpt,
                    EventKind::FaultApplied {
                        iteration,
                        delta,
                        raised: step.raised,
                        lowered: step.lowered,
                    },
                ));
            }

            delta /= decay;
            if iteration % 10 == 0 {
                tracing::debug!(iteration, delta, "fault step decayed");
            }
        }

        delta
    }

    /// Applies a single fault with step `delta`.
    pub fn apply(&self, positions: &mut [f32], fault: &FaultLine, delta: f32) -> FaultStep {
        let mut step = FaultStep::default();

        for v in positions.chunks_exact_mut(3) {
            let side = fault.side(v[0], v[1]);
            if side == 0.0 {
                continue;
            }

            let scaled = delta * falloff(fault.distance(v[0], v[1]), self.radius);
            if scaled == 0.0 {
                continue;
            }

            // A negative delta flips which side goes up.
            let shift = if side > 0.0 { scaled } else { -scaled };
            v[2] += shift;
            if shift > 0.0 {
                step.raised += 1;
            } else {
                step.lowered += 1;
            }
        }

        step
    }
}

/// Smooth falloff weight: `1` on the line, `0` at and beyond `radius`.
#[inline]
pub fn falloff(distance: f32, radius: f32) -> f32 {
    if distance >= radius {
        return 0.0;
    }
    let t = distance / radius;
    let s = 1.0 - t * t;
    s * s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falloff_endpoints() {
        assert_eq!(falloff(0.0, 2.0), 1.0);
        assert_eq!(falloff(2.0, 2.0), 0.0);
        assert_eq!(falloff(7.5, 2.0), 0.0);
    }

    #[test]
    fn falloff_midpoint() {
        // t = 0.5 → (1 - 0.25)^2
        assert!((falloff(1.0, 2.0) - 0.5625).abs() < 1e-7);
    }

    #[test]
    fn falloff_is_monotone() {
        let mut prev = falloff(0.0, 1.0);
        for k in 1..=100 {
            let w = falloff(k as f32 * 0.01, 1.0);
            assert!(w <= prev);
            prev = w;
        }
    }

    #[test]
    fn radius_is_half_width() {
        let sculptor = FaultSculptor::new(FaultConfig::default(), DomainBounds::new(0.0, 8.0, 0.0, 2.0));
        assert_eq!(sculptor.radius(), 4.0);
    }
}
