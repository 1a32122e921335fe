//! Axis-aligned domain rectangle in the XY plane.

use serde::{Deserialize, Serialize};
use relief_types::{ReliefError, ReliefResult};

/// The rectangle `[min_x, max_x] × [min_y, max_y]` covered by a terrain.
///
/// Heights live on the Z axis; the bounds never change once a grid
/// has been laid out over them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl DomainBounds {
    /// Creates bounds without validating them. See [`DomainBounds::validate`].
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        Self { min_x, max_x, min_y, max_y }
    }

    /// Square bounds `[-half, half]²` centered at the origin.
    pub fn centered(half: f32) -> Self {
        Self::new(-half, half, -half, half)
    }

    /// Extent along X.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Extent along Y.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns true if `(x, y)` lies inside or on the rectangle.
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Checks that both extents are finite and strictly positive.
    ///
    /// Finite endpoints are not enough: `max - min` can still overflow.
    pub fn validate(&self) -> ReliefResult<()> {
        let all_finite = [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ReliefError::InvalidDomain(format!(
                "bounds must be finite, got {self:?}"
            )));
        }
        if self.min_x >= self.max_x {
            return Err(ReliefError::InvalidDomain(format!(
                "min_x ({}) must be less than max_x ({})",
                self.min_x, self.max_x
            )));
        }
        if self.min_y >= self.max_y {
            return Err(ReliefError::InvalidDomain(format!(
                "min_y ({}) must be less than max_y ({})",
                self.min_y, self.max_y
            )));
        }
        if !(self.width().is_finite() && self.height().is_finite()) {
            return Err(ReliefError::InvalidDomain(format!(
                "extent overflows f32: width {}, height {}",
                self.width(),
                self.height()
            )));
        }
        Ok(())
    }
}

impl Default for DomainBounds {
    fn default() -> Self {
        Self::centered(50.0)
    }
}
