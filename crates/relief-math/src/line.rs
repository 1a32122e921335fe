//! Fault lines.
//!
//! A fault is a vertical plane through the terrain. Because its normal
//! has no Z component, every query reduces to the 2-D line where the
//! plane meets the XY plane.

use glam::Vec2;

/// An infinite line through `point` with normal `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaultLine {
    /// A point on the line.
    pub point: Vec2,
    /// Line normal. Points toward the side that gets raised.
    pub normal: Vec2,
}

impl FaultLine {
    pub fn new(point: Vec2, normal: Vec2) -> Self {
        Self { point, normal }
    }

    /// Builds a line whose normal is the unit vector at `angle` radians.
    pub fn from_angle(point: Vec2, angle: f32) -> Self {
        Self::new(point, Vec2::new(angle.cos(), angle.sin()))
    }

    /// Signed side test: `dot(b - p, n)`.
    ///
    /// Positive on the side the normal points to, negative on the other,
    /// exactly zero on the line.
    #[inline]
    pub fn side(&self, x: f32, y: f32) -> f32 {
        (Vec2::new(x, y) - self.point).dot(self.normal)
    }

    /// Perpendicular distance from `(x, y)` to the line.
    ///
    /// Uses the implicit form `nx*x + ny*y + c = 0` with
    /// `c = -(ny*py + nx*px)`, divided by `|n|` so that a non-unit
    /// normal still yields a true distance.
    #[inline]
    pub fn distance(&self, x: f32, y: f32) -> f32 {
        let n = self.normal;
        let c = -(n.y * self.point.y + n.x * self.point.x);
        (n.x * x + n.y * y + c).abs() / (n.x * n.x + n.y * n.y).sqrt()
    }
}
