//! # relief-math
//!
//! Planar geometry primitives for the Relief terrain generator.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`)
//! - [`DomainBounds`] — the rectangle a terrain grid spans
//! - [`FaultLine`] — a vertical fault plane seen from above

pub mod bounds;
pub mod line;

pub use bounds::DomainBounds;
pub use line::FaultLine;

// Re-export glam types as the canonical math types for Relief.
pub use glam::{Vec2, Vec3};
