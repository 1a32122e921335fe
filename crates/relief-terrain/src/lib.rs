//! # relief-terrain
//!
//! Fault-based terrain synthesis.
//!
//! A flat grid is displaced by a sequence of random vertical faults:
//! each fault raises everything on one side of a line and lowers the
//! other side, with a smooth falloff away from the line and a step size
//! that decays every iteration. Normals are estimated once the heights
//! are final.
//!
//! ## Pipeline
//!
//! ```text
//! flat_grid → FaultSculptor::sculpt → estimate_normals → TerrainMesh
//! ```
//!
//! [`build_terrain`] runs all of it from a [`TerrainConfig`].

pub mod builder;
pub mod config;
pub mod fault;
pub mod source;

pub use builder::{build_terrain, build_terrain_with};
pub use config::{FaultConfig, TerrainConfig};
pub use fault::FaultSculptor;
pub use source::{FaultSource, ScriptedFaultSource, SeededFaultSource};
