//! # relief-mesh
//!
//! Terrain mesh representation with flat, interleaved buffers ready
//! for upload to a vertex/index buffer.
//!
//! ## Key Types
//!
//! - [`TerrainMesh`] — The finished, read-only mesh. Owns positions,
//!   normals, triangle indices and wireframe edge indices.
//! - [`Grid`] — The flat lattice produced by [`grid::flat_grid`], whose
//!   heights are sculpted before it becomes a `TerrainMesh`.
//! - [`Topology`] — Incidence queries (vertex-to-triangle, unique edges).

pub mod grid;
pub mod mesh;
pub mod normals;
pub mod topology;

pub use grid::Grid;
pub use mesh::TerrainMesh;
pub use topology::Topology;
