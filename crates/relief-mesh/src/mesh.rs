//! The finished terrain mesh.
//!
//! Buffers are interleaved and flat:
//! - `positions: [x0, y0, z0, x1, y1, z1, ...]`
//! - `normals:   [nx0, ny0, nz0, ...]` (same index space)
//! - `indices:   [t0v0, t0v1, t0v2, ...]`
//! - `edges:     [e0a, e0b, e1a, e1b, ...]`
//!
//! Triangles and edges reference vertices by index only. Nothing is
//! mutated after assembly; every accessor hands out a read-only view.

use relief_math::{DomainBounds, Vec3};
use relief_types::{ReliefError, ReliefResult};

use crate::grid::Grid;
use crate::topology::edge_list;

/// A sculpted terrain ready for rendering.
#[derive(Debug, Clone)]
pub struct TerrainMesh {
    divisions: u32,
    bounds: DomainBounds,
    positions: Vec<f32>,
    normals: Vec<f32>,
    indices: Vec<u32>,
    edges: Vec<u32>,
    min_elevation: f32,
    max_elevation: f32,
}

impl TerrainMesh {
    /// Takes ownership of a sculpted grid and its normals.
    ///
    /// Derives the wireframe edge list and caches the elevation range,
    /// then checks the buffer invariants.
    pub fn assemble(grid: Grid, normals: Vec<f32>) -> ReliefResult<Self> {
        let edges = edge_list(&grid.indices);
        let (min_elevation, max_elevation) = elevation_range(&grid.positions);

        let mesh = Self {
            divisions: grid.divisions,
            bounds: grid.bounds,
            positions: grid.positions,
            normals,
            indices: grid.indices,
            edges,
            min_elevation,
            max_elevation,
        };
        mesh.validate()?;
        Ok(mesh)
    }

    /// Cells per side of the underlying grid.
    #[inline]
    pub fn divisions(&self) -> u32 {
        self.divisions
    }

    /// Domain rectangle the mesh spans.
    #[inline]
    pub fn bounds(&self) -> DomainBounds {
        self.bounds
    }

    /// Interleaved vertex positions.
    #[inline]
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Interleaved unit vertex normals.
    #[inline]
    pub fn normals(&self) -> &[f32] {
        &self.normals
    }

    /// Flat triangle index buffer.
    #[inline]
    pub fn triangle_indices(&self) -> &[u32] {
        &self.indices
    }

    /// Flat line-list index buffer for wireframe drawing.
    #[inline]
    pub fn edge_indices(&self) -> &[u32] {
        &self.edges
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Position of vertex `i`.
    #[inline]
    pub fn vertex(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    /// Normal of vertex `i`.
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.normals[i * 3..i * 3 + 3])
    }

    /// The three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Lowest Z over all vertices.
    #[inline]
    pub fn min_elevation(&self) -> f32 {
        self.min_elevation
    }

    /// Highest Z over all vertices.
    #[inline]
    pub fn max_elevation(&self) -> f32 {
        self.max_elevation
    }

    /// Height of vertex `i` rescaled to `[0, 1]` over the elevation range.
    ///
    /// A perfectly flat mesh maps every vertex to `0`.
    pub fn normalized_elevation(&self, i: usize) -> f32 {
        let span = self.max_elevation - self.min_elevation;
        if span <= 0.0 {
            return 0.0;
        }
        (self.positions[i * 3 + 2] - self.min_elevation) / span
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Buffer lengths match `(div+1)^2` vertices and `2*div^2` triangles
    /// - Normals cover every vertex
    /// - Triangle and edge indices are within bounds
    pub fn validate(&self) -> ReliefResult<()> {
        let side = self.divisions as usize + 1;
        let expected_vertices = side * side;
        let expected_tris = 2 * self.divisions as usize * self.divisions as usize;

        if self.positions.len() != 3 * expected_vertices {
            return Err(ReliefError::InvalidMesh(format!(
                "position buffer holds {} floats, expected {}",
                self.positions.len(),
                3 * expected_vertices
            )));
        }
        if self.normals.len() != self.positions.len() {
            return Err(ReliefError::InvalidMesh(format!(
                "normal buffer length ({}) != position buffer length ({})",
                self.normals.len(),
                self.positions.len()
            )));
        }
        if self.indices.len() != 3 * expected_tris {
            return Err(ReliefError::InvalidMesh(format!(
                "index buffer holds {} entries, expected {}",
                self.indices.len(),
                3 * expected_tris
            )));
        }
        if self.edges.len() != 2 * self.indices.len() {
            return Err(ReliefError::InvalidMesh(format!(
                "edge buffer holds {} entries, expected {}",
                self.edges.len(),
                2 * self.indices.len()
            )));
        }

        let n = self.vertex_count();
        for (i, &idx) in self.indices.iter().chain(self.edges.iter()).enumerate() {
            if idx as usize >= n {
                return Err(ReliefError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        Ok(())
    }

    /// Text dump of every buffer for debugging.
    ///
    /// One `v x y z` line per vertex, `n x y z` per normal and
    /// `f a b c` per triangle.
    pub fn buffer_listing(&self) -> String {
        let mut out = String::new();
        for v in self.positions.chunks_exact(3) {
            out.push_str(&format!("v {} {} {}\n", v[0], v[1], v[2]));
        }
        for n in self.normals.chunks_exact(3) {
            out.push_str(&format!("n {} {} {}\n", n[0], n[1], n[2]));
        }
        for f in self.indices.chunks_exact(3) {
            out.push_str(&format!("f {} {} {}\n", f[0], f[1], f[2]));
        }
        out
    }
}

/// `(min z, max z)` over interleaved positions.
fn elevation_range(positions: &[f32]) -> (f32, f32) {
    positions
        .chunks_exact(3)
        .map(|v| v[2])
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), z| {
            (lo.min(z), hi.max(z))
        })
}
