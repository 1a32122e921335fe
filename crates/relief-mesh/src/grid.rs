//! Regular grid generation.
//!
//! Lays a `(div+1) × (div+1)` lattice of vertices over a domain
//! rectangle and splits every cell into two triangles with consistent
//! counter-clockwise winding (seen from +Z).

use relief_math::DomainBounds;
use relief_types::{ReliefError, ReliefResult};

/// A flat triangulated grid.
///
/// Positions are interleaved `[x0, y0, z0, x1, y1, z1, ...]` and indexed
/// row-major: `index(row, col) = row * (div + 1) + col`.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Cells per side.
    pub divisions: u32,
    /// Rectangle the grid spans.
    pub bounds: DomainBounds,
    /// Interleaved vertex positions.
    pub positions: Vec<f32>,
    /// Triangle indices, stored flat: `[t0v0, t0v1, t0v2, t1v0, ...]`.
    pub indices: Vec<u32>,
}

impl Grid {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Row-major vertex index of lattice point `(row, col)`.
#[inline]
pub fn vertex_index(divisions: u32, row: u32, col: u32) -> u32 {
    row * (divisions + 1) + col
}

/// Generates a flat grid with `divisions` cells along each axis.
///
/// Every vertex starts at `z = 0`. Cells are visited row-major and each
/// emits its lower-right triangle `(bot_left, bot_right, top_right)`
/// before its upper-left triangle `(bot_left, top_right, top_left)`.
///
/// # Errors
/// [`ReliefError::InvalidDomain`] if `divisions == 0`, the bounds are
/// empty or inverted, or the vertex count does not fit a `u32` index.
///
/// # Example
/// ```
/// use relief_math::DomainBounds;
/// use relief_mesh::grid::flat_grid;
/// let grid = flat_grid(2, DomainBounds::centered(1.0)).unwrap();
/// assert_eq!(grid.vertex_count(), 9);   // 3×3 vertices
/// assert_eq!(grid.triangle_count(), 8); // 2×2 cells × 2 tris each
/// ```
pub fn flat_grid(divisions: u32, bounds: DomainBounds) -> ReliefResult<Grid> {
    if divisions < 1 {
        return Err(ReliefError::InvalidDomain(format!(
            "divisions must be >= 1, got {divisions}"
        )));
    }
    bounds.validate()?;

    let side = divisions
        .checked_add(1)
        .and_then(|s| s.checked_mul(s))
        .ok_or_else(|| {
            ReliefError::InvalidDomain(format!(
                "{divisions} divisions overflow 32-bit vertex indices"
            ))
        })?;
    let vertex_count = side as usize;
    let tri_count = 2 * divisions as usize * divisions as usize;

    let delta_x = bounds.width() / divisions as f32;
    let delta_y = bounds.height() / divisions as f32;

    let mut positions = Vec::with_capacity(vertex_count * 3);
    for row in 0..=divisions {
        for col in 0..=divisions {
            positions.push(bounds.min_x + col as f32 * delta_x);
            positions.push(bounds.min_y + row as f32 * delta_y);
            positions.push(0.0);
        }
    }

    let mut indices = Vec::with_capacity(tri_count * 3);
    for row in 0..divisions {
        for col in 0..divisions {
            let bot_left = vertex_index(divisions, row, col);
            let bot_right = bot_left + 1;
            let top_left = vertex_index(divisions, row + 1, col);
            let top_right = top_left + 1;

            // Lower-right triangle
            indices.extend_from_slice(&[bot_left, bot_right, top_right]);
            // Upper-left triangle
            indices.extend_from_slice(&[bot_left, top_right, top_left]);
        }
    }

    tracing::debug!(divisions, vertex_count, tri_count, "flat grid generated");

    Ok(Grid {
        divisions,
        bounds,
        positions,
        indices,
    })
}
