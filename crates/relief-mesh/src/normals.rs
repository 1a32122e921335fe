//! Vertex normal computation from triangle mesh data.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use relief_math::Vec3;
use relief_types::{ReliefError, ReliefResult};

/// Computes one unit normal per vertex (area-weighted).
///
/// Each triangle contributes `0.5 * cross(v1 - v0, v2 - v0)` — a vector
/// whose length is the triangle's area — to all three of its vertices.
/// The sums are then normalized, so large triangles pull the normal
/// harder than small ones.
///
/// `positions` is interleaved `[x, y, z, ...]`; the result uses the same
/// layout and index space.
///
/// # Errors
/// [`ReliefError::DegenerateNormal`] for the first vertex whose sum is
/// exactly zero (or non-finite), including vertices no triangle touches.
/// [`ReliefError::InvalidMesh`] if an index is out of range.
pub fn estimate_normals(positions: &[f32], indices: &[u32]) -> ReliefResult<Vec<f32>> {
    let n = positions.len() / 3;
    let mut accum = vec![Vec3::ZERO; n];

    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        if a >= n || b >= n || c >= n {
            return Err(ReliefError::InvalidMesh(format!(
                "triangle [{a}, {b}, {c}] references a vertex outside 0..{n}"
            )));
        }

        let v0 = vertex(positions, a);
        let left = vertex(positions, b) - v0;
        let right = vertex(positions, c) - v0;
        let face = left.cross(right) * 0.5;

        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    let mut normals = Vec::with_capacity(n * 3);
    for (i, sum) in accum.iter().enumerate() {
        // Rescale first: squaring large components overflows f32.
        let scale = sum.abs().max_element();
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(ReliefError::DegenerateNormal { vertex: i as u32 });
        }
        let unit = (*sum / scale).normalize();
        normals.extend_from_slice(&[unit.x, unit.y, unit.z]);
    }

    Ok(normals)
}

#[inline]
fn vertex(positions: &[f32], i: usize) -> Vec3 {
    Vec3::new(positions[i * 3], positions[i * 3 + 1], positions[i * 3 + 2])
}
