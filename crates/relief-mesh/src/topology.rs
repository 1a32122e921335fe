//! Mesh topology queries.
//!
//! Builds the wireframe edge list and adjacency data from the triangle
//! index buffer.

use std::collections::HashMap;

use relief_types::{ReliefError, ReliefResult};

/// Expands every triangle into its three edges `(v0,v1) (v1,v2) (v2,v0)`.
///
/// Edges shared by neighbouring triangles appear once per triangle; the
/// list is meant for line-list rendering, not for adjacency.
pub fn edge_list(indices: &[u32]) -> Vec<u32> {
    let mut edges = Vec::with_capacity(indices.len() * 2);
    for tri in indices.chunks_exact(3) {
        edges.extend_from_slice(&[tri[0], tri[1], tri[1], tri[2], tri[2], tri[0]]);
    }
    edges
}

/// Incidence information for a triangle index buffer.
#[derive(Debug, Clone)]
pub struct Topology {
    /// For each vertex, the list of triangles that contain it.
    pub vertex_triangles: Vec<Vec<u32>>,

    /// Unique undirected edges as `[v_min, v_max]`, sorted.
    pub edges: Vec<[u32; 2]>,

    /// For each entry of `edges`, the triangles sharing it.
    /// Boundary edges have exactly 1 adjacent triangle.
    pub edge_triangles: Vec<Vec<u32>>,
}

impl Topology {
    /// Build topology from flat triangle indices over `vertex_count` vertices.
    ///
    /// # Errors
    /// [`ReliefError::InvalidMesh`] if an index is `>= vertex_count`.
    pub fn build(indices: &[u32], vertex_count: usize) -> ReliefResult<Self> {
        let mut vertex_triangles: Vec<Vec<u32>> = vec![Vec::new(); vertex_count];
        let mut edge_map: HashMap<(u32, u32), Vec<u32>> = HashMap::new();

        for (t, tri) in indices.chunks_exact(3).enumerate() {
            let t = t as u32;
            for &v in tri {
                let incident = vertex_triangles.get_mut(v as usize).ok_or_else(|| {
                    ReliefError::InvalidMesh(format!(
                        "triangle {t} references vertex {v} outside 0..{vertex_count}"
                    ))
                })?;
                incident.push(t);
            }
            for (v0, v1) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
                let key = if v0 < v1 { (v0, v1) } else { (v1, v0) };
                edge_map.entry(key).or_default().push(t);
            }
        }

        let mut keyed: Vec<((u32, u32), Vec<u32>)> = edge_map.into_iter().collect();
        keyed.sort_unstable_by_key(|(key, _)| *key);

        let (edges, edge_triangles): (Vec<[u32; 2]>, Vec<Vec<u32>>) = keyed
            .into_iter()
            .map(|((v0, v1), tris)| ([v0, v1], tris))
            .unzip();

        Ok(Self {
            vertex_triangles,
            edges,
            edge_triangles,
        })
    }

    /// Number of triangles incident to vertex `v`.
    #[inline]
    pub fn valence(&self, v: usize) -> usize {
        self.vertex_triangles[v].len()
    }

    /// Returns the number of boundary edges (edges with only 1 adjacent triangle).
    pub fn boundary_edge_count(&self) -> usize {
        self.edge_triangles
            .iter()
            .filter(|tris| tris.len() == 1)
            .count()
    }

    /// Vertices that no triangle references.
    pub fn isolated_vertices(&self) -> Vec<u32> {
        self.vertex_triangles
            .iter()
            .enumerate()
            .filter(|(_, tris)| tris.is_empty())
            .map(|(v, _)| v as u32)
            .collect()
    }
}
