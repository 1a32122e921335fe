//! Integration tests for relief-mesh.

use relief_math::DomainBounds;
use relief_mesh::grid::{flat_grid, vertex_index};
use relief_mesh::normals::estimate_normals;
use relief_mesh::topology::{edge_list, Topology};
use relief_mesh::{Grid, TerrainMesh};
use relief_types::ReliefError;

fn unit_square() -> DomainBounds {
    DomainBounds::centered(1.0)
}

fn assemble_flat(divisions: u32) -> TerrainMesh {
    let grid = flat_grid(divisions, unit_square()).unwrap();
    let normals = estimate_normals(&grid.positions, &grid.indices).unwrap();
    TerrainMesh::assemble(grid, normals).unwrap()
}

// ─── Grid Tests ───────────────────────────────────────────────

#[test]
fn grid_counts_for_many_resolutions() {
    for div in 1..=12u32 {
        let grid = flat_grid(div, unit_square()).unwrap();
        let side = (div + 1) as usize;
        assert_eq!(grid.vertex_count(), side * side);
        assert_eq!(grid.triangle_count(), 2 * (div * div) as usize);
        assert_eq!(grid.positions.len(), 3 * side * side);
    }
}

#[test]
fn grid_indices_in_range() {
    let grid = flat_grid(7, DomainBounds::new(0.0, 3.0, -2.0, 5.0)).unwrap();
    let n = grid.vertex_count() as u32;
    assert!(grid.indices.iter().all(|&i| i < n));
}

#[test]
fn grid_starts_flat() {
    let grid = flat_grid(5, unit_square()).unwrap();
    assert!(grid.positions.chunks_exact(3).all(|v| v[2] == 0.0));
}

#[test]
fn single_cell_golden_output() {
    let grid = flat_grid(1, unit_square()).unwrap();
    assert_eq!(
        grid.positions,
        vec![-1.0, -1.0, 0.0, 1.0, -1.0, 0.0, -1.0, 1.0, 0.0, 1.0, 1.0, 0.0]
    );
    assert_eq!(grid.indices, vec![0, 1, 3, 0, 3, 2]);
}

#[test]
fn grid_is_row_major() {
    let bounds = DomainBounds::new(10.0, 14.0, -4.0, 0.0);
    let grid = flat_grid(4, bounds).unwrap();
    let i = vertex_index(4, 2, 3) as usize;
    assert_eq!(i, 13);
    assert!((grid.positions[i * 3] - 13.0).abs() < 1e-6);
    assert!((grid.positions[i * 3 + 1] - (-2.0)).abs() < 1e-6);
}

#[test]
fn grid_cell_order_lower_right_first() {
    let grid = flat_grid(2, unit_square()).unwrap();
    // Cell (0, 1): bot_left = 1, bot_right = 2, top_left = 4, top_right = 5.
    assert_eq!(&grid.indices[6..12], &[1, 2, 5, 1, 5, 4]);
    // Cell (1, 0): bot_left = 3.
    assert_eq!(&grid.indices[12..18], &[3, 4, 7, 3, 7, 6]);
}

#[test]
fn zero_divisions_rejected() {
    let err = flat_grid(0, unit_square()).unwrap_err();
    assert!(matches!(err, ReliefError::InvalidDomain(_)));
}

#[test]
fn empty_bounds_rejected() {
    let err = flat_grid(4, DomainBounds::new(1.0, 1.0, 0.0, 2.0)).unwrap_err();
    assert!(matches!(err, ReliefError::InvalidDomain(_)));
}

#[test]
fn oversized_grid_rejected() {
    let err = flat_grid(u32::MAX, unit_square()).unwrap_err();
    assert!(matches!(err, ReliefError::InvalidDomain(_)));
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn valence_on_2x2_grid() {
    let grid = flat_grid(2, unit_square()).unwrap();
    let topo = Topology::build(&grid.indices, grid.vertex_count()).unwrap();

    // Interior vertex
    assert_eq!(topo.valence(4), 6);
    // Non-corner boundary vertices
    for v in [1, 3, 5, 7] {
        assert_eq!(topo.valence(v), 3, "vertex {v}");
    }
    // Corners on the shared diagonal get both triangles of their cell.
    assert_eq!(topo.valence(0), 2);
    assert_eq!(topo.valence(8), 2);
    // The other two corners get one.
    assert_eq!(topo.valence(2), 1);
    assert_eq!(topo.valence(6), 1);
    assert!(topo.isolated_vertices().is_empty());
}

#[test]
fn unique_edges_single_cell() {
    let grid = flat_grid(1, unit_square()).unwrap();
    let topo = Topology::build(&grid.indices, grid.vertex_count()).unwrap();
    assert_eq!(topo.edges, vec![[0, 1], [0, 2], [0, 3], [1, 3], [2, 3]]);
    assert_eq!(topo.boundary_edge_count(), 4);
}

#[test]
fn unique_edge_count_formula() {
    // A triangulated n×n grid has 3n² + 2n unique edges, 4n on the boundary.
    let div = 6u32;
    let grid = flat_grid(div, unit_square()).unwrap();
    let topo = Topology::build(&grid.indices, grid.vertex_count()).unwrap();
    let n = div as usize;
    assert_eq!(topo.edges.len(), 3 * n * n + 2 * n);
    assert_eq!(topo.boundary_edge_count(), 4 * n);
}

#[test]
fn edge_list_covers_every_triangle_side() {
    let indices = [0u32, 1, 3, 0, 3, 2];
    let edges = edge_list(&indices);
    assert_eq!(edges, vec![0, 1, 1, 3, 3, 0, 0, 3, 3, 2, 2, 0]);
}

#[test]
fn isolated_vertex_detected() {
    let topo = Topology::build(&[0, 1, 2], 4).unwrap();
    assert_eq!(topo.isolated_vertices(), vec![3]);
}

#[test]
fn topology_rejects_out_of_range_index() {
    let err = Topology::build(&[0, 1, 4], 4).unwrap_err();
    assert!(matches!(err, ReliefError::InvalidMesh(_)));
}

// ─── Normal Tests ─────────────────────────────────────────────

#[test]
fn flat_grid_normals_point_up() {
    let grid = flat_grid(4, unit_square()).unwrap();
    let normals = estimate_normals(&grid.positions, &grid.indices).unwrap();
    for n in normals.chunks_exact(3) {
        assert!(n[0].abs() < 1e-6);
        assert!(n[1].abs() < 1e-6);
        assert!((n[2] - 1.0).abs() < 1e-6);
    }
}

#[test]
fn huge_flat_grid_normals_point_up() {
    // Face normals around 4e20 overflow when squared in f32.
    let grid = flat_grid(3, DomainBounds::centered(1.0e10)).unwrap();
    let normals = estimate_normals(&grid.positions, &grid.indices).unwrap();
    for n in normals.chunks_exact(3) {
        assert_eq!(n, &[0.0, 0.0, 1.0]);
    }
}

#[test]
fn tilted_plane_normal() {
    // z = x over the unit square: normal ∝ (-1, 0, 1).
    let mut grid = flat_grid(3, unit_square()).unwrap();
    for v in grid.positions.chunks_exact_mut(3) {
        v[2] = v[0];
    }
    let normals = estimate_normals(&grid.positions, &grid.indices).unwrap();
    let s = 0.5f32.sqrt();
    for n in normals.chunks_exact(3) {
        assert!((n[0] + s).abs() < 1e-5);
        assert!(n[1].abs() < 1e-5);
        assert!((n[2] - s).abs() < 1e-5);
    }
}

#[test]
fn larger_triangle_weighs_more() {
    // Two triangles share vertex 0; the large one faces +Z, the small one +X.
    let positions = [
        0.0, 0.0, 0.0, //
        4.0, 0.0, 0.0, //
        0.0, 4.0, 0.0, //
        0.0, 1.0, 0.0, //
        0.0, 0.0, 1.0, //
    ];
    let indices = [0, 1, 2, 0, 3, 4];
    let normals = estimate_normals(&positions, &indices).unwrap();
    // Areas 8 and 0.5: accum = (0.5, 0, 8).
    let len = (0.25f32 + 64.0).sqrt();
    assert!((normals[0] - 0.5 / len).abs() < 1e-6);
    assert!((normals[2] - 8.0 / len).abs() < 1e-6);
}

#[test]
fn untouched_vertex_is_degenerate() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 5.0, 5.0, 5.0];
    let err = estimate_normals(&positions, &[0, 1, 2]).unwrap_err();
    assert!(matches!(err, ReliefError::DegenerateNormal { vertex: 3 }));
}

#[test]
fn cancelling_faces_are_degenerate() {
    // The same triangle with both windings sums to zero everywhere.
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let err = estimate_normals(&positions, &[0, 1, 2, 0, 2, 1]).unwrap_err();
    assert!(matches!(err, ReliefError::DegenerateNormal { vertex: 0 }));
}

#[test]
fn out_of_range_index_rejected() {
    let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let err = estimate_normals(&positions, &[0, 1, 9]).unwrap_err();
    assert!(matches!(err, ReliefError::InvalidMesh(_)));
}

// ─── TerrainMesh Tests ────────────────────────────────────────

#[test]
fn assembled_counts_and_lengths() {
    let mesh = assemble_flat(5);
    assert_eq!(mesh.vertex_count(), 36);
    assert_eq!(mesh.triangle_count(), 50);
    assert_eq!(mesh.edge_count(), 150);
    assert_eq!(mesh.normals().len(), mesh.positions().len());
    assert_eq!(mesh.triangle_indices().len(), 150);
    assert!(mesh.validate().is_ok());
}

#[test]
fn flat_mesh_elevation() {
    let mesh = assemble_flat(3);
    assert_eq!(mesh.min_elevation(), 0.0);
    assert_eq!(mesh.max_elevation(), 0.0);
    assert_eq!(mesh.normalized_elevation(5), 0.0);
}

#[test]
fn elevation_queries_track_heights() {
    let mut grid = flat_grid(2, unit_square()).unwrap();
    for (i, v) in grid.positions.chunks_exact_mut(3).enumerate() {
        v[2] = i as f32 * 0.25 - 1.0;
    }
    let normals = estimate_normals(&grid.positions, &grid.indices).unwrap();
    let mesh = TerrainMesh::assemble(grid, normals).unwrap();
    assert_eq!(mesh.min_elevation(), -1.0);
    assert_eq!(mesh.max_elevation(), 1.0);
    assert_eq!(mesh.normalized_elevation(0), 0.0);
    assert_eq!(mesh.normalized_elevation(4), 0.5);
    assert_eq!(mesh.normalized_elevation(8), 1.0);
}

#[test]
fn accessors_agree_with_buffers() {
    let mesh = assemble_flat(1);
    assert_eq!(mesh.vertex(3).to_array(), [1.0, 1.0, 0.0]);
    assert_eq!(mesh.normal(2).to_array(), [0.0, 0.0, 1.0]);
    assert_eq!(mesh.triangle(1), [0, 3, 2]);
    assert_eq!(mesh.divisions(), 1);
    assert_eq!(mesh.bounds(), unit_square());
}

#[test]
fn assemble_rejects_short_normals() {
    let grid = flat_grid(2, unit_square()).unwrap();
    let err = TerrainMesh::assemble(grid, vec![0.0, 0.0, 1.0]).unwrap_err();
    assert!(matches!(err, ReliefError::InvalidMesh(_)));
}

#[test]
fn assemble_rejects_bad_index() {
    let mut grid: Grid = flat_grid(1, unit_square()).unwrap();
    let normals = estimate_normals(&grid.positions, &grid.indices).unwrap();
    grid.indices[4] = 42;
    let err = TerrainMesh::assemble(grid, normals).unwrap_err();
    assert!(matches!(err, ReliefError::InvalidMesh(_)));
}

#[test]
fn buffer_listing_format() {
    let mesh = assemble_flat(1);
    let listing = mesh.buffer_listing();
    let lines: Vec<&str> = listing.lines().collect();
    assert_eq!(lines.len(), 4 + 4 + 2);
    assert_eq!(lines[0], "v -1 -1 0");
    assert_eq!(lines[4], "n 0 0 1");
    assert_eq!(lines[8], "f 0 1 3");
    assert_eq!(lines[9], "f 0 3 2");
}
