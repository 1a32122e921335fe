//! The generation pipeline.
//!
//! ```text
//! validate → flat_grid → sculpt → estimate_normals → TerrainMesh::assemble
//! ```
//!
//! Each stage runs exactly once and hands its buffers to the next. A
//! failure at any stage drops everything built so far; no partial mesh
//! escapes.

use std::time::Instant;

use relief_mesh::grid::flat_grid;
use relief_mesh::normals::estimate_normals;
use relief_mesh::TerrainMesh;
use relief_telemetry::{EventBus, EventKind, GenerationEvent, Stage};
use relief_types::ReliefResult;

use crate::config::TerrainConfig;
use crate::fault::FaultSculptor;
use crate::source::{FaultSource, SeededFaultSource};

/// Builds a terrain with faults drawn from `config.seed`.
///
/// # Example
/// ```
/// use relief_math::DomainBounds;
/// use relief_terrain::{build_terrain, TerrainConfig};
/// let config = TerrainConfig::new(8, DomainBounds::centered(1.0), 7);
/// let mesh = build_terrain(&config).unwrap();
/// assert_eq!(mesh.vertex_count(), 81);
/// assert_eq!(mesh.triangle_count(), 128);
/// ```
pub fn build_terrain(config: &TerrainConfig) -> ReliefResult<TerrainMesh> {
    let mut source = SeededFaultSource::new(config.seed);
    build_terrain_with(config, &mut source, None)
}

/// Builds a terrain with faults from `source`, reporting to `bus`.
///
/// `config.seed` is ignored; the source decides every fault.
pub fn build_terrain_with(
    config: &TerrainConfig,
    source: &mut dyn FaultSource,
    bus: Option<&EventBus>,
) -> ReliefResult<TerrainMesh> {
    config.validate()?;

    let emit = |stage: Stage, kind: EventKind| {
        if let Some(bus) = bus {
            bus.emit(GenerationEvent::new(stage, kind));
        }
    };

    emit(Stage::Grid, EventKind::StageBegin);
    let start = Instant::now();
    let mut grid = flat_grid(config.divisions, config.bounds)?;
    emit(Stage::Grid, EventKind::StageEnd { wall_time: start.elapsed().as_secs_f64() });
    tracing::info!(
        vertices = grid.vertex_count(),
        triangles = grid.triangle_count(),
        "generated triangles"
    );

    emit(Stage::Sculpt, EventKind::StageBegin);
    let start = Instant::now();
    let sculptor = FaultSculptor::new(config.fault.clone(), config.bounds);
    let final_delta = sculptor.sculpt(&mut grid.positions, source, bus);
    emit(Stage::Sculpt, EventKind::StageEnd { wall_time: start.elapsed().as_secs_f64() });
    tracing::info!(
        iterations = config.fault.iterations,
        final_delta,
        "sculpted terrain"
    );

    emit(Stage::Normals, EventKind::StageBegin);
    let start = Instant::now();
    let normals = estimate_normals(&grid.positions, &grid.indices)?;
    emit(Stage::Normals, EventKind::StageEnd { wall_time: start.elapsed().as_secs_f64() });
    tracing::info!("generated normals");

    let mesh = TerrainMesh::assemble(grid, normals)?;
    emit(
        Stage::Assemble,
        EventKind::Summary {
            vertex_count: mesh.vertex_count() as u32,
            triangle_count: mesh.triangle_count() as u32,
            min_elevation: mesh.min_elevation(),
            max_elevation: mesh.max_elevation(),
        },
    );

    Ok(mesh)
}
