//! CLI command implementations.

use std::time::Instant;

use relief_mesh::Topology;
use relief_telemetry::sinks::TracingSink;
use relief_telemetry::EventBus;
use relief_terrain::{build_terrain_with, SeededFaultSource, TerrainConfig};
use relief_types::ReliefResult;

/// Command-line values that replace config entries.
#[derive(Debug, Default)]
pub struct Overrides {
    pub divisions: Option<u32>,
    pub seed: Option<u64>,
    pub iterations: Option<u32>,
}

impl Overrides {
    fn apply(&self, config: &mut TerrainConfig) {
        if let Some(divisions) = self.divisions {
            config.divisions = divisions;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(iterations) = self.iterations {
            config.fault.iterations = iterations;
        }
    }
}

fn load_config(path: Option<&str>) -> ReliefResult<TerrainConfig> {
    match path {
        Some(path) => {
            tracing::debug!(path, "loading terrain config");
            TerrainConfig::from_toml_file(path)
        }
        None => Ok(TerrainConfig::default()),
    }
}

/// Build a terrain and print its statistics.
pub fn generate(
    config_path: Option<&str>,
    overrides: Overrides,
    dump: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config_path)?;
    overrides.apply(&mut config);

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(TracingSink::new()));

    let mut source = SeededFaultSource::new(config.seed);
    let start = Instant::now();
    let mesh = build_terrain_with(&config, &mut source, Some(&bus))?;
    let wall_time = start.elapsed().as_secs_f64();
    bus.finish();

    if dump {
        print!("{}", mesh.buffer_listing());
        return Ok(());
    }

    let topology = Topology::build(mesh.triangle_indices(), mesh.vertex_count())?;
    let b = mesh.bounds();

    println!("Relief Terrain");
    println!("──────────────");
    println!("Divisions:     {}", mesh.divisions());
    println!("Domain:        [{}, {}] × [{}, {}]", b.min_x, b.max_x, b.min_y, b.max_y);
    println!("Seed:          {}", config.seed);
    println!("Faults:        {}", config.fault.iterations);
    println!("Vertices:      {}", mesh.vertex_count());
    println!("Triangles:     {}", mesh.triangle_count());
    println!("Edge entries:  {}", mesh.edge_count());
    println!("Unique edges:  {} ({} boundary)", topology.edges.len(), topology.boundary_edge_count());
    println!("Elevation:     [{:.4}, {:.4}]", mesh.min_elevation(), mesh.max_elevation());
    println!("Wall time:     {:.3}ms", wall_time * 1000.0);

    Ok(())
}

/// Validate a terrain config.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("Relief Validator");
    println!("────────────────");
    println!();

    println!("Validating config: {path}");
    let config = TerrainConfig::from_toml_file(path)?;
    match config.validate() {
        Ok(()) => println!(
            "✅ Config is valid ({} divisions, {} faults, seed {}).",
            config.divisions, config.fault.iterations, config.seed
        ),
        Err(e) => {
            println!("❌ Config validation failed: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}
