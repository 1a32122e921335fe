//! Relief CLI — terrain generation and config validation.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "relief")]
#[command(version, about = "Relief — fault-based procedural terrain generator")]
struct Cli {
    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a terrain and print its statistics.
    Generate {
        /// Path to a terrain config (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Cells per side (overrides the config).
        #[arg(short, long)]
        divisions: Option<u32>,

        /// Fault sequence seed (overrides the config).
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of fault iterations (overrides the config).
        #[arg(short, long)]
        iterations: Option<u32>,

        /// Print every vertex, normal and triangle.
        #[arg(long)]
        dump: bool,
    },

    /// Validate a terrain config file.
    Validate {
        /// Path to config file.
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let result = match cli.command {
        Commands::Generate {
            config,
            divisions,
            seed,
            iterations,
            dump,
        } => commands::generate(
            config.as_deref(),
            commands::Overrides {
                divisions,
                seed,
                iterations,
            },
            dump,
        ),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
