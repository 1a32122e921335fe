//! Generation defaults.

/// Default number of fault iterations applied to a fresh grid.
pub const DEFAULT_FAULT_ITERATIONS: u32 = 100;

/// Default height step of the first fault iteration.
pub const DEFAULT_INITIAL_DELTA: f32 = 0.5;

/// Default decay exponent `H`. Each iteration divides the step by `2^H`.
pub const DEFAULT_FALLOFF_EXPONENT: f32 = 0.01;

/// Falloff radius as a fraction of the domain width.
pub const FALLOFF_RADIUS_FRACTION: f32 = 0.5;

/// Default grid resolution (cells per side).
pub const DEFAULT_DIVISIONS: u32 = 100;

/// Default seed used when no explicit seed is provided.
pub const DEFAULT_SEED: u64 = 42;

/// Tolerance for unit-length checks on normals.
pub const NORMAL_TOLERANCE: f32 = 1.0e-5;
