//! Error types for the Relief generator.
//!
//! All crates return `ReliefResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for terrain generation.
#[derive(Debug, Error)]
pub enum ReliefError {
    /// Grid resolution or domain rectangle is unusable.
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// The summed face normals around a vertex cancel to zero length.
    #[error("Degenerate normal at vertex {vertex}: accumulated face normals have zero length")]
    DegenerateNormal {
        vertex: u32,
    },

    /// Mesh buffers are malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, ReliefError>`.
pub type ReliefResult<T> = Result<T, ReliefError>;
