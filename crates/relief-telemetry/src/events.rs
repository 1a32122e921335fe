//! Generation event types.
//!
//! Structured events emitted while a terrain is built. Events are
//! lightweight value types that carry just enough data to follow
//! progress and spot numerical trouble.

use serde::{Deserialize, Serialize};

/// Pipeline stage an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    /// Flat grid layout.
    Grid,
    /// Fault displacement.
    Sculpt,
    /// Vertex normal estimation.
    Normals,
    /// Mesh assembly and summary.
    Assemble,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Stage::Grid => "grid",
            Stage::Sculpt => "sculpt",
            Stage::Normals => "normals",
            Stage::Assemble => "assemble",
        }
    }
}

/// A generation event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationEvent {
    /// Stage that produced the event.
    pub stage: Stage,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EventKind {
    /// Stage started.
    StageBegin,

    /// Stage completed.
    StageEnd {
        /// Wall-clock time for the stage (seconds).
        wall_time: f64,
    },

    /// One fault iteration was applied.
    FaultApplied {
        /// Iteration number (0-indexed).
        iteration: u32,
        /// Step size used by this iteration.
        delta: f32,
        /// Vertices moved up.
        raised: u32,
        /// Vertices moved down.
        lowered: u32,
    },

    /// The finished mesh.
    Summary {
        vertex_count: u32,
        triangle_count: u32,
        min_elevation: f32,
        max_elevation: f32,
    },
}

impl GenerationEvent {
    /// Creates a new event for the given stage.
    pub fn new(stage: Stage, kind: EventKind) -> Self {
        Self { stage, kind }
    }
}
