//! # relief-telemetry
//!
//! Event bus for terrain generation telemetry. Emits structured events
//! (stage timing, per-fault progress, final summary) that can be consumed
//! by pluggable sinks.

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, GenerationEvent, Stage};
