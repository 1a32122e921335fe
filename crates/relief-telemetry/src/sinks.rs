//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, GenerationEvent};

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &GenerationEvent);

    /// Called when generation ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events into a shared `Vec` for testing and inspection.
///
/// Clone the handle from [`VecSink::events`] before boxing the sink
/// into a bus; it stays readable afterwards.
pub struct VecSink {
    events: Arc<Mutex<Vec<GenerationEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the collected events.
    pub fn events(&self) -> Arc<Mutex<Vec<GenerationEvent>>> {
        Arc::clone(&self.events)
    }
}

impl Default for VecSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &GenerationEvent) {
        // A poisoned lock only means another reader panicked; keep collecting.
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        events.push(event.clone());
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
///
/// Per-fault events go to `debug`, everything else to `info`.
pub struct TracingSink {
    handled: u64,
}

impl TracingSink {
    pub fn new() -> Self {
        Self { handled: 0 }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &GenerationEvent) {
        self.handled += 1;
        match &event.kind {
            EventKind::FaultApplied { iteration, delta, raised, lowered } => {
                tracing::debug!(
                    stage = event.stage.name(),
                    iteration,
                    delta,
                    raised,
                    lowered,
                    "fault_applied"
                );
            }
            kind => {
                tracing::info!(stage = event.stage.name(), event = ?kind, "generation_event");
            }
        }
    }

    fn finalize(&mut self) {
        tracing::debug!(events = self.handled, "tracing sink finalized");
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
