//! Event bus — broadcast-style event dispatch with pluggable sinks.
//!
//! The bus uses `std::sync::mpsc` so that `emit` only needs `&self`.
//! Sinks are registered once and receive events when the bus is flushed.

use std::sync::mpsc;

use crate::events::GenerationEvent;
use crate::sinks::EventSink;

/// Broadcast event bus for generation telemetry.
pub struct EventBus {
    sender: mpsc::Sender<GenerationEvent>,
    receiver: mpsc::Receiver<GenerationEvent>,
    sinks: Vec<Box<dyn EventSink>>,
    /// Disabled bus is a no-op.
    enabled: bool,
}

impl EventBus {
    /// Creates a new event bus with no sinks.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver,
            sinks: Vec::new(),
            enabled: true,
        }
    }

    /// Registers a sink to receive events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }

    /// Enables or disables the bus. Disabled bus drops events silently.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Emit an event. If the bus is disabled, this is a no-op.
    pub fn emit(&self, event: GenerationEvent) {
        if !self.enabled {
            return;
        }
        // The receiver lives in `self`, so this cannot fail.
        let _ = self.sender.send(event);
    }

    /// Dispatches all pending events to registered sinks.
    ///
    /// Returns the number of events dispatched.
    pub fn flush(&mut self) -> usize {
        let mut count = 0;
        while let Ok(event) = self.receiver.try_recv() {
            for sink in &mut self.sinks {
                sink.handle(&event);
            }
            count += 1;
        }
        count
    }

    /// Flushes pending events, then lets every sink finalize.
    pub fn finish(&mut self) {
        self.flush();
        for sink in &mut self.sinks {
            tracing::trace!(sink = sink.name(), "finalizing telemetry sink");
            sink.finalize();
        }
    }

    /// Returns the number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
