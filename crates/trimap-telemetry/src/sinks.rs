//! Pluggable event sinks.

use std::sync::{Arc, Mutex};

use crate::events::{EventKind, RenderEvent};

/// Trait for event consumers.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &RenderEvent);

    /// Called when the job ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// Collects events into a shared `Vec` for tests and inspection.
///
/// Clones share the same storage, so a clone kept outside the bus can read
/// what the boxed sink received.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &RenderEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs events using the `tracing` crate.
#[derive(Default)]
pub struct TracingSink;

impl TracingSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &RenderEvent) {
        match &event.kind {
            EventKind::GridExpanded { cells, points } => {
                tracing::info!(job = %event.job, cells, points, "grid expanded");
            }
            EventKind::MaskComputed {
                triangles,
                masked,
                threshold_deg,
            } => {
                tracing::info!(job = %event.job, triangles, masked, threshold_deg, "dateline mask computed");
            }
            EventKind::FieldRendered {
                field,
                faces_drawn,
                omitted_masked,
                omitted_invalid,
                saturated_low,
                saturated_high,
            } => {
                tracing::info!(
                    job = %event.job,
                    field = %field,
                    faces_drawn,
                    omitted_masked,
                    omitted_invalid,
                    saturated_low,
                    saturated_high,
                    "field rendered"
                );
            }
            EventKind::WireframeRendered {
                triangles_drawn,
                omitted_masked,
            } => {
                tracing::info!(job = %event.job, triangles_drawn, omitted_masked, "wireframe rendered");
            }
            EventKind::SurfaceFinalized {
                surface,
                calls,
                wall_time,
            } => {
                tracing::info!(job = %event.job, surface = %surface, calls, wall_time, "surface finalized");
            }
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
