//! Render event types.
//!
//! Structured events emitted at each stage of turning a grid and its
//! fields into map layers. Events are lightweight value types that carry
//! just enough data to be useful for monitoring and debugging.

use serde::{Deserialize, Serialize};

/// A render event, tagged with the job it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEvent {
    /// Name of the plot job (or grid) that produced the event.
    pub job: String,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// Cell vertices were expanded into a triangulation.
    GridExpanded {
        cells: usize,
        points: usize,
    },

    /// The dateline mask was applied.
    MaskComputed {
        triangles: usize,
        masked: usize,
        threshold_deg: f64,
    },

    /// A field layer was handed to a surface.
    FieldRendered {
        field: String,
        faces_drawn: usize,
        omitted_masked: usize,
        omitted_invalid: usize,
        saturated_low: usize,
        saturated_high: usize,
    },

    /// A wireframe layer was handed to a surface.
    WireframeRendered {
        triangles_drawn: usize,
        omitted_masked: usize,
    },

    /// A surface wrote its output.
    SurfaceFinalized {
        surface: String,
        calls: u32,
        /// Wall-clock time for the whole job (seconds).
        wall_time: f64,
    },
}

impl RenderEvent {
    /// Creates a new event for the given job.
    pub fn new(job: impl Into<String>, kind: EventKind) -> Self {
        Self {
            job: job.into(),
            kind,
        }
    }
}
