//! # trimap-telemetry
//!
//! Event bus for render telemetry. Emits structured events (grid
//! expansion, masking, per-layer render counts) that can be consumed by
//! pluggable sinks (tracing logs, in-memory capture, etc.).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{EventKind, RenderEvent};
pub use sinks::{EventSink, TracingSink, VecSink};
