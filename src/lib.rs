//! timeline-rs: gesture-driven navigation over a hierarchical trading timeline.
//!
//! Raw contact and wheel input is interpreted into zoom/pan intents, which a
//! navigation state machine turns into year -> quarter -> day transitions.
//! Rendering stays behind the [`render::Renderer`] contract so hosts (browser
//! shells, desktop toolkits, tests) only consume deterministic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimelineEngine, TimelineEngineConfig};
pub use error::{TimelineError, TimelineResult};
