//! Observer hooks for hosts that need to react to navigation without
//! owning the engine loop.

mod plugins;

pub use plugins::{PluginContext, PluginEvent, TimelinePlugin};
