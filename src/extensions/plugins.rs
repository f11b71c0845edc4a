use serde::{Deserialize, Serialize};

use crate::api::{LevelTransition, NavigationState};
use crate::core::{Viewport, ZoomLevel};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub viewport: Viewport,
    pub navigation: NavigationState,
    pub scroll_offset_px: f64,
    pub zoom_factor: f64,
    pub clock_ms: u64,
    pub year_range: Option<(i32, i32)>,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    LevelChanged { transition: LevelTransition },
    FocusChanged { index: Option<usize> },
    Scrolled { offset_px: f64 },
    ZoomFactorChanged { factor: f64 },
    TransitionSettled { level: ZoomLevel },
    InputAttached,
    InputDetached,
    Rendered,
}

/// Extension hook interface for bounded custom logic.
///
/// Plugins observe events and read engine context without mutating
/// navigation state directly.
pub trait TimelinePlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
