use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::GestureState;

use super::NavigationState;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub clock_ms: u64,
    pub navigation: NavigationState,
    pub scroll_offset_px: f64,
    pub zoom_factor: f64,
    pub gesture: GestureState,
    pub year_range: Option<(i32, i32)>,
    pub visible_day_range: Option<(usize, usize)>,
    pub selected_day_count: usize,
    pub settle_deadline_ms: Option<u64>,
}
