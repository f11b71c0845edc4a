use serde::{Deserialize, Serialize};

pub const DEFAULT_SETTLE_DURATION_MS: u64 = 300;
pub const DEFAULT_DAY_SPACING_PX: f64 = 1000.0 / 9.0;

/// Level-transition timing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationBehavior {
    /// Length of the post-transition window in which further level changes
    /// are ignored.
    pub settle_duration_ms: u64,
}

impl Default for NavigationBehavior {
    fn default() -> Self {
        Self {
            settle_duration_ms: DEFAULT_SETTLE_DURATION_MS,
        }
    }
}

/// Horizontal layout of the day strip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayAxisBehavior {
    /// Distance between the left edges of two consecutive day bubbles.
    pub day_spacing_px: f64,
}

impl Default for DayAxisBehavior {
    fn default() -> Self {
        Self {
            day_spacing_px: DEFAULT_DAY_SPACING_PX,
        }
    }
}

/// Runtime behavior state grouped separately from the timeline model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(super) struct TimelineBehaviorState {
    pub(super) day_axis: DayAxisBehavior,
}
