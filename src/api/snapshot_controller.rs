use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;

use super::{EngineSnapshot, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let model = &self.core.model;
        EngineSnapshot {
            viewport: model.viewport,
            clock_ms: model.clock_ms,
            navigation: model.navigation.state(),
            scroll_offset_px: model.scroll_offset_px,
            zoom_factor: model.navigation.zoom_factor(),
            gesture: model.gesture.state(),
            year_range: model.dataset.year_range(),
            visible_day_range: self.visible_day_range(),
            selected_day_count: self.selected_days().len(),
            settle_deadline_ms: model.navigation.settle_deadline_ms(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| TimelineError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
