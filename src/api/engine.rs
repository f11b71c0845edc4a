use tracing::{trace, warn};

use crate::core::{Dataset, Viewport};
use crate::error::TimelineResult;
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::engine_core::EngineCore;
use super::validation::validate_viewport;

/// Main orchestration facade consumed by host applications.
///
/// `TimelineEngine` wires the gesture interpreter, navigation machine and
/// focus resolution together, owns the cooperative clock and hands
/// deterministic frames to the renderer.
pub struct TimelineEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.core.model.dataset
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.model.viewport
    }

    /// Resizes the widget. Scroll is re-clamped and focus re-resolved.
    pub fn set_viewport(&mut self, viewport: Viewport) -> TimelineResult<()> {
        let viewport = validate_viewport(viewport)?;
        self.core.model.viewport = viewport;
        self.core.model.measured_layout = None;
        self.clamp_scroll_offset();
        self.refresh_focus();
        Ok(())
    }

    /// Current engine clock; never runs backwards.
    #[must_use]
    pub fn clock_ms(&self) -> u64 {
        self.core.model.clock_ms
    }

    #[must_use]
    pub fn scroll_offset_px(&self) -> f64 {
        self.core.model.scroll_offset_px
    }

    pub fn render(&mut self) -> TimelineResult<()> {
        let frame = self.build_render_frame();
        trace!(level = ?frame.level, items = frame.items.len(), "rendering frame");
        if let Err(err) = self.renderer.render(&frame) {
            warn!(error = %err, "renderer rejected frame");
            return Err(err);
        }
        self.emit_plugin_event(PluginEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
