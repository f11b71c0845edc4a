use crate::extensions::{PluginContext, PluginEvent};
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    pub(super) fn plugin_context(&self) -> PluginContext {
        let model = &self.core.model;
        PluginContext {
            viewport: model.viewport,
            navigation: model.navigation.state(),
            scroll_offset_px: model.scroll_offset_px,
            zoom_factor: model.navigation.zoom_factor(),
            clock_ms: model.clock_ms,
            year_range: model.dataset.year_range(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.core.runtime.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.core.runtime.plugins {
            plugin.on_event(event, context);
        }
    }
}
