use tracing::trace;

use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::TimelineEngine;

impl<R: Renderer> TimelineEngine<R> {
    /// Moves the cooperative clock forward and fires due timers.
    ///
    /// Timestamps older than the current clock are clamped to it. Returns
    /// the effective clock.
    pub fn advance_time(&mut self, now_ms: u64) -> u64 {
        let model = &mut self.core.model;
        if now_ms < model.clock_ms {
            trace!(now_ms, clock_ms = model.clock_ms, "clamping stale timestamp");
        }
        model.clock_ms = model.clock_ms.max(now_ms);
        let clock_ms = model.clock_ms;

        model.gesture.expire_timers(clock_ms);
        if model.navigation.expire_timers(clock_ms) {
            let level = model.navigation.level();
            self.emit_plugin_event(PluginEvent::TransitionSettled { level });
        }
        clock_ms
    }

    /// Deadline of the pending settle timer, so hosts can schedule a wake-up.
    #[must_use]
    pub fn next_deadline_ms(&self) -> Option<u64> {
        self.core.model.navigation.settle_deadline_ms()
    }
}
