use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::error::TimelineResult;
use crate::extensions::PluginEvent;
use crate::interaction::{
    GestureConfig, GestureIntent, GestureState, InputEvent, InputSource, InputSubscription,
};
use crate::render::Renderer;

use super::{LevelTransition, TimelineEngine};

/// Outcome of one input event.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InputResponse {
    /// Host must cancel the platform default (page zoom/scroll) when set.
    pub suppress_default: bool,
    pub intents: SmallVec<[GestureIntent; 2]>,
    pub transition: Option<LevelTransition>,
}

impl<R: Renderer> TimelineEngine<R> {
    /// Feeds one raw input event stamped with the host clock.
    ///
    /// Due timers fire before the event is interpreted. Never fails:
    /// malformed input degrades to an empty response.
    pub fn handle_input(&mut self, event: &InputEvent, now_ms: u64) -> InputResponse {
        let now_ms = self.advance_time(now_ms);
        let output = self.core.model.gesture.handle(event, now_ms);
        if output.is_empty() {
            trace!(?event, "input produced no intents");
        }

        let mut response = InputResponse {
            suppress_default: output.suppress_default,
            intents: output.intents.clone(),
            transition: None,
        };
        for intent in output.intents {
            if let Some(transition) = self.apply_intent_at(intent, now_ms) {
                response.transition = Some(transition);
            }
        }
        response
    }

    /// Registers the engine's listeners on `source`. The returned guard
    /// detaches them when dropped, silently; use [`Self::detach_input`] to
    /// also notify plugins.
    pub fn attach_input<S: InputSource>(
        &mut self,
        source: S,
    ) -> TimelineResult<InputSubscription<S>> {
        let subscription = self.core.model.gesture.attach(source)?;
        self.emit_plugin_event(PluginEvent::InputAttached);
        Ok(subscription)
    }

    /// Releases the listeners, clears any half-finished gesture and emits
    /// `InputDetached`. The only detach path that reaches plugins.
    pub fn detach_input<S: InputSource>(&mut self, subscription: InputSubscription<S>) {
        self.core.model.gesture.detach(subscription);
        self.emit_plugin_event(PluginEvent::InputDetached);
    }

    #[must_use]
    pub fn gesture_state(&self) -> GestureState {
        self.core.model.gesture.state()
    }

    #[must_use]
    pub fn gesture_config(&self) -> GestureConfig {
        self.core.model.gesture.config()
    }

    /// Replaces the gesture tuning. Resets any in-flight gesture and the
    /// continuous zoom factor.
    pub fn set_gesture_config(&mut self, config: GestureConfig) -> TimelineResult<()> {
        self.core.model.gesture.set_config(config)?;
        let previous_factor = self.core.model.navigation.zoom_factor();
        self.core.model.navigation.set_zoom_config(config.continuous);
        self.rescale_strip_scroll(previous_factor, self.core.model.navigation.zoom_factor());
        Ok(())
    }
}
