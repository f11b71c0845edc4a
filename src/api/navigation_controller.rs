use tracing::{debug, trace};

use crate::core::{TradeDay, ZoomLevel};
use crate::extensions::PluginEvent;
use crate::interaction::GestureIntent;
use crate::render::{FrameAction, Renderer};

use super::scroll_offset_resolver::{
    resolve_anchored_scroll_offset, resolve_max_scroll_offset, resolve_pan_scroll_offset,
    resolve_strip_magnification, resolve_visible_day_range,
};
use super::{LevelTransition, NavigationState, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn navigation_state(&self) -> NavigationState {
        self.core.model.navigation.state()
    }

    #[must_use]
    pub fn zoom_level(&self) -> ZoomLevel {
        self.core.model.navigation.level()
    }

    /// Navigation-side continuous zoom factor.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.core.model.navigation.zoom_factor()
    }

    /// Days of the selected quarter, empty unless the level is `Days`.
    #[must_use]
    pub fn selected_days(&self) -> Vec<&TradeDay> {
        let state = self.navigation_state();
        match (state.level, state.selected_year, state.selected_quarter) {
            (ZoomLevel::Days, Some(year), Some(quarter)) => {
                self.core.model.dataset.query(year, quarter.index())
            }
            _ => Vec::new(),
        }
    }

    /// Half-open range of day indices on screen, `None` outside `Days`.
    #[must_use]
    pub fn visible_day_range(&self) -> Option<(usize, usize)> {
        if self.zoom_level() != ZoomLevel::Days {
            return None;
        }
        resolve_visible_day_range(
            self.core.model.scroll_offset_px,
            f64::from(self.core.model.viewport.width),
            self.core.behavior.day_axis.day_spacing_px,
            self.selected_days().len(),
        )
    }

    pub fn zoom_in(&mut self, now_ms: u64) -> Option<LevelTransition> {
        let now_ms = self.advance_time(now_ms);
        self.zoom_in_at(now_ms)
    }

    pub fn zoom_out(&mut self, now_ms: u64) -> Option<LevelTransition> {
        let now_ms = self.advance_time(now_ms);
        let transition = self.core.model.navigation.zoom_out(now_ms);
        self.finish_transition(transition)
    }

    pub fn select_year(&mut self, year: i32, now_ms: u64) -> Option<LevelTransition> {
        let now_ms = self.advance_time(now_ms);
        let model = &mut self.core.model;
        let transition = model.navigation.select_year(&model.dataset, year, now_ms);
        self.finish_transition(transition)
    }

    pub fn select_quarter(&mut self, quarter_index: u8, now_ms: u64) -> Option<LevelTransition> {
        let now_ms = self.advance_time(now_ms);
        let transition = self
            .core
            .model
            .navigation
            .select_quarter(quarter_index, now_ms);
        self.finish_transition(transition)
    }

    /// Applies a frame control or item action.
    pub fn dispatch_action(
        &mut self,
        action: FrameAction,
        now_ms: u64,
    ) -> Option<LevelTransition> {
        match action {
            FrameAction::ZoomIn => self.zoom_in(now_ms),
            FrameAction::ZoomOut => self.zoom_out(now_ms),
            FrameAction::SelectYear(year) => self.select_year(year, now_ms),
            FrameAction::SelectQuarter(quarter) => self.select_quarter(quarter, now_ms),
        }
    }

    /// Applies one gesture intent as if the interpreter had produced it.
    pub fn apply_intent(&mut self, intent: GestureIntent, now_ms: u64) -> Option<LevelTransition> {
        let now_ms = self.advance_time(now_ms);
        self.apply_intent_at(intent, now_ms)
    }

    /// Moves the horizontal scroll by a pan delta. Vertical motion is not
    /// scrolled. Returns `true` when the offset changed.
    pub fn pan(&mut self, dx: f64) -> bool {
        let max_offset = self.max_scroll_offset();
        let Some(next) = resolve_pan_scroll_offset(self.core.model.scroll_offset_px, dx, max_offset)
        else {
            trace!(dx, "ignoring non-finite pan");
            return false;
        };
        self.set_scroll_offset(next)
    }

    pub(super) fn apply_intent_at(
        &mut self,
        intent: GestureIntent,
        now_ms: u64,
    ) -> Option<LevelTransition> {
        match intent {
            GestureIntent::ZoomIn => self.zoom_in_at(now_ms),
            GestureIntent::ZoomOut => {
                let transition = self.core.model.navigation.zoom_out(now_ms);
                self.finish_transition(transition)
            }
            GestureIntent::ContinuousZoom { factor } => {
                self.refresh_focus();
                let previous = self.core.model.navigation.zoom_factor();
                let transition = self.core.model.navigation.apply_zoom_factor(factor, now_ms);
                if transition.is_none() {
                    let current = self.core.model.navigation.zoom_factor();
                    if current != previous {
                        self.emit_plugin_event(PluginEvent::ZoomFactorChanged { factor: current });
                        self.rescale_strip_scroll(previous, current);
                    }
                }
                self.finish_transition(transition)
            }
            GestureIntent::Pan { dx, .. } => {
                self.pan(dx);
                None
            }
        }
    }

    fn zoom_in_at(&mut self, now_ms: u64) -> Option<LevelTransition> {
        self.refresh_focus();
        let transition = self.core.model.navigation.zoom_in(now_ms);
        self.finish_transition(transition)
    }

    fn finish_transition(
        &mut self,
        transition: Option<LevelTransition>,
    ) -> Option<LevelTransition> {
        let transition = transition?;
        let model = &mut self.core.model;
        model.scroll_offset_px = 0.0;
        model.measured_layout = None;
        model.gesture.reset_zoom_factor();
        debug!(from = ?transition.from, to = ?transition.to, "level changed");

        self.emit_plugin_event(PluginEvent::LevelChanged { transition });
        self.emit_plugin_event(PluginEvent::ZoomFactorChanged {
            factor: self.core.model.navigation.zoom_factor(),
        });
        self.refresh_focus();
        Some(transition)
    }

    pub(super) fn max_scroll_offset(&self) -> f64 {
        let viewport_width = f64::from(self.core.model.viewport.width);
        let content_width = match self.zoom_level() {
            ZoomLevel::Days => {
                self.selected_days().len() as f64 * self.core.behavior.day_axis.day_spacing_px
            }
            ZoomLevel::Years | ZoomLevel::Months => self
                .child_layout()
                .map_or(viewport_width, |layout| layout.content_width),
        };
        resolve_max_scroll_offset(content_width, viewport_width)
    }

    /// Re-anchors the derived strip on the viewport center after the zoom
    /// factor moved from `previous_factor` to `factor`. Measured layouts
    /// and the day axis are not magnified.
    pub(super) fn rescale_strip_scroll(&mut self, previous_factor: f64, factor: f64) {
        if self.core.model.measured_layout.is_some()
            || !self.zoom_level().has_focusable_children()
        {
            return;
        }
        let ratio =
            resolve_strip_magnification(factor) / resolve_strip_magnification(previous_factor);
        let next = resolve_anchored_scroll_offset(
            self.core.model.scroll_offset_px,
            self.core.model.viewport.center_x(),
            ratio,
            self.max_scroll_offset(),
        );
        match next {
            Some(offset) => {
                trace!(ratio, offset, "strip magnified");
                self.set_scroll_offset(offset);
            }
            None => self.clamp_scroll_offset(),
        }
        self.refresh_focus();
    }

    pub(super) fn clamp_scroll_offset(&mut self) {
        let clamped = self
            .core
            .model
            .scroll_offset_px
            .clamp(0.0, self.max_scroll_offset());
        self.set_scroll_offset(clamped);
    }

    fn set_scroll_offset(&mut self, offset_px: f64) -> bool {
        if offset_px == self.core.model.scroll_offset_px {
            return false;
        }
        self.core.model.scroll_offset_px = offset_px;
        self.emit_plugin_event(PluginEvent::Scrolled { offset_px });
        if self.zoom_level() != ZoomLevel::Days {
            self.refresh_focus();
        }
        true
    }
}
