use tracing::{debug, trace};

use crate::core::{Dataset, Quarter, TimerSlot, ZoomLevel};
use crate::interaction::zoom_factor::resolve_zoom_crossing;
use crate::interaction::{ContinuousZoomConfig, NEUTRAL_ZOOM_FACTOR, ZoomCrossing};

use super::{FocusTarget, LevelTransition, NavigationBehavior, NavigationState};

/// Owns [`NavigationState`], the settle timer and the navigation-side zoom
/// factor.
///
/// Level changes happen only here. Each one starts a settle window during
/// which further level changes are ignored; the window closes when
/// [`NavigationMachine::expire_timers`] observes the settle deadline.
#[derive(Debug, Clone)]
pub struct NavigationMachine {
    state: NavigationState,
    behavior: NavigationBehavior,
    zoom: ContinuousZoomConfig,
    zoom_factor: f64,
    focus_target: Option<FocusTarget>,
    settle: TimerSlot,
}

impl NavigationMachine {
    #[must_use]
    pub fn new(behavior: NavigationBehavior, zoom: ContinuousZoomConfig) -> Self {
        Self {
            state: NavigationState::default(),
            behavior,
            zoom,
            zoom_factor: NEUTRAL_ZOOM_FACTOR,
            focus_target: None,
            settle: TimerSlot::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> NavigationState {
        self.state
    }

    #[must_use]
    pub fn level(&self) -> ZoomLevel {
        self.state.level
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.state.transitioning
    }

    #[must_use]
    pub fn behavior(&self) -> NavigationBehavior {
        self.behavior
    }

    /// Applies to the next transition; an in-flight settle keeps its deadline.
    pub fn set_behavior(&mut self, behavior: NavigationBehavior) {
        self.behavior = behavior;
    }

    #[must_use]
    pub fn zoom_config(&self) -> ContinuousZoomConfig {
        self.zoom
    }

    pub fn set_zoom_config(&mut self, zoom: ContinuousZoomConfig) {
        self.zoom = zoom;
        self.zoom_factor = NEUTRAL_ZOOM_FACTOR;
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn focus_target(&self) -> Option<FocusTarget> {
        self.focus_target
    }

    #[must_use]
    pub fn settle_deadline_ms(&self) -> Option<u64> {
        self.settle.deadline_ms()
    }

    /// Records the focus resolver's answer. Ignored at `Days`, which has no
    /// focusable children. Returns `true` when the focused index changed.
    pub fn set_focus(&mut self, focus: Option<(usize, FocusTarget)>) -> bool {
        let focus = if self.state.level.has_focusable_children() {
            focus
        } else {
            None
        };
        let index = focus.map(|(index, _)| index);
        self.focus_target = focus.map(|(_, target)| target);
        if self.state.focused_child_index == index {
            return false;
        }
        self.state.focused_child_index = index;
        true
    }

    /// Zooms into the focused child. No-op while settling, at `Days`, or
    /// when nothing is focused.
    pub fn zoom_in(&mut self, now_ms: u64) -> Option<LevelTransition> {
        if self.state.transitioning {
            trace!("zoom in ignored while settling");
            return None;
        }
        match (self.state.level, self.focus_target) {
            (ZoomLevel::Years, Some(FocusTarget::Year(year))) => {
                self.state.selected_year = Some(year);
                Some(self.begin_transition(ZoomLevel::Months, now_ms))
            }
            (ZoomLevel::Months, Some(FocusTarget::Quarter(quarter))) => {
                self.state.selected_quarter = Some(quarter);
                Some(self.begin_transition(ZoomLevel::Days, now_ms))
            }
            (level, target) => {
                trace!(?level, ?target, "zoom in has no resolvable target");
                None
            }
        }
    }

    pub fn zoom_out(&mut self, now_ms: u64) -> Option<LevelTransition> {
        if self.state.transitioning {
            trace!("zoom out ignored while settling");
            return None;
        }
        match self.state.level {
            ZoomLevel::Days => {
                self.state.selected_quarter = None;
                Some(self.begin_transition(ZoomLevel::Months, now_ms))
            }
            ZoomLevel::Months => {
                self.state.selected_year = None;
                Some(self.begin_transition(ZoomLevel::Years, now_ms))
            }
            ZoomLevel::Years => None,
        }
    }

    /// Explicit year selection bypassing focus resolution.
    pub fn select_year(
        &mut self,
        dataset: &Dataset,
        year: i32,
        now_ms: u64,
    ) -> Option<LevelTransition> {
        if self.state.transitioning || self.state.level != ZoomLevel::Years {
            trace!(year, level = ?self.state.level, "year selection ignored");
            return None;
        }
        if dataset.year(year).is_none() {
            trace!(year, "year selection outside dataset");
            return None;
        }
        self.state.selected_year = Some(year);
        Some(self.begin_transition(ZoomLevel::Months, now_ms))
    }

    /// Explicit quarter selection bypassing focus resolution.
    pub fn select_quarter(&mut self, quarter_index: u8, now_ms: u64) -> Option<LevelTransition> {
        if self.state.transitioning || self.state.level != ZoomLevel::Months {
            trace!(quarter_index, level = ?self.state.level, "quarter selection ignored");
            return None;
        }
        let quarter = Quarter::new(quarter_index)?;
        self.state.selected_quarter = Some(quarter);
        Some(self.begin_transition(ZoomLevel::Days, now_ms))
    }

    /// Records a continuous zoom factor and turns threshold crossings into
    /// level changes. The factor returns to neutral after a transition.
    pub fn apply_zoom_factor(&mut self, factor: f64, now_ms: u64) -> Option<LevelTransition> {
        if !factor.is_finite() {
            return None;
        }
        let next = self.zoom.clamp(factor);
        let previous = std::mem::replace(&mut self.zoom_factor, next);
        let crossing = resolve_zoom_crossing(previous, next, self.zoom)?;
        if self.state.transitioning {
            trace!(?crossing, "zoom crossing ignored while settling");
            return None;
        }
        match crossing {
            ZoomCrossing::In => self.zoom_in(now_ms),
            ZoomCrossing::Out => self.zoom_out(now_ms),
        }
    }

    /// Fires the settle timer when due. Returns `true` when a transition
    /// settled.
    pub fn expire_timers(&mut self, now_ms: u64) -> bool {
        if self.settle.take_due(now_ms).is_none() || !self.state.transitioning {
            return false;
        }
        self.state.transitioning = false;
        debug!(level = ?self.state.level, now_ms, "level transition settled");
        true
    }

    fn begin_transition(&mut self, to: ZoomLevel, now_ms: u64) -> LevelTransition {
        let from = self.state.level;
        self.state.level = to;
        self.state.transitioning = true;
        self.state.focused_child_index = None;
        self.focus_target = None;
        self.zoom_factor = NEUTRAL_ZOOM_FACTOR;
        self.settle.schedule(now_ms, self.behavior.settle_duration_ms);

        let transition = LevelTransition {
            from,
            to,
            selected_year: self.state.selected_year,
            selected_quarter: self.state.selected_quarter,
        };
        debug!(
            ?from,
            ?to,
            selected_year = ?transition.selected_year,
            selected_quarter = ?transition.selected_quarter,
            "level transition started"
        );
        transition
    }
}
