use crate::error::TimelineResult;
use crate::render::Renderer;

use super::validation::{validate_day_axis_behavior, validate_navigation_behavior};
use super::{DayAxisBehavior, NavigationBehavior, TimelineEngine};

impl<R: Renderer> TimelineEngine<R> {
    #[must_use]
    pub fn navigation_behavior(&self) -> NavigationBehavior {
        self.core.model.navigation.behavior()
    }

    pub fn set_navigation_behavior(&mut self, behavior: NavigationBehavior) -> TimelineResult<()> {
        let behavior = validate_navigation_behavior(behavior)?;
        self.core.model.navigation.set_behavior(behavior);
        Ok(())
    }

    #[must_use]
    pub fn day_axis_behavior(&self) -> DayAxisBehavior {
        self.core.behavior.day_axis
    }

    pub fn set_day_axis_behavior(&mut self, behavior: DayAxisBehavior) -> TimelineResult<()> {
        self.core.behavior.day_axis = validate_day_axis_behavior(behavior)?;
        self.clamp_scroll_offset();
        Ok(())
    }
}
