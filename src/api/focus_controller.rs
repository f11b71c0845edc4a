use tracing::trace;

use crate::core::{Quarter, ZoomLevel};
use crate::error::{TimelineError, TimelineResult};
use crate::extensions::PluginEvent;
use crate::render::Renderer;

use super::scroll_offset_resolver::resolve_strip_magnification;
use super::validation::validate_child_layout;
use super::{ChildLayout, FocusTarget, TimelineEngine, resolve_focus_index};

impl<R: Renderer> TimelineEngine<R> {
    /// Layout of the focusable children at the current level, `None` at
    /// `Days`.
    ///
    /// Without a measured layout the children share the viewport width,
    /// magnified by the continuous zoom factor.
    #[must_use]
    pub fn child_layout(&self) -> Option<ChildLayout> {
        let count = self.child_count()?;
        if let Some(measured) = &self.core.model.measured_layout {
            return Some(measured.clone());
        }
        let magnification =
            resolve_strip_magnification(self.core.model.navigation.zoom_factor());
        Some(ChildLayout::uniform(
            count,
            f64::from(self.core.model.viewport.width) * magnification,
        ))
    }

    /// Replaces the derived layout with positions measured by the host.
    ///
    /// The layout applies to the current level only and is dropped on the
    /// next level change.
    pub fn set_child_layout(&mut self, layout: ChildLayout) -> TimelineResult<()> {
        let Some(count) = self.child_count() else {
            return Err(TimelineError::InvalidData(
                "day level has no focusable children".to_owned(),
            ));
        };
        validate_child_layout(&layout, count)?;
        self.core.model.measured_layout = Some(layout);
        self.clamp_scroll_offset();
        self.refresh_focus();
        Ok(())
    }

    #[must_use]
    pub fn focused_child_index(&self) -> Option<usize> {
        self.core.model.navigation.state().focused_child_index
    }

    #[must_use]
    pub fn focus_target(&self) -> Option<FocusTarget> {
        self.core.model.navigation.focus_target()
    }

    pub(super) fn child_count(&self) -> Option<usize> {
        match self.core.model.navigation.level() {
            ZoomLevel::Years => Some(self.core.model.dataset.len()),
            ZoomLevel::Months => Some(Quarter::COUNT),
            ZoomLevel::Days => None,
        }
    }

    pub(super) fn resolve_focus(&self) -> Option<(usize, FocusTarget)> {
        let layout = self.child_layout()?;
        let center = self.core.model.viewport.center_x();
        let index = resolve_focus_index(
            layout.screen_centers(self.core.model.scroll_offset_px),
            center,
        )?;
        let target = match self.core.model.navigation.level() {
            ZoomLevel::Years => FocusTarget::Year(self.core.model.dataset.year_at(index)?.year),
            ZoomLevel::Months => FocusTarget::Quarter(Quarter::from_index(index)?),
            ZoomLevel::Days => return None,
        };
        Some((index, target))
    }

    pub(super) fn refresh_focus(&mut self) {
        let focus = self.resolve_focus();
        if self.core.model.navigation.set_focus(focus) {
            let index = focus.map(|(index, _)| index);
            trace!(?index, "focus changed");
            self.emit_plugin_event(PluginEvent::FocusChanged { index });
        }
    }
}
