use crate::core::{Dataset, Viewport};
use crate::interaction::GestureInterpreter;

use super::{ChildLayout, NavigationMachine};

/// Domain state owned by the engine: data, input interpretation and
/// navigation.
pub(super) struct TimelineModel {
    pub(super) dataset: Dataset,
    pub(super) viewport: Viewport,
    pub(super) gesture: GestureInterpreter,
    pub(super) navigation: NavigationMachine,
    pub(super) scroll_offset_px: f64,
    /// Host-measured child layout for the current level. Cleared on every
    /// level change; a uniform layout is derived while absent.
    pub(super) measured_layout: Option<ChildLayout>,
    pub(super) clock_ms: u64,
}

pub(super) struct TimelineModelBootstrap {
    pub(super) dataset: Dataset,
    pub(super) viewport: Viewport,
    pub(super) gesture: GestureInterpreter,
    pub(super) navigation: NavigationMachine,
}

impl TimelineModel {
    #[must_use]
    pub(super) fn new(bootstrap: TimelineModelBootstrap) -> Self {
        Self {
            dataset: bootstrap.dataset,
            viewport: bootstrap.viewport,
            gesture: bootstrap.gesture,
            navigation: bootstrap.navigation,
            scroll_offset_px: 0.0,
            measured_layout: None,
            clock_ms: 0,
        }
    }
}
