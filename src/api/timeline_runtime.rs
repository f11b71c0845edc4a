use crate::extensions::TimelinePlugin;

/// Runtime orchestration state grouped separately from model/behavior.
pub(super) struct TimelineRuntimeState {
    pub(super) plugins: Vec<Box<dyn TimelinePlugin>>,
}

impl TimelineRuntimeState {
    #[must_use]
    pub(super) fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }
}
