use super::{
    behavior::TimelineBehaviorState, timeline_model::TimelineModel,
    timeline_runtime::TimelineRuntimeState,
};

/// Internal engine core state used by the public facade (`TimelineEngine`).
pub(super) struct EngineCore {
    pub(super) model: TimelineModel,
    pub(super) behavior: TimelineBehaviorState,
    pub(super) runtime: TimelineRuntimeState,
}
