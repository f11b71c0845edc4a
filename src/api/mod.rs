mod behavior;
mod behavior_controller;
mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod focus_controller;
mod focus_resolver;
mod input_controller;
mod json_contract;
mod navigation_controller;
mod navigation_machine;
mod navigation_state;
mod plugin_dispatch;
mod plugin_registry;
mod render_frame_builder;
mod scroll_offset_resolver;
mod snapshot_controller;
mod timeline_model;
mod timeline_runtime;
mod timer_controller;
mod validation;

pub use behavior::{
    DEFAULT_DAY_SPACING_PX, DEFAULT_SETTLE_DURATION_MS, DayAxisBehavior, NavigationBehavior,
};
pub use engine::TimelineEngine;
pub use engine_config::TimelineEngineConfig;
pub use engine_snapshot::EngineSnapshot;
pub use focus_resolver::{ChildLayout, resolve_focus_index};
pub use input_controller::InputResponse;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use navigation_machine::NavigationMachine;
pub use navigation_state::{FocusTarget, LevelTransition, NavigationState};
