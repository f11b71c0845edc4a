use serde::{Deserialize, Serialize};

use crate::core::{DatasetConfig, Viewport};
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::GestureConfig;

use super::{DayAxisBehavior, NavigationBehavior};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist or ship widget tuning as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineEngineConfig {
    pub viewport: Viewport,
    #[serde(default = "default_dataset_config")]
    pub dataset: DatasetConfig,
    #[serde(default = "default_gesture_config")]
    pub gesture: GestureConfig,
    #[serde(default = "default_navigation_behavior")]
    pub navigation: NavigationBehavior,
    #[serde(default = "default_day_axis_behavior")]
    pub day_axis: DayAxisBehavior,
    /// Fixed seed for the sample dataset; entropy-seeded when absent.
    #[serde(default)]
    pub dataset_seed: Option<u64>,
}

impl TimelineEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            dataset: default_dataset_config(),
            gesture: default_gesture_config(),
            navigation: default_navigation_behavior(),
            day_axis: default_day_axis_behavior(),
            dataset_seed: None,
        }
    }

    #[must_use]
    pub fn with_dataset_config(mut self, dataset: DatasetConfig) -> Self {
        self.dataset = dataset;
        self
    }

    #[must_use]
    pub fn with_dataset_seed(mut self, seed: u64) -> Self {
        self.dataset_seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_gesture_config(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    #[must_use]
    pub fn with_navigation_behavior(mut self, behavior: NavigationBehavior) -> Self {
        self.navigation = behavior;
        self
    }

    #[must_use]
    pub fn with_day_axis_behavior(mut self, behavior: DayAxisBehavior) -> Self {
        self.day_axis = behavior;
        self
    }

    pub fn to_json_pretty(&self) -> TimelineResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> TimelineResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| TimelineError::InvalidData(format!("failed to parse engine config: {e}")))
    }
}

fn default_dataset_config() -> DatasetConfig {
    DatasetConfig::default()
}

fn default_gesture_config() -> GestureConfig {
    GestureConfig::default()
}

fn default_navigation_behavior() -> NavigationBehavior {
    NavigationBehavior::default()
}

fn default_day_axis_behavior() -> DayAxisBehavior {
    DayAxisBehavior::default()
}
