use tracing::debug;

use crate::core::Dataset;
use crate::error::{TimelineError, TimelineResult};
use crate::interaction::GestureInterpreter;
use crate::render::Renderer;

use super::{
    NavigationMachine, TimelineEngine, TimelineEngineConfig,
    behavior::TimelineBehaviorState,
    engine_core::EngineCore,
    timeline_model::{TimelineModel, TimelineModelBootstrap},
    timeline_runtime::TimelineRuntimeState,
    validation::{validate_day_axis_behavior, validate_navigation_behavior, validate_viewport},
};

impl<R: Renderer> TimelineEngine<R> {
    /// Creates an engine over a freshly generated sample dataset.
    pub fn new(renderer: R, config: TimelineEngineConfig) -> TimelineResult<Self> {
        validate_viewport(config.viewport)?;
        let dataset = match config.dataset_seed {
            Some(seed) => Dataset::generate_with_seed(&config.dataset, seed)?,
            None => Dataset::generate(&config.dataset)?,
        };
        Self::with_dataset(renderer, config, dataset)
    }

    /// Creates an engine over a caller-supplied dataset. `config.dataset`
    /// and `config.dataset_seed` are not consulted.
    pub fn with_dataset(
        renderer: R,
        config: TimelineEngineConfig,
        dataset: Dataset,
    ) -> TimelineResult<Self> {
        let viewport = validate_viewport(config.viewport)?;
        if dataset.is_empty() {
            return Err(TimelineError::InvalidData(
                "dataset must contain at least one year".to_owned(),
            ));
        }
        let navigation_behavior = validate_navigation_behavior(config.navigation)?;
        let day_axis = validate_day_axis_behavior(config.day_axis)?;
        let gesture = GestureInterpreter::new(config.gesture)?;
        let navigation = NavigationMachine::new(navigation_behavior, config.gesture.continuous);

        debug!(
            years = dataset.len(),
            width = viewport.width,
            height = viewport.height,
            mode = ?config.gesture.mode,
            "timeline engine initialized"
        );

        let mut engine = Self {
            renderer,
            core: EngineCore {
                model: TimelineModel::new(TimelineModelBootstrap {
                    dataset,
                    viewport,
                    gesture,
                    navigation,
                }),
                behavior: TimelineBehaviorState { day_axis },
                runtime: TimelineRuntimeState::new(),
            },
        };
        engine.refresh_focus();
        Ok(engine)
    }
}
