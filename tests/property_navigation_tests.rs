use proptest::prelude::*;
use timeline_rs::api::{TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::{Viewport, ZoomLevel};
use timeline_rs::interaction::{InputEvent, WheelModifiers};
use timeline_rs::render::NullRenderer;

#[derive(Debug, Clone, Copy)]
enum Step {
    ZoomIn,
    ZoomOut,
    Advance(u64),
    Wheel(f64),
    Pan(f64),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::ZoomIn),
        Just(Step::ZoomOut),
        (0u64..700).prop_map(Step::Advance),
        (-2_400.0f64..2_400.0).prop_map(Step::Wheel),
        (-3_000.0f64..3_000.0).prop_map(Step::Pan),
    ]
}

fn level_rank(level: ZoomLevel) -> i32 {
    match level {
        ZoomLevel::Years => 0,
        ZoomLevel::Months => 1,
        ZoomLevel::Days => 2,
    }
}

fn run(steps: &[Step], seed: u64) -> Vec<(ZoomLevel, Option<usize>, f64)> {
    let config = TimelineEngineConfig::new(Viewport::new(700, 400)).with_dataset_seed(seed);
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    let mut now_ms = 0u64;
    let mut trace = Vec::with_capacity(steps.len());
    for step in steps {
        match *step {
            Step::ZoomIn => {
                engine.zoom_in(now_ms);
            }
            Step::ZoomOut => {
                engine.zoom_out(now_ms);
            }
            Step::Advance(dt) => {
                now_ms += dt;
                engine.advance_time(now_ms);
            }
            Step::Wheel(delta_y) => {
                engine.handle_input(&InputEvent::wheel(delta_y, WheelModifiers::CTRL), now_ms);
            }
            Step::Pan(dx) => {
                engine.pan(dx);
            }
        }
        let state = engine.navigation_state();
        trace.push((state.level, state.focused_child_index, engine.scroll_offset_px()));
    }
    trace
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn random_navigation_keeps_state_consistent(
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 1..48),
    ) {
        let config = TimelineEngineConfig::new(Viewport::new(700, 400)).with_dataset_seed(seed);
        let mut engine = TimelineEngine::new(NullRenderer::default(), config)
            .expect("engine init");
        let mut now_ms = 0u64;
        let mut previous_level = engine.zoom_level();

        for step in &steps {
            let transition = match *step {
                Step::ZoomIn => engine.zoom_in(now_ms),
                Step::ZoomOut => engine.zoom_out(now_ms),
                Step::Advance(dt) => {
                    now_ms += dt;
                    engine.advance_time(now_ms);
                    None
                }
                Step::Wheel(delta_y) => engine
                    .handle_input(&InputEvent::wheel(delta_y, WheelModifiers::CTRL), now_ms)
                    .transition,
                Step::Pan(dx) => {
                    engine.pan(dx);
                    None
                }
            };

            let state = engine.navigation_state();
            prop_assert!(state.is_consistent(), "inconsistent state {:?}", state);
            prop_assert!((level_rank(state.level) - level_rank(previous_level)).abs() <= 1);
            if let Some(transition) = transition {
                prop_assert_eq!(transition.from, previous_level);
                prop_assert_eq!(transition.to, state.level);
                prop_assert!(state.transitioning);
            }

            let factor = engine.zoom_factor();
            prop_assert!((0.8..=5.0).contains(&factor), "factor {} out of range", factor);
            prop_assert!(engine.scroll_offset_px() >= 0.0);
            if state.level == ZoomLevel::Days {
                prop_assert_eq!(state.focused_child_index, None);
            }
            prop_assert_eq!(engine.clock_ms(), now_ms);
            previous_level = state.level;
        }
    }

    #[test]
    fn identical_input_yields_identical_focus_trace(
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 1..32),
    ) {
        prop_assert_eq!(run(&steps, seed), run(&steps, seed));
    }
}
