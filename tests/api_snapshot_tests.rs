use timeline_rs::api::{
    DayAxisBehavior, ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshot, EngineSnapshotJsonContractV1,
    NavigationBehavior, TimelineEngine, TimelineEngineConfig,
};
use timeline_rs::core::{DatasetConfig, Viewport, ZoomLevel};
use timeline_rs::interaction::{GestureConfig, ZoomIntentMode};
use timeline_rs::render::NullRenderer;
use timeline_rs::{TimelineError, telemetry};

fn engine() -> TimelineEngine<NullRenderer> {
    let config = TimelineEngineConfig::new(Viewport::new(700, 400)).with_dataset_seed(21);
    TimelineEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn snapshot_reflects_navigation_and_scroll() {
    let mut engine = engine();
    engine.select_year(2026, 0).expect("months");
    engine.select_quarter(2, 300).expect("days");
    engine.pan(-200.0);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.navigation.level, ZoomLevel::Days);
    assert_eq!(snapshot.clock_ms, 300);
    assert_eq!(snapshot.selected_day_count, 92);
    assert_eq!(snapshot.visible_day_range, Some((1, 9)));
    assert_eq!(snapshot.year_range, Some((2024, 2030)));
    assert_eq!(snapshot.settle_deadline_ms, Some(600));
}

#[test]
fn snapshot_json_contract_round_trips() {
    let mut engine = engine();
    engine.zoom_in(10).expect("months");
    let snapshot = engine.snapshot();

    let contract_json = engine
        .snapshot_json_contract_v1_pretty()
        .expect("contract json");
    let contract: EngineSnapshotJsonContractV1 =
        serde_json::from_str(&contract_json).expect("parse contract");
    assert_eq!(contract.schema_version, ENGINE_SNAPSHOT_JSON_SCHEMA_V1);
    assert_eq!(contract.snapshot, snapshot);

    let bare_json = engine.snapshot_json_pretty().expect("bare json");
    assert_eq!(
        EngineSnapshot::from_json_compat_str(&bare_json).expect("bare"),
        snapshot
    );
    assert_eq!(
        EngineSnapshot::from_json_compat_str(&contract_json).expect("contract"),
        snapshot
    );
}

#[test]
fn unsupported_snapshot_schema_is_rejected() {
    let engine = engine();
    let payload = EngineSnapshotJsonContractV1 {
        schema_version: 99,
        snapshot: engine.snapshot(),
    };
    let json = serde_json::to_string(&payload).expect("serialize");
    let err = EngineSnapshot::from_json_compat_str(&json).expect_err("schema 99");
    assert!(format!("{err}").contains("unsupported snapshot schema version"));
}

#[test]
fn config_json_round_trips_and_fills_defaults() {
    let config = TimelineEngineConfig::new(Viewport::new(1024, 600))
        .with_dataset_config(DatasetConfig::default().with_year_range(2020, 2022))
        .with_dataset_seed(99)
        .with_gesture_config(GestureConfig::discrete())
        .with_navigation_behavior(NavigationBehavior {
            settle_duration_ms: 250,
        })
        .with_day_axis_behavior(DayAxisBehavior {
            day_spacing_px: 80.0,
        });
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(
        TimelineEngineConfig::from_json_str(&json).expect("parse"),
        config
    );

    let minimal =
        TimelineEngineConfig::from_json_str(r#"{"viewport":{"width":800,"height":480}}"#)
            .expect("minimal");
    assert_eq!(minimal, TimelineEngineConfig::new(Viewport::new(800, 480)));
    assert_eq!(minimal.gesture.mode, ZoomIntentMode::Continuous);
}

#[test]
fn engine_built_from_config_uses_its_sections() {
    let config = TimelineEngineConfig::new(Viewport::new(800, 480))
        .with_dataset_config(DatasetConfig::default().with_year_range(2026, 2027))
        .with_dataset_seed(4)
        .with_gesture_config(GestureConfig::discrete());
    let engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    assert_eq!(engine.dataset().year_range(), Some((2026, 2027)));
    assert_eq!(engine.gesture_config().mode, ZoomIntentMode::Discrete);
    assert_eq!(engine.header_title(), "2026 - 2027");
}

#[test]
fn invalid_configuration_is_rejected() {
    let err = TimelineEngine::new(
        NullRenderer::default(),
        TimelineEngineConfig::new(Viewport::new(0, 480)),
    )
    .err()
    .expect("zero width");
    assert!(matches!(err, TimelineError::InvalidViewport { width: 0, .. }));

    let config = TimelineEngineConfig::new(Viewport::new(800, 480)).with_gesture_config(
        GestureConfig {
            pinch_zoom_threshold_px: -1.0,
            ..GestureConfig::default()
        },
    );
    assert!(TimelineEngine::new(NullRenderer::default(), config).is_err());

    assert!(TimelineEngineConfig::from_json_str("{").is_err());
}

#[test]
fn tracing_init_is_safe_without_telemetry_feature() {
    let first = telemetry::init_default_tracing();
    let second = telemetry::init_default_tracing();
    assert!(!second || !first, "global subscriber can only be installed once");
}
