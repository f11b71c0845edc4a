use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use timeline_rs::api::{ChildLayout, TimelineEngine, TimelineEngineConfig, resolve_focus_index};
use timeline_rs::core::{Dataset, DatasetConfig, Viewport};
use timeline_rs::interaction::{
    ContactPoint, GestureConfig, GestureInterpreter, InputEvent, WheelModifiers,
};
use timeline_rs::render::NullRenderer;

fn pinch_events(steps: usize) -> Vec<InputEvent> {
    let mut events = Vec::with_capacity(steps + 2);
    let start = [
        ContactPoint::new(1, 300.0, 200.0),
        ContactPoint::new(2, 400.0, 200.0),
    ];
    events.push(InputEvent::contact_start(&start));
    for step in 0..steps {
        let spread = 50.0 + step as f64 * 4.0;
        events.push(InputEvent::contact_move(&[
            ContactPoint::new(1, 350.0 - spread, 200.0),
            ContactPoint::new(2, 350.0 + spread, 200.0),
        ]));
    }
    events.push(InputEvent::contact_end(&[]));
    events
}

fn bench_pinch_interpretation(c: &mut Criterion) {
    let events = pinch_events(256);
    c.bench_function("pinch_interpretation_256_moves", |b| {
        b.iter(|| {
            let mut interpreter =
                GestureInterpreter::new(GestureConfig::continuous()).expect("interpreter");
            for (index, event) in events.iter().enumerate() {
                let _ = interpreter.handle(black_box(event), index as u64 * 16);
            }
        })
    });
}

fn bench_wheel_navigation(c: &mut Criterion) {
    let config = TimelineEngineConfig::new(Viewport::new(1280, 720)).with_dataset_seed(7);
    c.bench_function("wheel_navigation_engine", |b| {
        b.iter(|| {
            let mut engine =
                TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
            for step in 0..200u64 {
                let delta_y = if step % 40 < 20 { -120.0 } else { 120.0 };
                let _ = engine.handle_input(
                    black_box(&InputEvent::wheel(delta_y, WheelModifiers::CTRL)),
                    step * 50,
                );
            }
        })
    });
}

fn bench_focus_resolution(c: &mut Criterion) {
    let layout = ChildLayout::uniform(365, 365.0 * 90.0);
    c.bench_function("focus_resolution_365", |b| {
        b.iter(|| resolve_focus_index(layout.screen_centers(black_box(4_000.0)), 640.0))
    });
}

fn bench_dataset_generation(c: &mut Criterion) {
    let config = DatasetConfig::default();
    c.bench_function("dataset_generation_seeded", |b| {
        b.iter(|| Dataset::generate_with_seed(black_box(&config), 42).expect("dataset"))
    });
}

criterion_group!(
    benches,
    bench_pinch_interpretation,
    bench_wheel_navigation,
    bench_focus_resolution,
    bench_dataset_generation
);
criterion_main!(benches);
