use std::cell::RefCell;
use std::rc::Rc;

use timeline_rs::TimelineError;
use timeline_rs::api::{TimelineEngine, TimelineEngineConfig};
use timeline_rs::core::Viewport;
use timeline_rs::error::TimelineResult;
use timeline_rs::interaction::{
    GestureConfig, GestureInterpreter, InputListenerKind, InputSource, ListenerOptions,
};
use timeline_rs::render::NullRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Call {
    Attach(InputListenerKind, bool),
    Detach(InputListenerKind),
}

#[derive(Debug, Default)]
struct RecordingSource {
    calls: Rc<RefCell<Vec<Call>>>,
    fail_on: Option<InputListenerKind>,
}

impl RecordingSource {
    fn new(calls: Rc<RefCell<Vec<Call>>>) -> Self {
        Self {
            calls,
            fail_on: None,
        }
    }
}

impl InputSource for RecordingSource {
    fn attach_listener(
        &mut self,
        kind: InputListenerKind,
        options: ListenerOptions,
    ) -> TimelineResult<()> {
        if self.fail_on == Some(kind) {
            return Err(TimelineError::InputSubscription(format!(
                "{kind:?} listener rejected"
            )));
        }
        self.calls
            .borrow_mut()
            .push(Call::Attach(kind, options.passive));
        Ok(())
    }

    fn detach_listener(&mut self, kind: InputListenerKind) {
        self.calls.borrow_mut().push(Call::Detach(kind));
    }
}

fn attached_kinds(calls: &[Call]) -> usize {
    calls
        .iter()
        .filter(|call| matches!(call, Call::Attach(..)))
        .count()
}

fn detached_kinds(calls: &[Call]) -> usize {
    calls
        .iter()
        .filter(|call| matches!(call, Call::Detach(..)))
        .count()
}

#[test]
fn attach_registers_all_listeners_with_expected_passivity() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut interpreter = GestureInterpreter::new(GestureConfig::default()).expect("interpreter");
    let subscription = interpreter
        .attach(RecordingSource::new(calls.clone()))
        .expect("attach");
    assert!(subscription.is_attached());

    assert_eq!(
        calls.borrow().as_slice(),
        &[
            Call::Attach(InputListenerKind::ContactStart, false),
            Call::Attach(InputListenerKind::ContactMove, false),
            Call::Attach(InputListenerKind::ContactEnd, true),
            Call::Attach(InputListenerKind::Wheel, false),
        ]
    );

    interpreter.detach(subscription);
    assert_eq!(detached_kinds(&calls.borrow()), 4);
}

#[test]
fn dropping_the_guard_detaches_listeners() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut interpreter = GestureInterpreter::new(GestureConfig::default()).expect("interpreter");
    {
        let _subscription = interpreter
            .attach(RecordingSource::new(calls.clone()))
            .expect("attach");
        assert_eq!(detached_kinds(&calls.borrow()), 0);
    }
    assert_eq!(detached_kinds(&calls.borrow()), 4);
}

#[test]
fn explicit_release_is_idempotent() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut interpreter = GestureInterpreter::new(GestureConfig::default()).expect("interpreter");
    let mut subscription = interpreter
        .attach(RecordingSource::new(calls.clone()))
        .expect("attach");
    subscription.release();
    subscription.release();
    assert!(!subscription.is_attached());
    drop(subscription);
    assert_eq!(detached_kinds(&calls.borrow()), 4);
}

#[test]
fn partial_attach_failure_rolls_back() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let source = RecordingSource {
        calls: calls.clone(),
        fail_on: Some(InputListenerKind::ContactEnd),
    };
    let mut interpreter = GestureInterpreter::new(GestureConfig::default()).expect("interpreter");
    let err = interpreter.attach(source).expect_err("attach must fail");
    assert!(matches!(err, TimelineError::InputSubscription(_)));

    let calls = calls.borrow();
    assert_eq!(attached_kinds(&calls), 2);
    assert_eq!(
        &calls[2..],
        &[
            Call::Detach(InputListenerKind::ContactMove),
            Call::Detach(InputListenerKind::ContactStart),
        ]
    );
}

#[test]
fn engine_attach_and_detach_round_trip() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let config = TimelineEngineConfig::new(Viewport::new(640, 360)).with_dataset_seed(1);
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");

    let subscription = engine
        .attach_input(RecordingSource::new(calls.clone()))
        .expect("attach");
    assert_eq!(attached_kinds(&calls.borrow()), 4);
    assert_eq!(subscription.source().fail_on, None);

    engine.detach_input(subscription);
    assert_eq!(detached_kinds(&calls.borrow()), 4);
}
