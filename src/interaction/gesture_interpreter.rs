use tracing::{debug, trace};

use crate::core::{Point, TimerSlot};
use crate::error::TimelineResult;

use super::zoom_factor::{resolve_pinch_zoom_factor, resolve_wheel_zoom_factor};
use super::{
    ContactPoint, GestureConfig, GestureIntent, GestureOutput, GestureState, InputEvent,
    InputSource, InputSubscription, NEUTRAL_ZOOM_FACTOR, WheelModifiers, ZoomIntentMode,
};

/// Classifies raw contact and wheel input into [`GestureIntent`]s.
///
/// The interpreter owns the per-gesture reference state (pinch distance, last
/// pointer center, pinch cooldown) and, in continuous mode, the accumulated
/// zoom factor. It never touches navigation state.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    config: GestureConfig,
    initial_pinch_distance: Option<f64>,
    last_pinch_distance: Option<f64>,
    pinch_start_factor: f64,
    last_pointer_center: Option<Point>,
    pinch_cooldown: TimerSlot,
    zoom_factor: f64,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig) -> TimelineResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            initial_pinch_distance: None,
            last_pinch_distance: None,
            pinch_start_factor: NEUTRAL_ZOOM_FACTOR,
            last_pointer_center: None,
            pinch_cooldown: TimerSlot::new(),
            zoom_factor: NEUTRAL_ZOOM_FACTOR,
        })
    }

    #[must_use]
    pub fn config(&self) -> GestureConfig {
        self.config
    }

    /// Replaces the tuning. Any in-flight gesture and accumulated factor are dropped.
    pub fn set_config(&mut self, config: GestureConfig) -> TimelineResult<()> {
        self.config = config.validate()?;
        self.reset_gesture();
        self.pinch_cooldown.cancel();
        self.reset_zoom_factor();
        Ok(())
    }

    #[must_use]
    pub fn mode(&self) -> ZoomIntentMode {
        self.config.mode
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn is_pinch_cooldown_active(&self) -> bool {
        self.pinch_cooldown.is_pending()
    }

    #[must_use]
    pub fn state(&self) -> GestureState {
        GestureState {
            initial_pinch_distance: self.initial_pinch_distance,
            last_pointer_center: self.last_pointer_center,
            pinch_cooldown_active: self.is_pinch_cooldown_active(),
            zoom_factor: self.zoom_factor,
        }
    }

    /// Subscribes to `source` and starts from a clean gesture state.
    pub fn attach<S: InputSource>(&mut self, source: S) -> TimelineResult<InputSubscription<S>> {
        self.reset_gesture();
        InputSubscription::attach(source)
    }

    /// Releases `subscription` and clears any half-finished gesture.
    pub fn detach<S: InputSource>(&mut self, subscription: InputSubscription<S>) {
        subscription.detach();
        self.reset_gesture();
    }

    /// Clears reference distance and center; the next contact starts fresh.
    pub fn reset_gesture(&mut self) {
        self.initial_pinch_distance = None;
        self.last_pinch_distance = None;
        self.last_pointer_center = None;
        self.pinch_start_factor = self.zoom_factor;
    }

    pub fn reset_zoom_factor(&mut self) {
        self.zoom_factor = NEUTRAL_ZOOM_FACTOR;
        self.pinch_start_factor = NEUTRAL_ZOOM_FACTOR;
        if self.config.mode == ZoomIntentMode::Continuous && self.initial_pinch_distance.is_some()
        {
            // An ongoing pinch continues from neutral at the current finger distance.
            self.initial_pinch_distance = self.last_pinch_distance;
        }
    }

    /// Fires the pinch cooldown when due. Returns `true` when it expired.
    pub fn expire_timers(&mut self, now_ms: u64) -> bool {
        if self.pinch_cooldown.take_due(now_ms).is_some() {
            trace!(now_ms, "pinch cooldown expired");
            return true;
        }
        false
    }

    pub fn handle(&mut self, event: &InputEvent, now_ms: u64) -> GestureOutput {
        self.expire_timers(now_ms);
        match event {
            InputEvent::ContactStart { contacts } => self.on_contact_start(contacts),
            InputEvent::ContactMove { contacts } => self.on_contact_move(contacts, now_ms),
            InputEvent::ContactEnd { contacts } => self.on_contact_end(contacts),
            InputEvent::Wheel { delta_y, modifiers } => self.on_wheel(*delta_y, *modifiers),
        }
    }

    fn on_contact_start(&mut self, contacts: &[ContactPoint]) -> GestureOutput {
        if !contacts_are_finite(contacts) {
            trace!("ignoring contact start with non-finite coordinates");
            return GestureOutput::ignored();
        }
        match contacts {
            [first, second] => {
                let (a, b) = (first.position(), second.position());
                self.initial_pinch_distance = Some(a.distance_to(b));
                self.last_pinch_distance = self.initial_pinch_distance;
                self.last_pointer_center = Some(a.midpoint(b));
                self.pinch_start_factor = self.zoom_factor;
            }
            [only] => {
                self.last_pointer_center = Some(only.position());
            }
            _ => trace!(count = contacts.len(), "ignoring unsupported contact count"),
        }
        GestureOutput::ignored()
    }

    fn on_contact_move(&mut self, contacts: &[ContactPoint], now_ms: u64) -> GestureOutput {
        if !contacts_are_finite(contacts) {
            trace!("ignoring contact move with non-finite coordinates");
            return GestureOutput::ignored();
        }
        let mut output = GestureOutput::ignored();
        match contacts {
            [first, second] => {
                let Some(reference_distance) = self.initial_pinch_distance else {
                    trace!("two-contact move without pinch start; ignoring");
                    return output;
                };
                let (a, b) = (first.position(), second.position());
                let current_distance = a.distance_to(b);
                self.last_pinch_distance = Some(current_distance);
                match self.config.mode {
                    ZoomIntentMode::Discrete => {
                        self.step_discrete_pinch(
                            reference_distance,
                            current_distance,
                            now_ms,
                            &mut output,
                        );
                    }
                    ZoomIntentMode::Continuous => {
                        self.step_continuous_pinch(
                            reference_distance,
                            current_distance,
                            &mut output,
                        );
                    }
                }
                self.push_pan(a.midpoint(b), &mut output);
                output.suppress_default = true;
            }
            [only] => {
                if self.last_pointer_center.is_none() {
                    trace!("single-contact move without start; ignoring");
                    return output;
                }
                self.push_pan(only.position(), &mut output);
                output.suppress_default = true;
            }
            _ => trace!(count = contacts.len(), "ignoring unsupported contact count"),
        }
        output
    }

    fn step_discrete_pinch(
        &mut self,
        reference_distance: f64,
        current_distance: f64,
        now_ms: u64,
        output: &mut GestureOutput,
    ) {
        if self.pinch_cooldown.is_pending() {
            return;
        }
        let delta = current_distance - reference_distance;
        let intent = if delta > self.config.pinch_zoom_threshold_px {
            GestureIntent::ZoomIn
        } else if delta < -self.config.pinch_zoom_threshold_px {
            GestureIntent::ZoomOut
        } else {
            return;
        };
        debug!(?intent, delta, "discrete pinch step");
        output.intents.push(intent);
        self.initial_pinch_distance = Some(current_distance);
        self.pinch_cooldown.schedule(now_ms, self.config.pinch_cooldown_ms);
    }

    fn step_continuous_pinch(
        &mut self,
        reference_distance: f64,
        current_distance: f64,
        output: &mut GestureOutput,
    ) {
        let Some(raw) =
            resolve_pinch_zoom_factor(self.pinch_start_factor, reference_distance, current_distance)
        else {
            return;
        };
        self.zoom_factor = self.config.continuous.clamp(raw);
        output.intents.push(GestureIntent::ContinuousZoom {
            factor: self.zoom_factor,
        });
    }

    fn push_pan(&mut self, center: Point, output: &mut GestureOutput) {
        if let Some(last) = self.last_pointer_center {
            let (dx, dy) = (center.x - last.x, center.y - last.y);
            if dx != 0.0 || dy != 0.0 {
                output.intents.push(GestureIntent::Pan { dx, dy });
            }
        }
        self.last_pointer_center = Some(center);
    }

    fn on_contact_end(&mut self, remaining: &[ContactPoint]) -> GestureOutput {
        let mut output = GestureOutput::ignored();
        let was_pinching = self.initial_pinch_distance.is_some();
        trace!(remaining = remaining.len(), "contact released; resetting gesture");
        self.reset_gesture();

        if was_pinching
            && self.config.mode == ZoomIntentMode::Continuous
            && self.zoom_factor != NEUTRAL_ZOOM_FACTOR
            && self.config.continuous.is_neutral(self.zoom_factor)
        {
            self.reset_zoom_factor();
            output.intents.push(GestureIntent::ContinuousZoom {
                factor: self.zoom_factor,
            });
        }
        output
    }

    fn on_wheel(&mut self, delta_y: f64, modifiers: WheelModifiers) -> GestureOutput {
        let mut output = GestureOutput::ignored();
        if !modifiers.precision_zoom() {
            return output;
        }
        output.suppress_default = true;
        if !delta_y.is_finite() || delta_y.abs() <= self.config.wheel_noise_threshold {
            trace!(delta_y, "modified wheel below noise threshold");
            return output;
        }

        match self.config.mode {
            ZoomIntentMode::Discrete => {
                let intent = if delta_y < 0.0 {
                    GestureIntent::ZoomIn
                } else {
                    GestureIntent::ZoomOut
                };
                output.intents.push(intent);
            }
            ZoomIntentMode::Continuous => {
                let Some(step) =
                    resolve_wheel_zoom_factor(delta_y, self.config.continuous.wheel_zoom_step_ratio)
                else {
                    return output;
                };
                self.zoom_factor = self.config.continuous.clamp(self.zoom_factor * step);
                self.pinch_start_factor = self.zoom_factor;
                if self.initial_pinch_distance.is_some() {
                    // An ongoing pinch continues from the wheel-adjusted factor.
                    self.initial_pinch_distance = self.last_pinch_distance;
                }
                output.intents.push(GestureIntent::ContinuousZoom {
                    factor: self.zoom_factor,
                });
            }
        }
        output
    }
}

fn contacts_are_finite(contacts: &[ContactPoint]) -> bool {
    contacts.iter().all(|contact| contact.position().is_finite())
}
