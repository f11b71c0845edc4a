mod gesture_interpreter;
mod input_source;
pub(crate) mod zoom_factor;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Point;
use crate::error::{TimelineError, TimelineResult};

pub use gesture_interpreter::GestureInterpreter;
pub use input_source::{InputListenerKind, InputSource, InputSubscription, ListenerOptions};
pub use zoom_factor::ZoomCrossing;

pub const DEFAULT_PINCH_ZOOM_THRESHOLD_PX: f64 = 1500.0;
pub const DEFAULT_PINCH_COOLDOWN_MS: u64 = 500;
pub const DEFAULT_WHEEL_NOISE_THRESHOLD: f64 = 2.0;
pub const DEFAULT_MIN_ZOOM_FACTOR: f64 = 0.8;
pub const DEFAULT_MAX_ZOOM_FACTOR: f64 = 5.0;
pub const DEFAULT_ZOOM_IN_THRESHOLD: f64 = 4.8;
pub const DEFAULT_ZOOM_OUT_THRESHOLD: f64 = 0.9;
pub const DEFAULT_WHEEL_ZOOM_STEP_RATIO: f64 = 0.25;
pub const NEUTRAL_ZOOM_FACTOR: f64 = 1.0;

/// One active contact (finger or pen) in host pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    pub id: u32,
    pub x: f64,
    pub y: f64,
}

impl ContactPoint {
    #[must_use]
    pub fn new(id: u32, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    #[must_use]
    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Ordered set of active contacts carried by contact events.
pub type ContactSet = SmallVec<[ContactPoint; 4]>;

/// Modifier state of a wheel event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WheelModifiers {
    pub ctrl: bool,
    pub meta: bool,
}

impl WheelModifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        meta: false,
    };
    pub const CTRL: Self = Self {
        ctrl: true,
        meta: false,
    };

    /// Browsers report trackpad pinch as ctrl+wheel; meta covers macOS cmd.
    #[must_use]
    pub fn precision_zoom(self) -> bool {
        self.ctrl || self.meta
    }
}

/// Raw input accepted by the interpreter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    ContactStart { contacts: ContactSet },
    ContactMove { contacts: ContactSet },
    /// `contacts` lists the contacts still down after the release.
    ContactEnd { contacts: ContactSet },
    Wheel { delta_y: f64, modifiers: WheelModifiers },
}

impl InputEvent {
    #[must_use]
    pub fn contact_start(contacts: &[ContactPoint]) -> Self {
        Self::ContactStart {
            contacts: SmallVec::from_slice(contacts),
        }
    }

    #[must_use]
    pub fn contact_move(contacts: &[ContactPoint]) -> Self {
        Self::ContactMove {
            contacts: SmallVec::from_slice(contacts),
        }
    }

    #[must_use]
    pub fn contact_end(remaining: &[ContactPoint]) -> Self {
        Self::ContactEnd {
            contacts: SmallVec::from_slice(remaining),
        }
    }

    #[must_use]
    pub fn wheel(delta_y: f64, modifiers: WheelModifiers) -> Self {
        Self::Wheel { delta_y, modifiers }
    }
}

/// Abstract intents produced from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureIntent {
    ZoomIn,
    ZoomOut,
    ContinuousZoom { factor: f64 },
    Pan { dx: f64, dy: f64 },
}

/// Strategy used to turn pinch/wheel input into zoom intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ZoomIntentMode {
    /// Thresholded pinch delta / wheel notch emits `ZoomIn`/`ZoomOut` with a cooldown.
    Discrete,
    /// Accumulated factor emitted as `ContinuousZoom` on every update.
    #[default]
    Continuous,
}

/// Result of feeding one input event to the interpreter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureOutput {
    pub intents: SmallVec<[GestureIntent; 2]>,
    /// Host must cancel the platform default (page zoom/scroll) when set.
    pub suppress_default: bool,
}

impl GestureOutput {
    #[must_use]
    pub fn ignored() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }
}

/// Public per-gesture reference state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    pub initial_pinch_distance: Option<f64>,
    pub last_pointer_center: Option<Point>,
    pub pinch_cooldown_active: bool,
    pub zoom_factor: f64,
}

/// Range and thresholds of the continuous zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContinuousZoomConfig {
    pub min_zoom_factor: f64,
    pub max_zoom_factor: f64,
    /// Crossing above this factor zooms in one level.
    pub zoom_in_threshold: f64,
    /// Crossing below this factor zooms out one level.
    pub zoom_out_threshold: f64,
    /// Per wheel notch (120 units) multiplicative step.
    pub wheel_zoom_step_ratio: f64,
}

impl Default for ContinuousZoomConfig {
    fn default() -> Self {
        Self {
            min_zoom_factor: DEFAULT_MIN_ZOOM_FACTOR,
            max_zoom_factor: DEFAULT_MAX_ZOOM_FACTOR,
            zoom_in_threshold: DEFAULT_ZOOM_IN_THRESHOLD,
            zoom_out_threshold: DEFAULT_ZOOM_OUT_THRESHOLD,
            wheel_zoom_step_ratio: DEFAULT_WHEEL_ZOOM_STEP_RATIO,
        }
    }
}

impl ContinuousZoomConfig {
    #[must_use]
    pub fn clamp(self, factor: f64) -> f64 {
        factor.clamp(self.min_zoom_factor, self.max_zoom_factor)
    }

    /// Whether `factor` lies strictly between the two level thresholds.
    #[must_use]
    pub fn is_neutral(self, factor: f64) -> bool {
        factor > self.zoom_out_threshold && factor < self.zoom_in_threshold
    }

    pub fn validate(self) -> TimelineResult<Self> {
        let values = [
            self.min_zoom_factor,
            self.max_zoom_factor,
            self.zoom_in_threshold,
            self.zoom_out_threshold,
            self.wheel_zoom_step_ratio,
        ];
        if values.iter().any(|value| !value.is_finite()) {
            return Err(TimelineError::InvalidData(
                "continuous zoom values must be finite".to_owned(),
            ));
        }
        if self.min_zoom_factor <= 0.0 || self.min_zoom_factor >= self.max_zoom_factor {
            return Err(TimelineError::InvalidData(
                "continuous zoom requires 0 < min_zoom_factor < max_zoom_factor".to_owned(),
            ));
        }
        if !(self.min_zoom_factor..NEUTRAL_ZOOM_FACTOR).contains(&self.zoom_out_threshold) {
            return Err(TimelineError::InvalidData(
                "zoom_out_threshold must be in [min_zoom_factor, 1.0)".to_owned(),
            ));
        }
        if self.zoom_in_threshold <= NEUTRAL_ZOOM_FACTOR
            || self.zoom_in_threshold > self.max_zoom_factor
        {
            return Err(TimelineError::InvalidData(
                "zoom_in_threshold must be in (1.0, max_zoom_factor]".to_owned(),
            ));
        }
        if self.wheel_zoom_step_ratio <= 0.0 {
            return Err(TimelineError::InvalidData(
                "wheel_zoom_step_ratio must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Tuning of the gesture interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GestureConfig {
    #[serde(default)]
    pub mode: ZoomIntentMode,
    /// Pinch distance change needed for one discrete zoom step.
    pub pinch_zoom_threshold_px: f64,
    /// Quiet period after a discrete pinch zoom.
    pub pinch_cooldown_ms: u64,
    /// Modified-wheel `|delta_y|` at or below this value is treated as noise.
    pub wheel_noise_threshold: f64,
    #[serde(default)]
    pub continuous: ContinuousZoomConfig,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            mode: ZoomIntentMode::default(),
            pinch_zoom_threshold_px: DEFAULT_PINCH_ZOOM_THRESHOLD_PX,
            pinch_cooldown_ms: DEFAULT_PINCH_COOLDOWN_MS,
            wheel_noise_threshold: DEFAULT_WHEEL_NOISE_THRESHOLD,
            continuous: ContinuousZoomConfig::default(),
        }
    }
}

impl GestureConfig {
    #[must_use]
    pub fn discrete() -> Self {
        Self {
            mode: ZoomIntentMode::Discrete,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn continuous() -> Self {
        Self {
            mode: ZoomIntentMode::Continuous,
            ..Self::default()
        }
    }

    pub fn validate(self) -> TimelineResult<Self> {
        if !self.pinch_zoom_threshold_px.is_finite() || self.pinch_zoom_threshold_px <= 0.0 {
            return Err(TimelineError::InvalidData(
                "pinch_zoom_threshold_px must be finite and > 0".to_owned(),
            ));
        }
        if !self.wheel_noise_threshold.is_finite() || self.wheel_noise_threshold < 0.0 {
            return Err(TimelineError::InvalidData(
                "wheel_noise_threshold must be finite and >= 0".to_owned(),
            ));
        }
        self.continuous.validate()?;
        Ok(self)
    }
}
