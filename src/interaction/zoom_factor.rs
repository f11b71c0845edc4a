use serde::{Deserialize, Serialize};

use super::ContinuousZoomConfig;

const WHEEL_STEP_UNITS: f64 = 120.0;
const MIN_PINCH_DISTANCE_PX: f64 = 1.0;

/// Direction of a zoom-factor threshold crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomCrossing {
    In,
    Out,
}

/// Multiplicative factor for one wheel event; negative deltas (scroll up)
/// zoom in.
pub(crate) fn resolve_wheel_zoom_factor(wheel_delta_y: f64, zoom_step_ratio: f64) -> Option<f64> {
    if wheel_delta_y == 0.0 || !wheel_delta_y.is_finite() {
        return None;
    }

    let normalized_steps = wheel_delta_y / WHEEL_STEP_UNITS;
    let base = 1.0 + zoom_step_ratio;
    let factor = base.powf(-normalized_steps);
    if !factor.is_finite() || factor <= 0.0 {
        return None;
    }
    Some(factor)
}

/// Factor implied by the ratio between the current and initial pinch
/// distance, relative to the factor held when the pinch started.
pub(crate) fn resolve_pinch_zoom_factor(
    start_factor: f64,
    initial_distance: f64,
    current_distance: f64,
) -> Option<f64> {
    if !initial_distance.is_finite()
        || !current_distance.is_finite()
        || initial_distance < MIN_PINCH_DISTANCE_PX
    {
        return None;
    }
    let factor = start_factor * (current_distance / initial_distance);
    if !factor.is_finite() || factor <= 0.0 {
        return None;
    }
    Some(factor)
}

/// Detects a crossing of the level thresholds between two factor values.
///
/// Reaching a threshold counts as crossing it.
pub(crate) fn resolve_zoom_crossing(
    previous: f64,
    next: f64,
    config: ContinuousZoomConfig,
) -> Option<ZoomCrossing> {
    if previous < config.zoom_in_threshold && next >= config.zoom_in_threshold {
        return Some(ZoomCrossing::In);
    }
    if previous > config.zoom_out_threshold && next <= config.zoom_out_threshold {
        return Some(ZoomCrossing::Out);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{
        ZoomCrossing, resolve_pinch_zoom_factor, resolve_wheel_zoom_factor, resolve_zoom_crossing,
    };
    use crate::interaction::ContinuousZoomConfig;

    #[test]
    fn zero_wheel_delta_returns_none() {
        assert!(resolve_wheel_zoom_factor(0.0, 0.25).is_none());
        assert!(resolve_wheel_zoom_factor(f64::NAN, 0.25).is_none());
    }

    #[test]
    fn negative_wheel_delta_produces_zoom_in_factor() {
        let factor = resolve_wheel_zoom_factor(-120.0, 0.25).expect("factor");
        assert!((factor - 1.25).abs() <= 1e-12);

        let factor = resolve_wheel_zoom_factor(120.0, 0.25).expect("factor");
        assert!(factor < 1.0);
    }

    #[test]
    fn pinch_factor_scales_from_start_factor() {
        let factor = resolve_pinch_zoom_factor(2.0, 100.0, 150.0).expect("factor");
        assert!((factor - 3.0).abs() <= 1e-12);
    }

    #[test]
    fn pinch_factor_rejects_degenerate_initial_distance() {
        assert!(resolve_pinch_zoom_factor(1.0, 0.0, 150.0).is_none());
        assert!(resolve_pinch_zoom_factor(1.0, 100.0, f64::INFINITY).is_none());
    }

    #[test]
    fn crossing_requires_leaving_the_neutral_side() {
        let config = ContinuousZoomConfig::default();
        assert_eq!(
            resolve_zoom_crossing(4.0, 4.8, config),
            Some(ZoomCrossing::In)
        );
        assert_eq!(resolve_zoom_crossing(4.9, 5.0, config), None);
        assert_eq!(
            resolve_zoom_crossing(1.0, 0.85, config),
            Some(ZoomCrossing::Out)
        );
        assert_eq!(resolve_zoom_crossing(0.85, 0.8, config), None);
        assert_eq!(resolve_zoom_crossing(1.0, 3.0, config), None);
    }
}
