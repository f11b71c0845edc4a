use crate::core::Viewport;
use crate::error::{TimelineError, TimelineResult};

use super::{ChildLayout, DayAxisBehavior, NavigationBehavior};

const MAX_SETTLE_DURATION_MS: u64 = 60_000;

pub(super) fn validate_viewport(viewport: Viewport) -> TimelineResult<Viewport> {
    if !viewport.is_valid() {
        return Err(TimelineError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

pub(super) fn validate_navigation_behavior(
    behavior: NavigationBehavior,
) -> TimelineResult<NavigationBehavior> {
    if behavior.settle_duration_ms > MAX_SETTLE_DURATION_MS {
        return Err(TimelineError::InvalidData(format!(
            "navigation settle_duration_ms must be <= {MAX_SETTLE_DURATION_MS}"
        )));
    }
    Ok(behavior)
}

pub(super) fn validate_day_axis_behavior(
    behavior: DayAxisBehavior,
) -> TimelineResult<DayAxisBehavior> {
    if !behavior.day_spacing_px.is_finite() || behavior.day_spacing_px <= 0.0 {
        return Err(TimelineError::InvalidData(
            "day axis day_spacing_px must be finite and > 0".to_owned(),
        ));
    }
    Ok(behavior)
}

pub(super) fn validate_child_layout(
    layout: &ChildLayout,
    expected_count: usize,
) -> TimelineResult<()> {
    if layout.centers.len() != expected_count {
        return Err(TimelineError::InvalidData(format!(
            "child layout must describe {expected_count} items, got {}",
            layout.centers.len()
        )));
    }
    if !layout.content_width.is_finite() || layout.content_width < 0.0 {
        return Err(TimelineError::InvalidData(
            "child layout content_width must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_child_layout, validate_day_axis_behavior, validate_viewport};
    use crate::api::{ChildLayout, DayAxisBehavior};
    use crate::core::Viewport;
    use crate::error::TimelineError;

    #[test]
    fn zero_sized_viewport_is_rejected() {
        let err = validate_viewport(Viewport::new(0, 300)).expect_err("must fail");
        assert!(matches!(
            err,
            TimelineError::InvalidViewport {
                width: 0,
                height: 300
            }
        ));
    }

    #[test]
    fn non_positive_day_spacing_is_rejected() {
        let behavior = DayAxisBehavior {
            day_spacing_px: 0.0,
        };
        assert!(validate_day_axis_behavior(behavior).is_err());
    }

    #[test]
    fn child_layout_count_must_match_level() {
        let layout = ChildLayout::uniform(4, 800.0);
        validate_child_layout(&layout, 4).expect("matching count");
        let err = validate_child_layout(&layout, 7).expect_err("mismatch must fail");
        assert!(format!("{err}").contains("7 items"));
    }
}
