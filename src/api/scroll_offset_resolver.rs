/// Maximum horizontal scroll offset for a strip of `content_width_px` shown
/// in `viewport_width_px`.
pub(super) fn resolve_max_scroll_offset(content_width_px: f64, viewport_width_px: f64) -> f64 {
    if !content_width_px.is_finite() || !viewport_width_px.is_finite() {
        return 0.0;
    }
    (content_width_px - viewport_width_px).max(0.0)
}

/// Offset after dragging content by `pan_dx` pixels.
///
/// Dragging content to the right (positive `dx`) reveals earlier items, so
/// the offset moves the opposite way. Returns `None` for non-finite input.
pub(super) fn resolve_pan_scroll_offset(
    current_offset_px: f64,
    pan_dx: f64,
    max_offset_px: f64,
) -> Option<f64> {
    if !current_offset_px.is_finite() || !pan_dx.is_finite() || !max_offset_px.is_finite() {
        return None;
    }
    Some((current_offset_px - pan_dx).clamp(0.0, max_offset_px.max(0.0)))
}

/// Magnification of the derived year/quarter strip for a zoom factor.
///
/// Factors below neutral never shrink the strip below the viewport width.
pub(super) fn resolve_strip_magnification(zoom_factor: f64) -> f64 {
    if !zoom_factor.is_finite() {
        return 1.0;
    }
    zoom_factor.max(1.0)
}

/// Offset that keeps the content under `anchor_x` in place when the strip
/// is rescaled by `ratio`.
pub(super) fn resolve_anchored_scroll_offset(
    current_offset_px: f64,
    anchor_x: f64,
    ratio: f64,
    max_offset_px: f64,
) -> Option<f64> {
    if !current_offset_px.is_finite() || !ratio.is_finite() || ratio <= 0.0 {
        return None;
    }
    let next = (current_offset_px + anchor_x) * ratio - anchor_x;
    Some(next.clamp(0.0, max_offset_px.max(0.0)))
}

/// Half-open range of day indices intersecting the viewport.
pub(super) fn resolve_visible_day_range(
    scroll_offset_px: f64,
    viewport_width_px: f64,
    day_spacing_px: f64,
    day_count: usize,
) -> Option<(usize, usize)> {
    if day_count == 0 || day_spacing_px <= 0.0 || !scroll_offset_px.is_finite() {
        return None;
    }
    let first = (scroll_offset_px / day_spacing_px).floor().max(0.0) as usize;
    let end = ((scroll_offset_px + viewport_width_px) / day_spacing_px).ceil() as usize;
    let first = first.min(day_count - 1);
    let end = end.clamp(first + 1, day_count);
    Some((first, end))
}
