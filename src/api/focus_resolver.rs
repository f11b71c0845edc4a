use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Horizontal placement of the focusable children of the current level, in
/// content coordinates (before scrolling).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildLayout {
    pub centers: Vec<f64>,
    pub content_width: f64,
}

impl ChildLayout {
    #[must_use]
    pub fn new(centers: Vec<f64>, content_width: f64) -> Self {
        Self {
            centers,
            content_width,
        }
    }

    /// `count` equal-width cells spread across `width`.
    #[must_use]
    pub fn uniform(count: usize, width: f64) -> Self {
        if count == 0 {
            return Self::new(Vec::new(), width);
        }
        let cell = width / count as f64;
        let centers = (0..count).map(|index| (index as f64 + 0.5) * cell).collect();
        Self::new(centers, width)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// Width of one cell, assuming the cells share the content width evenly.
    #[must_use]
    pub fn cell_width(&self) -> f64 {
        if self.centers.is_empty() {
            return 0.0;
        }
        self.content_width / self.centers.len() as f64
    }

    pub fn screen_centers(&self, scroll_offset_px: f64) -> impl Iterator<Item = f64> + '_ {
        self.centers
            .iter()
            .map(move |center| center - scroll_offset_px)
    }
}

/// Index of the item whose center is closest to `viewport_center_x`.
///
/// Exact ties resolve to the lower index. Non-finite centers are skipped.
pub fn resolve_focus_index<I>(item_centers: I, viewport_center_x: f64) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    if !viewport_center_x.is_finite() {
        return None;
    }
    item_centers
        .into_iter()
        .enumerate()
        .filter(|(_, center)| center.is_finite())
        .min_by_key(|(index, center)| (OrderedFloat((center - viewport_center_x).abs()), *index))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::{ChildLayout, resolve_focus_index};

    #[test]
    fn empty_layout_has_no_focus() {
        assert_eq!(resolve_focus_index(Vec::new(), 400.0), None);
    }

    #[test]
    fn nearest_center_wins() {
        let centers = vec![100.0, 300.0, 500.0, 700.0];
        assert_eq!(resolve_focus_index(centers, 420.0), Some(2));
    }

    #[test]
    fn exact_tie_picks_lower_index() {
        let centers = vec![300.0, 500.0];
        assert_eq!(resolve_focus_index(centers, 400.0), Some(0));
    }

    #[test]
    fn unmeasurable_items_are_skipped() {
        let centers = vec![f64::NAN, 900.0, f64::INFINITY];
        assert_eq!(resolve_focus_index(centers, 400.0), Some(1));
        assert_eq!(resolve_focus_index(vec![f64::NAN], 400.0), None);
    }

    #[test]
    fn uniform_layout_spreads_cells_evenly() {
        let layout = ChildLayout::uniform(4, 800.0);
        assert_eq!(layout.centers, vec![100.0, 300.0, 500.0, 700.0]);
        assert!((layout.cell_width() - 200.0).abs() <= 1e-12);
        let shifted: Vec<f64> = layout.screen_centers(50.0).collect();
        assert_eq!(shifted, vec![50.0, 250.0, 450.0, 650.0]);
    }
}
