use crate::core::{Quarter, ZoomLevel};
use crate::render::{FrameAction, FrameItem, FrameItemKind, RenderFrame, Renderer};

use super::{NavigationState, TimelineEngine};

const DAY_BUBBLE_BASE_PX: f64 = 30.0;
const DAY_BUBBLE_MAGNITUDE_DIVISOR: f64 = 10.0;

impl<R: Renderer> TimelineEngine<R> {
    /// Materializes the frame for the current state without drawing it.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let model = &self.core.model;
        let state = model.navigation.state();
        let mut frame = RenderFrame::new(model.viewport, state.level);
        frame.title = self.header_title();
        frame.scroll_offset_px = model.scroll_offset_px;
        frame.zoom_factor = model.navigation.zoom_factor();
        frame.transitioning = state.transitioning;
        frame.items = match state.level {
            ZoomLevel::Years | ZoomLevel::Months => self.child_items(state),
            ZoomLevel::Days => self.day_items(),
        };
        frame
    }

    #[must_use]
    pub fn header_title(&self) -> String {
        let state = self.navigation_state();
        resolve_header_title(
            state,
            self.core.model.dataset.year_range(),
            self.selected_days().len(),
        )
    }

    fn child_items(&self, state: NavigationState) -> Vec<FrameItem> {
        let Some(layout) = self.child_layout() else {
            return Vec::new();
        };
        let size_px = layout.cell_width();
        let dataset = &self.core.model.dataset;
        layout
            .screen_centers(self.core.model.scroll_offset_px)
            .enumerate()
            .filter_map(|(index, center_x)| {
                let highlighted = state.focused_child_index == Some(index);
                match state.level {
                    ZoomLevel::Years => {
                        let year = dataset.year_at(index)?.year;
                        Some(FrameItem {
                            key: format!("year-{year}"),
                            label: year.to_string(),
                            kind: FrameItemKind::Year { year },
                            center_x,
                            size_px,
                            highlighted,
                            action: Some(FrameAction::SelectYear(year)),
                        })
                    }
                    ZoomLevel::Months => {
                        let quarter = Quarter::from_index(index)?;
                        Some(FrameItem {
                            key: format!("quarter-{}", quarter.index()),
                            label: quarter.label(),
                            kind: FrameItemKind::Quarter {
                                quarter: quarter.index(),
                            },
                            center_x,
                            size_px,
                            highlighted,
                            action: Some(FrameAction::SelectQuarter(quarter.index())),
                        })
                    }
                    ZoomLevel::Days => None,
                }
            })
            .collect()
    }

    fn day_items(&self) -> Vec<FrameItem> {
        let spacing = self.core.behavior.day_axis.day_spacing_px;
        let offset = self.core.model.scroll_offset_px;
        self.selected_days()
            .into_iter()
            .enumerate()
            .map(|(index, day)| FrameItem {
                key: format!("day-{}", day.date),
                label: day.label.clone(),
                kind: FrameItemKind::Day {
                    positive: day.is_positive,
                    magnitude: day.magnitude(),
                },
                center_x: (index as f64 + 0.5) * spacing - offset,
                size_px: day_bubble_size_px(day.signed_magnitude),
                highlighted: false,
                action: None,
            })
            .collect()
    }
}

/// Bubble diameter grows with the absolute profit/loss.
pub(super) fn day_bubble_size_px(signed_magnitude: f64) -> f64 {
    signed_magnitude.abs() / DAY_BUBBLE_MAGNITUDE_DIVISOR + DAY_BUBBLE_BASE_PX
}

pub(super) fn resolve_header_title(
    state: NavigationState,
    year_range: Option<(i32, i32)>,
    selected_day_count: usize,
) -> String {
    match (state.level, state.selected_year, state.selected_quarter) {
        (ZoomLevel::Months, Some(year), _) => format!("Year of {year}"),
        (ZoomLevel::Days, Some(year), Some(quarter)) => {
            format!("{} {year} ({selected_day_count} days)", quarter.label())
        }
        _ => match year_range {
            Some((first, last)) => format!("{first} - {last}"),
            None => String::new(),
        },
    }
}
