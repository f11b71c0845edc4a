use serde::{Deserialize, Serialize};

use crate::core::{Viewport, ZoomLevel};
use crate::error::{TimelineError, TimelineResult};

/// User action attached to a control or item.
///
/// Hosts forward it to `TimelineEngine::dispatch_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameAction {
    ZoomIn,
    ZoomOut,
    SelectYear(i32),
    /// Quarter index in `0..=3`.
    SelectQuarter(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrameItemKind {
    Year { year: i32 },
    Quarter { quarter: u8 },
    Day { positive: bool, magnitude: f64 },
}

/// One positioned element of the strip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameItem {
    /// Stable identity across frames, e.g. `year-2026`.
    pub key: String,
    pub label: String,
    pub kind: FrameItemKind,
    /// On-screen horizontal center, scroll already applied.
    pub center_x: f64,
    /// Cell width for years/quarters, bubble diameter for days.
    pub size_px: f64,
    pub highlighted: bool,
    pub action: Option<FrameAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameControls {
    pub zoom_in_enabled: bool,
    pub zoom_out_enabled: bool,
}

/// Backend-agnostic scene for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub level: ZoomLevel,
    pub title: String,
    pub items: Vec<FrameItem>,
    pub controls: FrameControls,
    pub scroll_offset_px: f64,
    pub zoom_factor: f64,
    /// Hosts animate the level change while set.
    pub transitioning: bool,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, level: ZoomLevel) -> Self {
        Self {
            viewport,
            level,
            title: String::new(),
            items: Vec::new(),
            controls: FrameControls {
                zoom_in_enabled: level.zoomed_in().is_some(),
                zoom_out_enabled: level.zoomed_out().is_some(),
            },
            scroll_offset_px: 0.0,
            zoom_factor: 1.0,
            transitioning: false,
        }
    }

    #[must_use]
    pub fn with_item(mut self, item: FrameItem) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn highlighted_item(&self) -> Option<&FrameItem> {
        self.items.iter().find(|item| item.highlighted)
    }

    pub fn validate(&self) -> TimelineResult<()> {
        if !self.viewport.is_valid() {
            return Err(TimelineError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if !self.scroll_offset_px.is_finite() || self.scroll_offset_px < 0.0 {
            return Err(TimelineError::InvalidData(
                "frame scroll offset must be finite and >= 0".to_owned(),
            ));
        }
        if !self.zoom_factor.is_finite() || self.zoom_factor <= 0.0 {
            return Err(TimelineError::InvalidData(
                "frame zoom factor must be finite and > 0".to_owned(),
            ));
        }
        for item in &self.items {
            if !item.center_x.is_finite() || !item.size_px.is_finite() || item.size_px < 0.0 {
                return Err(TimelineError::InvalidData(format!(
                    "frame item `{}` has invalid geometry",
                    item.key
                )));
            }
        }
        if self.items.iter().filter(|item| item.highlighted).count() > 1 {
            return Err(TimelineError::InvalidData(
                "at most one frame item can be highlighted".to_owned(),
            ));
        }
        Ok(())
    }
}
