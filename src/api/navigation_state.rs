use serde::{Deserialize, Serialize};

use crate::core::{Quarter, ZoomLevel};

/// Current position in the Years -> Months -> Days hierarchy.
///
/// Mutated only by [`super::NavigationMachine`]; everything else receives
/// copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationState {
    pub level: ZoomLevel,
    pub selected_year: Option<i32>,
    pub selected_quarter: Option<Quarter>,
    pub focused_child_index: Option<usize>,
    pub transitioning: bool,
}

impl NavigationState {
    /// Whether the selection fields agree with the level.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self.level {
            ZoomLevel::Years => self.selected_year.is_none() && self.selected_quarter.is_none(),
            ZoomLevel::Months => self.selected_year.is_some() && self.selected_quarter.is_none(),
            ZoomLevel::Days => {
                self.selected_year.is_some()
                    && self.selected_quarter.is_some()
                    && self.focused_child_index.is_none()
            }
        }
    }
}

/// Child item the focus resolver currently points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusTarget {
    Year(i32),
    Quarter(Quarter),
}

/// One completed level change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTransition {
    pub from: ZoomLevel,
    pub to: ZoomLevel,
    pub selected_year: Option<i32>,
    pub selected_quarter: Option<Quarter>,
}

impl LevelTransition {
    #[must_use]
    pub fn is_zoom_in(&self) -> bool {
        self.to > self.from
    }
}
