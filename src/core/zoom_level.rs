use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::calendar::month_name;

/// Granularity of the displayed time axis.
///
/// Ordered from coarse to fine: `Years < Months < Days`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum ZoomLevel {
    #[default]
    Years,
    Months,
    Days,
}

impl ZoomLevel {
    pub const ALL: [ZoomLevel; 3] = [ZoomLevel::Years, ZoomLevel::Months, ZoomLevel::Days];

    /// Next finer level, `None` at `Days`.
    #[must_use]
    pub const fn zoomed_in(self) -> Option<Self> {
        match self {
            Self::Years => Some(Self::Months),
            Self::Months => Some(Self::Days),
            Self::Days => None,
        }
    }

    /// Next coarser level, `None` at `Years`.
    #[must_use]
    pub const fn zoomed_out(self) -> Option<Self> {
        match self {
            Self::Years => None,
            Self::Months => Some(Self::Years),
            Self::Days => Some(Self::Months),
        }
    }

    /// Whether this level shows selectable child items (years or quarters).
    #[must_use]
    pub const fn has_focusable_children(self) -> bool {
        matches!(self, Self::Years | Self::Months)
    }
}

/// Quarter of a year: quarter `q` spans months `3q..=3q+2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quarter(u8);

impl Quarter {
    pub const COUNT: usize = 4;

    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if index < 4 { Some(Self(index)) } else { None }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::new)
    }

    pub fn all() -> impl Iterator<Item = Quarter> {
        (0..4u8).map(Self)
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Zero-based month indices covered by this quarter.
    #[must_use]
    pub fn months(self) -> RangeInclusive<usize> {
        let first = usize::from(self.0) * 3;
        first..=first + 2
    }

    /// Human label like `Jul-Sep`.
    #[must_use]
    pub fn label(self) -> String {
        let months = self.months();
        let first = month_name(*months.start()).unwrap_or("???");
        let last = month_name(*months.end()).unwrap_or("???");
        format!("{first}-{last}")
    }
}

impl TryFrom<u8> for Quarter {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("quarter index {value} must be in 0..=3"))
    }
}

impl From<Quarter> for u8 {
    fn from(value: Quarter) -> Self {
        value.0
    }
}
