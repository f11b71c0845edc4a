pub mod calendar;
pub mod dataset;
pub mod timer_slot;
pub mod types;
pub mod zoom_level;

pub use dataset::{Dataset, DatasetConfig};
pub use timer_slot::{TimerSlot, TimerToken};
pub use types::{Month, Point, TradeDay, Viewport, Year};
pub use zoom_level::{Quarter, ZoomLevel};
