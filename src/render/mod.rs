mod frame;
mod null_renderer;

pub use frame::{FrameAction, FrameControls, FrameItem, FrameItemKind, RenderFrame};
pub use null_renderer::NullRenderer;

use crate::error::TimelineResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from navigation and gesture logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()>;
}
