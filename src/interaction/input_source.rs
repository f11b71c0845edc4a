use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::error::TimelineResult;

/// Listener registered on a host input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputListenerKind {
    ContactStart,
    ContactMove,
    ContactEnd,
    Wheel,
}

impl InputListenerKind {
    pub const ALL: [InputListenerKind; 4] = [
        InputListenerKind::ContactStart,
        InputListenerKind::ContactMove,
        InputListenerKind::ContactEnd,
        InputListenerKind::Wheel,
    ];

    /// Listeners whose events may need `preventDefault`.
    #[must_use]
    pub const fn requires_non_passive(self) -> bool {
        matches!(self, Self::ContactStart | Self::ContactMove | Self::Wheel)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenerOptions {
    pub passive: bool,
}

impl ListenerOptions {
    #[must_use]
    pub fn for_kind(kind: InputListenerKind) -> Self {
        Self {
            passive: !kind.requires_non_passive(),
        }
    }
}

/// Host surface that can deliver raw input to the engine
/// (a DOM element, a toolkit widget, a test double).
pub trait InputSource {
    fn attach_listener(
        &mut self,
        kind: InputListenerKind,
        options: ListenerOptions,
    ) -> TimelineResult<()>;

    fn detach_listener(&mut self, kind: InputListenerKind);
}

/// Scoped input subscription.
///
/// Listeners are released by [`InputSubscription::detach`] or, on any other
/// exit path, when the guard is dropped. Dropping only releases listeners:
/// no `InputDetached` event reaches plugins and the gesture state is kept.
/// Hand the guard to `TimelineEngine::detach_input` to notify observers.
#[derive(Debug)]
pub struct InputSubscription<S: InputSource> {
    source: S,
    attached: SmallVec<[InputListenerKind; 4]>,
}

impl<S: InputSource> InputSubscription<S> {
    /// Attaches every listener kind. A failure rolls back the listeners
    /// attached so far before returning the error.
    pub fn attach(source: S) -> TimelineResult<Self> {
        let mut subscription = Self {
            source,
            attached: SmallVec::new(),
        };
        for kind in InputListenerKind::ALL {
            if let Err(err) = subscription
                .source
                .attach_listener(kind, ListenerOptions::for_kind(kind))
            {
                warn!(?kind, error = %err, "input listener attach failed; rolling back");
                subscription.release();
                return Err(err);
            }
            subscription.attached.push(kind);
        }
        debug!("input subscription attached");
        Ok(subscription)
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        !self.attached.is_empty()
    }

    /// Detaches all listeners. Safe to call repeatedly.
    pub fn release(&mut self) {
        while let Some(kind) = self.attached.pop() {
            self.source.detach_listener(kind);
        }
    }

    pub fn detach(mut self) {
        self.release();
        debug!("input subscription detached");
    }
}

/// Listener cleanup only. The engine is not told about the drop.
impl<S: InputSource> Drop for InputSubscription<S> {
    fn drop(&mut self) {
        self.release();
    }
}
