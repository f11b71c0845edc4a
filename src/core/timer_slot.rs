use serde::{Deserialize, Serialize};

/// Identifies one scheduled timer. Tokens from replaced or cancelled timers
/// never match the slot again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct PendingTimer {
    token: TimerToken,
    deadline_ms: u64,
}

/// Single-slot deadline timer driven by a host-supplied millisecond clock.
///
/// Scheduling always cancels and replaces the pending timer, so at most one
/// callback per slot is ever queued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerSlot {
    pending: Option<PendingTimer>,
    next_generation: u64,
}

impl TimerSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, now_ms: u64, duration_ms: u64) -> TimerToken {
        let token = TimerToken {
            generation: self.next_generation,
        };
        self.next_generation = self.next_generation.wrapping_add(1);
        self.pending = Some(PendingTimer {
            token,
            deadline_ms: now_ms.saturating_add(duration_ms),
        });
        token
    }

    /// Cancels the pending timer. Returns `true` when one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn deadline_ms(&self) -> Option<u64> {
        self.pending.map(|pending| pending.deadline_ms)
    }

    #[must_use]
    pub fn is_current(&self, token: TimerToken) -> bool {
        self.pending.is_some_and(|pending| pending.token == token)
    }

    /// Removes and returns the pending timer when its deadline has passed.
    pub fn take_due(&mut self, now_ms: u64) -> Option<TimerToken> {
        match self.pending {
            Some(pending) if pending.deadline_ms <= now_ms => {
                self.pending = None;
                Some(pending.token)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimerSlot;

    #[test]
    fn timer_fires_once_at_deadline() {
        let mut slot = TimerSlot::new();
        slot.schedule(1_000, 300);
        assert!(slot.take_due(1_299).is_none());
        assert!(slot.take_due(1_300).is_some());
        assert!(slot.take_due(5_000).is_none());
    }

    #[test]
    fn rescheduling_replaces_pending_timer() {
        let mut slot = TimerSlot::new();
        let first = slot.schedule(0, 300);
        let second = slot.schedule(200, 300);
        assert!(!slot.is_current(first));
        assert!(slot.is_current(second));
        assert!(slot.take_due(300).is_none());
        assert_eq!(slot.take_due(500), Some(second));
    }

    #[test]
    fn cancel_reports_whether_timer_was_pending() {
        let mut slot = TimerSlot::new();
        assert!(!slot.cancel());
        slot.schedule(0, 10);
        assert!(slot.cancel());
        assert!(slot.take_due(100).is_none());
    }
}
