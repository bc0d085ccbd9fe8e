//! Deferred tick scheduling
//!
//! The fade needs a recurring wake-up, but it is modelled as a single
//! deferred callback that is rescheduled from inside itself. Scheduling a new
//! tick always replaces the pending one, so there is never more than one
//! tick alive per scheduler. Ids are generational: a callback carrying an id
//! that was superseded or cancelled is recognised as stale and ignored.

use std::time::Instant;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle for a scheduled deferred tick
    pub struct TickId;
}

/// Owns at most one pending deferred tick
#[derive(Debug, Default)]
pub struct TickScheduler {
    ticks: SlotMap<TickId, Instant>,
    pending: Option<TickId>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tick due at `due`, replacing any pending tick
    pub fn schedule(&mut self, due: Instant) -> TickId {
        if let Some(previous) = self.cancel() {
            tracing::trace!(?previous, "tick superseded");
        }
        let id = self.ticks.insert(due);
        self.pending = Some(id);
        id
    }

    /// Cancel the pending tick, returning its id if there was one
    pub fn cancel(&mut self) -> Option<TickId> {
        let id = self.pending.take()?;
        self.ticks.remove(id);
        Some(id)
    }

    /// Claim a tick that just fired.
    ///
    /// Returns `true` if `id` is the live pending tick; it is consumed and
    /// the scheduler becomes empty. Stale ids return `false`.
    pub fn fire(&mut self, id: TickId) -> bool {
        if self.pending != Some(id) {
            tracing::trace!(?id, "stale tick ignored");
            return false;
        }
        self.pending = None;
        self.ticks.remove(id).is_some()
    }

    pub fn pending(&self) -> Option<TickId> {
        self.pending
    }

    /// When the pending tick is due
    pub fn due(&self) -> Option<Instant> {
        self.pending.and_then(|id| self.ticks.get(id).copied())
    }

    pub fn is_pending(&self, id: TickId) -> bool {
        self.pending == Some(id)
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_schedule_replaces_pending() {
        let now = Instant::now();
        let mut scheduler = TickScheduler::new();

        let first = scheduler.schedule(now + Duration::from_millis(1500));
        let second = scheduler.schedule(now + Duration::from_millis(10));

        assert_ne!(first, second);
        assert!(!scheduler.is_pending(first));
        assert!(scheduler.is_pending(second));
        assert_eq!(scheduler.due(), Some(now + Duration::from_millis(10)));
    }

    #[test]
    fn test_stale_tick_is_ignored() {
        let now = Instant::now();
        let mut scheduler = TickScheduler::new();

        let first = scheduler.schedule(now);
        let second = scheduler.schedule(now);

        assert!(!scheduler.fire(first));
        assert!(scheduler.has_pending());
        assert!(scheduler.fire(second));
        assert!(!scheduler.has_pending());
        assert!(!scheduler.fire(second));
    }

    #[test]
    fn test_cancel() {
        let mut scheduler = TickScheduler::new();
        assert_eq!(scheduler.cancel(), None);

        let id = scheduler.schedule(Instant::now());
        assert_eq!(scheduler.cancel(), Some(id));
        assert!(!scheduler.fire(id));
        assert_eq!(scheduler.due(), None);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut scheduler = TickScheduler::new();
        let now = Instant::now();
        let first = scheduler.schedule(now);
        scheduler.cancel();
        let second = scheduler.schedule(now);
        // Same slot, new generation
        assert_ne!(first, second);
        assert!(!scheduler.fire(first));
    }
}
