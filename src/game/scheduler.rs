use std::time::{Duration, Instant};

/// Token identifying a scheduled tick.  A handle that has been cancelled or
/// superseded never fires.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct TickHandle(u64);

/// Keeps track of the single pending tick of the game loop.
///
/// Scheduling a tick replaces whatever tick was pending before, so at most
/// one tick is ever in flight.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Scheduler {
    period: Duration,
    pending: Option<Pending>,
    next_id: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Pending {
    handle: TickHandle,
    due: Instant,
}

impl Scheduler {
    pub(crate) fn new(period: Duration) -> Scheduler {
        Scheduler {
            period,
            pending: None,
            next_id: 0,
        }
    }

    /// Schedule a tick one period after `now`, replacing any pending tick
    pub(crate) fn schedule(&mut self, now: Instant) -> TickHandle {
        let handle = TickHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        if let Some(old) = self.pending.replace(Pending {
            handle,
            due: now + self.period,
        }) {
            tracing::trace!(handle = ?old.handle, "Superseded pending tick");
        }
        handle
    }

    /// Cancel the pending tick, if any, returning its handle
    pub(crate) fn cancel(&mut self) -> Option<TickHandle> {
        self.pending.take().map(|p| p.handle)
    }

    /// Return the time at which the pending tick is due
    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    /// If the pending tick is due at or before `now`, consume and return it
    pub(crate) fn fire(&mut self, now: Instant) -> Option<TickHandle> {
        match self.pending {
            Some(Pending { handle, due }) if due <= now => {
                self.pending = None;
                Some(handle)
            }
            _ => None,
        }
    }
}
