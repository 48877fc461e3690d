//! Cooperative deferred-action queue.
//!
//! The host advances time with [`Scheduler::tick`]; actions whose delay has
//! elapsed come back in due order (ties in scheduling order). Nothing runs
//! on its own and nothing can be cancelled once queued.

#[derive(Debug)]
struct Scheduled<A> {
    due_ms: u64,
    seq: u64,
    action: A,
}

/// Millisecond-resolution deferred action queue.
#[derive(Debug)]
pub struct Scheduler<A> {
    now_ms: u64,
    next_seq: u64,
    queue: Vec<Scheduled<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            queue: Vec::new(),
        }
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u32, action: A) {
        self.queue.push(Scheduled {
            due_ms: self.now_ms + u64::from(delay_ms),
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Advance by `dt_ms` and return every action now due.
    pub fn tick(&mut self, dt_ms: u32) -> Vec<A> {
        self.now_ms += u64::from(dt_ms);
        let now = self.now_ms;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.queue.drain(..).partition(|s| s.due_ms <= now);
        self.queue = pending;
        due.sort_by_key(|s| (s.due_ms, s.seq));
        due.into_iter().map(|s| s.action).collect()
    }

    /// Milliseconds until the next queued action, if any.
    pub fn next_due_in(&self) -> Option<u64> {
        self.queue
            .iter()
            .map(|s| s.due_ms.saturating_sub(self.now_ms))
            .min()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Elapsed scheduler time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
