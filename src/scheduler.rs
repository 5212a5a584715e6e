use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

/// The periodic and one-shot jobs a round is made of
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Mover,
    Clock,
    EndOfSession,
}

/// A posted timer. `epoch` ties it to the scheduler generation it was posted
/// in; once the scheduler is cancelled the timer is stale and must not run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub due: Duration,
    pub seq: u64,
    pub epoch: u64,
}

// BinaryHeap is a max-heap, so the ordering is reversed: earliest due first,
// then lowest sequence number (post order) for timers due at the same instant.
impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Single-threaded timer queue running on virtual time.
///
/// Nothing fires on its own: the owner moves the clock forward and pulls due
/// timers one at a time with [`Scheduler::pop_due`], so a timer that posts a
/// follow-up is measured from its own due time rather than from wall clock.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    queue: BinaryHeap<Timer>,
    next_seq: u64,
    epoch: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Queue `kind` to fire `delay` after the current virtual time. A due
    /// time past `Duration::MAX` saturates, so such a timer never fires.
    pub fn post(&mut self, kind: TimerKind, delay: Duration) -> Timer {
        let timer = Timer {
            kind,
            due: self.now.saturating_add(delay),
            seq: self.next_seq,
            epoch: self.epoch,
        };
        self.next_seq += 1;
        self.queue.push(timer);
        timer
    }

    /// Drop every pending timer and invalidate any copies still held elsewhere
    pub fn cancel_all(&mut self) {
        self.queue.clear();
        self.epoch += 1;
    }

    pub fn is_current(&self, timer: &Timer) -> bool {
        timer.epoch == self.epoch
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Pending timers in firing order
    pub fn pending_timers(&self) -> Vec<Timer> {
        let mut timers = self.queue.clone().into_sorted_vec();
        timers.reverse();
        timers
    }

    /// Pop the next timer due at or before `until`, moving the clock to its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<Timer> {
        match self.queue.peek() {
            Some(timer) if timer.due <= until => {
                let timer = self.queue.pop()?;
                self.now = self.now.max(timer.due);
                Some(timer)
            }
            _ => None,
        }
    }

    /// Move the clock to `until` once everything due has been popped
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }
}
