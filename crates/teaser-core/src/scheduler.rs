//! Virtual-Time Scheduler
//!
//! A timer queue that never reads a clock. The owner tells it what time it is
//! and pulls due events one at a time, so every transition is reproducible in
//! tests and the same code runs unchanged behind browser timers.

use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroU64;

/// Milliseconds on the owner's monotonic clock
pub type Millis = u64;

/// Handle to a scheduled task
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// A task that came due
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fired<E> {
    pub id: TaskId,
    /// Due time the task fired at (not the time the driver noticed it)
    pub at: Millis,
    pub event: E,
}

struct Task<E> {
    id: TaskId,
    period: Option<Millis>,
    event: E,
}

/// Ordered queue of one-shot and repeating tasks
///
/// Tasks are keyed by `(due, seq)`, so two tasks due at the same instant fire in
/// the order they were armed.
pub struct Scheduler<E> {
    now: Millis,
    seq: u64,
    queue: BTreeMap<(Millis, u64), Task<E>>,
    index: HashMap<TaskId, (Millis, u64)>,
}

impl<E> Scheduler<E> {
    /// Create an empty scheduler whose clock reads `now`
    #[must_use]
    pub fn new(now: Millis) -> Self {
        Self {
            now,
            seq: 0,
            queue: BTreeMap::new(),
            index: HashMap::new(),
        }
    }

    pub const fn now(&self) -> Millis {
        self.now
    }

    /// Number of live tasks
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.index.contains_key(&id)
    }

    /// Due time of the earliest task, if any
    pub fn next_due(&self) -> Option<Millis> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    /// Fire `event` once, `delay` ms from now
    pub fn after(&mut self, delay: Millis, event: E) -> TaskId {
        let id = TaskId(self.next_seq());
        self.insert(self.now.saturating_add(delay), Task { id, period: None, event });
        id
    }

    /// Fire `event` every `period` ms, first at `now + period`
    pub fn every(&mut self, period: NonZeroU64, event: E) -> TaskId {
        let id = TaskId(self.next_seq());
        self.insert(
            self.now.saturating_add(period.get()),
            Task { id, period: Some(period.get()), event },
        );
        id
    }

    /// Cancel a pending task. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.index.remove(&id) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Drop every pending task
    pub fn clear(&mut self) {
        if !self.queue.is_empty() {
            tracing::debug!(cancelled = self.queue.len(), "Clearing scheduler");
        }
        self.queue.clear();
        self.index.clear();
    }

    /// Advance the clock to `until` without firing anything
    ///
    /// Call after draining [`Self::pop_due`]; time never moves backwards.
    pub fn settle(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        seq
    }

    fn insert(&mut self, due: Millis, task: Task<E>) {
        let key = (due, self.next_seq());
        self.index.insert(task.id, key);
        self.queue.insert(key, task);
    }
}

impl<E: Clone> Scheduler<E> {
    /// Remove and return the earliest task due at or before `until`
    ///
    /// The clock moves to the task's due time. Repeating tasks are re-armed one
    /// period after their previous due time, so a late driver catches up without
    /// drifting.
    pub fn pop_due(&mut self, until: Millis) -> Option<Fired<E>> {
        let due = self.next_due()?;
        if due > until.max(self.now) {
            return None;
        }

        let (_, task) = self.queue.pop_first()?;
        let id = task.id;
        self.index.remove(&id);
        self.now = self.now.max(due);

        let event = match task.period {
            Some(period) => {
                let event = task.event.clone();
                self.insert(due.saturating_add(period), task);
                event
            }
            None => task.event,
        };

        Some(Fired { id, at: due, event })
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new(0)
    }
}
