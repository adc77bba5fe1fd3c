//! Scheduled callbacks on a virtual millisecond clock.
//!
//! The deck never blocks or sleeps. Every delay becomes an entry here and
//! fires when the owner advances the clock past its deadline. Entries with
//! equal deadlines fire in the order they were scheduled.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

struct Entry<T> {
    due_ms: u64,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due_ms == other.due_ms && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due_ms, self.seq).cmp(&(other.due_ms, other.seq))
    }
}

pub struct TimerQueue<T> {
    now_ms: u64,
    next_seq: u64,
    heap: BinaryHeap<Reverse<Entry<T>>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_seq: 0,
            heap: BinaryHeap::new(),
        }
    }

    /// Current virtual time.
    ///
    /// While a task is being handed out this is that task's deadline, so
    /// anything it schedules is relative to when it was due.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule(&mut self, delay_ms: u64, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry {
            due_ms: self.now_ms.saturating_add(delay_ms),
            seq,
            task,
        }));
    }

    /// Pop the earliest task due at or before `limit_ms`, moving the clock
    /// to its deadline.
    pub fn pop_due(&mut self, limit_ms: u64) -> Option<T> {
        let due_ms = self.heap.peek()?.0.due_ms;
        if due_ms > limit_ms {
            return None;
        }
        let Reverse(entry) = self.heap.pop()?;
        self.now_ms = self.now_ms.max(entry.due_ms);
        Some(entry.task)
    }

    /// Move the clock forward once everything due has been drained.
    /// The clock never goes backwards.
    pub fn settle_at(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.heap.peek().map(|Reverse(entry)| entry.due_ms)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
