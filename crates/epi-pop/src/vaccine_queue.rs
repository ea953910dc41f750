//! Population-level vaccination priority queue.
//!
//! Persons are dequeued lowest priority number first; within a priority
//! level, insertion order wins.  The tie-break is implemented with a
//! monotonically increasing sequence number inside the heap entry, so the
//! ordering is total and deterministic.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use epi_core::PersonId;

/// A `(priority, insertion-order)` min-queue of persons awaiting vaccination.
#[derive(Clone, Debug, Default)]
pub struct VaccineQueue {
    heap: BinaryHeap<Reverse<(u8, u64, PersonId)>>,
    next_seq: u64,
}

impl VaccineQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue `person` at `priority` (lower numbers dequeue first).
    pub fn push(&mut self, priority: u8, person: PersonId) {
        self.heap.push(Reverse((priority, self.next_seq, person)));
        self.next_seq += 1;
    }

    /// Dequeue the highest-priority (then earliest-inserted) person.
    pub fn pop(&mut self) -> Option<PersonId> {
        self.heap.pop().map(|Reverse((_, _, person))| person)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
