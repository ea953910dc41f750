//! Live (status × age-group) tallies for O(1) reporting.
//!
//! One counter per cell.  Every status transition is reported exactly once
//! by `Population::update_status`; an underflow therefore means the caller
//! reported a transition that never happened — corrupted state, not a
//! recoverable condition.

use epi_core::{InfectionStatus, NUM_AGE_GROUPS};

use crate::{PopError, PopResult};

/// A fixed 2-D tally: `counts[status][age_group]`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompartmentCounter {
    counts: [[u64; NUM_AGE_GROUPS]; InfectionStatus::COUNT],
}

impl CompartmentCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a newly constructed person (no decrement side).
    pub(crate) fn record_new(&mut self, status: InfectionStatus, age_group: usize) {
        self.counts[status.index()][age_group] += 1;
    }

    /// Report a status transition: decrement (old, age), increment (new, age).
    pub fn report(
        &mut self,
        old:       InfectionStatus,
        new:       InfectionStatus,
        age_group: usize,
    ) -> PopResult<()> {
        let cell = &mut self.counts[old.index()][age_group];
        if *cell == 0 {
            return Err(PopError::CounterUnderflow {
                status: old,
                age_group,
            });
        }
        *cell -= 1;
        self.counts[new.index()][age_group] += 1;
        Ok(())
    }

    /// Drop one person from the tallies entirely (travel removal).
    pub(crate) fn discard(&mut self, status: InfectionStatus, age_group: usize) -> PopResult<()> {
        let cell = &mut self.counts[status.index()][age_group];
        if *cell == 0 {
            return Err(PopError::CounterUnderflow {
                status,
                age_group,
            });
        }
        *cell -= 1;
        Ok(())
    }

    /// Read-only view of the full mapping, indexed `[status][age_group]`.
    pub fn retrieve(&self) -> &[[u64; NUM_AGE_GROUPS]; InfectionStatus::COUNT] {
        &self.counts
    }

    /// Total persons in one status across all age groups.
    pub fn count_of(&self, status: InfectionStatus) -> u64 {
        self.counts[status.index()].iter().sum()
    }

    /// Total persons across all infectious statuses.
    pub fn infectious(&self) -> u64 {
        InfectionStatus::ALL
            .iter()
            .filter(|s| s.is_infectious())
            .map(|&s| self.count_of(s))
            .sum()
    }

    /// Total persons tallied.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }
}
