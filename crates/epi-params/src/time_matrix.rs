//! The transition-time matrix: one delay distribution per state transition.
//!
//! Entries with no meaningful transition hold `None` (the reference table's
//! `-1` sentinel).  Sampling a sentinel entry is a programming error and
//! fails loudly with [`ParamsError::NoTransitionTime`] — the caller asked for
//! a delay the model never defined, which means the probability matrix and
//! the time matrix disagree.

use epi_core::{InfectionStatus, SimRng};

use crate::{InverseCdf, ParamsError, ParamsResult};

const N: usize = InfectionStatus::COUNT;

/// Square matrix of optional [`InverseCdf`] samplers indexed by
/// (from, to) status.
#[derive(Clone, Debug)]
pub struct TransitionTimeMatrix {
    entries: Vec<Option<InverseCdf>>, // N × N, row-major
}

impl TransitionTimeMatrix {
    /// A matrix where every entry is the sentinel; populate with
    /// [`set`](Self::set).
    pub fn sentinel() -> Self {
        Self {
            entries: vec![None; N * N],
        }
    }

    pub fn set(&mut self, from: InfectionStatus, to: InfectionStatus, icdf: InverseCdf) {
        self.entries[from.index() * N + to.index()] = Some(icdf);
    }

    /// The sampler for one transition, if defined.
    #[inline]
    pub fn get(&self, from: InfectionStatus, to: InfectionStatus) -> Option<&InverseCdf> {
        self.entries[from.index() * N + to.index()].as_ref()
    }

    /// Draw a transition delay in days.
    ///
    /// Fails if the entry is the sentinel — never retried, never defaulted.
    pub fn sample(
        &self,
        from: InfectionStatus,
        to:   InfectionStatus,
        rng:  &mut SimRng,
    ) -> ParamsResult<f64> {
        match self.get(from, to) {
            Some(icdf) => Ok(icdf.icdf_choose(rng)),
            None       => Err(ParamsError::NoTransitionTime { from, to }),
        }
    }
}
