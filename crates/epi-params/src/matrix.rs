//! The transition-probability matrix of the host-progression state machine.
//!
//! # Typed weights
//!
//! Each (current status, next status) entry is a [`TransitionWeight`] variant
//! rather than a dynamically-typed table cell:
//!
//! - `Scalar(p)` — one probability for everyone;
//! - `ByAge(v)`  — one probability per five-year age group;
//! - `Waning(f)` — a function of (time since recovery, age group), used for
//!   the Recovered row when waning immunity is enabled.
//!
//! Lookup resolves the variant explicitly; there is no runtime type
//! inspection and no silent fallback.

use epi_core::{InfectionStatus, NUM_AGE_GROUPS, SimRng};

use crate::{ParamsError, ParamsResult};

const N: usize = InfectionStatus::COUNT;

// ── TransitionWeight ──────────────────────────────────────────────────────────

/// One entry of the transition-probability matrix.
#[derive(Clone, Debug)]
pub enum TransitionWeight {
    /// Age-independent probability.
    Scalar(f64),
    /// One probability per age group (`NUM_AGE_GROUPS` entries).
    ByAge(Vec<f64>),
    /// Time-dependent probability for waning immunity:
    /// `f(days_since_recovery, age_group) -> probability`.
    Waning(fn(f64, usize) -> f64),
}

impl TransitionWeight {
    /// Resolve to a concrete probability for one person.
    ///
    /// `time_since_recovery` is only consulted by the `Waning` variant; pass
    /// 0.0 for persons that have never recovered.
    #[inline]
    pub fn resolve(&self, age_group: usize, time_since_recovery: f64) -> f64 {
        match self {
            TransitionWeight::Scalar(p)  => *p,
            TransitionWeight::ByAge(v)   => v[age_group],
            TransitionWeight::Waning(f)  => f(time_since_recovery, age_group),
        }
    }

    /// `true` if this entry can never contribute probability mass.
    fn is_zero(&self) -> bool {
        matches!(self, TransitionWeight::Scalar(p) if *p == 0.0)
    }
}

// ── TransitionMatrix ──────────────────────────────────────────────────────────

/// Square matrix of [`TransitionWeight`]s indexed by (from, to) status.
///
/// Rows for `Dead` and `Vaccinated` are all-zero (terminal); every other row
/// must sum to 1 per age group, checked by [`validate`](Self::validate).
#[derive(Clone, Debug)]
pub struct TransitionMatrix {
    weights: Vec<TransitionWeight>, // N × N, row-major
}

impl TransitionMatrix {
    /// An all-zero matrix; populate with [`set`](Self::set).
    pub fn zeroed() -> Self {
        Self {
            weights: vec![TransitionWeight::Scalar(0.0); N * N],
        }
    }

    #[inline]
    pub fn weight(&self, from: InfectionStatus, to: InfectionStatus) -> &TransitionWeight {
        &self.weights[from.index() * N + to.index()]
    }

    pub fn set(&mut self, from: InfectionStatus, to: InfectionStatus, weight: TransitionWeight) {
        self.weights[from.index() * N + to.index()] = weight;
    }

    /// Resolve one full row to concrete probabilities for one person.
    ///
    /// Callers that need to modify weights before sampling (the care-home
    /// mortality override) take this row, adjust it, and pass it to
    /// [`sample_row`].
    pub fn row_weights(
        &self,
        from:                InfectionStatus,
        age_group:           usize,
        time_since_recovery: f64,
    ) -> [f64; N] {
        let mut row = [0.0; N];
        for (i, w) in row.iter_mut().enumerate() {
            *w = self.weights[from.index() * N + i].resolve(age_group, time_since_recovery);
        }
        row
    }

    /// Sample a next status from resolved row weights (categorical draw).
    ///
    /// Weights need not sum to 1 (the care-home override rescales them); an
    /// all-zero row is a configuration defect.
    pub fn sample_row(
        from: InfectionStatus,
        row:  &[f64; N],
        rng:  &mut SimRng,
    ) -> ParamsResult<InfectionStatus> {
        let total: f64 = row.iter().sum();
        if total <= 0.0 {
            return Err(ParamsError::EmptyRow { from });
        }
        let mut target = rng.gen_range(0.0..total);
        for (i, &w) in row.iter().enumerate() {
            if w <= 0.0 {
                continue;
            }
            if target < w {
                return Ok(InfectionStatus::ALL[i]);
            }
            target -= w;
        }
        // Floating-point slack: fall back to the last positive entry.
        let last = row.iter().rposition(|&w| w > 0.0).unwrap_or(0);
        Ok(InfectionStatus::ALL[last])
    }

    /// Collapse every `ByAge` entry to a `Scalar` weighted average using the
    /// population age proportions (used when ages are not modelled).
    pub fn collapse_ages(&mut self, age_proportions: &[f64]) -> ParamsResult<()> {
        for (idx, entry) in self.weights.iter_mut().enumerate() {
            if let TransitionWeight::ByAge(v) = entry {
                if v.len() != NUM_AGE_GROUPS {
                    return Err(ParamsError::ByAgeLength {
                        from:     InfectionStatus::ALL[idx / N],
                        to:       InfectionStatus::ALL[idx % N],
                        len:      v.len(),
                        expected: NUM_AGE_GROUPS,
                    });
                }
                let avg: f64 = v
                    .iter()
                    .zip(age_proportions)
                    .map(|(p, w)| p * w)
                    .sum();
                *entry = TransitionWeight::Scalar(avg);
            }
        }
        Ok(())
    }

    /// Check structural soundness: `ByAge` lengths, and row sums of 1 (within
    /// floating tolerance) per age group for every non-terminal row.
    ///
    /// Rows containing a `Waning` entry are exempt from the sum check — their
    /// mass depends on time since recovery and is resolved per person.
    pub fn validate(&self) -> ParamsResult<()> {
        const TOL: f64 = 1e-9;

        for from in InfectionStatus::ALL {
            if from.is_terminal() {
                continue;
            }
            let row = &self.weights[from.index() * N..(from.index() + 1) * N];

            for (i, entry) in row.iter().enumerate() {
                if let TransitionWeight::ByAge(v) = entry {
                    if v.len() != NUM_AGE_GROUPS {
                        return Err(ParamsError::ByAgeLength {
                            from,
                            to:       InfectionStatus::ALL[i],
                            len:      v.len(),
                            expected: NUM_AGE_GROUPS,
                        });
                    }
                }
            }

            if row.iter().any(|w| matches!(w, TransitionWeight::Waning(_))) {
                continue;
            }

            for age_group in 0..NUM_AGE_GROUPS {
                let sum: f64 = row.iter().map(|w| w.resolve(age_group, 0.0)).sum();
                if (sum - 1.0).abs() > TOL {
                    return Err(ParamsError::RowSum {
                        from,
                        age_group: Some(age_group),
                        sum,
                    });
                }
            }
        }

        // Terminal rows must carry no mass at all.
        for from in [InfectionStatus::Dead, InfectionStatus::Vaccinated] {
            let row = &self.weights[from.index() * N..(from.index() + 1) * N];
            if row.iter().any(|w| !w.is_zero()) {
                return Err(ParamsError::RowSum {
                    from,
                    age_group: None,
                    sum: f64::NAN,
                });
            }
        }

        Ok(())
    }
}

// ── Default waning functions ──────────────────────────────────────────────────

/// Default probability that a recovered person's immunity eventually wanes.
///
/// Evaluated when the Recovered row is sampled (time since recovery is 0 at
/// that moment for a freshly recovered person); decays over ~6 months so the
/// hook behaves sensibly if sampled later in life as well.
pub fn default_waning_to_susceptible(time_since_recovery: f64, _age_group: usize) -> f64 {
    (-time_since_recovery / 180.0).exp()
}

/// Complement of [`default_waning_to_susceptible`].
pub fn default_waning_stays_recovered(time_since_recovery: f64, age_group: usize) -> f64 {
    1.0 - default_waning_to_susceptible(time_since_recovery, age_group)
}
