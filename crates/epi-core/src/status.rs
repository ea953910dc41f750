//! Infection-status enum and age-group helpers.
//!
//! The status values form the states of the host-progression state machine.
//! Their declaration order is load-bearing: `index()` positions are the row
//! and column indices of the transition-probability and transition-time
//! matrices in `epi-params`, and the compartment counters in `epi-pop` are
//! laid out in the same order.

use std::fmt;

/// Number of five-year age bands: 0–4, 5–9, …, 75–79, 80+.
pub const NUM_AGE_GROUPS: usize = 17;

/// Map an age in years to its five-year age-group index (80+ saturates).
#[inline]
pub fn age_group_of(age: u8) -> usize {
    ((age / 5) as usize).min(NUM_AGE_GROUPS - 1)
}

/// Where a person sits in the infection life cycle.
///
/// `Vaccinated` marks a person protected by vaccination at the moment an
/// exposure would otherwise have occurred; it is terminal like `Dead`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InfectionStatus {
    #[default]
    Susceptible,
    Exposed,
    InfectAsympt,
    InfectMild,
    InfectGp,
    InfectHosp,
    InfectIcu,
    InfectIcuRecov,
    Recovered,
    Dead,
    Vaccinated,
}

impl InfectionStatus {
    /// Number of status values (matrix dimension, counter row count).
    pub const COUNT: usize = 11;

    /// All values in matrix order.
    pub const ALL: [InfectionStatus; Self::COUNT] = [
        InfectionStatus::Susceptible,
        InfectionStatus::Exposed,
        InfectionStatus::InfectAsympt,
        InfectionStatus::InfectMild,
        InfectionStatus::InfectGp,
        InfectionStatus::InfectHosp,
        InfectionStatus::InfectIcu,
        InfectionStatus::InfectIcuRecov,
        InfectionStatus::Recovered,
        InfectionStatus::Dead,
        InfectionStatus::Vaccinated,
    ];

    /// Matrix / counter index of this status.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for every status that sheds virus (all `Infect*` values).
    #[inline]
    pub fn is_infectious(self) -> bool {
        matches!(
            self,
            InfectionStatus::InfectAsympt
                | InfectionStatus::InfectMild
                | InfectionStatus::InfectGp
                | InfectionStatus::InfectHosp
                | InfectionStatus::InfectIcu
                | InfectionStatus::InfectIcuRecov
        )
    }

    /// `true` for statuses with no outgoing transitions.
    ///
    /// `Recovered` is terminal only while waning immunity is disabled; that
    /// decision belongs to host progression, so it is *not* included here.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, InfectionStatus::Dead | InfectionStatus::Vaccinated)
    }

    /// `true` for the symptomatic infectious statuses (used for the
    /// symptom-onset delay and case-isolation triggers).
    #[inline]
    pub fn is_symptomatic(self) -> bool {
        matches!(
            self,
            InfectionStatus::InfectMild
                | InfectionStatus::InfectGp
                | InfectionStatus::InfectHosp
                | InfectionStatus::InfectIcu
                | InfectionStatus::InfectIcuRecov
        )
    }

    /// Short column label, useful for CSV headers.
    pub fn as_str(self) -> &'static str {
        match self {
            InfectionStatus::Susceptible    => "susceptible",
            InfectionStatus::Exposed        => "exposed",
            InfectionStatus::InfectAsympt   => "infect_asympt",
            InfectionStatus::InfectMild     => "infect_mild",
            InfectionStatus::InfectGp       => "infect_gp",
            InfectionStatus::InfectHosp     => "infect_hosp",
            InfectionStatus::InfectIcu      => "infect_icu",
            InfectionStatus::InfectIcuRecov => "infect_icu_recov",
            InfectionStatus::Recovered      => "recovered",
            InfectionStatus::Dead           => "dead",
            InfectionStatus::Vaccinated     => "vaccinated",
        }
    }
}

impl fmt::Display for InfectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
