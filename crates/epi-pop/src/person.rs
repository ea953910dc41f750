//! The per-person record: identity, infection state, membership links, and
//! per-episode bookkeeping.
//!
//! Status itself is only ever changed through
//! [`Population::update_status`][crate::Population::update_status] so the
//! compartment counters and household susceptible subsets stay consistent;
//! every other field is plain data owned by whichever sweep maintains it.

use epi_core::{CellId, HouseholdId, InfectionStatus, MicrocellId, PersonId, PlaceId, age_group_of};

/// One member of the synthetic population.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id: PersonId,
    pub age: u8,
    /// Five-year age band derived from `age` at construction.
    pub age_group: usize,

    // ── Infection state machine ───────────────────────────────────────────
    /// Current compartment.  Mutate via `Population::update_status` only.
    pub status: InfectionStatus,
    /// Pending compartment, committed by host progression when
    /// `time_of_status_change` passes.
    pub next_status: Option<InfectionStatus>,
    /// When the pending transition fires, in days.  `None` is valid only for
    /// Susceptible persons (nothing pending); terminal states hold +∞.
    pub time_of_status_change: Option<f64>,
    /// Current shedding intensity (≥ 0); zero whenever not infectious.
    pub infectiousness: f64,
    /// The episode's Gamma-drawn baseline, scaled by the day-by-day profile.
    pub initial_infectiousness: f64,
    /// Admission probability used by the queue-drain sweep.  A pluggable
    /// hook: decision sweeps and interventions may overwrite it.
    pub susceptibility: f64,

    // ── Membership links ──────────────────────────────────────────────────
    pub cell: CellId,
    pub microcell: MicrocellId,
    /// Exactly one household at all times; reassignment is remove-then-add
    /// via `Population::move_person_to_household`.
    pub household: HouseholdId,
    /// Weak place links with the occupant-group tag, mirrored by the place's
    /// group map.
    pub places: Vec<(PlaceId, u32)>,
    pub care_home_resident: bool,

    // ── Episode bookkeeping ───────────────────────────────────────────────
    /// Start of the current (or last) infection episode, in days.
    pub infection_start_time: Option<f64>,
    pub time_of_recovery: Option<f64>,
    pub times_infected: u32,
    /// One counter per episode; the live episode is the last entry.
    pub secondary_infections: Vec<u32>,
    /// Days from the infector's episode start to the contact that exposed
    /// this person (set by the decision sweep that won).
    pub exposure_period: Option<f64>,
    /// This person's own sampled latent period for the current episode.
    pub latent_period: Option<f64>,
    /// The infector's latent period, captured at decision time for the
    /// generation-time record.
    pub infector_latent_period: Option<f64>,
    /// Whole day the infector's episode started; keys the Rt-style records.
    pub exposure_reference_day: Option<u32>,
    /// Generation time is recorded only for a person's first exposure.
    pub generation_time_recorded: bool,

    // ── Intervention timestamps ───────────────────────────────────────────
    pub isolation_start_time: Option<f64>,
    pub quarantine_start_time: Option<f64>,
    /// When the person received a vaccine dose, if ever.
    pub vaccine_time: Option<f64>,
}

impl Person {
    pub(crate) fn new(
        id:        PersonId,
        age:       u8,
        status:    InfectionStatus,
        cell:      CellId,
        microcell: MicrocellId,
        household: HouseholdId,
    ) -> Self {
        Self {
            id,
            age,
            age_group: age_group_of(age),
            status,
            next_status: None,
            // Non-susceptible construction seeds hold +∞ until the host
            // progression sweep opens their episode on its first pass.
            time_of_status_change: if status == InfectionStatus::Susceptible {
                None
            } else {
                Some(f64::INFINITY)
            },
            infectiousness: 0.0,
            initial_infectiousness: 0.0,
            susceptibility: 1.0,
            cell,
            microcell,
            household,
            places: Vec::new(),
            care_home_resident: false,
            infection_start_time: None,
            time_of_recovery: None,
            times_infected: 0,
            secondary_infections: Vec::new(),
            exposure_period: None,
            latent_period: None,
            infector_latent_period: None,
            exposure_reference_day: None,
            generation_time_recorded: false,
            isolation_start_time: None,
            quarantine_start_time: None,
            vaccine_time: None,
        }
    }

    #[inline]
    pub fn is_infectious(&self) -> bool {
        self.status.is_infectious()
    }

    #[inline]
    pub fn is_susceptible(&self) -> bool {
        self.status == InfectionStatus::Susceptible
    }

    /// The occupant-group tag this person holds in `place`, if any.
    pub fn group_in_place(&self, place: PlaceId) -> Option<u32> {
        self.places
            .iter()
            .find(|(p, _)| *p == place)
            .map(|&(_, g)| g)
    }

    /// Add one to the live episode's secondary-infection counter.
    ///
    /// No-op if the person has never started an episode (defensive callers
    /// should not hit this; decision sweeps only call it for infectors).
    pub fn increment_secondary_infections(&mut self) {
        if let Some(last) = self.secondary_infections.last_mut() {
            *last += 1;
        }
    }

    /// Days since the current episode started, or `None` outside an episode.
    pub fn days_since_infection(&self, now: f64) -> Option<f64> {
        self.infection_start_time.map(|t0| now - t0)
    }
}
