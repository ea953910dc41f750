//! Force-of-infection calculators.
//!
//! Pure functions over (parameters, persons, structures, time) — no RNG, no
//! mutation.  The decision sweeps multiply these rates by `dt` to get
//! per-step contact probabilities.
//!
//! # Where susceptibility is applied
//!
//! Structural susceptibility (household / place multipliers, care-home
//! residency) is applied at decision time by these calculators.  *Personal*
//! admission probability (`Person::susceptibility`, social distancing) is
//! applied once, at queue-drain time, via [`admission_susceptibility`] — so
//! a person exposed through several routes in one step still faces a single
//! admission draw.
//!
//! # Intervention modifiers
//!
//! Every modifier is an `Option<f64>` timestamp gate: present and in the
//! past means active, anything else means inactive.  Active modifiers are
//! plain multiplicative factors, so a factor of 1.0 disables an
//! intervention without any structural change to the rate.

use std::f64::consts::TAU;

use epi_core::PlaceType;
use epi_params::SimParams;
use epi_pop::{Household, Microcell, Person, Place};

/// `true` if a timestamp gate is set and has passed.
#[inline]
pub fn timestamp_active(timestamp: Option<f64>, time: f64) -> bool {
    matches!(timestamp, Some(t) if t <= time)
}

/// `true` if the person has been vaccinated long enough for the dose to act.
#[inline]
pub fn vaccine_effective(params: &SimParams, person: &Person, time: f64) -> bool {
    matches!(
        person.vaccine_time,
        Some(t) if time >= t + params.interventions.vaccine.time_to_efficacy
    )
}

/// Annual seasonality factor; identically 1 when the amplitude is 0.
#[inline]
pub fn seasonality(params: &SimParams, time: f64) -> f64 {
    1.0 + params.seasonality_amplitude * (TAU * time / 365.0).cos()
}

/// An infector's effective shedding rate: profile-scaled infectiousness with
/// the breakthrough-vaccine and quarantine reductions applied.
pub fn shedding(params: &SimParams, infector: &Person, time: f64) -> f64 {
    let mut rate = infector.infectiousness;
    if vaccine_effective(params, infector, time) {
        rate *= params.interventions.vaccine.infectiousness_drop;
    }
    if timestamp_active(infector.quarantine_start_time, time) {
        rate *= params.interventions.quarantine_effectiveness;
    }
    rate
}

/// Case-isolation factor on transmission *outside* the infector's household.
#[inline]
pub fn isolation_scale(params: &SimParams, infector: &Person, time: f64) -> f64 {
    if timestamp_active(infector.isolation_start_time, time) {
        params.interventions.isolation_effectiveness
    } else {
        1.0
    }
}

// ── Household ─────────────────────────────────────────────────────────────────

/// Per-infector household force of infection.
///
/// Place closure *raises* this one: contacts displaced out of closed venues
/// land in the home, which is why the closure-household scale defaults
/// above 1.
pub fn household_foi(
    params:    &SimParams,
    infector:  &Person,
    household: &Household,
    microcell: &Microcell,
    time:      f64,
) -> f64 {
    let mut rate =
        params.household_transmission * shedding(params, infector, time) * household.infectiousness;
    if infector.care_home_resident {
        rate *= params.carehome.resident_infectiousness_scale;
    }
    if timestamp_active(infector.isolation_start_time, time) {
        rate *= params.interventions.isolation_house_effectiveness;
    }
    if timestamp_active(microcell.closure_start_time, time) {
        rate *= params.interventions.closure_household_scale;
    }
    rate * seasonality(params, time)
}

/// Structural susceptibility of one household member.
#[inline]
pub fn household_susceptibility(params: &SimParams, member: &Person, household: &Household) -> f64 {
    let mut s = household.susceptibility;
    if member.care_home_resident {
        s *= params.carehome.resident_susceptibility_scale;
    }
    s
}

// ── Place ─────────────────────────────────────────────────────────────────────

/// Per-infector place force of infection within one occupant group.
pub fn place_foi(
    params:   &SimParams,
    infector: &Person,
    place:    &Place,
    closed:   bool,
    time:     f64,
) -> f64 {
    let mut rate = params.place_transmission
        * params.place_type_scale[place.place_type.index()]
        * shedding(params, infector, time)
        * isolation_scale(params, infector, time)
        * place.infectiousness;
    if place.place_type == PlaceType::CareHome && infector.care_home_resident {
        rate *= params.carehome.resident_infectiousness_scale;
    }
    if closed {
        rate *= params.interventions.closure_place_scale;
    }
    rate * seasonality(params, time)
}

/// Structural susceptibility of one occupant towards their place's group.
pub fn place_susceptibility(params: &SimParams, occupant: &Person, place: &Place) -> f64 {
    let mut s = place.susceptibility;
    if place.place_type == PlaceType::CareHome && occupant.care_home_resident {
        s *= params.carehome.resident_susceptibility_scale;
    }
    s
}

// ── Spatial ───────────────────────────────────────────────────────────────────

/// Expected between-cell infection events per day originating from one cell
/// with `infectious` infectious residents.
#[inline]
pub fn spatial_rate(params: &SimParams, infectious: u64, time: f64) -> f64 {
    params.spatial_transmission * infectious as f64 * seasonality(params, time)
}

// ── Queue drain ───────────────────────────────────────────────────────────────

/// Probability that an exposure candidate is admitted at queue-drain time:
/// the personal susceptibility hook scaled down while the candidate's
/// microcell distances socially.
pub fn admission_susceptibility(
    params:    &SimParams,
    candidate: &Person,
    microcell: &Microcell,
    time:      f64,
) -> f64 {
    let mut s = candidate.susceptibility;
    if timestamp_active(microcell.distancing_start_time, time) {
        s *= params.interventions.distancing_susceptibility_scale;
    }
    s
}
