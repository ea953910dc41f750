//! `HostProgressionSweep` — the within-host infection state machine.
//!
//! Every person carries at most one pending transition: `next_status` plus
//! the `time_of_status_change` at which it fires.  Each step this sweep
//! commits every due transition, scheduling the follow-up transition
//! immediately after each commit, and cascades within the step until the
//! pending time moves into the future.  A sampled delay shorter than `dt`
//! therefore never stalls a person in an intermediate status.
//!
//! After the cascade, infectiousness is refreshed for every infectious
//! person from the day-by-day profile:
//!
//!   infectiousness = initial draw × profile(days since infectious onset)

use std::sync::Arc;

use epi_core::{CellId, InfectionStatus, PersonId, SimRng, SimTime};
use epi_params::{SimParams, TransitionMatrix};
use epi_pop::Population;
use rand_distr::{Distribution, Gamma};

use crate::{Sweep, SweepError, SweepResult};

use InfectionStatus as S;

pub struct HostProgressionSweep {
    params: Arc<SimParams>,
}

impl HostProgressionSweep {
    pub fn new(params: Arc<SimParams>) -> Self {
        Self { params }
    }
}

// ── Shared scheduling helpers ─────────────────────────────────────────────────

/// Draw the Gamma(1, 1) baseline infectiousness for a fresh episode, scaled
/// for the episode's symptom path.
pub(crate) fn draw_initial_infectiousness(
    params: &SimParams,
    status: InfectionStatus,
    rng:    &mut SimRng,
) -> f64 {
    let scale = if status == S::InfectAsympt {
        params.asympt_infectiousness
    } else {
        params.sympt_infectiousness
    };
    // Shape and scale are the constants (1, 1); construction cannot fail.
    let draw = Gamma::new(1.0, 1.0)
        .unwrap_or_else(|e| unreachable!("invalid gamma: {e}"))
        .sample(rng.inner());
    draw * scale
}

/// Sample a person's next status and its delay, and store both as the
/// pending transition.  Returns the sampled delay in days.
///
/// The probability row is resolved per person (age group, time since
/// recovery for the waning row) and adjusted for care-home mortality before
/// the categorical draw.  The symptom-onset delay is added only into the
/// two symptomatic entry states.
pub(crate) fn schedule_next(
    params:     &SimParams,
    population: &mut Population,
    rng:        &mut SimRng,
    person:     PersonId,
    now:        f64,
) -> SweepResult<f64> {
    let (from, age_group, care_home_resident, time_since_recovery) = {
        let p = &population.persons[person.index()];
        (
            p.status,
            p.age_group,
            p.care_home_resident,
            p.time_of_recovery.map_or(0.0, |t| (now - t).max(0.0)),
        )
    };

    let mut row = params
        .transition_matrix
        .row_weights(from, age_group, time_since_recovery);
    if care_home_resident && matches!(from, S::InfectHosp | S::InfectIcu) {
        row[S::Dead.index()] *= params.carehome.mortality_scale;
    }
    let next = TransitionMatrix::sample_row(from, &row, rng)?;

    let p = &mut population.persons[person.index()];
    if from == S::Recovered && next == S::Recovered {
        // Immunity holds: nothing further to schedule.
        p.next_status = None;
        p.time_of_status_change = Some(f64::INFINITY);
        return Ok(0.0);
    }

    let mut delay = params.transition_time.sample(from, next, rng)?;
    if matches!(next, S::InfectMild | S::InfectGp) {
        delay += params.latent_to_sympt_delay;
    }
    if delay < 0.0 {
        return Err(SweepError::NegativeDelay {
            from,
            to: next,
            delay,
        });
    }

    let p = &mut population.persons[person.index()];
    p.next_status = Some(next);
    p.time_of_status_change = Some(now + delay);
    Ok(delay)
}

// ── The sweep ─────────────────────────────────────────────────────────────────

impl Sweep for HostProgressionSweep {
    fn name(&self) -> &'static str {
        "host_progression"
    }

    fn execute(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        time:       SimTime,
    ) -> SweepResult<()> {
        let params = &self.params;
        let now = time.time;

        // Persons constructed directly in Exposed or an infectious status
        // carry no pending transition (their construction placeholder is +∞);
        // open their episode here so they are not permanently inert.
        for idx in 0..population.persons.len() {
            let p = &population.persons[idx];
            if p.cell == CellId::INVALID
                || p.next_status.is_some()
                || p.time_of_status_change != Some(f64::INFINITY)
            {
                continue;
            }
            let status = p.status;
            if status != S::Exposed && !status.is_infectious() {
                continue;
            }
            let person = PersonId(idx as u32);
            {
                let p = &mut population.persons[idx];
                p.times_infected += 1;
                p.secondary_infections.push(0);
            }
            if status.is_infectious() {
                let initial = draw_initial_infectiousness(params, status, rng);
                let p = &mut population.persons[idx];
                p.initial_infectiousness = initial;
                p.infectiousness = initial * params.infectiousness_profile.scale_at(0.0);
                p.infection_start_time = Some(now);
            }
            let latent = schedule_next(params, population, rng, person, now)?;
            if status == S::Exposed {
                population.persons[idx].latent_period = Some(latent);
            }
        }

        for idx in 0..population.persons.len() {
            let person = PersonId(idx as u32);
            loop {
                let p = &population.persons[idx];
                if p.cell == CellId::INVALID {
                    break; // removed from the simulation
                }
                let Some(due) = p.time_of_status_change else {
                    break;
                };
                if due > now {
                    break;
                }
                let next = p
                    .next_status
                    .ok_or(SweepError::MissingNextStatus { person })?;
                let previous = p.status;

                population.update_status(person, next)?;

                match next {
                    S::Dead | S::Vaccinated => {
                        let p = &mut population.persons[idx];
                        p.next_status = None;
                        p.time_of_status_change = Some(f64::INFINITY);
                        p.infectiousness = 0.0;
                    }
                    S::Recovered => {
                        let p = &mut population.persons[idx];
                        p.time_of_recovery = Some(due);
                        p.infectiousness = 0.0;
                        schedule_next(params, population, rng, person, now)?;
                    }
                    S::Susceptible => {
                        // Waning return: back to the quiescent state.
                        let p = &mut population.persons[idx];
                        p.next_status = None;
                        p.time_of_status_change = None;
                    }
                    s if s.is_infectious() => {
                        if previous == S::Exposed {
                            // Infectious onset: the episode's baseline draw
                            // and profile clock start here.
                            let initial = draw_initial_infectiousness(params, s, rng);
                            let p = &mut population.persons[idx];
                            p.initial_infectiousness = initial;
                            p.infection_start_time = Some(due);
                        }
                        schedule_next(params, population, rng, person, now)?;
                    }
                    // Exposed commits happen in the queue-drain sweep; a
                    // pending Exposed here would be scheduled the same way.
                    S::Exposed => {
                        schedule_next(params, population, rng, person, now)?;
                    }
                    _ => {}
                }
            }
        }

        // Refresh shedding from the profile for everyone infectious.
        for p in &mut population.persons {
            if p.status.is_infectious() {
                if let Some(days) = p.days_since_infection(now) {
                    p.infectiousness =
                        p.initial_infectiousness * params.infectiousness_profile.scale_at(days);
                }
            }
        }

        Ok(())
    }
}
