//! `QueueSweep` — drains the per-cell infection queues and commits admitted
//! exposures.
//!
//! The decision sweeps only nominate candidates; this sweep is the single
//! place where a `Susceptible → Exposed` (or `→ Vaccinated`, for protected
//! breakthrough contacts) commit happens.  Draining is idempotent with
//! respect to duplicate entries: the first admitted exposure flips the
//! status, and every later entry for the same person fails the
//! susceptibility guard and falls through.

use std::sync::Arc;

use epi_core::{InfectionStatus, PersonId, SimRng, SimTime};
use epi_params::SimParams;
use epi_pop::Population;

use crate::progression::schedule_next;
use crate::{Sweep, SweepResult, foi};

pub struct QueueSweep {
    params: Arc<SimParams>,
}

impl QueueSweep {
    pub fn new(params: Arc<SimParams>) -> Self {
        Self { params }
    }

    /// Commit one admitted exposure: flip to Exposed, open a fresh episode,
    /// schedule the infectious onset, and record the epidemic-curve
    /// statistics stamped at decision time.
    fn expose(
        &self,
        population: &mut Population,
        rng:        &mut SimRng,
        person:     PersonId,
        time:       SimTime,
    ) -> SweepResult<()> {
        population.update_status(person, InfectionStatus::Exposed)?;
        {
            let p = &mut population.persons[person.index()];
            p.times_infected += 1;
            p.secondary_infections.push(0);
        }

        let latent = schedule_next(&self.params, population, rng, person, time.time)?;

        let (reference_day, exposure_period, infector_latent, first_exposure) = {
            let p = &mut population.persons[person.index()];
            p.latent_period = Some(latent);
            let first = !p.generation_time_recorded;
            p.generation_time_recorded = true;
            (
                p.exposure_reference_day,
                p.exposure_period,
                p.infector_latent_period,
                first,
            )
        };
        if let (Some(day), Some(period)) = (reference_day, exposure_period) {
            // Onset-to-onset gap: the contact happened `period` days after the
            // infector turned infectious, and this person's own onset follows
            // after their sampled latent period.
            population.record_serial_interval(day, period + latent);
            if first_exposure {
                if let Some(infector_latent) = infector_latent {
                    population.record_generation_time(day, period + infector_latent);
                }
            }
        }
        Ok(())
    }
}

impl Sweep for QueueSweep {
    fn name(&self) -> &'static str {
        "queue"
    }

    fn execute(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        time:       SimTime,
    ) -> SweepResult<()> {
        for cell_idx in 0..population.cells.len() {
            let mut queue = std::mem::take(&mut population.cells[cell_idx].infection_queue);

            for person in queue.drain(..) {
                let (admit, vaccinated) = {
                    let p = &population.persons[person.index()];
                    if !p.is_susceptible() {
                        continue; // an earlier exposure this step already won
                    }
                    let microcell = &population.microcells[p.microcell.index()];
                    (
                        foi::admission_susceptibility(&self.params, p, microcell, time.time),
                        foi::vaccine_effective(&self.params, p, time.time),
                    )
                };
                if !rng.gen_bool(admit) {
                    continue;
                }

                if vaccinated && rng.gen_bool(self.params.interventions.vaccine.protection_prob) {
                    // The dose held: the contact is absorbed terminally.
                    population.update_status(person, InfectionStatus::Vaccinated)?;
                    let p = &mut population.persons[person.index()];
                    p.next_status = None;
                    p.time_of_status_change = Some(f64::INFINITY);
                } else {
                    self.expose(population, rng, person, time)?;
                }
            }
        }
        Ok(())
    }
}
