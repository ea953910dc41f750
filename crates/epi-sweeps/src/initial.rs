//! `InitialInfectedSweep` — seeds the outbreak before the first timestep.
//!
//! Seeding is all-or-nothing: the susceptible pool is verified *before* any
//! status changes, so an over-large request leaves the population untouched
//! rather than half-seeded.

use std::sync::Arc;

use epi_core::{CellId, InfectionStatus, PersonId, SimRng, SimTime};
use epi_params::SimParams;
use epi_pop::Population;

use crate::progression::{draw_initial_infectiousness, schedule_next};
use crate::{Sweep, SweepError, SweepResult};

pub struct InitialInfectedSweep {
    params: Arc<SimParams>,
    /// How many persons to seed.
    count: usize,
    /// Restrict seeding to one cell; `None` seeds population-wide.
    cell: Option<CellId>,
}

impl InitialInfectedSweep {
    pub fn new(params: Arc<SimParams>, count: usize) -> Self {
        Self {
            params,
            count,
            cell: None,
        }
    }

    /// Seed within one cell only.
    pub fn in_cell(mut self, cell: CellId) -> Self {
        self.cell = Some(cell);
        self
    }
}

impl Sweep for InitialInfectedSweep {
    fn name(&self) -> &'static str {
        "initial_infected"
    }

    fn execute(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        time:       SimTime,
    ) -> SweepResult<()> {
        let candidates: Vec<PersonId> = match self.cell {
            Some(cell) => population.cells[cell.index()]
                .persons
                .iter()
                .copied()
                .filter(|p| population.persons[p.index()].is_susceptible())
                .collect(),
            None => population
                .persons
                .iter()
                .filter(|p| p.is_susceptible())
                .map(|p| p.id)
                .collect(),
        };
        if candidates.len() < self.count {
            return Err(SweepError::TooManyInitialInfected {
                requested:   self.count,
                susceptible: candidates.len(),
            });
        }

        let chosen: Vec<PersonId> = rng
            .choose_multiple(&candidates, self.count)
            .into_iter()
            .copied()
            .collect();

        for person in chosen {
            population.update_status(person, InfectionStatus::InfectMild)?;

            let initial = draw_initial_infectiousness(&self.params, InfectionStatus::InfectMild, rng);
            {
                let p = &mut population.persons[person.index()];
                p.times_infected += 1;
                p.secondary_infections.push(0);
                p.infection_start_time = Some(time.time);
                p.initial_infectiousness = initial;
                p.infectiousness =
                    initial * self.params.infectiousness_profile.scale_at(0.0);
            }
            schedule_next(&self.params, population, rng, person, time.time)?;
        }
        Ok(())
    }
}
