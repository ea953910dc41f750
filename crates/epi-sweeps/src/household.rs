//! `HouseholdSweep` — within-household transmission decisions.
//!
//! For every household holding at least one infectious and one susceptible
//! member, each (infector, susceptible) pair faces an independent Bernoulli
//! contact with per-step probability `foi × susceptibility × dt`.  Winners
//! are queued as exposure candidates; statuses never change here.

use std::sync::Arc;

use epi_core::{SimRng, SimTime};
use epi_params::SimParams;
use epi_pop::Population;

use crate::sweep::{Exposure, queue_exposures};
use crate::{Sweep, SweepResult, foi};

pub struct HouseholdSweep {
    params: Arc<SimParams>,
}

impl HouseholdSweep {
    pub fn new(params: Arc<SimParams>) -> Self {
        Self { params }
    }
}

impl Sweep for HouseholdSweep {
    fn name(&self) -> &'static str {
        "household"
    }

    fn execute(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        time:       SimTime,
    ) -> SweepResult<()> {
        let params = &self.params;
        let mut exposures: Vec<Exposure> = Vec::new();

        for household in &population.households {
            if household.susceptible_members.is_empty() {
                continue;
            }
            let microcell = &population.microcells[household.microcell.index()];

            for &infector_id in &household.members {
                let infector = &population.persons[infector_id.index()];
                if !infector.is_infectious() {
                    continue;
                }
                let rate =
                    foi::household_foi(params, infector, household, microcell, time.time);
                if rate <= 0.0 {
                    continue;
                }
                for &infectee in &household.susceptible_members {
                    let susceptibility = foi::household_susceptibility(
                        params,
                        &population.persons[infectee.index()],
                        household,
                    );
                    if rng.gen_bool(rate * susceptibility * time.dt) {
                        exposures.push(Exposure {
                            infector: infector_id,
                            infectee,
                        });
                    }
                }
            }
        }

        queue_exposures(population, &exposures, time)
    }
}
