//! `PlaceSweep` — within-group place transmission decisions.
//!
//! Transmission in a place happens within one occupant group (a shift, a
//! class, a ward) at a time.  Rather than a Bernoulli draw per pair, the
//! group's force of infection is aggregated over its infectors and the
//! number of exposures is drawn once:
//!
//! - saturated (`p ≥ 1`): every susceptible occupant is exposed;
//! - otherwise: `Binomial(n, p)` exposures, chosen uniformly without
//!   replacement among the group's susceptibles.
//!
//! Each exposure is attributed to a uniformly chosen group infector for the
//! secondary-infection bookkeeping.

use std::sync::Arc;

use epi_core::{PersonId, SimRng, SimTime};
use epi_params::SimParams;
use epi_pop::Population;
use rand_distr::{Binomial, Distribution};

use crate::sweep::{Exposure, queue_exposures};
use crate::{Sweep, SweepResult, foi};

pub struct PlaceSweep {
    params: Arc<SimParams>,
}

impl PlaceSweep {
    pub fn new(params: Arc<SimParams>) -> Self {
        Self { params }
    }
}

impl Sweep for PlaceSweep {
    fn name(&self) -> &'static str {
        "place"
    }

    fn execute(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        time:       SimTime,
    ) -> SweepResult<()> {
        let params = &self.params;
        let mut exposures: Vec<Exposure> = Vec::new();

        for place in &population.places {
            let microcell = &population.microcells[place.microcell.index()];
            let closed = foi::timestamp_active(microcell.closure_start_time, time.time);

            // Group iteration must be in a deterministic order: the draws
            // below come from the shared RNG stream.
            for group in place.sorted_group_ids() {
                let mut group_foi = 0.0;
                let mut infectors: Vec<PersonId> = Vec::new();
                let mut susceptibles: Vec<PersonId> = Vec::new();
                let mut susceptibility_sum = 0.0;

                for &member in place.group(group) {
                    let person = &population.persons[member.index()];
                    if person.is_infectious() {
                        group_foi += foi::place_foi(params, person, place, closed, time.time);
                        infectors.push(member);
                    } else if person.is_susceptible() {
                        susceptibility_sum += foi::place_susceptibility(params, person, place);
                        susceptibles.push(member);
                    }
                }
                if infectors.is_empty() || susceptibles.is_empty() || group_foi <= 0.0 {
                    continue;
                }

                let n = susceptibles.len();
                let mean_susceptibility = susceptibility_sum / n as f64;
                let p = group_foi * mean_susceptibility * time.dt;

                let count = if p >= 1.0 {
                    n as u64
                } else {
                    // p is in (0, 1) here, so construction cannot fail.
                    Binomial::new(n as u64, p)
                        .unwrap_or_else(|e| unreachable!("invalid binomial: {e}"))
                        .sample(rng.inner())
                };
                if count == 0 {
                    continue;
                }

                for &infectee in rng.choose_multiple(&susceptibles, count as usize) {
                    let Some(&infector) = rng.choose(&infectors) else {
                        continue;
                    };
                    exposures.push(Exposure { infector, infectee });
                }
            }
        }

        queue_exposures(population, &exposures, time)
    }
}
