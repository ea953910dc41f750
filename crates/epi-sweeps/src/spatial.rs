//! `SpatialSweep` — between-cell transmission decisions.
//!
//! Each cell with infectious residents generates a Poisson number of
//! long-range infection events per step, with rate proportional to its
//! infectious count.  Each event lands on a uniformly chosen person in a
//! uniformly chosen neighbour cell; events that land on non-susceptible
//! persons are simply wasted contacts.
//!
//! Cells with no precomputed neighbours (isolated, or the infection radius
//! is zero) generate nothing — spatial coupling is an opt-in geometry
//! property, not an error.

use std::sync::Arc;

use epi_core::{PersonId, SimRng, SimTime};
use epi_params::SimParams;
use epi_pop::Population;
use rand_distr::{Distribution, Poisson};

use crate::sweep::{Exposure, queue_exposures};
use crate::{Sweep, SweepResult, foi};

pub struct SpatialSweep {
    params: Arc<SimParams>,
}

impl SpatialSweep {
    pub fn new(params: Arc<SimParams>) -> Self {
        Self { params }
    }
}

impl Sweep for SpatialSweep {
    fn name(&self) -> &'static str {
        "spatial"
    }

    fn execute(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        time:       SimTime,
    ) -> SweepResult<()> {
        let params = &self.params;
        let mut exposures: Vec<Exposure> = Vec::new();

        for cell in &population.cells {
            let infectious = cell.counter.infectious();
            if infectious == 0 || cell.nearby_cells.is_empty() {
                continue;
            }
            let lambda = foi::spatial_rate(params, infectious, time.time) * time.dt;
            if lambda <= 0.0 {
                continue;
            }
            // lambda is finite and positive here, so construction cannot fail.
            let events = Poisson::new(lambda)
                .unwrap_or_else(|e| unreachable!("invalid poisson: {e}"))
                .sample(rng.inner()) as u64;
            if events == 0 {
                continue;
            }

            let infectors: Vec<PersonId> = cell
                .persons
                .iter()
                .copied()
                .filter(|p| population.persons[p.index()].is_infectious())
                .collect();
            if infectors.is_empty() {
                continue;
            }

            for _ in 0..events {
                let Some(&(target_cell, _)) = rng.choose(&cell.nearby_cells) else {
                    continue;
                };
                let Some(&infectee) =
                    rng.choose(&population.cells[target_cell.index()].persons)
                else {
                    continue;
                };
                if !population.persons[infectee.index()].is_susceptible() {
                    continue;
                }
                let Some(&infector) = rng.choose(&infectors) else {
                    continue;
                };
                // Isolation thins long-range contacts rather than scaling the
                // aggregate rate, keeping the per-event attribution exact.
                let keep = foi::isolation_scale(
                    params,
                    &population.persons[infector.index()],
                    time.time,
                );
                if keep < 1.0 && !rng.gen_bool(keep) {
                    continue;
                }
                exposures.push(Exposure { infector, infectee });
            }
        }

        queue_exposures(population, &exposures, time)
    }
}
