//! `UpdatePlaceSweep` — re-samples the occupants of casual-mixing venues.
//!
//! Fixed venues (schools, workplaces, care homes) keep their occupant
//! groups from population construction.  Randomised venues model casual
//! contact: each step their occupants are discarded and re-drawn from the
//! venue's microcell, up to the venue's capacity, with each visitor landing
//! in a uniformly chosen group.

use std::sync::Arc;

use epi_core::{PersonId, SimRng, SimTime};
use epi_params::SimParams;
use epi_pop::Population;

use crate::{Sweep, SweepResult};

pub struct UpdatePlaceSweep {
    params: Arc<SimParams>,
}

impl UpdatePlaceSweep {
    pub fn new(params: Arc<SimParams>) -> Self {
        Self { params }
    }
}

impl Sweep for UpdatePlaceSweep {
    fn name(&self) -> &'static str {
        "update_place"
    }

    fn execute(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        _time:      SimTime,
    ) -> SweepResult<()> {
        for place_idx in 0..population.places.len() {
            let place = &population.places[place_idx];
            if !place.place_type.is_randomised() {
                continue;
            }
            let place_id = place.id;
            let microcell = place.microcell;
            let capacity = place.max_capacity as usize;
            let group_count = self.params.place_group_count[place.place_type.index()];

            // Discard yesterday's visitors (deterministic order).
            let occupants: Vec<PersonId> = {
                let place = &population.places[place_idx];
                place
                    .sorted_group_ids()
                    .into_iter()
                    .flat_map(|g| place.group(g).to_vec())
                    .collect()
            };
            for person in occupants {
                population.remove_person_from_place(person, place_id)?;
            }

            let pool = population.microcells[microcell.index()].persons.clone();
            let visitors: Vec<PersonId> = rng
                .choose_multiple(&pool, capacity.min(pool.len()))
                .into_iter()
                .copied()
                .collect();
            for person in visitors {
                let group = rng.gen_range(0..group_count.max(1));
                population.add_person_to_place(person, place_id, group)?;
            }
        }
        Ok(())
    }
}
