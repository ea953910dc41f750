//! Unit tests for the sweep pipeline.

use std::sync::Arc;

use epi_core::{InfectionStatus, Location, PersonId, PlaceType, SimRng, SimTime};
use epi_params::SimParams;
use epi_pop::{Population, find_nearby_cells};

use crate::{
    HouseholdSweep, InitialInfectedSweep, PlaceSweep, QueueSweep, SpatialSweep, Sweep,
    SweepError, UpdatePlaceSweep,
};

use InfectionStatus as S;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn step(t: f64) -> SimTime {
    SimTime {
        time: t,
        dt: 1.0,
        step: t as u64,
    }
}

/// One cell, one microcell, `n` susceptible persons sharing the implicit
/// resident household.
fn shared_household(n: usize) -> Population {
    let mut pop = Population::new();
    let cell = pop.add_cell(Location::default());
    let mc = pop.add_microcells(cell, 1).unwrap()[0];
    pop.add_people(mc, n, S::Susceptible).unwrap();
    pop
}

/// Force `person` into an infectious state with unit shedding and a live
/// episode, bypassing the exposure path.
fn make_infectious(pop: &mut Population, person: PersonId, t0: f64) {
    pop.update_status(person, S::InfectMild).unwrap();
    let p = &mut pop.persons[person.index()];
    p.infectiousness = 1.0;
    p.initial_infectiousness = 1.0;
    p.infection_start_time = Some(t0);
    p.secondary_infections.push(0);
}

/// Parameters cranked high enough that every contact decision saturates.
fn certain_transmission() -> Arc<SimParams> {
    let mut params = SimParams::default();
    params.household_transmission = 1e6;
    params.place_transmission = 1e6;
    params.spatial_transmission = 50.0;
    Arc::new(params)
}

#[cfg(test)]
mod foi {
    use super::*;
    use crate::foi;

    #[test]
    fn seasonality_is_flat_at_zero_amplitude() {
        let params = SimParams::default();
        for t in [0.0, 91.25, 182.5, 400.0] {
            assert_eq!(foi::seasonality(&params, t), 1.0);
        }
    }

    #[test]
    fn timestamp_gate_requires_past_timestamp() {
        assert!(!foi::timestamp_active(None, 10.0));
        assert!(!foi::timestamp_active(Some(11.0), 10.0));
        assert!(foi::timestamp_active(Some(10.0), 10.0));
        assert!(foi::timestamp_active(Some(3.0), 10.0));
    }

    #[test]
    fn quarantine_scales_shedding() {
        let params = SimParams::default();
        let mut pop = shared_household(1);
        make_infectious(&mut pop, PersonId(0), 0.0);
        let base = foi::shedding(&params, &pop.persons[0], 5.0);

        pop.persons[0].quarantine_start_time = Some(1.0);
        let reduced = foi::shedding(&params, &pop.persons[0], 5.0);
        assert!((reduced - base * params.interventions.quarantine_effectiveness).abs() < 1e-12);
    }

    #[test]
    fn vaccine_needs_time_to_take_effect() {
        let params = SimParams::default();
        let mut pop = shared_household(1);
        pop.persons[0].vaccine_time = Some(0.0);
        let lag = params.interventions.vaccine.time_to_efficacy;
        assert!(!foi::vaccine_effective(&params, &pop.persons[0], lag - 0.1));
        assert!(foi::vaccine_effective(&params, &pop.persons[0], lag));
    }

    #[test]
    fn isolation_only_scales_when_active() {
        let params = SimParams::default();
        let mut pop = shared_household(1);
        assert_eq!(foi::isolation_scale(&params, &pop.persons[0], 2.0), 1.0);
        pop.persons[0].isolation_start_time = Some(1.0);
        assert_eq!(
            foi::isolation_scale(&params, &pop.persons[0], 2.0),
            params.interventions.isolation_effectiveness
        );
    }

    #[test]
    fn household_rate_scales_for_isolation_and_carehome_residency() {
        let params = SimParams::default();
        let mut pop = shared_household(2);
        make_infectious(&mut pop, PersonId(0), 0.0);
        let base = foi::household_foi(
            &params,
            &pop.persons[0],
            &pop.households[0],
            &pop.microcells[0],
            2.0,
        );

        pop.persons[0].care_home_resident = true;
        pop.persons[0].isolation_start_time = Some(1.0);
        let scaled = foi::household_foi(
            &params,
            &pop.persons[0],
            &pop.households[0],
            &pop.microcells[0],
            2.0,
        );

        let expected = base
            * params.carehome.resident_infectiousness_scale
            * params.interventions.isolation_house_effectiveness;
        assert!((scaled - expected).abs() < 1e-9);
    }

    #[test]
    fn carehome_residents_receive_more_at_home() {
        let params = SimParams::default();
        let mut pop = shared_household(1);
        let base = foi::household_susceptibility(&params, &pop.persons[0], &pop.households[0]);
        pop.persons[0].care_home_resident = true;
        let scaled = foi::household_susceptibility(&params, &pop.persons[0], &pop.households[0]);
        assert!((scaled - base * params.carehome.resident_susceptibility_scale).abs() < 1e-12);
    }
}

#[cfg(test)]
mod household {
    use super::*;

    #[test]
    fn saturated_foi_queues_every_housemate() {
        let mut pop = shared_household(4);
        make_infectious(&mut pop, PersonId(0), 0.0);

        let mut sweep = HouseholdSweep::new(certain_transmission());
        let mut rng = SimRng::new(1);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();

        assert_eq!(pop.cells[0].infection_queue.len(), 3);
        // Secondary infections are credited at decision time.
        assert_eq!(pop.persons[0].secondary_infections, vec![3]);
        // Statuses are untouched until the queue drains.
        for i in 1..4 {
            assert_eq!(pop.persons[i].status, S::Susceptible);
        }
    }

    #[test]
    fn exposure_bookkeeping_is_stamped_on_the_infectee() {
        let mut pop = shared_household(2);
        make_infectious(&mut pop, PersonId(0), 2.0);
        pop.persons[0].latent_period = Some(4.0);

        let mut sweep = HouseholdSweep::new(certain_transmission());
        let mut rng = SimRng::new(1);
        sweep.execute(&mut pop, &mut rng, step(5.0)).unwrap();

        let infectee = &pop.persons[1];
        assert_eq!(infectee.exposure_period, Some(3.0));
        assert_eq!(infectee.infector_latent_period, Some(4.0));
        assert_eq!(infectee.exposure_reference_day, Some(2));
    }

    #[test]
    fn no_infectious_members_means_no_decisions() {
        let mut pop = shared_household(5);
        let mut sweep = HouseholdSweep::new(certain_transmission());
        let mut rng = SimRng::new(1);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();
        assert!(pop.cells[0].infection_queue.is_empty());
    }
}

#[cfg(test)]
mod place {
    use super::*;

    #[test]
    fn saturated_group_exposes_all_susceptible_occupants() {
        let mut pop = shared_household(5);
        let place = pop
            .add_place(pop.persons[0].microcell, Location::default(), PlaceType::Workplace)
            .unwrap();
        for i in 0..5u32 {
            pop.add_person_to_place(PersonId(i), place, 0).unwrap();
        }
        make_infectious(&mut pop, PersonId(0), 0.0);

        let mut sweep = PlaceSweep::new(certain_transmission());
        let mut rng = SimRng::new(7);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();

        assert_eq!(pop.cells[0].infection_queue.len(), 4);
        assert_eq!(pop.persons[0].secondary_infections, vec![4]);
    }

    #[test]
    fn groups_do_not_mix() {
        let mut pop = shared_household(4);
        let place = pop
            .add_place(pop.persons[0].microcell, Location::default(), PlaceType::Workplace)
            .unwrap();
        pop.add_person_to_place(PersonId(0), place, 0).unwrap();
        pop.add_person_to_place(PersonId(1), place, 0).unwrap();
        pop.add_person_to_place(PersonId(2), place, 1).unwrap();
        pop.add_person_to_place(PersonId(3), place, 1).unwrap();
        make_infectious(&mut pop, PersonId(0), 0.0);

        let mut sweep = PlaceSweep::new(certain_transmission());
        let mut rng = SimRng::new(7);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();

        // Only the group-0 susceptible is exposed.
        let queued: Vec<PersonId> = pop.cells[0].infection_queue.iter().copied().collect();
        assert_eq!(queued, vec![PersonId(1)]);
    }
}

#[cfg(test)]
mod spatial {
    use super::*;

    #[test]
    fn events_land_in_neighbour_cells() {
        let mut pop = Population::new();
        let c0 = pop.add_cell(Location::new(0.0, 0.0));
        let c1 = pop.add_cell(Location::new(0.5, 0.0));
        let mc0 = pop.add_microcells(c0, 1).unwrap()[0];
        let mc1 = pop.add_microcells(c1, 1).unwrap()[0];
        pop.add_people(mc0, 2, S::Susceptible).unwrap();
        pop.add_people(mc1, 5, S::Susceptible).unwrap();
        find_nearby_cells(&mut pop, 1.0);
        make_infectious(&mut pop, PersonId(0), 0.0);

        let mut sweep = SpatialSweep::new(certain_transmission());
        let mut rng = SimRng::new(3);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();

        // With an expected 50 events, at least one lands on a susceptible
        // person in the neighbour cell.
        assert!(!pop.cells[c1.index()].infection_queue.is_empty());
        assert!(pop.cells[c0.index()].infection_queue.is_empty());
    }

    #[test]
    fn isolated_cells_generate_nothing() {
        let mut pop = shared_household(3);
        make_infectious(&mut pop, PersonId(0), 0.0);

        let mut sweep = SpatialSweep::new(certain_transmission());
        let mut rng = SimRng::new(3);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();
        assert!(pop.cells[0].infection_queue.is_empty());
    }
}

#[cfg(test)]
mod queue {
    use super::*;

    #[test]
    fn duplicate_entries_commit_once() {
        let mut pop = shared_household(2);
        pop.enqueue_person(PersonId(1)).unwrap();
        pop.enqueue_person(PersonId(1)).unwrap();

        let mut sweep = QueueSweep::new(Arc::new(SimParams::default()));
        let mut rng = SimRng::new(11);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();

        let p = &pop.persons[1];
        assert_eq!(p.status, S::Exposed);
        assert_eq!(p.times_infected, 1);
        assert_eq!(p.secondary_infections, vec![0]);
        assert!(pop.cells[0].infection_queue.is_empty());
    }

    #[test]
    fn exposed_person_has_a_scheduled_onset() {
        let mut pop = shared_household(1);
        pop.enqueue_person(PersonId(0)).unwrap();

        let mut sweep = QueueSweep::new(Arc::new(SimParams::default()));
        let mut rng = SimRng::new(11);
        sweep.execute(&mut pop, &mut rng, step(2.0)).unwrap();

        let p = &pop.persons[0];
        assert_eq!(p.status, S::Exposed);
        let next = p.next_status.unwrap();
        assert!(matches!(next, S::InfectAsympt | S::InfectMild | S::InfectGp));
        assert!(p.time_of_status_change.unwrap() > 2.0);
        assert_eq!(p.latent_period.map(|d| d > 0.0), Some(true));
    }

    #[test]
    fn zero_susceptibility_is_never_admitted() {
        let mut pop = shared_household(1);
        pop.persons[0].susceptibility = 0.0;
        pop.enqueue_person(PersonId(0)).unwrap();

        let mut sweep = QueueSweep::new(Arc::new(SimParams::default()));
        let mut rng = SimRng::new(11);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();
        assert_eq!(pop.persons[0].status, S::Susceptible);
    }

    #[test]
    fn effective_vaccine_absorbs_the_exposure() {
        let mut params = SimParams::default();
        params.interventions.vaccine.protection_prob = 1.0;
        let mut pop = shared_household(1);
        pop.persons[0].vaccine_time = Some(0.0);
        pop.enqueue_person(PersonId(0)).unwrap();

        let mut sweep = QueueSweep::new(Arc::new(params));
        let mut rng = SimRng::new(11);
        sweep.execute(&mut pop, &mut rng, step(20.0)).unwrap();

        let p = &pop.persons[0];
        assert_eq!(p.status, S::Vaccinated);
        assert_eq!(p.time_of_status_change, Some(f64::INFINITY));
        assert_eq!(p.times_infected, 0);
    }

    #[test]
    fn committed_exposures_record_onset_gap_statistics() {
        let mut pop = shared_household(2);
        make_infectious(&mut pop, PersonId(0), 2.0);
        pop.persons[0].latent_period = Some(4.0);

        let mut household = HouseholdSweep::new(certain_transmission());
        let mut queue = QueueSweep::new(Arc::new(SimParams::default()));
        let mut rng = SimRng::new(11);
        household.execute(&mut pop, &mut rng, step(5.0)).unwrap();
        queue.execute(&mut pop, &mut rng, step(5.0)).unwrap();

        // Contact three days after the infector's onset: the generation time
        // is that gap plus the infector's latent period; the serial interval
        // adds the infectee's own instead.
        let latent = pop.persons[1].latent_period.unwrap();
        assert_eq!(pop.generation_times[&2], vec![7.0]);
        assert_eq!(pop.serial_intervals[&2], vec![3.0 + latent]);
    }
}

#[cfg(test)]
mod progression {
    use super::*;
    use crate::HostProgressionSweep;

    fn default_params() -> Arc<SimParams> {
        Arc::new(SimParams::default())
    }

    #[test]
    fn due_transition_commits_and_reschedules() {
        let mut pop = shared_household(1);
        pop.update_status(PersonId(0), S::Exposed).unwrap();
        {
            let p = &mut pop.persons[0];
            p.next_status = Some(S::InfectMild);
            p.time_of_status_change = Some(0.5);
            p.secondary_infections.push(0);
        }

        let mut sweep = HostProgressionSweep::new(default_params());
        let mut rng = SimRng::new(5);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();

        let p = &pop.persons[0];
        assert_eq!(p.status, S::InfectMild);
        // Onset bookkeeping starts the episode clock at the scheduled time.
        assert_eq!(p.infection_start_time, Some(0.5));
        assert!(p.initial_infectiousness > 0.0);
        assert!(p.infectiousness > 0.0);
        assert_eq!(p.next_status, Some(S::Recovered));
        assert!(p.time_of_status_change.unwrap() > 1.0);
    }

    #[test]
    fn future_transitions_are_left_alone() {
        let mut pop = shared_household(1);
        pop.update_status(PersonId(0), S::Exposed).unwrap();
        {
            let p = &mut pop.persons[0];
            p.next_status = Some(S::InfectMild);
            p.time_of_status_change = Some(3.0);
        }

        let mut sweep = HostProgressionSweep::new(default_params());
        let mut rng = SimRng::new(5);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();
        assert_eq!(pop.persons[0].status, S::Exposed);
    }

    #[test]
    fn recovery_without_waning_is_final() {
        let mut pop = shared_household(1);
        make_infectious(&mut pop, PersonId(0), 0.0);
        {
            let p = &mut pop.persons[0];
            p.next_status = Some(S::Recovered);
            p.time_of_status_change = Some(6.0);
        }

        let mut sweep = HostProgressionSweep::new(default_params());
        let mut rng = SimRng::new(5);
        sweep.execute(&mut pop, &mut rng, step(7.0)).unwrap();

        let p = &pop.persons[0];
        assert_eq!(p.status, S::Recovered);
        assert_eq!(p.time_of_recovery, Some(6.0));
        assert_eq!(p.infectiousness, 0.0);
        assert_eq!(p.time_of_status_change, Some(f64::INFINITY));
        assert_eq!(p.next_status, None);
    }

    #[test]
    fn recovery_with_waning_schedules_a_return() {
        let mut pop = shared_household(1);
        make_infectious(&mut pop, PersonId(0), 0.0);
        {
            let p = &mut pop.persons[0];
            p.next_status = Some(S::Recovered);
            p.time_of_status_change = Some(7.0);
        }

        // Sampling the waning row at the moment of recovery: the return
        // probability is exp(0) = 1, so the outcome is deterministic.
        let mut sweep =
            HostProgressionSweep::new(Arc::new(SimParams::with_waning_immunity()));
        let mut rng = SimRng::new(5);
        sweep.execute(&mut pop, &mut rng, step(7.0)).unwrap();

        let p = &pop.persons[0];
        assert_eq!(p.status, S::Recovered);
        assert_eq!(p.next_status, Some(S::Susceptible));
        assert!(p.time_of_status_change.unwrap().is_finite());
    }

    #[test]
    fn death_is_terminal() {
        let mut pop = shared_household(1);
        make_infectious(&mut pop, PersonId(0), 0.0);
        pop.update_status(PersonId(0), S::InfectIcu).unwrap();
        {
            let p = &mut pop.persons[0];
            p.next_status = Some(S::Dead);
            p.time_of_status_change = Some(10.0);
        }

        let mut sweep = HostProgressionSweep::new(default_params());
        let mut rng = SimRng::new(5);
        sweep.execute(&mut pop, &mut rng, step(10.0)).unwrap();

        let p = &pop.persons[0];
        assert_eq!(p.status, S::Dead);
        assert_eq!(p.next_status, None);
        assert_eq!(p.time_of_status_change, Some(f64::INFINITY));
        assert_eq!(p.infectiousness, 0.0);
    }

    #[test]
    fn construction_seeded_infected_gets_an_episode() {
        let mut pop = Population::new();
        let cell = pop.add_cell(Location::default());
        let mc = pop.add_microcells(cell, 1).unwrap()[0];
        pop.add_person(mc, 40, S::InfectMild).unwrap();

        let mut sweep = HostProgressionSweep::new(default_params());
        let mut rng = SimRng::new(5);
        sweep.execute(&mut pop, &mut rng, step(0.0)).unwrap();

        let p = &pop.persons[0];
        assert_eq!(p.times_infected, 1);
        assert_eq!(p.infection_start_time, Some(0.0));
        assert!(p.infectiousness > 0.0);
        assert_eq!(p.next_status, Some(S::Recovered));
        assert!(p.time_of_status_change.unwrap().is_finite());
    }

    #[test]
    fn missing_next_status_is_fatal() {
        let mut pop = shared_household(1);
        pop.update_status(PersonId(0), S::Exposed).unwrap();
        pop.persons[0].time_of_status_change = Some(0.5);
        pop.persons[0].next_status = None;

        let mut sweep = HostProgressionSweep::new(default_params());
        let mut rng = SimRng::new(5);
        let err = sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap_err();
        assert!(matches!(err, SweepError::MissingNextStatus { .. }));
    }
}

#[cfg(test)]
mod initial {
    use super::*;

    #[test]
    fn seeds_exactly_the_requested_count() {
        let mut pop = shared_household(10);
        let mut sweep = InitialInfectedSweep::new(Arc::new(SimParams::default()), 3);
        let mut rng = SimRng::new(9);
        sweep.execute(&mut pop, &mut rng, step(0.0)).unwrap();

        let seeded: Vec<&epi_pop::Person> = pop
            .persons
            .iter()
            .filter(|p| p.status == S::InfectMild)
            .collect();
        assert_eq!(seeded.len(), 3);
        for p in seeded {
            assert!(p.infectiousness > 0.0);
            assert_eq!(p.times_infected, 1);
            assert_eq!(p.infection_start_time, Some(0.0));
            assert!(p.next_status.is_some());
            assert!(p.time_of_status_change.unwrap() > 0.0);
        }
        assert_eq!(pop.cells[0].counter.count_of(S::InfectMild), 3);
    }

    #[test]
    fn over_large_request_leaves_population_untouched() {
        let mut pop = shared_household(2);
        pop.update_status(PersonId(0), S::Recovered).unwrap();

        let mut sweep = InitialInfectedSweep::new(Arc::new(SimParams::default()), 2);
        let mut rng = SimRng::new(9);
        let err = sweep.execute(&mut pop, &mut rng, step(0.0)).unwrap_err();
        assert!(matches!(
            err,
            SweepError::TooManyInitialInfected {
                requested: 2,
                susceptible: 1,
            }
        ));
        assert_eq!(pop.persons[1].status, S::Susceptible);
        assert_eq!(pop.cells[0].counter.count_of(S::InfectMild), 0);
    }

    #[test]
    fn cell_scoped_seeding_stays_in_the_cell() {
        let mut pop = Population::new();
        let c0 = pop.add_cell(Location::default());
        let c1 = pop.add_cell(Location::default());
        let mc0 = pop.add_microcells(c0, 1).unwrap()[0];
        let mc1 = pop.add_microcells(c1, 1).unwrap()[0];
        pop.add_people(mc0, 4, S::Susceptible).unwrap();
        pop.add_people(mc1, 4, S::Susceptible).unwrap();

        let mut sweep = InitialInfectedSweep::new(Arc::new(SimParams::default()), 2).in_cell(c1);
        let mut rng = SimRng::new(9);
        sweep.execute(&mut pop, &mut rng, step(0.0)).unwrap();

        assert_eq!(pop.cells[c0.index()].counter.count_of(S::InfectMild), 0);
        assert_eq!(pop.cells[c1.index()].counter.count_of(S::InfectMild), 2);
    }
}

#[cfg(test)]
mod update_place {
    use super::*;

    #[test]
    fn randomised_venues_are_resampled_to_capacity() {
        let mut pop = shared_household(20);
        let mc = pop.persons[0].microcell;
        let place = pop
            .add_place(mc, Location::default(), PlaceType::OutdoorSpace)
            .unwrap();
        pop.places[place.index()].max_capacity = 6;

        let mut sweep = UpdatePlaceSweep::new(Arc::new(SimParams::default()));
        let mut rng = SimRng::new(13);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();
        assert_eq!(pop.places[place.index()].occupancy(), 6);

        // Occupants are replaced, not accumulated.
        sweep.execute(&mut pop, &mut rng, step(2.0)).unwrap();
        assert_eq!(pop.places[place.index()].occupancy(), 6);
        for p in &pop.persons {
            assert!(p.places.len() <= 1);
        }
    }

    #[test]
    fn fixed_venues_are_left_alone() {
        let mut pop = shared_household(5);
        let mc = pop.persons[0].microcell;
        let place = pop
            .add_place(mc, Location::default(), PlaceType::Workplace)
            .unwrap();
        pop.add_person_to_place(PersonId(0), place, 0).unwrap();

        let mut sweep = UpdatePlaceSweep::new(Arc::new(SimParams::default()));
        let mut rng = SimRng::new(13);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();
        assert_eq!(pop.places[place.index()].group(0), &[PersonId(0)]);
    }
}

#[cfg(test)]
mod interventions {
    use super::*;
    use crate::{CaseIsolation, InterventionSweep, PlaceClosure, SocialDistancing};

    #[test]
    fn place_closure_gates_by_calendar_window() {
        let mut pop = shared_household(2);
        let mut sweep = InterventionSweep::new();
        sweep.register(Box::new(PlaceClosure {
            start_time: 5.0,
            end_time:   10.0,
        }));
        let mut rng = SimRng::new(17);

        sweep.execute(&mut pop, &mut rng, step(4.0)).unwrap();
        assert_eq!(pop.microcells[0].closure_start_time, None);

        sweep.execute(&mut pop, &mut rng, step(5.0)).unwrap();
        assert_eq!(pop.microcells[0].closure_start_time, Some(5.0));

        sweep.execute(&mut pop, &mut rng, step(10.0)).unwrap();
        assert_eq!(pop.microcells[0].closure_start_time, None);
    }

    #[test]
    fn distancing_sets_the_microcell_gate() {
        let mut pop = shared_household(2);
        let mut sweep = InterventionSweep::new();
        sweep.register(Box::new(SocialDistancing {
            start_time: 0.0,
            end_time:   30.0,
        }));
        let mut rng = SimRng::new(17);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();
        assert_eq!(pop.microcells[0].distancing_start_time, Some(0.0));
    }

    #[test]
    fn compliant_symptomatic_cases_isolate() {
        let mut pop = shared_household(3);
        make_infectious(&mut pop, PersonId(0), 0.0); // symptomatic
        pop.update_status(PersonId(1), S::InfectAsympt).unwrap(); // not symptomatic

        let mut sweep = InterventionSweep::new();
        sweep.register(Box::new(CaseIsolation {
            start_time:     0.0,
            case_threshold: 1,
            compliance:     1.0,
            duration_days:  7.0,
        }));
        let mut rng = SimRng::new(17);
        sweep.execute(&mut pop, &mut rng, step(1.0)).unwrap();

        assert_eq!(pop.persons[0].isolation_start_time, Some(1.0));
        assert_eq!(pop.persons[1].isolation_start_time, None);
        assert_eq!(pop.persons[2].isolation_start_time, None);

        // Isolation ends after the configured duration.
        sweep.execute(&mut pop, &mut rng, step(8.0)).unwrap();
        assert_eq!(pop.persons[0].isolation_start_time, None);
    }
}
