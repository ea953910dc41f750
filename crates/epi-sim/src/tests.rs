//! End-to-end tests for the simulation loop.

use epi_core::{InfectionStatus, Location, SimConfig, SimTime};
use epi_params::SimParams;
use epi_pop::Population;

use crate::{NoopObserver, SimError, SimObserver, SimulationBuilder};

use InfectionStatus as S;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// One cell, one microcell, `n` susceptible persons in a shared household.
fn closed_population(n: usize) -> Population {
    let mut pop = Population::new();
    let cell = pop.add_cell(Location::default());
    let mc = pop.add_microcells(cell, 1).unwrap()[0];
    pop.add_people(mc, n, S::Susceptible).unwrap();
    pop
}

fn config(days: u32, seed: u64) -> SimConfig {
    SimConfig {
        simulation_days:         days,
        steps_per_day:           1,
        seed,
        snapshot_interval_steps: 0,
    }
}

/// Household transmission so high every within-household contact saturates.
fn saturating_params() -> SimParams {
    SimParams {
        household_transmission: 1e6,
        ..SimParams::default()
    }
}

/// Population-wide status counts, summed over cells.
fn status_counts(population: &Population) -> Vec<u64> {
    S::ALL
        .iter()
        .map(|&s| {
            population
                .cells
                .iter()
                .map(|c| c.counter.count_of(s))
                .sum()
        })
        .collect()
}

fn count_of(population: &Population, status: S) -> u64 {
    population
        .persons
        .iter()
        .filter(|p| p.status == status)
        .count() as u64
}

/// Records the compartment trajectory, one row per step.
#[derive(Default)]
struct TrajectoryRecorder {
    rows: Vec<Vec<u64>>,
}

impl SimObserver for TrajectoryRecorder {
    fn on_step_end(&mut self, _time: SimTime, population: &Population) {
        self.rows.push(status_counts(population));
    }
}

#[cfg(test)]
mod outbreak {
    use super::*;

    // A fully-connected household under saturating transmission: the seed
    // infects everyone on the first step, and every episode has run its
    // course long before the horizon.
    #[test]
    fn saturating_household_outbreak_burns_out() {
        let n = 10;
        let sim = SimulationBuilder::new(config(200, 42), saturating_params(), closed_population(n))
            .seed_infections(1)
            .build();
        let mut sim = sim.unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let pop = &sim.population;
        assert_eq!(pop.total_counted(), n as u64);
        assert_eq!(count_of(pop, S::Susceptible), 0);
        assert_eq!(count_of(pop, S::Exposed), 0);
        assert_eq!(pop.total_infectious(), 0);
        assert_eq!(
            count_of(pop, S::Recovered) + count_of(pop, S::Dead),
            n as u64
        );
        for cell in &pop.cells {
            assert!(cell.infection_queue.is_empty());
        }
        // Every person went through exactly one episode.
        for p in &pop.persons {
            assert_eq!(p.times_infected, 1);
            assert_eq!(p.secondary_infections.len(), 1);
        }
        // Every contact was exposed by the directly-seeded case, whose
        // episode never had a latent phase: serial intervals are recorded,
        // generation times are not.
        assert!(!pop.serial_intervals.is_empty());
        assert!(pop.generation_times.is_empty());
    }

    // Two cells, no shared structures, no spatial coupling: the outbreak
    // burns through the seeded cell's household and never leaves it.
    #[test]
    fn seeded_cell_burns_out_and_isolated_cell_is_untouched() {
        let mut pop = Population::new();
        let c0 = pop.add_cell(Location::new(0.0, 0.0));
        let c1 = pop.add_cell(Location::new(5.0, 0.0));
        let mc0 = pop.add_microcells(c0, 1).unwrap()[0];
        let mc1 = pop.add_microcells(c1, 1).unwrap()[0];
        pop.add_people(mc0, 8, S::Susceptible).unwrap();
        pop.add_people(mc0, 2, S::InfectMild).unwrap();
        pop.add_people(mc1, 9, S::Susceptible).unwrap();

        let mut params = saturating_params();
        params.infection_radius = 0.0;
        let mut sim = SimulationBuilder::new(config(150, 11), params, pop)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let pop = &sim.population;
        let c0_counter = &pop.cells[c0.index()].counter;
        assert_eq!(c0_counter.count_of(S::Susceptible), 0);
        assert_eq!(
            c0_counter.count_of(S::Recovered) + c0_counter.count_of(S::Dead),
            10
        );
        assert_eq!(pop.cells[c1.index()].counter.count_of(S::Susceptible), 9);
    }

    #[test]
    fn secondary_infection_totals_match_exposures() {
        let n = 8;
        let mut sim =
            SimulationBuilder::new(config(200, 7), saturating_params(), closed_population(n))
                .seed_infections(1)
                .build()
                .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        // Every non-seed exposure was credited to exactly one infector at
        // decision time; credits can exceed commits (duplicate decisions in
        // one step), never undercount them.
        let credited: u32 = sim
            .population
            .persons
            .iter()
            .flat_map(|p| p.secondary_infections.iter())
            .sum();
        assert!(credited >= (n - 1) as u32);
    }
}

#[cfg(test)]
mod spatial_spread {
    use super::*;

    fn two_cell_population(per_cell: usize) -> Population {
        let mut pop = Population::new();
        let c0 = pop.add_cell(Location::new(0.0, 0.0));
        let c1 = pop.add_cell(Location::new(0.5, 0.0));
        let mc0 = pop.add_microcells(c0, 1).unwrap()[0];
        let mc1 = pop.add_microcells(c1, 1).unwrap()[0];
        pop.add_people(mc0, per_cell, S::Susceptible).unwrap();
        pop.add_people(mc1, per_cell, S::Susceptible).unwrap();
        pop
    }

    #[test]
    fn infection_crosses_cells_within_the_radius() {
        // Spatial coupling is kept moderate so the neighbour cell is seeded
        // by second-generation infectors, not blanketed on the first step.
        let params = SimParams {
            household_transmission: 1e6,
            spatial_transmission:   1.0,
            infection_radius:       1.0,
            ..SimParams::default()
        };
        let pop = two_cell_population(10);
        let seed_cell = pop.cells[0].id;
        let mut sim = SimulationBuilder::new(config(150, 3), params, pop)
            .seed_infections_in_cell(1, seed_cell)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let pop = &sim.population;
        assert_eq!(pop.total_counted(), 20);
        assert_eq!(count_of(pop, S::Susceptible), 0);
        assert_eq!(pop.cells[1].counter.count_of(S::Susceptible), 0);
        // Second-generation infectors have known latent periods, so their
        // exposures record generation times alongside the serial intervals.
        assert!(!pop.serial_intervals.is_empty());
        assert!(!pop.generation_times.is_empty());
    }

    #[test]
    fn no_spread_beyond_the_radius() {
        let params = SimParams {
            household_transmission: 1e6,
            spatial_transmission:   20.0,
            infection_radius:       0.2, // cells are 0.5 apart
            ..SimParams::default()
        };
        let pop = two_cell_population(10);
        let seed_cell = pop.cells[0].id;
        let mut sim = SimulationBuilder::new(config(150, 3), params, pop)
            .seed_infections_in_cell(1, seed_cell)
            .build()
            .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        assert_eq!(
            sim.population.cells[1].counter.count_of(S::Susceptible),
            10
        );
    }
}

#[cfg(test)]
mod quiescent {
    use super::*;

    fn inert_params() -> SimParams {
        SimParams {
            household_transmission: 0.0,
            place_transmission:     0.0,
            spatial_transmission:   0.0,
            ..SimParams::default()
        }
    }

    #[test]
    fn zero_transmission_confines_the_outbreak_to_the_seed() {
        let mut sim =
            SimulationBuilder::new(config(120, 5), inert_params(), closed_population(10))
                .seed_infections(1)
                .build()
                .unwrap();
        sim.run(&mut NoopObserver).unwrap();

        let pop = &sim.population;
        assert_eq!(count_of(pop, S::Susceptible), 9);
        assert_eq!(
            count_of(pop, S::Recovered) + count_of(pop, S::Dead),
            1
        );
    }

    #[test]
    fn unseeded_population_stays_fully_susceptible() {
        let mut recorder = TrajectoryRecorder::default();
        let mut sim =
            SimulationBuilder::new(config(30, 5), SimParams::default(), closed_population(10))
                .build()
                .unwrap();
        sim.run(&mut recorder).unwrap();

        assert_eq!(recorder.rows.len(), 30);
        for row in &recorder.rows {
            assert_eq!(row[S::Susceptible.index()], 10);
            assert_eq!(row.iter().sum::<u64>(), 10);
        }
    }
}

#[cfg(test)]
mod reproducibility {
    use super::*;

    fn run_trajectory(seed: u64) -> Vec<Vec<u64>> {
        let params = SimParams {
            household_transmission: 0.5,
            ..SimParams::default()
        };
        let mut recorder = TrajectoryRecorder::default();
        let mut sim = SimulationBuilder::new(config(60, seed), params, closed_population(20))
            .seed_infections(2)
            .build()
            .unwrap();
        sim.run(&mut recorder).unwrap();
        recorder.rows
    }

    #[test]
    fn same_seed_same_trajectory() {
        assert_eq!(run_trajectory(42), run_trajectory(42));
    }

    #[test]
    fn different_seed_different_trajectory() {
        assert_ne!(run_trajectory(42), run_trajectory(43));
    }
}

#[cfg(test)]
mod consistency {
    use super::*;

    #[test]
    fn counters_and_household_subsets_survive_a_full_run() {
        let mut sim =
            SimulationBuilder::new(config(200, 21), saturating_params(), closed_population(12))
                .seed_infections(2)
                .build()
                .unwrap();
        sim.run(&mut NoopObserver).unwrap();
        let pop = &sim.population;

        // Counters agree with a full recount from person records.
        for (i, &status) in S::ALL.iter().enumerate() {
            assert_eq!(
                status_counts(pop)[i],
                count_of(pop, status),
                "counter drift for {status}"
            );
        }

        // Household susceptible subsets agree with member statuses.
        for hh in &pop.households {
            let expected: Vec<_> = hh
                .members
                .iter()
                .copied()
                .filter(|p| pop.persons[p.index()].is_susceptible())
                .collect();
            assert_eq!(hh.susceptible_members, expected);
        }
    }
}

#[cfg(test)]
mod reporter {
    use super::*;
    use crate::CompartmentCsvReporter;

    #[test]
    fn writes_one_row_per_snapshot_plus_final() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("compartments.csv");

        let cfg = SimConfig {
            simulation_days:         10,
            steps_per_day:           1,
            seed:                    1,
            snapshot_interval_steps: 1,
        };
        let mut reporter = CompartmentCsvReporter::new(&path).unwrap();
        let mut sim = SimulationBuilder::new(cfg, saturating_params(), closed_population(5))
            .seed_infections(1)
            .build()
            .unwrap();
        sim.run(&mut reporter).unwrap();
        assert!(reporter.take_error().is_none());

        let contents = std::fs::read_to_string(&path).expect("read csv");
        let lines: Vec<&str> = contents.lines().collect();
        assert!(lines[0].starts_with("time,susceptible,exposed"));
        // Header + one row per step + the final row.
        assert_eq!(lines.len(), 12);
        // Every data row conserves the population.
        for line in &lines[1..] {
            let total: u64 = line
                .split(',')
                .skip(1)
                .map(|v| v.parse::<u64>().unwrap())
                .sum();
            assert_eq!(total, 5);
        }
    }
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn zero_steps_per_day_is_rejected() {
        let cfg = SimConfig {
            steps_per_day: 0,
            ..SimConfig::default()
        };
        let err = SimulationBuilder::new(cfg, SimParams::default(), closed_population(1))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Config(_)));
    }

    #[test]
    fn over_seeding_fails_the_build() {
        let err = SimulationBuilder::new(config(10, 1), SimParams::default(), closed_population(2))
            .seed_infections(5)
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Sweep(_)));
    }

    #[test]
    fn bad_age_proportions_fail_validation() {
        let params = SimParams {
            age_proportions: vec![0.5, 0.5],
            ..SimParams::default()
        };
        let err = SimulationBuilder::new(config(10, 1), params, closed_population(1))
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SimError::Params(_)));
    }
}
