//! Fluent builder for constructing a [`Simulation`].

use std::sync::Arc;

use epi_core::{CellId, SimConfig, SimRng};
use epi_params::SimParams;
use epi_pop::{Population, find_nearby_cells};
use epi_sweeps::{
    HostProgressionSweep, HouseholdSweep, InitialInfectedSweep, Intervention, InterventionSweep,
    PlaceSweep, QueueSweep, SpatialSweep, Sweep, UpdatePlaceSweep,
};

use crate::{SimError, SimResult, Simulation};

/// Fluent builder for [`Simulation`].
///
/// # Required inputs
///
/// - [`SimConfig`] — days, steps per day, seed, snapshot cadence
/// - [`SimParams`] — the epidemiological constants (validated in `build`)
/// - [`Population`] — fully constructed world state
///
/// # What `build` does
///
/// 1. Validates the configuration and parameter set (this is also where
///    `ByAge` matrix entries collapse when ages are not modelled).
/// 2. Precomputes the neighbour-cell lists from the infection radius.
/// 3. Assembles the standard pipeline — interventions, place update,
///    household, place, spatial, queue drain, host progression — plus any
///    extra sweeps, and binds each one.
/// 4. Seeds the RNG and runs the seeding sweeps once at t = 0.
pub struct SimulationBuilder {
    config:        SimConfig,
    params:        SimParams,
    population:    Population,
    interventions: Vec<Box<dyn Intervention>>,
    extra_sweeps:  Vec<Box<dyn Sweep>>,
    seed_count:    usize,
    seed_cell:     Option<CellId>,
}

impl SimulationBuilder {
    pub fn new(config: SimConfig, params: SimParams, population: Population) -> Self {
        Self {
            config,
            params,
            population,
            interventions: Vec::new(),
            extra_sweeps:  Vec::new(),
            seed_count:    0,
            seed_cell:     None,
        }
    }

    /// Register a policy intervention; evaluated every step, in
    /// registration order.
    pub fn with_intervention(mut self, intervention: Box<dyn Intervention>) -> Self {
        self.interventions.push(intervention);
        self
    }

    /// Append a custom sweep after the standard pipeline.
    pub fn with_sweep(mut self, sweep: Box<dyn Sweep>) -> Self {
        self.extra_sweeps.push(sweep);
        self
    }

    /// Seed `count` infections population-wide before the first step.
    pub fn seed_infections(mut self, count: usize) -> Self {
        self.seed_count = count;
        self.seed_cell = None;
        self
    }

    /// Seed `count` infections within one cell before the first step.
    pub fn seed_infections_in_cell(mut self, count: usize, cell: CellId) -> Self {
        self.seed_count = count;
        self.seed_cell = Some(cell);
        self
    }

    /// Validate inputs, wire the pipeline, seed the outbreak, and return a
    /// ready-to-run [`Simulation`].
    pub fn build(self) -> SimResult<Simulation> {
        let Self {
            config,
            mut params,
            mut population,
            interventions,
            extra_sweeps,
            seed_count,
            seed_cell,
        } = self;

        if config.steps_per_day == 0 {
            return Err(SimError::Config("steps_per_day must be at least 1".into()));
        }
        params.validate()?;
        let params = Arc::new(params);

        find_nearby_cells(&mut population, params.infection_radius);

        // ── Standard pipeline ─────────────────────────────────────────────
        let mut intervention_sweep = InterventionSweep::new();
        for intervention in interventions {
            intervention_sweep.register(intervention);
        }
        let mut sweeps: Vec<Box<dyn Sweep>> = vec![
            Box::new(intervention_sweep),
            Box::new(UpdatePlaceSweep::new(Arc::clone(&params))),
            Box::new(HouseholdSweep::new(Arc::clone(&params))),
            Box::new(PlaceSweep::new(Arc::clone(&params))),
            Box::new(SpatialSweep::new(Arc::clone(&params))),
            Box::new(QueueSweep::new(Arc::clone(&params))),
            Box::new(HostProgressionSweep::new(Arc::clone(&params))),
        ];
        sweeps.extend(extra_sweeps);
        for sweep in &mut sweeps {
            sweep.bind(&population)?;
        }

        // ── Seed the outbreak ─────────────────────────────────────────────
        let clock = config.make_clock();
        let mut rng = SimRng::new(config.seed);
        if seed_count > 0 {
            let mut seeder = InitialInfectedSweep::new(Arc::clone(&params), seed_count);
            if let Some(cell) = seed_cell {
                seeder = seeder.in_cell(cell);
            }
            seeder.bind(&population)?;
            seeder.execute(&mut population, &mut rng, clock.sim_time())?;
        }

        Ok(Simulation {
            config,
            params,
            population,
            clock,
            rng,
            sweeps,
        })
    }
}
