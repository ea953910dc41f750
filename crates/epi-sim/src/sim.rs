//! The `Simulation` struct and its step loop.

use std::sync::Arc;

use epi_core::{SimClock, SimConfig, SimRng};
use epi_params::SimParams;
use epi_pop::Population;
use epi_sweeps::Sweep;

use crate::{SimObserver, SimResult};

/// The main simulation runner.
///
/// Each step runs the registered sweeps strictly in order, threading the
/// single seeded RNG through them; the full run is therefore a pure function
/// of (seed, population construction order, sweep registration order).
///
/// Create via [`SimulationBuilder`][crate::SimulationBuilder].
pub struct Simulation {
    /// Run configuration (days, steps per day, seed, snapshot cadence).
    pub config: SimConfig,

    /// The immutable epidemiological parameter set.
    pub params: Arc<SimParams>,

    /// The entire mutable world state.
    pub population: Population,

    /// Step counter ↔ simulated-days conversion.
    pub clock: SimClock,

    /// The single deterministic RNG stream.
    pub rng: SimRng,

    pub(crate) sweeps: Vec<Box<dyn Sweep>>,
}

impl Simulation {
    /// Run from the current step to `config.end_step()`.
    ///
    /// Calls observer hooks at every step boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.clock.current_step < self.config.end_step() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock.sim_time(), &self.population);
        Ok(())
    }

    /// Run exactly `n` steps from the current position (ignores `end_step`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let time = self.clock.sim_time();
        observer.on_step_start(time, &self.population);

        for sweep in &mut self.sweeps {
            sweep.execute(&mut self.population, &mut self.rng, time)?;
        }

        observer.on_step_end(time, &self.population);
        if self.config.snapshot_interval_steps > 0
            && time.step % self.config.snapshot_interval_steps == 0
        {
            observer.on_snapshot(time, &self.population);
        }

        self.clock.advance();
        Ok(())
    }
}
