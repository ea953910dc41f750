//! Simulation observer trait for progress reporting and data collection.

use epi_core::SimTime;
use epi_pop::Population;

/// Callbacks invoked by [`Simulation::run`][crate::Simulation::run] at key
/// points in the step loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers get read-only access to the
/// whole population; they can aggregate whatever they like without the loop
/// knowing about any specific output format.
///
/// # Example — console progress
///
/// ```rust,ignore
/// struct Progress;
///
/// impl SimObserver for Progress {
///     fn on_step_end(&mut self, time: SimTime, population: &Population) {
///         println!("{time}: {} infectious", population.total_infectious());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each step, before any sweep runs.
    fn on_step_start(&mut self, _time: SimTime, _population: &Population) {}

    /// Called after the full sweep pipeline has run for this step.
    fn on_step_end(&mut self, _time: SimTime, _population: &Population) {}

    /// Called at snapshot intervals (`config.snapshot_interval_steps`).
    fn on_snapshot(&mut self, _time: SimTime, _population: &Population) {}

    /// Called once after the final step completes.
    fn on_sim_end(&mut self, _time: SimTime, _population: &Population) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
