//! Simulation time model.
//!
//! # Design
//!
//! The canonical time unit is the **simulated day**, represented as `f64`.
//! The loop itself advances an integer step counter; `SimClock` converts
//! steps to days:
//!
//!   time_days = step / steps_per_day
//!
//! Transition delays sampled by host progression are continuous (fractional
//! days), so a person's `time_of_status_change` is a plain `f64` compared
//! against the clock each step.  Keeping the loop counter integral means the
//! step arithmetic itself never drifts.

use std::fmt;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// A snapshot of the clock handed to every sweep invocation.
///
/// Cheap to copy; carries the current time in days, the timestep width `dt`
/// (force-of-infection rates are multiplied by `dt` to become per-step
/// probabilities), and the integer step counter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime {
    /// Current simulation time in days.
    pub time: f64,
    /// Width of one timestep in days (`1 / steps_per_day`).
    pub dt: f64,
    /// Current integer step counter.
    pub step: u64,
}

impl SimTime {
    /// The whole simulation day this step falls in.
    #[inline]
    pub fn day(self) -> u32 {
        self.time as u32
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.3}d (step {})", self.time, self.step)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Converts between the integer step counter and simulated days.
///
/// `SimClock` is cheap to copy and intentionally holds no heap data.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Timesteps per simulated day.  1 = daily steps; 4 = six-hour steps.
    pub steps_per_day: u32,
    /// The current step — advanced by `SimClock::advance()` each iteration.
    pub current_step: u64,
}

impl SimClock {
    pub fn new(steps_per_day: u32) -> Self {
        Self {
            steps_per_day,
            current_step: 0,
        }
    }

    /// Advance the clock by one step.
    #[inline]
    pub fn advance(&mut self) {
        self.current_step += 1;
    }

    /// Width of one timestep in days.
    #[inline]
    pub fn dt(&self) -> f64 {
        1.0 / self.steps_per_day as f64
    }

    /// Current simulation time in days.
    #[inline]
    pub fn time(&self) -> f64 {
        self.current_step as f64 * self.dt()
    }

    /// The `SimTime` snapshot for the current step.
    #[inline]
    pub fn sim_time(&self) -> SimTime {
        SimTime {
            time: self.time(),
            dt:   self.dt(),
            step: self.current_step,
        }
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {:.3} (step {})", self.time(), self.current_step)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Epidemiological constants live in `epi-params`; this struct only describes
/// the run itself.  Typically loaded from a TOML/JSON file by the application
/// crate and passed to the simulation builder.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total simulated days.
    pub simulation_days: u32,

    /// Timesteps per simulated day.  Must be ≥ 1.
    pub steps_per_day: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Invoke the observer's snapshot hook every N steps.  0 disables
    /// snapshots; 1 = every step.
    pub snapshot_interval_steps: u64,
}

impl SimConfig {
    /// The step at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_step(&self) -> u64 {
        self.simulation_days as u64 * self.steps_per_day as u64
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.steps_per_day)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            simulation_days:         90,
            steps_per_day:           1,
            seed:                    0,
            snapshot_interval_steps: 1,
        }
    }
}
