//! `epi-sim` — simulation loop orchestrator for the `rust_epi` simulator.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`sim`]      | `Simulation` — the step loop driving the sweep pipeline  |
//! | [`builder`]  | `SimulationBuilder` — validation, wiring, and seeding    |
//! | [`observer`] | `SimObserver` trait + `NoopObserver`                     |
//! | [`reporter`] | `CompartmentCsvReporter` — per-step compartment counts   |
//! | [`error`]    | `SimError`, `SimResult<T>`                               |
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut population = Population::new();
//! // ... build cells, microcells, people, places ...
//!
//! let mut sim = SimulationBuilder::new(config, SimParams::default(), population)
//!     .seed_infections(10)
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod reporter;
pub mod sim;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use reporter::CompartmentCsvReporter;
pub use sim::Simulation;
