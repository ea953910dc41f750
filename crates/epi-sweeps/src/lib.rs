//! `epi-sweeps` — the per-timestep sweep pipeline of the `rust_epi`
//! simulator.
//!
//! # Crate layout
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`sweep`]        | The [`Sweep`] trait every pipeline stage implements  |
//! | [`foi`]          | Force-of-infection calculators (pure functions)      |
//! | [`initial`]      | `InitialInfectedSweep` — seeds the outbreak at t = 0 |
//! | [`update_place`] | `UpdatePlaceSweep` — re-samples casual-mixing venues |
//! | [`household`]    | `HouseholdSweep` — within-household transmission     |
//! | [`place`]        | `PlaceSweep` — within-group place transmission       |
//! | [`spatial`]      | `SpatialSweep` — between-cell transmission           |
//! | [`queue`]        | `QueueSweep` — drains the per-cell infection queues  |
//! | [`progression`]  | `HostProgressionSweep` — the infection state machine |
//! | [`intervention`] | `Intervention` trait + the shipped interventions     |
//! | [`error`]        | `SweepError`, `SweepResult<T>`                       |
//!
//! # Design notes
//!
//! Each timestep runs the sweeps in a fixed order:
//!
//! 1. **Interventions** adjust per-person / per-microcell timestamps.
//! 2. **UpdatePlace** re-samples occupants of randomised venues.
//! 3. **Decision sweeps** (household, place, spatial) read infectiousness
//!    and push exposure candidates onto the per-cell infection queues.
//!    They never change anyone's status.
//! 4. **QueueSweep** drains the queues and commits admitted exposures to
//!    `Exposed`.
//! 5. **HostProgressionSweep** fires every due pending transition and
//!    refreshes infectiousness from the day-by-day profile.
//!
//! The decide-then-commit split means the order in which a person is
//! enqueued within a step can never change the outcome of the step: the
//! first admitted exposure wins at drain time, and later queue entries see
//! a non-susceptible status and fall through.

pub mod error;
pub mod foi;
pub mod household;
pub mod initial;
pub mod intervention;
pub mod place;
pub mod progression;
pub mod queue;
pub mod spatial;
pub mod sweep;
pub mod update_place;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SweepError, SweepResult};
pub use household::HouseholdSweep;
pub use initial::InitialInfectedSweep;
pub use intervention::{CaseIsolation, Intervention, InterventionSweep, PlaceClosure, SocialDistancing};
pub use place::PlaceSweep;
pub use progression::HostProgressionSweep;
pub use queue::QueueSweep;
pub use spatial::SpatialSweep;
pub use sweep::Sweep;
pub use update_place::UpdatePlaceSweep;
