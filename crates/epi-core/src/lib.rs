//! `epi-core` — foundational types for the `rust_epi` epidemic simulator.
//!
//! This crate is a dependency of every other `epi-*` crate.  It intentionally
//! has no `epi-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `CellId`, `MicrocellId`, `HouseholdId`, `PlaceId`, `PersonId` |
//! | [`location`] | `Location`, Euclidean distance                           |
//! | [`status`]   | `InfectionStatus` enum, age-group helpers                |
//! | [`place_type`] | `PlaceType` enum                                       |
//! | [`time`]     | `SimTime`, `SimClock`, `SimConfig`                       |
//! | [`rng`]      | `SimRng` (the single seeded stream)                      |
//! | [`error`]    | `EpiError`, `EpiResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.         |

pub mod error;
pub mod ids;
pub mod location;
pub mod place_type;
pub mod rng;
pub mod status;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{EpiError, EpiResult};
pub use ids::{CellId, HouseholdId, MicrocellId, PersonId, PlaceId};
pub use location::Location;
pub use place_type::PlaceType;
pub use rng::SimRng;
pub use status::{InfectionStatus, NUM_AGE_GROUPS, age_group_of};
pub use time::{SimClock, SimConfig, SimTime};
