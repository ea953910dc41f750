//! `epi-pop` — the hierarchical population model of the `rust_epi` simulator.
//!
//! # Ownership model
//!
//! The reference design's web of back-references (person → household →
//! person list, microcell → cell → microcell list) is replaced by arena
//! ownership: [`Population`] owns one flat `Vec` per entity kind and every
//! cross-link is a typed integer ID from `epi-core`.  There is exactly one
//! strong ownership edge per entity; everything else is an index.
//!
//! Consistency-critical mutations (status changes, household moves, place
//! membership, removal) go through `Population` methods so the compartment
//! counters, household susceptible subsets, and bidirectional place links
//! can never drift apart.  The fields themselves stay `pub` for read access
//! on hot paths.
//!
//! # Crate layout
//!
//! | Module            | Contents                                           |
//! |-------------------|----------------------------------------------------|
//! | [`person`]        | `Person` record and episode bookkeeping            |
//! | [`household`]     | `Household` with its susceptible-member subset     |
//! | [`place`]         | `Place` with numbered occupant groups              |
//! | [`microcell`]     | `Microcell` (persons, places, households)          |
//! | [`cell`]          | `Cell` (counter, FIFO queues, neighbour cache)     |
//! | [`counter`]       | `CompartmentCounter` (status × age-group tallies)  |
//! | [`vaccine_queue`] | Priority queue with insertion-order tie-break      |
//! | [`population`]    | `Population` arenas + construction/mutation API    |
//! | [`neighbours`]    | R-tree neighbour-cell precomputation               |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Neighbour-index build runs on Rayon's thread pool.      |
//! | `serde`    | Serde derives on the plain data records.                |

pub mod cell;
pub mod counter;
pub mod error;
pub mod household;
pub mod microcell;
pub mod neighbours;
pub mod person;
pub mod place;
pub mod population;
pub mod vaccine_queue;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::Cell;
pub use counter::CompartmentCounter;
pub use error::{PopError, PopResult};
pub use household::Household;
pub use microcell::Microcell;
pub use neighbours::find_nearby_cells;
pub use person::Person;
pub use place::Place;
pub use population::Population;
pub use vaccine_queue::VaccineQueue;
