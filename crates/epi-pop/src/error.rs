//! Population-layer error type.
//!
//! Counter underflow and missing-membership variants are invariant
//! violations (corrupted state, abort the run); the not-found variants are
//! caller-contract violations from the construction API.

use epi_core::{CellId, HouseholdId, InfectionStatus, MicrocellId, PersonId, PlaceId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopError {
    #[error("compartment counter underflow for ({status}, age group {age_group})")]
    CounterUnderflow {
        status:    InfectionStatus,
        age_group: usize,
    },

    #[error("person {person} is not an occupant of place {place}")]
    PersonNotInPlace { person: PersonId, place: PlaceId },

    #[error("person {person} is not a member of household {household}")]
    PersonNotInHousehold {
        person:    PersonId,
        household: HouseholdId,
    },

    #[error("person {0} not found")]
    PersonNotFound(PersonId),

    #[error("cell {0} not found")]
    CellNotFound(CellId),

    #[error("microcell {0} not found")]
    MicrocellNotFound(MicrocellId),

    #[error("household {0} not found")]
    HouseholdNotFound(HouseholdId),

    #[error("place {0} not found")]
    PlaceNotFound(PlaceId),

    #[error("a household needs at least one member")]
    EmptyHousehold,
}

pub type PopResult<T> = Result<T, PopError>;
