//! Cells: the coarse spatial partition, owner of the per-cell queues,
//! compartment counter, and neighbour cache.

use std::collections::VecDeque;

use epi_core::{CellId, Location, MicrocellId, PersonId, PlaceId};

use crate::CompartmentCounter;

/// One cell.
///
/// The three queues are plain FIFOs: the infection queue decouples "decide
/// to infect" from "commit infection" within a timestep, and the two
/// test-referral queues hand persons to the (out-of-core) testing
/// collaborators with the same discipline.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub id: CellId,
    pub location: Location,

    pub microcells: Vec<MicrocellId>,
    /// All persons in this cell, transitively across its microcells.
    pub persons: Vec<PersonId>,
    /// All places in this cell, transitively across its microcells.
    pub places: Vec<PlaceId>,

    /// Live (status × age group) tallies for this cell.
    pub counter: CompartmentCounter,

    /// Exposure candidates awaiting the queue-drain sweep.
    pub infection_queue: VecDeque<PersonId>,
    /// Persons referred for PCR testing.
    pub pcr_queue: VecDeque<PersonId>,
    /// Persons referred for lateral-flow testing.
    pub lft_queue: VecDeque<PersonId>,

    /// Cells whose centroid lies strictly within the infection radius,
    /// with their distances.  Sorted by `CellId`; rebuilt by
    /// [`find_nearby_cells`][crate::find_nearby_cells].
    pub nearby_cells: Vec<(CellId, f64)>,
}

impl Cell {
    pub(crate) fn new(id: CellId, location: Location) -> Self {
        Self {
            id,
            location,
            ..Self::default()
        }
    }

    pub(crate) fn remove_person(&mut self, person: PersonId) -> bool {
        match self.persons.iter().position(|&p| p == person) {
            Some(i) => {
                self.persons.remove(i);
                true
            }
            None => false,
        }
    }
}
