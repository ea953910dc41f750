//! Microcells: the finer spatial partition inside a cell.

use epi_core::{CellId, HouseholdId, MicrocellId, PersonId, PlaceId};

/// One microcell.  Owns no storage — the arenas live on `Population` — but
/// tracks which persons, places, and households belong to it, plus the
/// microcell-scoped intervention timestamps the force-of-infection
/// calculators read.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Microcell {
    pub id: MicrocellId,
    pub cell: CellId,

    pub persons: Vec<PersonId>,
    pub places: Vec<PlaceId>,
    pub households: Vec<HouseholdId>,

    /// Set while this microcell's places are closed.
    pub closure_start_time: Option<f64>,
    /// Set while this microcell distances socially.
    pub distancing_start_time: Option<f64>,
}

impl Microcell {
    pub(crate) fn new(id: MicrocellId, cell: CellId) -> Self {
        Self {
            id,
            cell,
            persons: Vec::new(),
            places: Vec::new(),
            households: Vec::new(),
            closure_start_time: None,
            distancing_start_time: None,
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
