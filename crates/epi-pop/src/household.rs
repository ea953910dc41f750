//! Households: the innermost, always-present contact structure.

use epi_core::{HouseholdId, Location, MicrocellId, PersonId};

/// A household within one microcell.
///
/// `susceptible_members` is the incrementally-maintained subset of `members`
/// whose status is currently Susceptible.  `Population::update_status` is the
/// only writer, so the subset invariant holds at every quiescent point
/// between sweeps.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Household {
    pub id: HouseholdId,
    pub microcell: MicrocellId,
    pub location: Location,

    /// Base multiplier on members' outgoing household infectiousness.
    pub infectiousness: f64,
    /// Base multiplier on members' household susceptibility.
    pub susceptibility: f64,

    pub members: Vec<PersonId>,
    pub susceptible_members: Vec<PersonId>,
}

impl Household {
    pub(crate) fn new(id: HouseholdId, microcell: MicrocellId, location: Location) -> Self {
        Self {
            id,
            microcell,
            location,
            infectiousness: 1.0,
            susceptibility: 1.0,
            members: Vec::new(),
            susceptible_members: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn remove_member(&mut self, person: PersonId) -> bool {
        self.remove_susceptible(person);
        match self.members.iter().position(|&p| p == person) {
            Some(i) => {
                self.members.remove(i);
                true
            }
            None => false,
        }
    }

    pub(crate) fn add_susceptible(&mut self, person: PersonId) {
        if !self.susceptible_members.contains(&person) {
            self.susceptible_members.push(person);
        }
    }

    pub(crate) fn remove_susceptible(&mut self, person: PersonId) {
        if let Some(i) = self.susceptible_members.iter().position(|&p| p == person) {
            self.susceptible_members.remove(i);
        }
    }
}
