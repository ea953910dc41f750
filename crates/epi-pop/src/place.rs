//! Places: schools, workplaces, care homes, and casual-mixing venues.

use epi_core::{Location, MicrocellId, PersonId, PlaceId, PlaceType};
use rustc_hash::FxHashMap;

/// A venue whose occupants are partitioned into numbered groups (shifts,
/// classes, wards).  Transmission is within-group only.
///
/// The group map and each occupant's `Person::places` entry mirror each
/// other; `Population::add_person_to_place` / `remove_person_from_place` are
/// the only writers, never direct mutation.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Place {
    pub id: PlaceId,
    pub microcell: MicrocellId,
    pub location: Location,
    pub place_type: PlaceType,
    /// Upper bound on total occupants used by the place-update sweep when
    /// re-sampling randomised venues.
    pub max_capacity: u32,

    /// Base multiplier on occupants' outgoing place infectiousness.
    pub infectiousness: f64,
    /// Base multiplier on occupants' place susceptibility.
    pub susceptibility: f64,

    /// Occupants by group number.
    pub groups: FxHashMap<u32, Vec<PersonId>>,
}

impl Place {
    pub(crate) fn new(
        id:         PlaceId,
        microcell:  MicrocellId,
        location:   Location,
        place_type: PlaceType,
    ) -> Self {
        Self {
            id,
            microcell,
            location,
            place_type,
            max_capacity: 50,
            infectiousness: 1.0,
            susceptibility: 1.0,
            groups: FxHashMap::default(),
        }
    }

    /// Occupants of one group (empty slice if the group does not exist).
    pub fn group(&self, group: u32) -> &[PersonId] {
        self.groups.get(&group).map_or(&[], Vec::as_slice)
    }

    /// Total occupants across all groups.
    pub fn occupancy(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Group numbers in ascending order — iteration over a `FxHashMap` is
    /// unordered, which would leak into the shared RNG stream.
    pub fn sorted_group_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.groups.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub(crate) fn add_occupant(&mut self, person: PersonId, group: u32) {
        self.groups.entry(group).or_default().push(person);
    }

    pub(crate) fn remove_occupant(&mut self, person: PersonId, group: u32) -> bool {
        let Some(members) = self.groups.get_mut(&group) else {
            return false;
        };
        match members.iter().position(|&p| p == person) {
            Some(i) => {
                members.remove(i);
                if members.is_empty() {
                    self.groups.remove(&group);
                }
                true
            }
            None => false,
        }
    }
}
