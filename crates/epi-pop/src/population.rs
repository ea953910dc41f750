//! The population root: arena storage plus every consistency-critical
//! mutation.
//!
//! # Construction API
//!
//! Population builders (file- or distribution-driven, out of core) call
//! `add_cells` → `add_microcells` → `add_people` / `add_place` before the
//! simulation starts, then optionally regroup persons with `add_household`.
//! Each microcell starts with one implicit "resident" household so the
//! person-has-exactly-one-household invariant holds from the first
//! `add_people` call onward.
//!
//! # Mutation API
//!
//! `update_status` is the single path for status changes: it reports the
//! cell's compartment counter and maintains the household susceptible
//! subset.  Place and household membership go through the paired add/remove
//! operations; `remove_person` (for travel management) detaches a person
//! from every collection and discards their counter entry in one step.

use epi_core::{
    CellId, HouseholdId, InfectionStatus, Location, MicrocellId, PersonId, PlaceId, PlaceType,
};
use rustc_hash::FxHashMap;

use crate::{Cell, Household, Microcell, Person, Place, PopError, PopResult, VaccineQueue};

/// The simulation's entire mutable world state.
#[derive(Clone, Debug, Default)]
pub struct Population {
    pub cells: Vec<Cell>,
    pub microcells: Vec<Microcell>,
    pub households: Vec<Household>,
    pub places: Vec<Place>,
    pub persons: Vec<Person>,

    pub vaccine_queue: VaccineQueue,

    /// Serial intervals keyed by the whole day the primary case was infected.
    pub serial_intervals: FxHashMap<u32, Vec<f64>>,
    /// Generation times, same key, recorded on a secondary case's first
    /// exposure and only when the infector's latent period is known.
    pub generation_times: FxHashMap<u32, Vec<f64>>,
}

impl Population {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Construction API ──────────────────────────────────────────────────

    /// Append `n` cells at the origin; relocate via `cells[id].location`.
    pub fn add_cells(&mut self, n: usize) -> Vec<CellId> {
        (0..n).map(|_| self.add_cell(Location::default())).collect()
    }

    /// Append one cell at `location`.
    pub fn add_cell(&mut self, location: Location) -> CellId {
        let id = CellId(self.cells.len() as u32);
        self.cells.push(Cell::new(id, location));
        id
    }

    /// Append `n` microcells to `cell`, each with its implicit resident
    /// household.
    pub fn add_microcells(&mut self, cell: CellId, n: usize) -> PopResult<Vec<MicrocellId>> {
        let location = self
            .cells
            .get(cell.index())
            .ok_or(PopError::CellNotFound(cell))?
            .location;

        let mut ids = Vec::with_capacity(n);
        for _ in 0..n {
            let id = MicrocellId(self.microcells.len() as u32);
            self.microcells.push(Microcell::new(id, cell));
            self.cells[cell.index()].microcells.push(id);

            let household = HouseholdId(self.households.len() as u32);
            self.households.push(Household::new(household, id, location));
            self.microcells[id.index()].households.push(household);

            ids.push(id);
        }
        Ok(ids)
    }

    /// Append one person to `microcell`'s implicit resident household.
    pub fn add_person(
        &mut self,
        microcell: MicrocellId,
        age:       u8,
        status:    InfectionStatus,
    ) -> PopResult<PersonId> {
        let mc = self
            .microcells
            .get(microcell.index())
            .ok_or(PopError::MicrocellNotFound(microcell))?;
        let cell = mc.cell;
        let household = *mc
            .households
            .first()
            .ok_or(PopError::MicrocellNotFound(microcell))?;

        let id = PersonId(self.persons.len() as u32);
        let person = Person::new(id, age, status, cell, microcell, household);
        let age_group = person.age_group;
        self.persons.push(person);

        self.microcells[microcell.index()].persons.push(id);
        self.cells[cell.index()].persons.push(id);
        self.cells[cell.index()].counter.record_new(status, age_group);

        self.households[household.index()].members.push(id);
        if status == InfectionStatus::Susceptible {
            self.households[household.index()].add_susceptible(id);
        }
        Ok(id)
    }

    /// Append `n` persons of a default adult age (40).  Builders that model
    /// demography call [`add_person`](Self::add_person) with explicit ages.
    pub fn add_people(
        &mut self,
        microcell: MicrocellId,
        n:         usize,
        status:    InfectionStatus,
    ) -> PopResult<Vec<PersonId>> {
        (0..n).map(|_| self.add_person(microcell, 40, status)).collect()
    }

    /// Append one place to `microcell`.
    pub fn add_place(
        &mut self,
        microcell:  MicrocellId,
        location:   Location,
        place_type: PlaceType,
    ) -> PopResult<PlaceId> {
        let cell = self
            .microcells
            .get(microcell.index())
            .ok_or(PopError::MicrocellNotFound(microcell))?
            .cell;

        let id = PlaceId(self.places.len() as u32);
        self.places.push(Place::new(id, microcell, location, place_type));
        self.microcells[microcell.index()].places.push(id);
        self.cells[cell.index()].places.push(id);
        Ok(id)
    }

    /// Append `n` places of one type at a shared location.
    pub fn add_places(
        &mut self,
        microcell:  MicrocellId,
        n:          usize,
        location:   Location,
        place_type: PlaceType,
    ) -> PopResult<Vec<PlaceId>> {
        (0..n)
            .map(|_| self.add_place(microcell, location, place_type))
            .collect()
    }

    /// Create a household at `location` from existing persons, moving each
    /// out of their current household.
    pub fn add_household(
        &mut self,
        members:  &[PersonId],
        location: Location,
    ) -> PopResult<HouseholdId> {
        let first = *members.first().ok_or(PopError::EmptyHousehold)?;
        let microcell = self
            .persons
            .get(first.index())
            .ok_or(PopError::PersonNotFound(first))?
            .microcell;

        let id = HouseholdId(self.households.len() as u32);
        self.households.push(Household::new(id, microcell, location));
        self.microcells[microcell.index()].households.push(id);

        for &person in members {
            self.move_person_to_household(person, id)?;
        }
        Ok(id)
    }

    // ── Membership mutation ───────────────────────────────────────────────

    /// Reassign `person` to `household`, atomically (remove-then-add).
    pub fn move_person_to_household(
        &mut self,
        person:    PersonId,
        household: HouseholdId,
    ) -> PopResult<()> {
        let p = self
            .persons
            .get(person.index())
            .ok_or(PopError::PersonNotFound(person))?;
        let old = p.household;
        let susceptible = p.is_susceptible();
        if self
            .households
            .get(household.index())
            .is_none()
        {
            return Err(PopError::HouseholdNotFound(household));
        }

        if old != HouseholdId::INVALID && !self.households[old.index()].remove_member(person) {
            return Err(PopError::PersonNotInHousehold {
                person,
                household: old,
            });
        }

        let new = &mut self.households[household.index()];
        new.members.push(person);
        if susceptible {
            new.add_susceptible(person);
        }
        self.persons[person.index()].household = household;
        Ok(())
    }

    /// Add `person` to `place` under `group`, maintaining both sides of the
    /// bidirectional link.
    pub fn add_person_to_place(
        &mut self,
        person: PersonId,
        place:  PlaceId,
        group:  u32,
    ) -> PopResult<()> {
        if self.persons.get(person.index()).is_none() {
            return Err(PopError::PersonNotFound(person));
        }
        if self.places.get(place.index()).is_none() {
            return Err(PopError::PlaceNotFound(place));
        }
        // Re-adding under a new group is a move.
        if self.persons[person.index()].group_in_place(place).is_some() {
            self.remove_person_from_place(person, place)?;
        }
        self.places[place.index()].add_occupant(person, group);
        self.persons[person.index()].places.push((place, group));
        Ok(())
    }

    /// Remove `person` from `place`, maintaining both sides of the link.
    pub fn remove_person_from_place(&mut self, person: PersonId, place: PlaceId) -> PopResult<()> {
        let p = self
            .persons
            .get_mut(person.index())
            .ok_or(PopError::PersonNotFound(person))?;
        let Some(i) = p.places.iter().position(|&(pl, _)| pl == place) else {
            return Err(PopError::PersonNotInPlace { person, place });
        };
        let (_, group) = p.places.remove(i);
        if !self.places[place.index()].remove_occupant(person, group) {
            return Err(PopError::PersonNotInPlace { person, place });
        }
        Ok(())
    }

    // ── Status changes ────────────────────────────────────────────────────

    /// Commit a status transition: the single write path for
    /// `Person::status`.  Reports the cell's compartment counter and keeps
    /// the household susceptible subset consistent.
    pub fn update_status(&mut self, person: PersonId, new: InfectionStatus) -> PopResult<()> {
        let p = self
            .persons
            .get(person.index())
            .ok_or(PopError::PersonNotFound(person))?;
        let old = p.status;
        if old == new {
            return Ok(());
        }
        let (cell, household, age_group) = (p.cell, p.household, p.age_group);

        self.cells[cell.index()].counter.report(old, new, age_group)?;
        self.persons[person.index()].status = new;

        if household != HouseholdId::INVALID {
            let hh = &mut self.households[household.index()];
            if new == InfectionStatus::Susceptible {
                hh.add_susceptible(person);
            } else if old == InfectionStatus::Susceptible {
                hh.remove_susceptible(person);
            }
        }
        Ok(())
    }

    // ── Queues ────────────────────────────────────────────────────────────

    /// Enqueue `person` as an exposure candidate on their cell's infection
    /// queue.  Recovered persons cannot be re-exposed through this path, so
    /// the call is a no-op for them.
    pub fn enqueue_person(&mut self, person: PersonId) -> PopResult<()> {
        let p = self
            .persons
            .get(person.index())
            .ok_or(PopError::PersonNotFound(person))?;
        if p.status == InfectionStatus::Recovered {
            return Ok(());
        }
        let cell = p.cell;
        self.cells[cell.index()].infection_queue.push_back(person);
        Ok(())
    }

    /// Enqueue `person` for a PCR test referral on their cell's queue.
    /// Drained by out-of-core testing sweeps in FIFO order.
    pub fn enqueue_pcr_referral(&mut self, person: PersonId) -> PopResult<()> {
        let cell = self
            .persons
            .get(person.index())
            .ok_or(PopError::PersonNotFound(person))?
            .cell;
        self.cells[cell.index()].pcr_queue.push_back(person);
        Ok(())
    }

    /// Enqueue `person` for a lateral-flow test referral, same discipline.
    pub fn enqueue_lft_referral(&mut self, person: PersonId) -> PopResult<()> {
        let cell = self
            .persons
            .get(person.index())
            .ok_or(PopError::PersonNotFound(person))?
            .cell;
        self.cells[cell.index()].lft_queue.push_back(person);
        Ok(())
    }

    // ── Removal (travel management) ───────────────────────────────────────

    /// Detach `person` from their cell, microcell, household, and every
    /// place, and discard their compartment-counter entry.  The arena record
    /// remains (IDs are stable) but nothing references it afterwards.
    pub fn remove_person(&mut self, person: PersonId) -> PopResult<()> {
        let p = self
            .persons
            .get(person.index())
            .ok_or(PopError::PersonNotFound(person))?;
        // Already detached: every link below would silently no-op.
        if p.cell == CellId::INVALID {
            return Err(PopError::PersonNotFound(person));
        }
        let (cell, microcell, household) = (p.cell, p.microcell, p.household);
        let (status, age_group) = (p.status, p.age_group);
        let places: Vec<PlaceId> = p.places.iter().map(|&(pl, _)| pl).collect();

        for place in places {
            self.remove_person_from_place(person, place)?;
        }
        if household != HouseholdId::INVALID
            && !self.households[household.index()].remove_member(person)
        {
            return Err(PopError::PersonNotInHousehold { person, household });
        }
        if microcell != MicrocellId::INVALID {
            self.microcells[microcell.index()].remove_person(person);
        }
        if cell != CellId::INVALID {
            if !self.cells[cell.index()].remove_person(person) {
                return Err(PopError::PersonNotFound(person));
            }
            self.cells[cell.index()].counter.discard(status, age_group)?;
        }

        let p = &mut self.persons[person.index()];
        p.cell = CellId::INVALID;
        p.microcell = MicrocellId::INVALID;
        p.household = HouseholdId::INVALID;
        Ok(())
    }

    // ── Aggregates ────────────────────────────────────────────────────────

    /// Total persons currently tallied across all cells.
    pub fn total_counted(&self) -> u64 {
        self.cells.iter().map(|c| c.counter.total()).sum()
    }

    /// Total infectious persons across all cells (from the counters).
    pub fn total_infectious(&self) -> u64 {
        self.cells.iter().map(|c| c.counter.infectious()).sum()
    }

    /// Record a serial interval under the primary case's infection day.
    pub fn record_serial_interval(&mut self, day: u32, value: f64) {
        self.serial_intervals.entry(day).or_default().push(value);
    }

    /// Record a generation time under the primary case's infection day.
    pub fn record_generation_time(&mut self, day: u32, value: f64) {
        self.generation_times.entry(day).or_default().push(value);
    }
}
