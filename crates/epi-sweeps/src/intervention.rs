//! Interventions: policy levers that modulate transmission via timestamp
//! gates.
//!
//! Interventions never change infection statuses.  They set (and clear) the
//! per-person and per-microcell timestamps that the force-of-infection
//! calculators read as multiplicative gates, which keeps the decision
//! sweeps free of policy logic.
//!
//! [`InterventionSweep`] runs first in the pipeline each step, checking
//! each registered intervention's activation predicate and calling
//! `apply` or `relax` accordingly.

use epi_core::{SimRng, SimTime};
use epi_pop::Population;

use crate::{Sweep, SweepResult};

// ── Intervention trait ────────────────────────────────────────────────────────

/// One policy lever.
///
/// `is_active` is re-evaluated every step, so interventions can switch on a
/// calendar date, an epidemic threshold, or both — and switch off again
/// when the predicate stops holding.
pub trait Intervention {
    fn name(&self) -> &'static str;

    /// Should this intervention be in force right now?
    fn is_active(&self, population: &Population, time: SimTime) -> bool;

    /// Called every step while active.
    fn apply(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        time:       SimTime,
    ) -> SweepResult<()>;

    /// Called every step while inactive; clears whatever `apply` set.
    fn relax(&mut self, population: &mut Population, time: SimTime) -> SweepResult<()>;
}

// ── The sweep ─────────────────────────────────────────────────────────────────

/// Pipeline stage that drives every registered [`Intervention`].
#[derive(Default)]
pub struct InterventionSweep {
    interventions: Vec<Box<dyn Intervention>>,
}

impl InterventionSweep {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, intervention: Box<dyn Intervention>) {
        self.interventions.push(intervention);
    }
}

impl Sweep for InterventionSweep {
    fn name(&self) -> &'static str {
        "interventions"
    }

    fn execute(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        time:       SimTime,
    ) -> SweepResult<()> {
        for intervention in &mut self.interventions {
            if intervention.is_active(population, time) {
                intervention.apply(population, rng, time)?;
            } else {
                intervention.relax(population, time)?;
            }
        }
        Ok(())
    }
}

// ── Shipped interventions ─────────────────────────────────────────────────────

/// Symptomatic cases self-isolate with imperfect compliance.
///
/// While active, each newly symptomatic person rolls the compliance die
/// once; compliant cases get their isolation timestamp set and keep it for
/// `duration_days`.
pub struct CaseIsolation {
    /// Earliest day the policy can trigger.
    pub start_time: f64,
    /// Infectious-count threshold that activates the policy.
    pub case_threshold: u64,
    /// Probability a symptomatic case actually isolates.
    pub compliance: f64,
    /// How long one person stays isolated.
    pub duration_days: f64,
}

impl Intervention for CaseIsolation {
    fn name(&self) -> &'static str {
        "case_isolation"
    }

    fn is_active(&self, population: &Population, time: SimTime) -> bool {
        time.time >= self.start_time && population.total_infectious() >= self.case_threshold
    }

    fn apply(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        time:       SimTime,
    ) -> SweepResult<()> {
        for p in &mut population.persons {
            match p.isolation_start_time {
                Some(start) if time.time >= start + self.duration_days => {
                    p.isolation_start_time = None;
                }
                None if p.status.is_symptomatic() => {
                    if rng.gen_bool(self.compliance) {
                        p.isolation_start_time = Some(time.time);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn relax(&mut self, population: &mut Population, _time: SimTime) -> SweepResult<()> {
        for p in &mut population.persons {
            p.isolation_start_time = None;
        }
        Ok(())
    }
}

/// Close every microcell's places for a fixed calendar window.
pub struct PlaceClosure {
    pub start_time: f64,
    pub end_time: f64,
}

impl Intervention for PlaceClosure {
    fn name(&self) -> &'static str {
        "place_closure"
    }

    fn is_active(&self, _population: &Population, time: SimTime) -> bool {
        time.time >= self.start_time && time.time < self.end_time
    }

    fn apply(
        &mut self,
        population: &mut Population,
        _rng:       &mut SimRng,
        _time:      SimTime,
    ) -> SweepResult<()> {
        for mc in &mut population.microcells {
            if mc.closure_start_time.is_none() {
                mc.closure_start_time = Some(self.start_time);
            }
        }
        Ok(())
    }

    fn relax(&mut self, population: &mut Population, _time: SimTime) -> SweepResult<()> {
        for mc in &mut population.microcells {
            mc.closure_start_time = None;
        }
        Ok(())
    }
}

/// Population-wide social distancing for a fixed calendar window.
pub struct SocialDistancing {
    pub start_time: f64,
    pub end_time: f64,
}

impl Intervention for SocialDistancing {
    fn name(&self) -> &'static str {
        "social_distancing"
    }

    fn is_active(&self, _population: &Population, time: SimTime) -> bool {
        time.time >= self.start_time && time.time < self.end_time
    }

    fn apply(
        &mut self,
        population: &mut Population,
        _rng:       &mut SimRng,
        _time:      SimTime,
    ) -> SweepResult<()> {
        for mc in &mut population.microcells {
            if mc.distancing_start_time.is_none() {
                mc.distancing_start_time = Some(self.start_time);
            }
        }
        Ok(())
    }

    fn relax(&mut self, population: &mut Population, _time: SimTime) -> SweepResult<()> {
        for mc in &mut population.microcells {
            mc.distancing_start_time = None;
        }
        Ok(())
    }
}
