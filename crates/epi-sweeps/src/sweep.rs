//! The `Sweep` trait — one pipeline stage, invoked once per timestep — and
//! the exposure plumbing shared by the decision sweeps.

use epi_core::{PersonId, SimRng, SimTime};
use epi_pop::Population;

use crate::SweepResult;

/// One stage of the per-timestep pipeline.
///
/// Sweeps run strictly sequentially, in the order they were registered, with
/// the shared RNG threaded through by `&mut` — the draw sequence (and thus
/// the whole run) is a pure function of the seed and the registration order.
///
/// # Required methods
///
/// Only [`execute`][Self::execute] is required.  [`bind`][Self::bind] has a
/// no-op default for sweeps that need no precomputed view of the population.
pub trait Sweep {
    /// Stable name used in error context and reporting.
    fn name(&self) -> &'static str;

    /// Called once before the run starts, after the population is final.
    ///
    /// Sweeps that cache derived state (index lists, capacity checks) build
    /// it here.  Default: nothing to bind.
    fn bind(&mut self, _population: &Population) -> SweepResult<()> {
        Ok(())
    }

    /// Run this stage for one timestep.
    fn execute(
        &mut self,
        population: &mut Population,
        rng:        &mut SimRng,
        time:       SimTime,
    ) -> SweepResult<()>;
}

// ── Exposure plumbing ─────────────────────────────────────────────────────────

/// One transmission decision: `infector` exposes `infectee`.
///
/// Decision sweeps collect these while iterating the population immutably,
/// then apply them in a second phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Exposure {
    pub infector: PersonId,
    pub infectee: PersonId,
}

/// Apply one batch of exposure decisions: stamp the infectee's exposure
/// bookkeeping (last writer wins), credit the infector's live episode, and
/// push the infectee onto their cell's infection queue.
///
/// Whether the exposure actually takes hold is decided later, by the
/// queue-drain sweep.
pub(crate) fn queue_exposures(
    population: &mut Population,
    exposures:  &[Exposure],
    time:       SimTime,
) -> SweepResult<()> {
    for &Exposure { infector, infectee } in exposures {
        let (exposure_period, infector_latent, reference_day) = {
            let source = &population.persons[infector.index()];
            (
                source.infection_start_time.map(|t0| time.time - t0),
                source.latent_period,
                source.infection_start_time.map(|t0| t0 as u32),
            )
        };
        population.persons[infector.index()].increment_secondary_infections();

        let target = &mut population.persons[infectee.index()];
        target.exposure_period = exposure_period;
        target.infector_latent_period = infector_latent;
        target.exposure_reference_day = reference_day;

        population.enqueue_person(infectee)?;
    }
    Ok(())
}
