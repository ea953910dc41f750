//! The immutable parameter set shared into every sweep and calculator.
//!
//! `SimParams` replaces the reference implementation's global singleton: it
//! is constructed once (usually from `SimParams::default()` plus field
//! edits), validated, and passed around as `Arc<SimParams>`.  Nothing in the
//! workspace mutates it after construction.

use epi_core::{InfectionStatus, NUM_AGE_GROUPS, PlaceType};

use crate::matrix::{default_waning_stays_recovered, default_waning_to_susceptible};
use crate::{
    InfectiousnessProfile, InverseCdf, ParamsError, ParamsResult, TransitionMatrix,
    TransitionTimeMatrix, TransitionWeight,
};

use InfectionStatus as S;

// ── Default tables ────────────────────────────────────────────────────────────

/// Normalised inverse-CDF quantiles of a right-skewed unit-mean delay
/// distribution (gamma-like shape; trapezoid average ≈ 1).  Every default
/// delay distribution scales this one table by its mean.
const UNIT_DELAY_QUANTILES: [f64; 11] = [
    0.05, 0.25, 0.45, 0.62, 0.77, 0.93, 1.10, 1.30, 1.55, 1.85, 2.20,
];

/// Raw day-by-day infectiousness curve: ramps up over the first days of the
/// episode, peaks, then decays.  Normalised to its average at construction.
const DEFAULT_INFECTIOUSNESS_CURVE: [f64; 15] = [
    0.08, 0.33, 0.72, 0.95, 1.00, 0.94, 0.82, 0.68, 0.54, 0.41, 0.30, 0.21, 0.14, 0.09, 0.05,
];

fn unit_delay(mean: f64) -> InverseCdf {
    // The table is a compile-time constant that satisfies every invariant
    // InverseCdf::new checks, so construction cannot fail.
    InverseCdf::new(mean, UNIT_DELAY_QUANTILES.to_vec())
        .unwrap_or_else(|e| unreachable!("default delay table rejected: {e}"))
}

/// The default transition-probability matrix.
///
/// Severity splits are scalar here; callers that model age-dependent severity
/// replace individual entries with `TransitionWeight::ByAge` rows before
/// validation.  With `waning` the Recovered row becomes time-dependent.
pub fn default_transition_matrix(waning: bool) -> TransitionMatrix {
    let mut m = TransitionMatrix::zeroed();
    let mut set = |from, to, p| m.set(from, to, TransitionWeight::Scalar(p));

    set(S::Susceptible, S::Exposed, 1.0);

    set(S::Exposed, S::InfectAsympt, 0.34);
    set(S::Exposed, S::InfectMild, 0.462);
    set(S::Exposed, S::InfectGp, 0.198);

    set(S::InfectAsympt, S::Recovered, 1.0);
    set(S::InfectMild, S::Recovered, 1.0);

    set(S::InfectGp, S::Recovered, 0.85);
    set(S::InfectGp, S::InfectHosp, 0.15);

    set(S::InfectHosp, S::Recovered, 0.70);
    set(S::InfectHosp, S::InfectIcu, 0.20);
    set(S::InfectHosp, S::Dead, 0.10);

    set(S::InfectIcu, S::InfectIcuRecov, 0.60);
    set(S::InfectIcu, S::Dead, 0.40);

    set(S::InfectIcuRecov, S::Recovered, 1.0);
    drop(set);

    if waning {
        m.set(
            S::Recovered,
            S::Susceptible,
            TransitionWeight::Waning(default_waning_to_susceptible),
        );
        m.set(
            S::Recovered,
            S::Recovered,
            TransitionWeight::Waning(default_waning_stays_recovered),
        );
    } else {
        m.set(S::Recovered, S::Recovered, TransitionWeight::Scalar(1.0));
    }

    m
}

/// The default transition-time matrix (means in days).
///
/// `Susceptible → Exposed` stays sentinel on purpose: the queue-drain sweep
/// stamps that transition with the current time, so host progression never
/// samples it.
pub fn default_transition_time_matrix() -> TransitionTimeMatrix {
    let mut m = TransitionTimeMatrix::sentinel();

    // Latent period: identical delay distribution into every infectious entry
    // state.
    let latent = unit_delay(4.59);
    m.set(S::Exposed, S::InfectAsympt, latent.clone());
    m.set(S::Exposed, S::InfectMild, latent.clone());
    m.set(S::Exposed, S::InfectGp, latent);

    m.set(S::InfectAsympt, S::Recovered, unit_delay(14.0));
    m.set(S::InfectMild, S::Recovered, unit_delay(7.0));
    m.set(S::InfectGp, S::Recovered, unit_delay(7.0));
    m.set(S::InfectGp, S::InfectHosp, unit_delay(5.0));
    m.set(S::InfectHosp, S::Recovered, unit_delay(18.0));
    m.set(S::InfectHosp, S::InfectIcu, unit_delay(2.5));
    m.set(S::InfectHosp, S::Dead, unit_delay(11.45));
    m.set(S::InfectIcu, S::InfectIcuRecov, unit_delay(15.6));
    m.set(S::InfectIcu, S::Dead, unit_delay(11.7));
    m.set(S::InfectIcuRecov, S::Recovered, unit_delay(3.0));

    // Waning-immunity return delay; harmless when waning is disabled
    // (the Recovered row then never selects Susceptible).
    m.set(S::Recovered, S::Susceptible, unit_delay(180.0));

    m
}

// ── Sub-structs ───────────────────────────────────────────────────────────────

/// Care-home modifiers: residents both shed and receive more within their
/// place, and face higher in-hospital mortality.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CareHomeParams {
    pub resident_infectiousness_scale: f64,
    pub resident_susceptibility_scale: f64,
    /// Multiplier on the Dead-column weight when a resident's next status is
    /// sampled from the InfectHosp or InfectIcu row.
    pub mortality_scale: f64,
}

impl Default for CareHomeParams {
    fn default() -> Self {
        Self {
            resident_infectiousness_scale: 2.0,
            resident_susceptibility_scale: 2.0,
            mortality_scale:               2.0,
        }
    }
}

/// Vaccination parameters consumed by the queue-drain sweep and the
/// force-of-infection calculators.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VaccineParams {
    /// Days from the dose until protection can trigger.
    pub time_to_efficacy: f64,
    /// Probability an effective vaccine blocks an admitted exposure.
    pub protection_prob: f64,
    /// Multiplier on a vaccinated infector's infectiousness.
    pub infectiousness_drop: f64,
}

impl Default for VaccineParams {
    fn default() -> Self {
        Self {
            time_to_efficacy:    14.0,
            protection_prob:     0.9,
            infectiousness_drop: 0.5,
        }
    }
}

/// Multiplicative modifiers applied while the matching per-person or
/// per-microcell timestamp is set and in the past.  A value of 1.0 disables
/// the modifier without any branching changes in the calculators.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterventionParams {
    /// Scale on an isolating person's infectiousness outside their household.
    pub isolation_effectiveness: f64,
    /// Scale on an isolating person's household infectiousness; contacts
    /// confined to the home push this above 1.
    pub isolation_house_effectiveness: f64,
    /// Scale on a quarantined person's infectiousness.
    pub quarantine_effectiveness: f64,
    /// Scale on household infectiousness while the microcell's places are
    /// closed (contacts displaced into the home push this above 1).
    pub closure_household_scale: f64,
    /// Scale on place infectiousness for closed place types.
    pub closure_place_scale: f64,
    /// Scale on susceptibility while the microcell distances socially.
    pub distancing_susceptibility_scale: f64,
    pub vaccine: VaccineParams,
}

impl Default for InterventionParams {
    fn default() -> Self {
        Self {
            isolation_effectiveness:         0.25,
            isolation_house_effectiveness:   1.5,
            quarantine_effectiveness:        0.5,
            closure_household_scale:         1.25,
            closure_place_scale:             0.0,
            distancing_susceptibility_scale: 0.5,
            vaccine:                         VaccineParams::default(),
        }
    }
}

// ── SimParams ─────────────────────────────────────────────────────────────────

/// Every epidemiological constant of a run, fixed at construction.
#[derive(Clone, Debug)]
pub struct SimParams {
    /// Model age structure?  When false, `ByAge` matrix entries are collapsed
    /// with [`age_proportions`](Self::age_proportions) at validation time.
    pub use_ages: bool,
    /// Allow Recovered → Susceptible transitions via the waning row.
    pub use_waning_immunity: bool,
    /// Population share of each five-year age group; must sum to 1.
    pub age_proportions: Vec<f64>,

    /// Neighbour-cell cutoff for spatial transmission.  ≤ 0 disables spatial
    /// coupling entirely (empty neighbour sets).
    pub infection_radius: f64,

    /// Household force-of-infection constant.
    pub household_transmission: f64,
    /// Base place force-of-infection constant, scaled per type by
    /// [`place_type_scale`](Self::place_type_scale).
    pub place_transmission: f64,
    /// Expected spatial infection events per infectious person per day.
    pub spatial_transmission: f64,

    /// Scale on the Gamma(1,1) initial-infectiousness draw for asymptomatic
    /// episodes.
    pub asympt_infectiousness: f64,
    /// Likewise for symptomatic episodes (Mild / GP).
    pub sympt_infectiousness: f64,
    /// Fixed delay (days) added to transition times *into* InfectMild and
    /// InfectGp — and only those two, matching the reference model.
    pub latent_to_sympt_delay: f64,
    /// Amplitude of the annual seasonality cosine in [0, 1); 0 disables it.
    pub seasonality_amplitude: f64,

    pub carehome: CareHomeParams,
    pub interventions: InterventionParams,

    /// Per-type scale on `place_transmission`, indexed by `PlaceType`.
    pub place_type_scale: [f64; PlaceType::COUNT],
    /// Occupant groups per place, indexed by `PlaceType` (shifts, classes,
    /// wards; re-sampled each step for randomised types).
    pub place_group_count: [u32; PlaceType::COUNT],

    pub transition_matrix: TransitionMatrix,
    pub transition_time: TransitionTimeMatrix,
    pub infectiousness_profile: InfectiousnessProfile,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            use_ages:             true,
            use_waning_immunity:  false,
            age_proportions:      vec![1.0 / NUM_AGE_GROUPS as f64; NUM_AGE_GROUPS],
            infection_radius:     1.0,
            household_transmission: 0.18,
            place_transmission:     0.12,
            spatial_transmission:   0.05,
            asympt_infectiousness:  0.5,
            sympt_infectiousness:   1.5,
            latent_to_sympt_delay:  0.5,
            seasonality_amplitude:  0.0,
            carehome:             CareHomeParams::default(),
            interventions:        InterventionParams::default(),
            place_type_scale:     [1.0, 1.0, 0.8, 1.6, 0.4],
            place_group_count:    [8, 8, 4, 3, 1],
            transition_matrix:    default_transition_matrix(false),
            transition_time:      default_transition_time_matrix(),
            infectiousness_profile: InfectiousnessProfile::new(
                DEFAULT_INFECTIOUSNESS_CURVE.to_vec(),
            )
            .unwrap_or_else(|e| unreachable!("default profile rejected: {e}")),
        }
    }
}

impl SimParams {
    /// Default parameters with waning immunity enabled (swaps in the
    /// time-dependent Recovered row).
    pub fn with_waning_immunity() -> Self {
        Self {
            use_waning_immunity: true,
            transition_matrix:   default_transition_matrix(true),
            ..Self::default()
        }
    }

    /// Validate the full parameter set; call once before the run starts.
    ///
    /// When [`use_ages`](Self::use_ages) is false this also collapses every
    /// `ByAge` matrix entry to its population-weighted scalar, so validation
    /// doubles as the age-collapse step.
    pub fn validate(&mut self) -> ParamsResult<()> {
        let sum: f64 = self.age_proportions.iter().sum();
        if self.age_proportions.len() != NUM_AGE_GROUPS || (sum - 1.0).abs() > 1e-9 {
            return Err(ParamsError::AgeProportions {
                len:      self.age_proportions.len(),
                sum,
                expected: NUM_AGE_GROUPS,
            });
        }

        if !self.use_ages {
            let proportions = self.age_proportions.clone();
            self.transition_matrix.collapse_ages(&proportions)?;
        }
        self.transition_matrix.validate()?;

        Ok(())
    }
}
