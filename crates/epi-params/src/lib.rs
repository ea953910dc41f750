//! `epi-params` — the immutable parameter layer of the `rust_epi` simulator.
//!
//! Everything epidemiological that is "configure once, read everywhere" lives
//! here: the parameter set shared into every sweep as `Arc<SimParams>`, the
//! empirical inverse-CDF sampler used for transition delays, the typed
//! transition-probability matrix, the transition-time matrix, and the
//! time-since-infection infectiousness profile.
//!
//! # Crate layout
//!
//! | Module          | Contents                                             |
//! |-----------------|------------------------------------------------------|
//! | [`icdf`]        | `InverseCdf` + `icdf_choose` inverse-transform draw  |
//! | [`matrix`]      | `TransitionWeight`, `TransitionMatrix`               |
//! | [`time_matrix`] | `TransitionTimeMatrix` (ICDF per transition)         |
//! | [`profile`]     | `InfectiousnessProfile` (normalised empirical curve) |
//! | [`params`]      | `SimParams` and its sub-structs                      |
//! | [`error`]       | `ParamsError`, `ParamsResult`                        |
//!
//! All constructors validate eagerly: a malformed table or matrix is a
//! configuration defect and surfaces at build time, never as a silent
//! default during a run.

pub mod error;
pub mod icdf;
pub mod matrix;
pub mod params;
pub mod profile;
pub mod time_matrix;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ParamsError, ParamsResult};
pub use icdf::InverseCdf;
pub use matrix::{TransitionMatrix, TransitionWeight};
pub use params::{CareHomeParams, InterventionParams, SimParams, VaccineParams};
pub use profile::InfectiousnessProfile;
pub use time_matrix::TransitionTimeMatrix;
