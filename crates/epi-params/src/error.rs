//! Parameter-defect error type.
//!
//! Every variant is a configuration bug: the caller supplied a table or
//! matrix the model cannot run on.  Nothing here is recoverable at runtime.

use epi_core::InfectionStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("inverse CDF needs at least 2 points, got {points}")]
    IcdfTooShort { points: usize },

    #[error("inverse CDF is not monotonically non-decreasing at index {index}")]
    IcdfNotMonotonic { index: usize },

    #[error("inverse CDF has a negative quantile at index {index}")]
    IcdfNegative { index: usize },

    #[error("inverse CDF mean must be positive, got {mean}")]
    NonPositiveMean { mean: f64 },

    #[error("transition row {from} (age group {age_group:?}) sums to {sum}, expected 1")]
    RowSum {
        from:      InfectionStatus,
        age_group: Option<usize>,
        sum:       f64,
    },

    #[error("age-dependent weight for {from} -> {to} has {len} entries, expected {expected}")]
    ByAgeLength {
        from:     InfectionStatus,
        to:       InfectionStatus,
        len:      usize,
        expected: usize,
    },

    #[error("no transition-time distribution for {from} -> {to}")]
    NoTransitionTime {
        from: InfectionStatus,
        to:   InfectionStatus,
    },

    #[error("transition row {from} has no positive weight to sample")]
    EmptyRow { from: InfectionStatus },

    #[error("infectiousness profile must be non-empty with a positive average")]
    BadProfile,

    #[error("age proportions must have {expected} entries summing to 1, got {len} summing to {sum}")]
    AgeProportions {
        len:      usize,
        sum:      f64,
        expected: usize,
    },
}

pub type ParamsResult<T> = Result<T, ParamsError>;
