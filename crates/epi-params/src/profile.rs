//! Time-since-infection infectiousness profile.
//!
//! A person's current infectiousness is their episode's initial draw scaled
//! by an empirical day-by-day curve evaluated at the elapsed time since the
//! infectious onset.  The curve is normalised to its own average at
//! construction, so the profile reshapes infectiousness over the episode
//! without changing its mean level.

use crate::{ParamsError, ParamsResult};

/// An empirical infectiousness curve sampled at whole-day offsets, with
/// linear interpolation in between and zero beyond the last point.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfectiousnessProfile {
    values: Vec<f64>,
    /// Average of the raw curve; divisor for normalisation.
    average: f64,
}

impl InfectiousnessProfile {
    /// Build from a raw day-indexed curve.
    ///
    /// Fails if the curve is empty, contains a negative value, or averages
    /// to zero (a curve that is zero everywhere cannot be normalised).
    pub fn new(values: Vec<f64>) -> ParamsResult<Self> {
        if values.is_empty() || values.iter().any(|&v| v < 0.0) {
            return Err(ParamsError::BadProfile);
        }
        let average = values.iter().sum::<f64>() / values.len() as f64;
        if average <= 0.0 {
            return Err(ParamsError::BadProfile);
        }
        Ok(Self { values, average })
    }

    /// Normalised scale factor at `days_since_onset`.
    ///
    /// Linear interpolation between the two surrounding day points; zero for
    /// negative offsets and offsets beyond the end of the curve.
    pub fn scale_at(&self, days_since_onset: f64) -> f64 {
        if days_since_onset < 0.0 {
            return 0.0;
        }
        let lo = days_since_onset.floor() as usize;
        if lo + 1 >= self.values.len() {
            return if lo < self.values.len() {
                self.values[lo] / self.average
            } else {
                0.0
            };
        }
        let frac = days_since_onset - lo as f64;
        let v = self.values[lo] + (self.values[lo + 1] - self.values[lo]) * frac;
        v / self.average
    }

    /// Length of the raw curve in days.
    #[inline]
    pub fn len_days(&self) -> usize {
        self.values.len()
    }
}
