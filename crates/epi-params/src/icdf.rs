//! Empirical inverse-CDF sampling for transition delays.
//!
//! # How a draw works
//!
//! The table holds `n ≥ 2` quantiles of the *normalised* delay distribution
//! (delay / mean), evenly spaced in cumulative probability from 0 to 1.  A
//! draw takes `u ~ U(0,1)`, linearly interpolates the table at position
//! `u · (n-1)`, and scales by the mean:
//!
//!   delay = mean × lerp(quantiles, u · (n-1))
//!
//! Because the table is the inverse CDF, the empirical mean of many draws
//! converges to `mean` whenever the table itself averages to 1 (trapezoid
//! rule over the quantile grid).

use epi_core::SimRng;

use crate::{ParamsError, ParamsResult};

/// A monotone empirical inverse-CDF table plus its mean.
///
/// Immutable after construction; validation happens in [`InverseCdf::new`]
/// so every stored table is safe to sample.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InverseCdf {
    mean:      f64,
    quantiles: Vec<f64>,
}

impl InverseCdf {
    /// Build a sampler from a mean and a normalised quantile table.
    ///
    /// Fails if the table has fewer than two points, any quantile is
    /// negative, the sequence is not monotonically non-decreasing, or the
    /// mean is not positive.  All four are configuration defects.
    pub fn new(mean: f64, quantiles: Vec<f64>) -> ParamsResult<Self> {
        if quantiles.len() < 2 {
            return Err(ParamsError::IcdfTooShort {
                points: quantiles.len(),
            });
        }
        if !(mean > 0.0) {
            return Err(ParamsError::NonPositiveMean { mean });
        }
        for (i, &q) in quantiles.iter().enumerate() {
            if q < 0.0 {
                return Err(ParamsError::IcdfNegative { index: i });
            }
            if i > 0 && q < quantiles[i - 1] {
                return Err(ParamsError::IcdfNotMonotonic { index: i });
            }
        }
        Ok(Self { mean, quantiles })
    }

    /// The distribution mean this table was normalised against.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Number of quantile points.
    #[inline]
    pub fn len(&self) -> usize {
        self.quantiles.len()
    }

    pub fn is_empty(&self) -> bool {
        false // new() rejects tables shorter than 2 points
    }

    /// Draw one delay by inverse-transform sampling.
    ///
    /// The result is always ≥ 0 because the table is validated non-negative
    /// and the mean positive.
    pub fn icdf_choose(&self, rng: &mut SimRng) -> f64 {
        let u: f64 = rng.random();
        let pos = u * (self.quantiles.len() - 1) as f64;
        let lo = pos.floor() as usize;
        // u == 1.0 lands exactly on the last point.
        if lo + 1 >= self.quantiles.len() {
            return self.mean * self.quantiles[self.quantiles.len() - 1];
        }
        let frac = pos - lo as f64;
        let q = self.quantiles[lo] + (self.quantiles[lo + 1] - self.quantiles[lo]) * frac;
        self.mean * q
    }
}
