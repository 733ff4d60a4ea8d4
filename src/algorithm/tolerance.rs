use num_traits::Float;

use crate::{Error, Result};

/// Default relative margin under which two accumulated distances are considered equal
pub const DEFAULT_TIE_EPSILON: f64 = 1e-9;

/// Relative tolerance used to compare accumulated path weights.
///
/// Two sums `a` and `b` tie when `|a - b| <= epsilon * max(1, |a|, |b|)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance {
            epsilon: DEFAULT_TIE_EPSILON,
        }
    }
}

impl Tolerance {
    /// Fails with [`Error::InvalidArgument`] unless `epsilon` is finite and non-negative
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "tie tolerance must be finite and non-negative, got {}",
                epsilon
            )));
        }
        Ok(Tolerance { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    fn margin<W: Float>(&self, a: W, b: W) -> W {
        let scale = Float::max(W::one(), Float::max(Float::abs(a), Float::abs(b)));
        W::from(self.epsilon).unwrap_or_else(W::zero) * scale
    }

    /// True if `a` and `b` are equal within the tolerance
    pub fn ties<W: Float>(&self, a: W, b: W) -> bool {
        Float::abs(a - b) <= self.margin(a, b)
    }

    /// True if `a` is smaller than `b` by more than the tolerance
    pub fn is_strictly_less<W: Float>(&self, a: W, b: W) -> bool {
        a < b - self.margin(a, b)
    }
}
