//! 2-tap filter construction

use crate::error::{WaveletError, Result};

/// Divide every tap by the Euclidean norm of the filter.
///
/// A zero filter is returned unchanged.
pub fn normalize<const N: usize>(taps: [f64; N]) -> [f64; N] {
    let norm = taps.iter().map(|t| t * t).sum::<f64>().sqrt();
    if norm == 0.0 {
        return taps;
    }
    taps.map(|t| t / norm)
}

/// Quadrature mirror of a filter: reversed taps with alternating signs,
/// starting positive. `[a, b]` becomes `[b, -a]`.
pub fn qmf<const N: usize>(taps: [f64; N]) -> [f64; N] {
    let mut out = taps;
    out.reverse();
    for (k, t) in out.iter_mut().enumerate() {
        if k % 2 == 1 {
            *t = -*t;
        }
    }
    out
}

/// Check that a filter coefficient lies strictly inside (0, 1).
pub fn validate_coefficient(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(WaveletError::InvalidCoefficient { name, value })
    }
}

/// Low-pass/high-pass pair forming an orthonormal 2-channel filter bank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterPair {
    pub low: [f64; 2],
    pub high: [f64; 2],
}

impl FilterPair {
    /// Build the pair from a scalar coefficient.
    ///
    /// `low = normalize([alpha, 1 - alpha])` and `high = normalize(qmf(low))`.
    /// The pair is only meaningful for `0 < alpha < 1`; that range is not
    /// checked here, see [`validate_coefficient`].
    pub fn from_coefficient(alpha: f64) -> Self {
        let low = normalize([alpha, 1.0 - alpha]);
        let high = normalize(qmf(low));
        Self { low, high }
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }
}
