//! Recursive wavelet analysis

use ndarray::{Array1, ArrayView1};
use crate::error::{WaveletError, Result};
use super::convolution::conv_transposed;
use super::filter::FilterPair;
use super::resample::downsample;

/// Coefficient bands produced by [`analyze`], in production order.
///
/// For a signal of length `2^k` there are `k + 1` bands: band `i` has length
/// `2^(k - i - 1)` for `i < k` and the final band has length 1. The cascade is
/// never mutated; synthesis walks it through [`Cascade::coarse_to_fine`].
#[derive(Debug, Clone, PartialEq)]
pub struct Cascade {
    pub(crate) bands: Vec<Array1<f64>>,
    pub(crate) signal_len: usize,
}

impl Cascade {
    /// Build a cascade from raw bands, checking that their count and lengths
    /// match what analysis of a `signal_len`-sample signal produces.
    pub fn from_bands(bands: Vec<Array1<f64>>, signal_len: usize) -> Result<Self> {
        let expected = Self::expected_band_lengths(signal_len)?;
        if bands.len() != expected.len() {
            return Err(WaveletError::length_mismatch("cascade band count", expected.len(), bands.len()));
        }
        for (band, &len) in bands.iter().zip(expected.iter()) {
            if band.len() != len {
                return Err(WaveletError::length_mismatch("cascade band", len, band.len()));
            }
        }
        Ok(Self { bands, signal_len })
    }

    /// Band lengths, in production order, for a signal of `signal_len` samples.
    pub fn expected_band_lengths(signal_len: usize) -> Result<Vec<usize>> {
        if !signal_len.is_power_of_two() {
            return Err(WaveletError::NotPowerOfTwo { len: signal_len });
        }
        let mut lengths = Vec::new();
        let mut len = signal_len;
        while len > 1 {
            len /= 2;
            lengths.push(len);
        }
        lengths.push(1);
        Ok(lengths)
    }

    pub fn bands(&self) -> &[Array1<f64>] {
        &self.bands
    }

    pub fn into_bands(self) -> Vec<Array1<f64>> {
        self.bands
    }

    /// Length of the signal this cascade was produced from.
    pub fn signal_len(&self) -> usize {
        self.signal_len
    }

    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Bands starting with the last-produced (coarsest) one.
    pub fn coarse_to_fine(&self) -> impl Iterator<Item = &Array1<f64>> {
        self.bands.iter().rev()
    }

    /// Total number of coefficients across all bands.
    pub fn coefficient_count(&self) -> usize {
        self.bands.iter().map(|b| b.len()).sum()
    }
}

/// Decompose a power-of-two length signal.
///
/// At every level the low-pass band, `downsample(conv_transposed(x, low))`,
/// is stored and the high-pass band becomes the signal for the next level.
/// The final length-1 signal is stored as the last band.
pub fn analyze(signal: ArrayView1<f64>, filters: &FilterPair) -> Result<Cascade> {
    let signal_len = signal.len();
    if !signal_len.is_power_of_two() {
        return Err(WaveletError::NotPowerOfTwo { len: signal_len });
    }

    let mut bands = Vec::with_capacity(signal_len.trailing_zeros() as usize + 1);
    let mut current = signal.to_owned();

    while current.len() > 1 {
        let approximation = downsample(conv_transposed(current.view(), filters.low()).view());
        let detail = downsample(conv_transposed(current.view(), filters.high()).view());
        log::trace!("analysis level {}: {} -> {}", bands.len(), current.len(), detail.len());
        bands.push(approximation);
        current = detail;
    }
    bands.push(current);

    Ok(Cascade { bands, signal_len })
}
