//! Inverse cascade

use ndarray::Array1;
use crate::error::{WaveletError, Result};
use super::analysis::Cascade;
use super::convolution::conv;
use super::filter::FilterPair;
use super::resample::upsample;

/// Rebuild a signal from a cascade, coarsest band first.
///
/// Each step upsamples the running signal and convolves it with the
/// high-pass filter, upsamples the next band and convolves it with the
/// low-pass filter, and sums the two. Band lengths that do not match the
/// running signal, or a result whose length differs from the analysed
/// signal, produce [`WaveletError::LengthMismatch`].
pub fn synthesize(cascade: &Cascade, filters: &FilterPair) -> Result<Array1<f64>> {
    let mut bands = cascade.coarse_to_fine();
    let mut current = match bands.next() {
        Some(band) => band.clone(),
        None => return Err(WaveletError::length_mismatch("synthesis band count", 1, 0)),
    };

    for band in bands {
        if band.len() != current.len() {
            return Err(WaveletError::length_mismatch("synthesis band", current.len(), band.len()));
        }
        let detail = conv(upsample(current.view()).view(), filters.high());
        let approximation = conv(upsample(band.view()).view(), filters.low());
        current = detail + approximation;
        log::trace!("synthesis: {} samples", current.len());
    }

    if current.len() != cascade.signal_len() {
        return Err(WaveletError::length_mismatch("synthesis output", cascade.signal_len(), current.len()));
    }
    Ok(current)
}
