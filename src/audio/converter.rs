//! Integer PCM <-> floating-point signal conversion

use ndarray::{Array1, ArrayView1};
use crate::audio::SampleWidth;

pub struct SampleConverter;

impl SampleConverter {
    /// Integer samples as a real-valued signal, without rescaling.
    pub fn to_signal(samples: ArrayView1<i32>) -> Array1<f64> {
        samples.mapv(f64::from)
    }

    /// Round to the nearest integer and saturate to the width's range.
    /// Non-finite values become 0.
    pub fn quantize(signal: ArrayView1<f64>, width: SampleWidth) -> Array1<i32> {
        let (min, max) = width.range();
        signal.mapv(|x| {
            if !x.is_finite() {
                return 0;
            }
            x.round().clamp(min as f64, max as f64) as i32
        })
    }

    /// Number of samples that [`quantize`](Self::quantize) would saturate.
    pub fn clipped_count(signal: ArrayView1<f64>, width: SampleWidth) -> usize {
        let (min, max) = width.range();
        signal.iter()
            .filter(|x| x.is_finite() && (x.round() < min as f64 || x.round() > max as f64))
            .count()
    }
}
