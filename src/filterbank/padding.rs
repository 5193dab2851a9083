//! Power-of-two padding

use ndarray::{s, Array1, ArrayView1};
use crate::error::{WaveletError, Result};

/// Zero-extend `x` to the next power-of-two length.
///
/// Returns the padded signal and the number of zeros appended. A signal that
/// already has a power-of-two length is returned as-is with a pad of 0.
pub fn pad_array(x: ArrayView1<f64>) -> (Array1<f64>, usize) {
    let len = x.len();
    if len == 0 || len.is_power_of_two() {
        return (x.to_owned(), 0);
    }

    let target = len.next_power_of_two();
    let mut padded = Array1::zeros(target);
    padded.slice_mut(s![..len]).assign(&x);
    (padded, target - len)
}

/// Remove the trailing `pad_amount` samples added by [`pad_array`].
pub fn depad_array(x: ArrayView1<f64>, pad_amount: usize) -> Result<Array1<f64>> {
    if pad_amount > x.len() {
        return Err(WaveletError::length_mismatch("depad", pad_amount, x.len()));
    }
    Ok(x.slice(s![..x.len() - pad_amount]).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_power_of_two_unchanged() {
        let x = array![1.0, 2.0, 3.0, 4.0];
        let (padded, pad) = pad_array(x.view());
        assert_eq!(padded, x);
        assert_eq!(pad, 0);
    }

    #[test]
    fn test_length_five() {
        let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let (padded, pad) = pad_array(x.view());
        assert_eq!(padded.len(), 8);
        assert_eq!(pad, 3);
        assert_eq!(padded, array![1.0, 2.0, 3.0, 4.0, 5.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_round_trip_lengths() {
        for n in 1..70 {
            let x = Array1::from_iter((0..n).map(|i| i as f64 + 1.0));
            let (padded, pad) = pad_array(x.view());
            assert!(padded.len().is_power_of_two());
            assert!(padded.len() >= n);
            let restored = depad_array(padded.view(), pad).unwrap();
            assert_eq!(restored, x);
        }
    }

    #[test]
    fn test_depad_too_much() {
        let x = array![1.0, 2.0];
        assert!(matches!(
            depad_array(x.view(), 3),
            Err(WaveletError::LengthMismatch { stage: "depad", .. })
        ));
    }
}
