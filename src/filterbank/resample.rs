//! Decimation and zero-stuffing by a factor of two

use ndarray::{s, Array1, ArrayView1};

/// Keep even-indexed samples. Output length is `ceil(N / 2)`.
pub fn downsample(x: ArrayView1<f64>) -> Array1<f64> {
    x.slice(s![..;2]).to_owned()
}

/// Insert a zero after every sample. Output length is `2 * N`.
pub fn upsample(x: ArrayView1<f64>) -> Array1<f64> {
    let mut y = Array1::zeros(2 * x.len());
    y.slice_mut(s![..;2]).assign(&x);
    y
}
