//! Same-length FIR convolution
//!
//! Both operators return a sequence as long as the input. Samples outside
//! `[0, N)` are treated as absent, so windows are truncated at the boundary
//! rather than wrapped or reflected.

use ndarray::{s, Array1, ArrayView1};

/// Causal convolution: `y[n] = sum_k c[k] * x[n - k]` for `n - k >= 0`.
pub fn conv(x: ArrayView1<f64>, c: &[f64]) -> Array1<f64> {
    let n = x.len();
    let mut y = Array1::zeros(n);
    for (k, &tap) in c.iter().enumerate().take(n) {
        y.slice_mut(s![k..]).scaled_add(tap, &x.slice(s![..n - k]));
    }
    y
}

/// Transposed convolution: `y[n] = sum_j c[j] * x[n + j]` for `n + j < N`.
///
/// Adjoint of [`conv`], which lets analysis reuse the synthesis filters
/// without storing reversed copies.
pub fn conv_transposed(x: ArrayView1<f64>, c: &[f64]) -> Array1<f64> {
    let n = x.len();
    let mut y = Array1::zeros(n);
    for (j, &tap) in c.iter().enumerate().take(n) {
        y.slice_mut(s![..n - j]).scaled_add(tap, &x.slice(s![j..]));
    }
    y
}
