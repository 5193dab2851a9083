//! Two-channel wavelet filter bank
//!
//! Filter construction, same-length convolution, resampling, padding and the
//! recursive analysis/synthesis cascade built on top of them.

pub mod filter;
pub mod convolution;
pub mod resample;
pub mod padding;
pub mod analysis;
pub mod synthesis;

pub use filter::{FilterPair, normalize, qmf, validate_coefficient};
pub use convolution::{conv, conv_transposed};
pub use resample::{downsample, upsample};
pub use padding::{pad_array, depad_array};
pub use analysis::{analyze, Cascade};
pub use synthesis::synthesize;
