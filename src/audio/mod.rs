//! Audio Module
//!
//! Reads and writes mono integer PCM WAV files and converts between integer
//! samples and the floating-point signals used by the filter bank.

pub mod wav;
pub mod converter;

pub use wav::{WavAudio, SampleWidth, AudioHeader, timestamped_output_path};
pub use converter::SampleConverter;
