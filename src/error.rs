//! Error Types

use thiserror::Error;

/// Main error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WaveletError {
    #[error("Invalid coefficient: {name} = {value} (must be strictly between 0 and 1)")]
    InvalidCoefficient { name: &'static str, value: f64 },

    #[error("Unsupported audio format: {message}")]
    UnsupportedAudioFormat { message: String },

    #[error("Length mismatch in {stage}: expected {expected}, got {actual}")]
    LengthMismatch {
        stage: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Signal length {len} is not a power of two")]
    NotPowerOfTwo { len: usize },

    #[error("Audio error: {message}")]
    Audio { message: String },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error: {message}")]
    Io { message: String },
}

impl WaveletError {
    pub fn unsupported<S: Into<String>>(msg: S) -> Self { Self::UnsupportedAudioFormat { message: msg.into() } }
    pub fn audio<S: Into<String>>(msg: S) -> Self { Self::Audio { message: msg.into() } }
    pub fn config<S: Into<String>>(msg: S) -> Self { Self::Config { message: msg.into() } }
    pub fn io<S: Into<String>>(msg: S) -> Self { Self::Io { message: msg.into() } }

    pub fn length_mismatch(stage: &'static str, expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { stage, expected, actual }
    }
}

pub type Result<T> = std::result::Result<T, WaveletError>;

impl From<std::io::Error> for WaveletError {
    fn from(err: std::io::Error) -> Self { Self::io(err.to_string()) }
}

impl From<hound::Error> for WaveletError {
    fn from(err: hound::Error) -> Self { Self::audio(format!("WAV: {}", err)) }
}
