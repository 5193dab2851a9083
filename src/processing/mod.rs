//! Audio Processing Pipeline

pub mod processor;

pub use processor::{WaveletProcessor, SignalContext, ProcessedAudio, ProcessingResult, TransformOutput};
