//! Analysis/synthesis pipeline

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use ndarray::{Array1, ArrayView1};
use crate::audio::{SampleConverter, SampleWidth, WavAudio};
use crate::config::Config;
use crate::error::Result;
use crate::filterbank::{analyze, depad_array, pad_array, synthesize, FilterPair};

/// Per-run signal format and padding, threaded through the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignalContext {
    pub sample_width: SampleWidth,
    pub sample_rate: u32,
    pub pad_amount: usize,
}

/// Result of transforming one in-memory signal.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub signal: Array1<f64>,
    pub pad_amount: usize,
    pub band_count: usize,
}

/// Transformed audio together with the context it was produced under.
#[derive(Debug, Clone)]
pub struct ProcessedAudio {
    pub audio: WavAudio,
    pub context: SignalContext,
    pub band_count: usize,
}

#[derive(Debug)]
pub struct WaveletProcessor {
    config: Config,
    analysis: FilterPair,
    synthesis: FilterPair,
}

impl WaveletProcessor {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let analysis = FilterPair::from_coefficient(config.analysis_coefficient());
        let synthesis = FilterPair::from_coefficient(config.synthesis_coefficient());
        log::debug!("Analysis filters: low={:?} high={:?}", analysis.low, analysis.high);
        log::debug!("Synthesis filters: low={:?} high={:?}", synthesis.low, synthesis.high);

        Ok(Self {
            config,
            analysis,
            synthesis,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn analysis_filters(&self) -> &FilterPair {
        &self.analysis
    }

    pub fn synthesis_filters(&self) -> &FilterPair {
        &self.synthesis
    }

    /// Pad, analyse, resynthesise and depad a signal.
    pub fn transform(&self, signal: ArrayView1<f64>) -> Result<TransformOutput> {
        let (padded, pad_amount) = pad_array(signal);
        log::debug!("Padded {} -> {} samples ({} zeros)", signal.len(), padded.len(), pad_amount);

        let cascade = analyze(padded.view(), &self.analysis)?;
        log::debug!("Analysis produced {} bands", cascade.len());

        let reconstructed = synthesize(&cascade, &self.synthesis)?;
        let signal = depad_array(reconstructed.view(), pad_amount)?;

        Ok(TransformOutput {
            signal,
            pad_amount,
            band_count: cascade.len(),
        })
    }

    /// Transform decoded audio, keeping its sample width and rate.
    pub fn process_audio(&self, audio: &WavAudio) -> Result<ProcessedAudio> {
        let input = SampleConverter::to_signal(audio.samples().view());
        let output = self.transform(input.view())?;

        let context = SignalContext {
            sample_width: audio.sample_width(),
            sample_rate: audio.sample_rate(),
            pad_amount: output.pad_amount,
        };

        let clipped = SampleConverter::clipped_count(output.signal.view(), context.sample_width);
        if clipped > 0 {
            log::warn!("{} samples exceed the {} range and were clipped", clipped, context.sample_width.name());
        }

        let samples = SampleConverter::quantize(output.signal.view(), context.sample_width);
        Ok(ProcessedAudio {
            audio: WavAudio::new(context.sample_rate, context.sample_width, samples),
            context,
            band_count: output.band_count,
        })
    }

    /// Read `input_path`, transform it and write `output_path`.
    pub fn process_file(&self, input_path: &Path, output_path: &Path) -> Result<ProcessingResult> {
        let start_time = Instant::now();

        log::info!("Processing: {}", input_path.display());
        let audio = WavAudio::from_file(input_path)?;
        log::info!(
            "Audio: {:.2}s, {} Hz, {}",
            audio.duration(), audio.sample_rate(), audio.sample_width().name()
        );

        let processed = self.process_audio(&audio)?;

        processed.audio.save_to_file(output_path)?;
        log::info!("Saved: {}", output_path.display());

        Ok(ProcessingResult {
            input_path: input_path.to_path_buf(),
            output_path: output_path.to_path_buf(),
            context: processed.context,
            sample_count: processed.audio.samples().len(),
            band_count: processed.band_count,
            processing_time: start_time.elapsed(),
        })
    }

    /// Process the configured input into the configured output location.
    pub fn run(&self) -> Result<ProcessingResult> {
        let output_path = self.config.output_path();
        self.process_file(&self.config.input_path, &output_path)
    }
}

#[derive(Debug)]
pub struct ProcessingResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub context: SignalContext,
    pub sample_count: usize,
    pub band_count: usize,
    pub processing_time: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use tempfile::TempDir;

    fn processor(alpha: f64, beta: f64) -> WaveletProcessor {
        let mut config = Config::default();
        config.transform.analysis_coefficient = alpha;
        config.transform.synthesis_coefficient = beta;
        WaveletProcessor::new(config).unwrap()
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = Config::default();
        config.transform.synthesis_coefficient = 1.0;
        assert!(WaveletProcessor::new(config).is_err());
    }

    #[test]
    fn test_length_five_round_trip() {
        let x = array![1.0, 2.0, 3.0, 4.0, 5.0];
        let output = processor(0.3, 0.3).transform(x.view()).unwrap();
        assert_eq!(output.pad_amount, 3);
        assert_eq!(output.band_count, 4);
        assert_eq!(output.signal.len(), 5);
        for (a, b) in output.signal.iter().zip(x.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn test_lengths_preserved_for_any_pair() {
        let p = processor(0.15, 0.85);
        for n in 1..40 {
            let x = Array1::from_iter((0..n).map(|i| (i as f64).sin() * 1000.0));
            assert_eq!(p.transform(x.view()).unwrap().signal.len(), n);
        }
    }

    #[test]
    fn test_process_audio_lossless() {
        let samples = Array1::from_iter((0..1000).map(|i| ((i * 97) % 65536) as i32 - 32768));
        let audio = WavAudio::new(44100, SampleWidth::Int16, samples.clone());
        let processed = processor(0.42, 0.42).process_audio(&audio).unwrap();

        assert_eq!(processed.context.sample_rate, 44100);
        assert_eq!(processed.context.sample_width, SampleWidth::Int16);
        assert_eq!(processed.context.pad_amount, 24);
        assert_eq!(processed.band_count, 11);
        assert_eq!(processed.audio.samples(), &samples);
    }

    #[test]
    fn test_process_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("in.wav");
        let output = temp_dir.path().join("out.wav");

        let samples = Array1::from(vec![100, -200, 300, -400, 500, -600, 700]);
        WavAudio::new(8000, SampleWidth::Int32, samples.clone()).save_to_file(&input).unwrap();

        let result = processor(0.6, 0.6).process_file(&input, &output).unwrap();
        assert_eq!(result.sample_count, 7);
        assert_eq!(result.context.pad_amount, 1);
        assert_eq!(result.band_count, 4);

        let written = WavAudio::from_file(&output).unwrap();
        assert_eq!(written.sample_width(), SampleWidth::Int32);
        assert_eq!(written.samples(), &samples);
    }
}
