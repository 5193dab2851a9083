//! WAV audio file processing

use std::path::{Path, PathBuf};
use std::fs::File;
use hound::{WavReader, WavWriter, SampleFormat};
use ndarray::Array1;
use crate::error::{WaveletError, Result};

/// Bytes per PCM sample. Only signed 16- and 32-bit integers are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleWidth {
    Int16,
    Int32,
}

impl SampleWidth {
    pub fn from_bits(bits: u16) -> Result<Self> {
        match bits {
            16 => Ok(SampleWidth::Int16),
            32 => Ok(SampleWidth::Int32),
            _ => Err(WaveletError::unsupported(format!(
                "{}-bit samples (only 16 or 32 bit supported)", bits
            ))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SampleWidth::Int16 => "int16",
            SampleWidth::Int32 => "int32",
        }
    }

    pub fn bytes(&self) -> u16 {
        match self {
            SampleWidth::Int16 => 2,
            SampleWidth::Int32 => 4,
        }
    }

    pub fn bits(&self) -> u16 {
        self.bytes() * 8
    }

    /// Representable sample range.
    pub fn range(&self) -> (i32, i32) {
        match self {
            SampleWidth::Int16 => (i16::MIN as i32, i16::MAX as i32),
            SampleWidth::Int32 => (i32::MIN, i32::MAX),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AudioHeader {
    pub sample_rate: u32,
    pub sample_width: SampleWidth,
    pub total_samples: u32,
    pub duration: f64,
}

impl AudioHeader {
    pub fn new(sample_rate: u32, sample_width: SampleWidth, total_samples: u32) -> Self {
        let duration = if sample_rate > 0 {
            total_samples as f64 / sample_rate as f64
        } else {
            0.0
        };

        Self {
            sample_rate,
            sample_width,
            total_samples,
            duration,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.sample_rate == 0 {
            return Err(WaveletError::audio("Sample rate cannot be 0"));
        }

        if self.total_samples == 0 {
            return Err(WaveletError::audio("Audio contains no samples"));
        }

        Ok(())
    }

    pub fn to_wav_spec(&self) -> hound::WavSpec {
        hound::WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: self.sample_width.bits(),
            sample_format: SampleFormat::Int,
        }
    }
}

/// Mono integer PCM audio held in memory.
#[derive(Debug, Clone)]
pub struct WavAudio {
    pub header: AudioHeader,
    pub samples: Array1<i32>,
}

impl WavAudio {
    pub fn new(sample_rate: u32, sample_width: SampleWidth, samples: Array1<i32>) -> Self {
        let header = AudioHeader::new(sample_rate, sample_width, samples.len() as u32);
        WavAudio { header, samples }
    }

    /// Decode a mono 16/32-bit integer WAV file.
    ///
    /// The format is checked before any sample is read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path)
            .map_err(|e| WaveletError::io(format!("Cannot open audio file {}: {}", path.display(), e)))?;

        let mut reader = WavReader::new(std::io::BufReader::new(file))
            .map_err(|e| WaveletError::audio(format!("Cannot create WAV reader: {}", e)))?;

        let spec = reader.spec();

        if spec.channels != 1 {
            return Err(WaveletError::unsupported(format!(
                "{} channels (only mono supported)", spec.channels
            )));
        }

        if spec.sample_format != SampleFormat::Int {
            return Err(WaveletError::unsupported("floating-point samples (only integer PCM supported)"));
        }

        let sample_width = SampleWidth::from_bits(spec.bits_per_sample)?;

        let samples = reader.samples::<i32>()
            .map(|sample| sample.map_err(|e| WaveletError::audio(format!("Failed to read sample: {}", e))))
            .collect::<Result<Vec<i32>>>()?;

        let audio = WavAudio::new(spec.sample_rate, sample_width, Array1::from(samples));
        audio.header.validate()?;

        log::debug!(
            "Read {}: {} samples, {} Hz, {}",
            path.display(), audio.total_samples(), audio.sample_rate(), sample_width.name()
        );

        Ok(audio)
    }

    /// Encode as mono integer PCM with this audio's width and rate.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| WaveletError::io(format!("Cannot create output directory: {}", e)))?;
            }
        }

        let file = File::create(path)
            .map_err(|e| WaveletError::io(format!("Cannot create output file {}: {}", path.display(), e)))?;

        let spec = self.header.to_wav_spec();
        let mut writer = WavWriter::new(std::io::BufWriter::new(file), spec)
            .map_err(|e| WaveletError::audio(format!("Cannot create WAV writer: {}", e)))?;

        let write_error = |e: hound::Error| WaveletError::audio(format!("Failed to write sample: {}", e));

        match self.sample_width() {
            SampleWidth::Int16 => {
                for &sample in self.samples.iter() {
                    let sample = i16::try_from(sample).map_err(|_| {
                        WaveletError::audio(format!("Sample {} does not fit in 16 bits", sample))
                    })?;
                    writer.write_sample(sample).map_err(write_error)?;
                }
            }
            SampleWidth::Int32 => {
                for &sample in self.samples.iter() {
                    writer.write_sample(sample).map_err(write_error)?;
                }
            }
        }

        writer.finalize()
            .map_err(|e| WaveletError::audio(format!("Failed to finalize WAV writing: {}", e)))?;

        log::debug!("Wrote {}: {} samples", path.display(), self.samples.len());
        Ok(())
    }

    pub fn samples(&self) -> &Array1<i32> {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.header.sample_rate
    }

    pub fn sample_width(&self) -> SampleWidth {
        self.header.sample_width
    }

    pub fn total_samples(&self) -> u32 {
        self.header.total_samples
    }

    pub fn duration(&self) -> f64 {
        self.header.duration
    }
}

/// `<dir>/<unix seconds>.wav`
pub fn timestamped_output_path<P: AsRef<Path>>(dir: P) -> PathBuf {
    let seconds = time::OffsetDateTime::now_utc().unix_timestamp();
    dir.as_ref().join(format!("{}.wav", seconds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    fn write_raw(path: &Path, channels: u16, bits: u16, format: SampleFormat) {
        let spec = hound::WavSpec { channels, sample_rate: 8000, bits_per_sample: bits, sample_format: format };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for i in 0..8 {
            match format {
                SampleFormat::Float => writer.write_sample(i as f32 / 10.0).unwrap(),
                SampleFormat::Int => writer.write_sample(i as i32).unwrap(),
            }
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_sample_width() {
        assert_eq!(SampleWidth::Int16.name(), "int16");
        assert_eq!(SampleWidth::Int16.bytes(), 2);
        assert_eq!(SampleWidth::Int32.bytes(), 4);
        assert_eq!(SampleWidth::Int32.bits(), 32);
        assert_eq!(SampleWidth::from_bits(16).unwrap(), SampleWidth::Int16);
        assert!(matches!(SampleWidth::from_bits(24), Err(WaveletError::UnsupportedAudioFormat { .. })));
        assert_eq!(SampleWidth::Int16.range(), (-32768, 32767));
    }

    #[test]
    fn test_audio_header() {
        let header = AudioHeader::new(16000, SampleWidth::Int16, 1000);
        assert!((header.duration - 0.0625).abs() < f64::EPSILON);
        assert!(header.validate().is_ok());

        assert!(AudioHeader::new(0, SampleWidth::Int16, 1000).validate().is_err());
        assert!(AudioHeader::new(16000, SampleWidth::Int16, 0).validate().is_err());
    }

    #[test]
    fn test_wav_roundtrip_16_bit() {
        let samples = Array1::from(vec![0, 1, -1, 32767, -32768, 1234]);
        let original = WavAudio::new(22050, SampleWidth::Int16, samples.clone());

        let temp_file = NamedTempFile::new().unwrap();
        original.save_to_file(temp_file.path()).unwrap();

        let loaded = WavAudio::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.sample_rate(), 22050);
        assert_eq!(loaded.sample_width(), SampleWidth::Int16);
        assert_eq!(loaded.samples(), &samples);
    }

    #[test]
    fn test_wav_roundtrip_32_bit() {
        let samples = Array1::from(vec![i32::MAX, i32::MIN, 0, 70000, -70000]);
        let original = WavAudio::new(48000, SampleWidth::Int32, samples.clone());

        let temp_file = NamedTempFile::new().unwrap();
        original.save_to_file(temp_file.path()).unwrap();

        let loaded = WavAudio::from_file(temp_file.path()).unwrap();
        assert_eq!(loaded.sample_width(), SampleWidth::Int32);
        assert_eq!(loaded.samples(), &samples);
    }

    #[test]
    fn test_16_bit_overflow_is_error() {
        let audio = WavAudio::new(8000, SampleWidth::Int16, Array1::from(vec![40000]));
        let temp_file = NamedTempFile::new().unwrap();
        assert!(audio.save_to_file(temp_file.path()).is_err());
    }

    #[test]
    fn test_rejects_stereo() {
        let temp_file = NamedTempFile::new().unwrap();
        write_raw(temp_file.path(), 2, 16, SampleFormat::Int);
        let result = WavAudio::from_file(temp_file.path());
        assert!(matches!(result, Err(WaveletError::UnsupportedAudioFormat { .. })));
    }

    #[test]
    fn test_rejects_8_bit() {
        let temp_file = NamedTempFile::new().unwrap();
        write_raw(temp_file.path(), 1, 8, SampleFormat::Int);
        let result = WavAudio::from_file(temp_file.path());
        assert!(matches!(result, Err(WaveletError::UnsupportedAudioFormat { .. })));
    }

    #[test]
    fn test_rejects_float() {
        let temp_file = NamedTempFile::new().unwrap();
        write_raw(temp_file.path(), 1, 32, SampleFormat::Float);
        let result = WavAudio::from_file(temp_file.path());
        assert!(matches!(result, Err(WaveletError::UnsupportedAudioFormat { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = WavAudio::from_file("/nonexistent/input.wav");
        assert!(matches!(result, Err(WaveletError::Io { .. })));
    }

    #[test]
    fn test_creates_output_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.wav");
        let audio = WavAudio::new(8000, SampleWidth::Int16, Array1::from(vec![1, 2, 3]));
        audio.save_to_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_timestamped_output_path() {
        let path = timestamped_output_path("out");
        assert_eq!(path.parent(), Some(Path::new("out")));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("wav"));
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap();
        assert!(stem.parse::<i64>().unwrap() > 0);
    }
}
