//! Configuration management for the wavelet transform

use crate::audio::timestamped_output_path;
use crate::error::{WaveletError, Result};
use crate::filterbank::validate_coefficient;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input_path: PathBuf,
    pub transform: TransformConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Coefficient of the analysis filter pair, in (0, 1)
    pub analysis_coefficient: f64,
    /// Coefficient of the synthesis filter pair, in (0, 1)
    pub synthesis_coefficient: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the timestamp-named output file
    pub directory: PathBuf,
    /// Explicit output file, overrides `directory`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("input.wav"),
            transform: TransformConfig::default(),
            output: OutputConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            analysis_coefficient: 0.5,
            synthesis_coefficient: 0.5,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            file: None,
        }
    }
}

impl Config {
    pub fn analysis_coefficient(&self) -> f64 {
        self.transform.analysis_coefficient
    }

    pub fn synthesis_coefficient(&self) -> f64 {
        self.transform.synthesis_coefficient
    }

    pub fn verbose(&self) -> bool {
        self.logging.verbose
    }

    /// Equal coefficients reconstruct the input.
    pub fn is_lossless(&self) -> bool {
        self.analysis_coefficient() == self.synthesis_coefficient()
    }

    /// Explicit output file if configured, otherwise `<directory>/<unix seconds>.wav`.
    pub fn output_path(&self) -> PathBuf {
        match &self.output.file {
            Some(file) => file.clone(),
            None => timestamped_output_path(&self.output.directory),
        }
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "wavebank", about = "2-tap wavelet analysis/resynthesis of mono WAV files", version)]
pub struct Args {
    #[arg(help = "Input audio file (mono 16/32-bit integer WAV)")]
    pub input: PathBuf,

    #[arg(help = "Analysis coefficient, strictly between 0 and 1", allow_negative_numbers = true)]
    pub alpha: f64,

    #[arg(help = "Synthesis coefficient, strictly between 0 and 1", allow_negative_numbers = true)]
    pub beta: f64,

    #[arg(short = 'o', long = "output", help = "Output file path (default: <unix timestamp>.wav)")]
    pub output: Option<PathBuf>,

    #[arg(short = 'd', long = "output-dir", help = "Directory for the timestamp-named output file")]
    pub output_dir: Option<PathBuf>,

    #[arg(short = 'c', long = "config", help = "Config file path (TOML format)")]
    pub config_file: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output mode")]
    pub verbose: bool,
}

impl Config {
    /// Create config from command line arguments
    pub fn from_args() -> Result<Self> {
        let args = Args::parse();
        Self::from_args_and_config(args)
    }

    /// Create config from command line arguments and config file
    pub fn from_args_and_config(args: Args) -> Result<Self> {
        let mut config = if let Some(config_path) = &args.config_file {
            Self::from_file(config_path)?
        } else {
            Self::default()
        };

        // Command line arguments override config file settings
        config.input_path = args.input;
        config.transform.analysis_coefficient = args.alpha;
        config.transform.synthesis_coefficient = args.beta;
        if let Some(dir) = args.output_dir {
            config.output.directory = dir;
        }
        if let Some(file) = args.output {
            config.output.file = Some(file);
        }
        config.logging.verbose |= args.verbose;

        config.validate()?;

        Ok(config)
    }

    /// Load config from TOML config file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| WaveletError::config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| WaveletError::config(format!("Failed to parse config file: {}", e)))
    }

    /// Validate configuration parameter validity
    pub fn validate(&self) -> Result<()> {
        validate_coefficient("alpha", self.transform.analysis_coefficient)?;
        validate_coefficient("beta", self.transform.synthesis_coefficient)?;

        if self.output.file.is_none() && self.output.directory.exists() && !self.output.directory.is_dir() {
            return Err(WaveletError::config(format!(
                "Output directory is not a directory: {}", self.output.directory.display()
            )));
        }

        if let Some(file) = &self.output.file {
            if file.is_dir() {
                return Err(WaveletError::config(format!(
                    "Output file is a directory: {}", file.display()
                )));
            }
        }

        Ok(())
    }

    /// Save config to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaveletError::config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| WaveletError::config(format!("Failed to write config file: {}", e)))
    }
}
