//! wavebank - wavelet analysis/resynthesis of a mono WAV file

use clap::Parser;
use std::process;
use wavebank::processing::WaveletProcessor;
use wavebank::{init_logging, Args, Config, Result};

fn main() {
    let args = Args::parse();

    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_args_and_config(args)?;

    if config.verbose() {
        println!("{}", wavebank::get_library_info());
        println!("Input: {}", config.input_path.display());
        println!("Alpha: {}  Beta: {}{}",
                 config.analysis_coefficient(),
                 config.synthesis_coefficient(),
                 if config.is_lossless() { " (lossless)" } else { "" });
    }

    let processor = WaveletProcessor::new(config.clone())?;
    let result = processor.run()?;

    if config.verbose() {
        println!("Samples: {} ({} zeros padded)", result.sample_count, result.context.pad_amount);
        println!("Bands: {}", result.band_count);
        println!("Time: {:.3}s", result.processing_time.as_secs_f64());
    }

    println!("Audio successfully exported as {}", result.output_path.display());
    Ok(())
}
