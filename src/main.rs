use clap::Parser;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lzw12::{
    io_utils::{io_cli_error, lzw_cli_error, CliError},
    DecodeConfig, FileDecoder, TrailingBytePolicy,
};

/// Decode files written by a fixed-width 12-bit LZW encoder.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Compressed input files, decoded in order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Write each result to DIR/<input stem>.txt instead of stdout
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
    /// Decode and report timing without emitting the output
    #[arg(long)]
    discard: bool,
    /// Print decode statistics as JSON, one object per input
    #[arg(long)]
    json: bool,
    /// Fail on a single byte left after the last 3-byte group
    #[arg(long)]
    reject_trailing_byte: bool,
    /// JSON decode configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    init_logging(&args.log_level);
    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<DecodeConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => DecodeConfig::from_json_file(path).map_err(|e| lzw_cli_error(path, e))?,
        None => DecodeConfig::default(),
    };
    if args.reject_trailing_byte {
        config.trailing_byte = TrailingBytePolicy::Reject;
    }
    Ok(config)
}

fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    out_dir.join(stem).with_extension("txt")
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(&args)?;
    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir).map_err(|e| io_cli_error("creating output directory", dir, e))?;
    }

    let mut decoder = FileDecoder::with_config(&args.inputs[0], config);
    let stdout = std::io::stdout();
    for input in &args.inputs {
        decoder.set_source(input);
        let started = Instant::now();
        let decoded = decoder.decode().map_err(|e| lzw_cli_error(input, e))?;
        info!(
            "decoded {} in {} ms ({} codes, {} resets)",
            input.display(),
            started.elapsed().as_millis(),
            decoded.stats.codes,
            decoded.stats.resets
        );

        if let Some(dir) = &args.out_dir {
            let path = output_path(dir, input);
            fs::write(&path, &decoded.output)
                .map_err(|e| io_cli_error("writing output file", &path, e))?;
        } else if !args.discard && !args.json {
            stdout.lock().write_all(&decoded.output)?;
        }

        if args.json {
            println!("{}", serde_json::to_string(&decoded.stats)?);
        }
    }
    Ok(())
}
