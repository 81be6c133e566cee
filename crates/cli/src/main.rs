//! Branch predictor evaluator CLI.
//!
//! Replays a branch trace through the 2-bit saturating-counter predictor and prints:
//! 1. **Branch count:** Number of `<hex-address> <0|1>` pairs read.
//! 2. **Accuracy:** Percentage of branches predicted correctly, to two decimals.
//!
//! The trace is read from `--trace FILE` or, if omitted, from stdin. Malformed input
//! or an empty trace exits with status 1 and a diagnostic on stderr.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bpsim_core::common::{SimError, TraceError};
use bpsim_core::config::Config;
use bpsim_core::sim::Simulator;

/// Exit status of a run that printed a report.
const EXIT_OK: u8 = 0;
/// Exit status for malformed input, bad configuration or an empty trace.
const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(
    name = "bpsim",
    author,
    version,
    about = "2-bit saturating counter branch predictor evaluator",
    long_about = "Read whitespace-separated `<hex-address> <0|1>` branch outcomes and report how many \
                  a 64K-entry table of 2-bit saturating counters predicts correctly.\n\nExamples:\n  \
                  bpsim < trace.txt\n  bpsim --trace trace.txt --detailed\n  \
                  bpsim --config bpsim.json -v"
)]
struct Cli {
    /// Trace file to replay (defaults to stdin).
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the number of counters (must be a power of two).
    #[arg(long)]
    table_size: Option<usize>,

    /// Print the taken / not-taken accuracy breakdown.
    #[arg(short, long)]
    detailed: bool,

    /// Increase log verbosity on stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Merges the optional config file with command-line overrides.
fn load_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    if let Some(size) = cli.table_size {
        config.predictor.table_size = size;
    }
    if cli.detailed {
        config.report.detailed = true;
    }
    config.validate()?;
    Ok(config)
}

/// Replays `reader` and writes the report to `out`, diagnostics to `err`.
///
/// Returns the process exit status: `EXIT_OK` once a report is written,
/// `EXIT_FAILURE` for malformed input or an empty trace.
fn replay<R, W, E>(config: &Config, reader: R, out: &mut W, err: &mut E) -> u8
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let result = Simulator::from_config(config)
        .map_err(SimError::from)
        .and_then(|mut sim| sim.run(reader));

    match result {
        Ok(stats) => {
            match stats.write_report(out, &config.report.label, config.report.detailed) {
                Ok(()) => EXIT_OK,
                Err(e) => {
                    error!("failed to write report: {e}");
                    EXIT_FAILURE
                }
            }
        }
        Err(SimError::EmptyTrace) => {
            let _ = writeln!(out, "Branch count = 0");
            let _ = writeln!(err, "[!] no data: trace contained no branches");
            EXIT_FAILURE
        }
        Err(e) => {
            let _ = writeln!(err, "[!] FATAL: {e}");
            EXIT_FAILURE
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[!] FATAL: {e}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let status = match &cli.trace {
        Some(path) => match File::open(path) {
            Ok(file) => {
                info!(path = %path.display(), "reading trace");
                replay(&config, BufReader::new(file), &mut out, &mut err)
            }
            Err(e) => {
                let _ = writeln!(err, "[!] FATAL: {}", TraceError::from(e));
                EXIT_FAILURE
            }
        },
        None => replay(&config, io::stdin().lock(), &mut out, &mut err),
    };
    ExitCode::from(status)
}
