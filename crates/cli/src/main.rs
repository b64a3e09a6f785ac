//! Trace-driven cache simulator CLI.
//!
//! This binary provides a single entry point for a simulation run. It performs:
//! 1. **Configuration:** Takes capacity, associativity, block size, and policy from the
//!    command line or from a JSON file.
//! 2. **Simulation:** Streams a trace (stdin or file) through the cache model.
//! 3. **Reporting:** Prints the miss summary line, or the full snapshot as JSON.

use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use cachesim_core::StatsSnapshot;
use cachesim_core::common::ConfigError;
use cachesim_core::config::CacheConfig;
use cachesim_core::sim::{RunReport, Simulator};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Simulate a set-associative cache over a memory trace and report miss rates.\n\nEach trace line is `r <hex address>` or `w <hex address>`.\n\nExamples:\n  cachesim 32 4 64 l < trace.txt\n  cachesim 8 2 32 r --seed 42 --trace trace.txt\n  cachesim 1 1 16 lru --json < trace.txt\n  cachesim --config cache.json --trace trace.txt"
)]
struct Cli {
    /// Cache capacity in kilobytes.
    #[arg(required_unless_present = "config")]
    capacity_kb: Option<u64>,

    /// Associativity (lines per set).
    #[arg(required_unless_present = "config")]
    associativity: Option<u64>,

    /// Block size in bytes.
    #[arg(required_unless_present = "config")]
    block_size: Option<u64>,

    /// Replacement policy: l/lru or r/random (case-insensitive).
    #[arg(required_unless_present = "config")]
    policy: Option<String>,

    /// JSON configuration file used instead of the positional cache arguments.
    #[arg(
        short,
        long,
        conflicts_with_all = ["capacity_kb", "associativity", "block_size", "policy"]
    )]
    config: Option<PathBuf>,

    /// Trace file to read instead of stdin.
    #[arg(short, long)]
    trace: Option<PathBuf>,

    /// Seed for random replacement (defaults to the configured seed, then the current time).
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the statistics snapshot as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(&cli).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    let seed = config.seed.unwrap_or_else(clock_seed);
    config.seed = Some(seed);

    let mut sim = Simulator::new(&config).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });
    tracing::info!(policy = %config.policy, seed, "starting simulation");

    let report = match cli.trace.as_deref() {
        Some(path) => {
            let file = File::open(path).unwrap_or_else(|e| {
                eprintln!("Error: could not open trace '{}': {e}", path.display());
                process::exit(1);
            });
            sim.run(BufReader::new(file))
        }
        None => sim.run(io::stdin().lock()),
    };

    process::exit(emit(&report, cli.json));
}

/// Builds the run configuration from `--config` or the positional arguments.
///
/// `--seed` overrides any seed stored in the configuration file.
fn load_config(cli: &Cli) -> Result<CacheConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => CacheConfig::from_file(path)?,
        None => CacheConfig {
            capacity_kb: cli.capacity_kb.unwrap_or_default(),
            associativity: cli.associativity.unwrap_or_default(),
            block_size: cli.block_size.unwrap_or_default(),
            policy: cli.policy.as_deref().unwrap_or_default().parse()?,
            seed: None,
        },
    };
    config.seed = cli.seed.or(config.seed);
    Ok(config)
}

/// Formats the snapshot as the summary line or as pretty-printed JSON.
fn render(snapshot: &StatsSnapshot, json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(snapshot)
    } else {
        Ok(snapshot.to_string())
    }
}

/// Prints the run summary and returns the process exit code.
///
/// A trace error is reported on stderr and the partial summary is still printed.
fn emit(report: &RunReport, json: bool) -> i32 {
    if let Some(e) = &report.error {
        eprintln!("Error reading trace: {e}");
    }

    match render(&report.snapshot, json) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Error: could not encode statistics: {e}");
            return 1;
        }
    }

    i32::from(report.error.is_some())
}

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG` or `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Derives a seed from the wall clock so unseeded random runs differ.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64)
}
