//! Cache hierarchy simulator CLI.
//!
//! This binary is a thin harness around `cachesim-core`. It performs:
//! 1. **Run:** Build a hierarchy from defaults or a JSON config, feed it
//!    addresses from a trace file and/or the command line, print the report.
//! 2. **Config:** Print the effective default configuration as JSON.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use cachesim_core::sim::{self, trace};
use cachesim_core::{ByteAddr, CacheHierarchy, HierarchyConfig, ReplacementPolicy, SimError};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Two-level exclusive cache hierarchy simulator",
    long_about = "Feed byte addresses through an exclusive L1/L2 set-associative hierarchy and report hits and misses.\n\nExamples:\n  cachesim run 0 64 0\n  cachesim run --policy lru 1 33 1 65 33\n  cachesim run --config hierarchy.json --trace addrs.txt --json\n\nSet RUST_LOG=debug to log every access."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run an address stream through the hierarchy and print statistics.
    Run {
        /// JSON hierarchy configuration (defaults if omitted).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Replacement policy applied to both levels, overriding the config.
        #[arg(short, long, value_enum)]
        policy: Option<Policy>,

        /// Trace file of addresses (decimal or 0x-hex, `#` comments).
        #[arg(short, long)]
        trace: Option<PathBuf>,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,

        /// Addresses to access after the trace file, in order.
        #[arg(value_parser = parse_addr)]
        addrs: Vec<ByteAddr>,
    },

    /// Print the default hierarchy configuration as JSON.
    Config,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    /// First in, first out.
    Fifo,
    /// Least recently used.
    Lru,
}

impl From<Policy> for ReplacementPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Fifo => Self::Fifo,
            Policy::Lru => Self::Lru,
        }
    }
}

fn parse_addr(s: &str) -> Result<ByteAddr, String> {
    trace::parse_address(s).ok_or_else(|| format!("'{s}' is not an unsigned address"))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run {
            config,
            policy,
            trace,
            json,
            addrs,
        } => cmd_run(config, policy, trace, json, addrs),
        Commands::Config => cmd_config(),
    };

    if let Err(e) = result {
        eprintln!("[!] {e}");
        process::exit(1);
    }
}

/// Builds the hierarchy, runs the trace and positional addresses, prints the report.
fn cmd_run(
    config: Option<PathBuf>,
    policy: Option<Policy>,
    trace_path: Option<PathBuf>,
    json: bool,
    addrs: Vec<ByteAddr>,
) -> Result<(), SimError> {
    let mut config = match config {
        Some(path) => HierarchyConfig::load(path)?,
        None => HierarchyConfig::default(),
    };
    if let Some(p) = policy {
        config = config.with_policy(p.into());
    }

    let mut hierarchy = CacheHierarchy::from_config(&config)?;

    let mut stream = match trace_path {
        Some(path) => trace::load_trace(path)?,
        None => Vec::new(),
    };
    stream.extend(addrs);
    tracing::info!(count = stream.len(), "running address stream");

    let stats = sim::run(&mut hierarchy, stream);
    if json {
        println!("{}", stats.to_json()?);
    } else {
        stats.print();
    }
    Ok(())
}

/// Prints the default configuration.
fn cmd_config() -> Result<(), SimError> {
    println!(
        "{}",
        serde_json::to_string_pretty(&HierarchyConfig::default())?
    );
    Ok(())
}
