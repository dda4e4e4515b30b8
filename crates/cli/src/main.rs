//! Cache model CLI.
//!
//! This binary provides a single entry point for both simulation modes. It performs:
//! 1. **GEMM run:** Replay the tiled matrix-multiply access pattern (default).
//! 2. **Trace replay:** Replay a recorded JSON access trace.
//!
//! Geometry comes from built-in defaults, optionally overridden by a JSON
//! config file and then by individual flags.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cachesim_core::common::SimError;
use cachesim_core::config::Config;
use cachesim_core::sim::{Simulator, Trace};
use cachesim_core::stats::CacheStats;

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Set-associative LRU cache performance model",
    long_about = "Estimate hits, misses, and cycle cost of a set-associative LRU cache.\n\nExamples:\n  cachesim gemm\n  cachesim gemm --sets 64 --ways 1 --json\n  cachesim gemm --config sweep/l1-4way.json --m 128\n  cachesim replay trace.json --sections summary"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the tiled matrix-multiply workload.
    Gemm {
        #[command(flatten)]
        cache: CacheArgs,

        /// Rows of A and C.
        #[arg(long)]
        m: Option<u64>,

        /// Columns of B and C.
        #[arg(long)]
        n: Option<u64>,

        /// Reduction dimension.
        #[arg(long)]
        k: Option<u64>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Replay a JSON access trace.
    Replay {
        /// Trace file (JSON array of {op, width, addr}).
        trace: PathBuf,

        #[command(flatten)]
        cache: CacheArgs,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug, Default)]
struct CacheArgs {
    /// JSON configuration file; flags below override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of sets.
    #[arg(long)]
    sets: Option<u64>,

    /// Lines per set.
    #[arg(long)]
    ways: Option<usize>,

    /// Line size in bytes.
    #[arg(long)]
    line: Option<u64>,

    /// Data bus width in bits.
    #[arg(long)]
    bus: Option<u64>,

    /// Modeled memory size in bytes.
    #[arg(long)]
    mem: Option<u64>,
}

#[derive(Args, Debug, Default)]
struct OutputArgs {
    /// Print statistics as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Text sections to print (summary, access, timing); all when omitted.
    #[arg(long, value_delimiter = ',')]
    sections: Vec<String>,
}

impl CacheArgs {
    /// Loads the config file (or defaults) and applies the geometry flags.
    fn resolve(&self) -> Result<Config, SimError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        let cache = &mut config.cache;
        if let Some(sets) = self.sets {
            cache.sets = sets;
        }
        if let Some(ways) = self.ways {
            cache.ways = ways;
        }
        if let Some(line) = self.line {
            cache.line_bytes = line;
        }
        if let Some(bus) = self.bus {
            cache.data_bus_bits = bus;
        }
        if let Some(mem) = self.mem {
            cache.mem_bytes = mem;
        }
        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Gemm {
        cache: CacheArgs::default(),
        m: None,
        n: None,
        k: None,
        output: OutputArgs::default(),
    });

    if let Err(e) = run(command) {
        eprintln!("[!] {e}");
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), SimError> {
    match command {
        Commands::Gemm {
            cache,
            m,
            n,
            k,
            output,
        } => {
            let mut config = cache.resolve()?;
            if let Some(m) = m {
                config.workload.m = m;
            }
            if let Some(n) = n {
                config.workload.n = n;
            }
            if let Some(k) = k {
                config.workload.k = k;
            }
            let mut sim = Simulator::new(&config)?;
            let stats = sim.run_gemm()?;
            report(&stats, &output)
        }
        Commands::Replay {
            trace,
            cache,
            output,
        } => {
            let config = cache.resolve()?;
            let trace = Trace::from_file(&trace)?;
            let mut sim = Simulator::new(&config)?;
            let stats = sim.run_trace(&trace)?;
            report(&stats, &output)
        }
    }
}

/// Prints `stats` in the requested format.
fn report(stats: &CacheStats, output: &OutputArgs) -> Result<(), SimError> {
    if output.json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        stats.print_sections(&output.sections);
    }
    Ok(())
}
