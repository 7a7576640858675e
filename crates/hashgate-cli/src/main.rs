//! # hashgate CLI entry point
//!
//! Parses command-line arguments, resolves configuration, and dispatches
//! to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hashgate_core::HashAlgorithm;
use tracing_subscriber::EnvFilter;

use hashgate_cli::compare::{run_compare, CompareArgs};
use hashgate_cli::lines::{run_lines, LinesArgs};
use hashgate_cli::sum::{run_sum, SumArgs};
use hashgate_cli::HashgateConfig;

/// hashgate: lifecycle-guarded file digests.
#[derive(Parser, Debug)]
#[command(name = "hashgate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Digest algorithm (overrides the config file).
    #[arg(long, global = true)]
    algorithm: Option<HashAlgorithm>,

    /// Read buffer size in bytes (overrides the config file).
    #[arg(long, global = true)]
    chunk_size: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the digest of each file.
    Sum(SumArgs),

    /// Print the digest of each line of a file.
    Lines(LinesArgs),

    /// Compare the digests of two files.
    Compare(CompareArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match HashgateConfig::resolve(cli.config.as_deref(), cli.algorithm, cli.chunk_size)
    {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };
    tracing::debug!(algorithm = %config.algorithm, chunk_size = config.chunk_size, "resolved config");

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Sum(args) => run_sum(&args, &config, &mut stdout),
        Commands::Lines(args) => run_lines(&args, &config, &mut stdout),
        Commands::Compare(args) => run_compare(&args, &config, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
