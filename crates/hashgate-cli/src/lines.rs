//! # Lines Subcommand
//!
//! Prints `<line number>\t<hex>` for each line of a file. Line numbers
//! start at 1.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use hashgate_engine::{digest_lines, split_lines, Hasher};

use crate::config::HashgateConfig;

/// Arguments for the lines subcommand.
#[derive(Args, Debug)]
pub struct LinesArgs {
    /// File whose lines are digested.
    pub file: PathBuf,
}

/// Execute the lines subcommand.
pub fn run_lines<W: Write>(
    args: &LinesArgs,
    config: &HashgateConfig,
    out: &mut W,
) -> anyhow::Result<u8> {
    let content = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let hasher = Hasher::new(config.algorithm)?;
    let (hasher, digests) = digest_lines(hasher, split_lines(&content)).map_err(|(_, err)| err)?;
    for (index, digest) in digests.iter().enumerate() {
        writeln!(out, "{}\t{}", index + 1, digest.to_hex())?;
    }
    hasher.destroy();
    Ok(0)
}
