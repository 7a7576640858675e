//! # Sum Subcommand
//!
//! Prints `<hex>  <path>` for each file, reusing one hasher across files.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use hashgate_engine::Hasher;

use crate::config::HashgateConfig;
use crate::read::digest_file;

/// Arguments for the sum subcommand.
#[derive(Args, Debug)]
pub struct SumArgs {
    /// Files to digest.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Prefix each digest with its algorithm (`sha256:<hex>`).
    #[arg(long)]
    pub tagged: bool,
}

/// Execute the sum subcommand.
pub fn run_sum<W: Write>(
    args: &SumArgs,
    config: &HashgateConfig,
    out: &mut W,
) -> anyhow::Result<u8> {
    let mut hasher = Hasher::new(config.algorithm)?;
    for path in &args.files {
        let (done, digest) = digest_file(hasher, path, config.chunk_size)?;
        if args.tagged {
            writeln!(out, "{digest}  {}", path.display())?;
        } else {
            writeln!(out, "{}  {}", digest.to_hex(), path.display())?;
        }
        hasher = done.reset().map_err(|(_, err)| err)?;
    }
    hasher.destroy();
    Ok(0)
}
