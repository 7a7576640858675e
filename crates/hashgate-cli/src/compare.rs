//! # Compare Subcommand
//!
//! Exits 0 when both files have the same digest, 1 otherwise.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use hashgate_engine::Hasher;

use crate::config::HashgateConfig;
use crate::read::digest_file;

/// Arguments for the compare subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First file.
    pub left: PathBuf,
    /// Second file.
    pub right: PathBuf,
}

/// Execute the compare subcommand.
pub fn run_compare<W: Write>(
    args: &CompareArgs,
    config: &HashgateConfig,
    out: &mut W,
) -> anyhow::Result<u8> {
    let hasher = Hasher::new(config.algorithm)?;
    let (done, left) = digest_file(hasher, &args.left, config.chunk_size)?;
    let (done, right) = digest_file(done.reset().map_err(|(_, err)| err)?, &args.right, config.chunk_size)?;
    done.destroy();

    if left == right {
        writeln!(out, "identical  {left}")?;
        Ok(0)
    } else {
        tracing::info!(left = %args.left.display(), right = %args.right.display(), "digests differ");
        writeln!(out, "{}  {}", left.to_hex(), args.left.display())?;
        writeln!(out, "{}  {}", right.to_hex(), args.right.display())?;
        Ok(1)
    }
}
