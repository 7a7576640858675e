//! # Streaming Reads
//!
//! Feeds a reader into a hasher in `chunk_size` pieces.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use hashgate_core::{Digest, HasherError};
use hashgate_engine::{Done, Hasher, Reset};

/// Digest everything `reader` yields.
///
/// The first chunk is always absorbed, even when empty, so an empty input
/// still produces the algorithm's empty-input digest.
pub fn digest_reader<R: Read>(
    hasher: Hasher<Reset>,
    mut reader: R,
    chunk_size: usize,
) -> anyhow::Result<(Hasher<Done>, Digest)> {
    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(chunk_size)
        .map_err(HasherError::from)
        .with_context(|| format!("failed to allocate a {chunk_size}-byte read buffer"))?;
    buf.resize(chunk_size, 0);

    let n = read_chunk(&mut reader, &mut buf)?;
    let mut hasher = hasher.update(&buf[..n]).map_err(|(_, err)| err)?;
    let mut total = n;
    loop {
        let n = read_chunk(&mut reader, &mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n])?;
        total += n;
    }
    let (done, digest) = hasher.finish().map_err(|(_, err)| err)?;
    tracing::debug!(bytes = total, "digested stream");
    Ok((done, digest))
}

/// Digest the file at `path`.
pub fn digest_file(
    hasher: Hasher<Reset>,
    path: &Path,
    chunk_size: usize,
) -> anyhow::Result<(Hasher<Done>, Digest)> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    digest_reader(hasher, file, chunk_size)
        .with_context(|| format!("failed to digest {}", path.display()))
}

fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    loop {
        match reader.read(buf) {
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            other => return other,
        }
    }
}
