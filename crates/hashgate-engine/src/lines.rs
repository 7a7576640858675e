//! # Line Digests
//!
//! Digests a sequence of lines with a single reused hasher, so that
//! sequence comparison (e.g. a diff) can compare fixed 32-byte digests
//! instead of arbitrary-length lines.

use hashgate_core::{Digest, HasherError};

use crate::handle::DynHasher;
use crate::primitive::DigestPrimitive;
use crate::typestate::{HandleState, Hasher, Reset};

/// Digest each item of `lines`, reusing `hasher` between items.
///
/// Returns the hasher in `Reset` so the caller can keep using it. On
/// failure the handle is returned as a [`DynHasher`] in whatever state the
/// failing step left it, alongside the error.
pub fn digest_lines<P, I, L>(
    hasher: Hasher<Reset, P>,
    lines: I,
) -> Result<(Hasher<Reset, P>, Vec<Digest>), (DynHasher<P>, HasherError)>
where
    P: DigestPrimitive,
    I: IntoIterator<Item = L>,
    L: AsRef<[u8]>,
{
    let lines = lines.into_iter();
    let mut digests = Vec::new();
    if let Err(err) = digests.try_reserve(lines.size_hint().0) {
        return Err((hasher.into_dyn(), err.into()));
    }

    let mut hasher = hasher;
    for line in lines {
        let working = hasher.update(line.as_ref()).map_err(into_dyn)?;
        let (done, digest) = working.finish().map_err(into_dyn)?;
        digests.push(digest);
        hasher = done.reset().map_err(into_dyn)?;
    }
    tracing::debug!(count = digests.len(), "digested lines");
    Ok((hasher, digests))
}

fn into_dyn<S, P>((hasher, err): (Hasher<S, P>, HasherError)) -> (DynHasher<P>, HasherError)
where
    S: HandleState,
    P: DigestPrimitive,
{
    (hasher.into_dyn(), err)
}

/// Split `content` on `\n`, dropping the empty piece after a trailing
/// newline.
pub fn split_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    let empty = content.is_empty();
    body.split(|&b| b == b'\n').filter(move |_| !empty)
}
