//! # Handle-Style API
//!
//! Free functions in the shape of a manual-lifetime handle API: create a
//! handle, feed it, finish it, reset it, destroy it. Failures come back as
//! `Result<_, HasherError>` values; callers that speak in integer codes
//! use [`HasherError::code`] and [`error_message`].
//!
//! Lifecycle violations are not errors here. They abort, exactly as the
//! methods on [`DynHasher`] do.

use hashgate_core::{HashAlgorithm, HasherError};

use crate::handle::DynHasher;

pub use hashgate_core::error_message;

/// Create a handle for the algorithm with numeric id `algorithm_id`.
///
/// Unknown ids yield [`HasherError::UnknownAlgorithm`] and no handle.
pub fn create_hasher(algorithm_id: u32) -> Result<DynHasher, HasherError> {
    let algorithm = HashAlgorithm::from_id(algorithm_id)?;
    DynHasher::new(algorithm)
}

/// Digest length in bytes for the handle's algorithm.
pub fn hash_size(hasher: &DynHasher) -> usize {
    hasher.digest_size()
}

/// Reset a finished handle for reuse.
pub fn reset_hasher(hasher: &mut DynHasher) -> Result<(), HasherError> {
    hasher.reset()
}

/// Feed `data` into the handle.
pub fn update_hasher(hasher: &mut DynHasher, data: &[u8]) -> Result<(), HasherError> {
    hasher.update(data)
}

/// Finish the computation into `out`, storing the digest length in `size`
/// when one is supplied.
pub fn finish_hasher(
    hasher: &mut DynHasher,
    out: &mut [u8],
    size: Option<&mut usize>,
) -> Result<(), HasherError> {
    let written = hasher.finish(out)?;
    if let Some(size) = size {
        *size = written;
    }
    Ok(())
}

/// Release the handle's context. Any later call on `hasher` aborts.
pub fn destroy_hasher(hasher: &mut DynHasher) -> Result<(), HasherError> {
    hasher.destroy();
    Ok(())
}
