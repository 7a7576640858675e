//! # Runtime-Guarded Hasher Handle
//!
//! `DynHasher` is the handle for callers whose call sequence is only known
//! at runtime. Every operation is gated by the lifecycle guard; a call in
//! the wrong state aborts the process with a diagnostic.
//!
//! ## Allowed Transitions
//!
//! | From | Operation | To |
//! |---|---|---|
//! | (none) | `create` | `Reset` |
//! | `Reset`, `Working` | `update` | `Working` |
//! | `Working` | `finish` | `Done` |
//! | `Done` | `reset` | `Reset` |
//! | `Reset`, `Working`, `Done` | `destroy` | `Destroyed` |
//!
//! Anything on a `Destroyed` handle is a guarded violation.
//!
//! For statically known sequences prefer [`crate::typestate::Hasher`],
//! which turns these violations into compile errors.

use std::mem::size_of;

use hashgate_core::{
    Digest, HashAlgorithm, HasherError, HasherState, LIVE_STATES, MAX_DIGEST_SIZE,
};
use hashgate_guard::{check_state, check_state_one_of, unexpected_state, HasherHeader, StateView};

use crate::primitive::{AlgorithmContext, DigestPrimitive};

/// States from which `update` is legal.
const UPDATABLE: &[HasherState] = &[HasherState::Reset, HasherState::Working];

/// A digest computation whose lifecycle is checked at runtime.
///
/// The header is laid out first so the state is readable through
/// [`StateView`] without knowing `P`.
#[derive(Debug)]
#[repr(C)]
pub struct DynHasher<P: DigestPrimitive = AlgorithmContext> {
    header: HasherHeader,
    context: Option<P>,
}

const _: () = assert!(size_of::<DynHasher>() >= size_of::<HasherHeader>());

impl DynHasher {
    /// Create a handle for `algorithm` using the compiled-in contexts.
    pub fn new(algorithm: HashAlgorithm) -> Result<Self, HasherError> {
        Self::create(algorithm)
    }

    /// Create a handle from a numeric algorithm id.
    pub fn from_id(algorithm_id: u32) -> Result<Self, HasherError> {
        Self::create(HashAlgorithm::from_id(algorithm_id)?)
    }
}

impl<P: DigestPrimitive> DynHasher<P> {
    /// Create a handle and drive it to `Reset`.
    ///
    /// On any failure the partially built context is dropped before the
    /// error is returned.
    pub fn create(algorithm: HashAlgorithm) -> Result<Self, HasherError> {
        let context = P::new_context(algorithm)?;
        let mut hasher = Self {
            header: HasherHeader::new(algorithm),
            context: Some(context),
        };
        hasher.reset_unchecked()?;
        tracing::debug!(%algorithm, "created hasher");
        Ok(hasher)
    }

    /// Digest length in bytes. Legal in every live state.
    pub fn digest_size(&self) -> usize {
        check_state_one_of(self, LIVE_STATES);
        self.header.algorithm().digest_size()
    }

    /// Start a fresh computation after `finish`.
    pub fn reset(&mut self) -> Result<(), HasherError> {
        check_state(self, HasherState::Done);
        self.reset_unchecked()
    }

    /// Feed `data` into the computation. Zero-length input is accepted.
    ///
    /// A primitive failure leaves the state unchanged.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HasherError> {
        check_state_one_of(self, UPDATABLE);
        self.live_context().absorb(data)?;
        if self.header.state() == HasherState::Reset {
            self.header.set_state(HasherState::Working);
        }
        tracing::trace!(len = data.len(), "absorbed input");
        Ok(())
    }

    /// Write the digest into the front of `out` and return its length.
    ///
    /// `out` must hold at least [`digest_size`](Self::digest_size) bytes.
    /// Requires at least one `update` since the last reset.
    pub fn finish(&mut self, out: &mut [u8]) -> Result<usize, HasherError> {
        check_state(self, HasherState::Working);
        let expected = self.live_context().output_size();
        assert!(
            expected <= MAX_DIGEST_SIZE,
            "primitive reports {expected}-byte digest, above the {MAX_DIGEST_SIZE}-byte maximum"
        );
        if out.len() < expected {
            return Err(HasherError::BufferTooSmall {
                needed: expected,
                available: out.len(),
            });
        }
        let written = self.live_context().finalize_into(&mut out[..expected])?;
        if written != expected {
            return Err(HasherError::Primitive(format!(
                "primitive wrote {written} bytes, expected {expected}"
            )));
        }
        self.header.set_state(HasherState::Done);
        Ok(written)
    }

    /// Finish into a freshly allocated [`Digest`].
    pub fn finish_vec(&mut self) -> Result<Digest, HasherError> {
        check_state(self, HasherState::Working);
        let size = self.digest_size();
        let mut bytes = Vec::new();
        bytes.try_reserve_exact(size)?;
        bytes.resize(size, 0);
        self.finish(&mut bytes)?;
        Ok(Digest::new(self.header.algorithm(), bytes))
    }

    /// Release the primitive context and move to `Destroyed`.
    ///
    /// Every later operation on this handle aborts.
    pub fn destroy(&mut self) {
        check_state_one_of(self, LIVE_STATES);
        drop(self.context.take());
        self.header.set_state(HasherState::Destroyed);
        tracing::debug!(algorithm = %self.header.algorithm(), "destroyed hasher");
    }

    /// Whether `destroy` has run.
    pub fn is_destroyed(&self) -> bool {
        self.header.state().is_terminal()
    }

    fn reset_unchecked(&mut self) -> Result<(), HasherError> {
        self.live_context().reinit()?;
        self.header.set_state(HasherState::Reset);
        Ok(())
    }

    fn live_context(&mut self) -> &mut P {
        match self.context.as_mut() {
            Some(context) => context,
            None => unexpected_state(&self.header, LIVE_STATES),
        }
    }
}

impl<P: DigestPrimitive> StateView for DynHasher<P> {
    fn header(&self) -> &HasherHeader {
        &self.header
    }
}

impl<P: DigestPrimitive> Drop for DynHasher<P> {
    fn drop(&mut self) {
        if self.context.take().is_some() {
            tracing::debug!(
                algorithm = %self.header.algorithm(),
                state = self.header.state().name(),
                "released hasher without destroy"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashgate_core::ErrorCode;

    const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    fn sha256() -> DynHasher {
        DynHasher::new(HashAlgorithm::Sha256).unwrap()
    }

    #[test]
    fn fresh_handle_is_reset() {
        let h = sha256();
        assert_eq!(h.state(), HasherState::Reset);
        assert_eq!(h.algorithm(), HashAlgorithm::Sha256);
        assert_eq!(h.digest_size(), 32);
    }

    #[test]
    fn first_update_moves_to_working() {
        let mut h = sha256();
        h.update(b"").unwrap();
        assert_eq!(h.state(), HasherState::Working);
        h.update(b"more").unwrap();
        assert_eq!(h.state(), HasherState::Working);
    }

    #[test]
    fn finish_empty_input() {
        let mut h = sha256();
        h.update(&[]).unwrap();
        let digest = h.finish_vec().unwrap();
        assert_eq!(digest.to_hex(), EMPTY_SHA256);
        assert_eq!(h.state(), HasherState::Done);
    }

    #[test]
    fn finish_into_slice_reports_length() {
        let mut h = sha256();
        h.update(b"abc").unwrap();
        let mut out = [0u8; MAX_DIGEST_SIZE];
        assert_eq!(h.finish(&mut out).unwrap(), 32);
        let hex: String = out.iter().map(|b| format!("{b:02x}")).collect();
        assert_eq!(hex, ABC_SHA256);
    }

    #[test]
    fn short_buffer_keeps_working_state() {
        let mut h = sha256();
        h.update(b"abc").unwrap();
        let mut out = [0u8; 8];
        let err = h.finish(&mut out).unwrap_err();
        assert_eq!(err.code(), ErrorCode::BufferTooSmall);
        assert_eq!(h.state(), HasherState::Working);
        assert_eq!(h.finish_vec().unwrap().to_hex(), ABC_SHA256);
    }

    #[test]
    fn reset_then_reuse() {
        let mut h = sha256();
        h.update(b"abc").unwrap();
        let first = h.finish_vec().unwrap();
        h.reset().unwrap();
        assert_eq!(h.state(), HasherState::Reset);
        assert_eq!(h.digest_size(), 32);
        h.update(b"abc").unwrap();
        assert_eq!(h.finish_vec().unwrap(), first);
    }

    #[test]
    fn destroy_from_every_live_state() {
        let mut reset = sha256();
        reset.destroy();
        assert!(reset.is_destroyed());

        let mut working = sha256();
        working.update(b"x").unwrap();
        working.destroy();
        assert_eq!(working.state(), HasherState::Destroyed);

        let mut done = sha256();
        done.update(b"x").unwrap();
        done.finish_vec().unwrap();
        done.destroy();
        assert_eq!(done.state(), HasherState::Destroyed);
    }

    #[test]
    fn from_id_rejects_unknown_algorithm() {
        let err = DynHasher::from_id(42).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownAlgorithm);
    }

    #[test]
    fn header_fits_inside_handle() {
        assert!(size_of::<DynHasher>() >= size_of::<HasherHeader>());
    }
}
