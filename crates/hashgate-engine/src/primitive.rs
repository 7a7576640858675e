//! # Digest Primitive Seam
//!
//! `DigestPrimitive` is the boundary to the external cryptographic
//! transform: create a context, reinitialize it, absorb bytes, finalize to
//! N bytes. The engine never sees anything else of the primitive.
//!
//! `AlgorithmContext` is the closed set of compiled-in contexts, one variant
//! per [`HashAlgorithm`]. Adding an algorithm means adding a variant here and
//! in `HashAlgorithm`; the handle's shape does not change.

use hashgate_core::{HashAlgorithm, HasherError};
use sha2::{Digest as _, Sha256};

/// An incremental digest context.
pub trait DigestPrimitive: Send + std::fmt::Debug {
    /// Allocate a context for `algorithm`.
    fn new_context(algorithm: HashAlgorithm) -> Result<Self, HasherError>
    where
        Self: Sized;

    /// The algorithm this context computes.
    fn algorithm(&self) -> HashAlgorithm;

    /// Digest length in bytes.
    fn output_size(&self) -> usize;

    /// Discard absorbed input and start a fresh computation.
    fn reinit(&mut self) -> Result<(), HasherError>;

    /// Feed bytes into the computation.
    fn absorb(&mut self, data: &[u8]) -> Result<(), HasherError>;

    /// Write the digest into the front of `out` and return the number of
    /// bytes written.
    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, HasherError>;
}

/// SHA-256 over the RustCrypto `sha2` implementation.
#[derive(Debug, Clone, Default)]
pub struct Sha256Primitive {
    inner: Sha256,
}

impl DigestPrimitive for Sha256Primitive {
    fn new_context(algorithm: HashAlgorithm) -> Result<Self, HasherError> {
        match algorithm {
            HashAlgorithm::Sha256 => Ok(Self::default()),
        }
    }

    fn algorithm(&self) -> HashAlgorithm {
        HashAlgorithm::Sha256
    }

    fn output_size(&self) -> usize {
        <Sha256 as sha2::Digest>::output_size()
    }

    fn reinit(&mut self) -> Result<(), HasherError> {
        self.inner.reset();
        Ok(())
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), HasherError> {
        self.inner.update(data);
        Ok(())
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, HasherError> {
        let size = self.output_size();
        let Some(dest) = out.get_mut(..size) else {
            return Err(HasherError::BufferTooSmall {
                needed: size,
                available: out.len(),
            });
        };
        dest.copy_from_slice(&self.inner.finalize_reset());
        Ok(size)
    }
}

/// One context per compiled-in algorithm.
#[derive(Debug, Clone)]
pub enum AlgorithmContext {
    /// SHA-256 context.
    Sha256(Sha256Primitive),
}

impl DigestPrimitive for AlgorithmContext {
    fn new_context(algorithm: HashAlgorithm) -> Result<Self, HasherError> {
        match algorithm {
            HashAlgorithm::Sha256 => Sha256Primitive::new_context(algorithm).map(Self::Sha256),
        }
    }

    fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::Sha256(ctx) => ctx.algorithm(),
        }
    }

    fn output_size(&self) -> usize {
        match self {
            Self::Sha256(ctx) => ctx.output_size(),
        }
    }

    fn reinit(&mut self) -> Result<(), HasherError> {
        match self {
            Self::Sha256(ctx) => ctx.reinit(),
        }
    }

    fn absorb(&mut self, data: &[u8]) -> Result<(), HasherError> {
        match self {
            Self::Sha256(ctx) => ctx.absorb(data),
        }
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<usize, HasherError> {
        match self {
            Self::Sha256(ctx) => ctx.finalize_into(out),
        }
    }
}
