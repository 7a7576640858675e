//! # Typestate Hasher
//!
//! Encodes the hasher lifecycle in the type system. Each live state is a
//! distinct type and transitions consume the current handle, so calling an
//! operation in the wrong state is a compile error rather than an abort.
//!
//! ## States
//!
//! - `Reset` → primitive initialized, no input since the last reset.
//! - `Working` → at least one update absorbed.
//! - `Done` → digest produced; only `reset` and `destroy` remain.
//!
//! ## Allowed Transitions
//!
//! ```text
//! new() ──▶ Reset ──update()──▶ Working ──finish()──▶ Done
//!             ▲                  │  ▲                  │
//!             │                  └──┘ update()         │
//!             └──────────────────reset()───────────────┘
//! ```
//!
//! `destroy()` is available on every state and consumes the handle, so
//! there is no way to name a destroyed hasher.
//!
//! A transition that fails hands the handle back, still in its prior
//! state, next to the error.
//!
//! ## Compile-Time Safety Example
//!
//! The following code will NOT compile because `Hasher<Reset>` has no
//! `.finish()` method. At least one update must come first.
//!
//! ```compile_fail
//! use hashgate_core::HashAlgorithm;
//! use hashgate_engine::typestate::Hasher;
//!
//! let hasher = Hasher::new(HashAlgorithm::Sha256).unwrap();
//! // ERROR: no method named `finish` found for `Hasher<Reset>`
//! let _ = hasher.finish();
//! ```

use std::marker::PhantomData;

use hashgate_core::{Digest, HashAlgorithm, HasherError, HasherState};
use hashgate_guard::StateView;

use crate::handle::DynHasher;
use crate::primitive::{AlgorithmContext, DigestPrimitive};

// ─── State Types ─────────────────────────────────────────────────────

/// Hasher state: initialized, nothing absorbed.
#[derive(Debug, Clone, Copy)]
pub struct Reset;

/// Hasher state: absorbing input.
#[derive(Debug, Clone, Copy)]
pub struct Working;

/// Hasher state: digest produced.
#[derive(Debug, Clone, Copy)]
pub struct Done;

// ─── Sealed Trait ────────────────────────────────────────────────────

mod private {
    pub trait Sealed {}
    impl Sealed for super::Reset {}
    impl Sealed for super::Working {}
    impl Sealed for super::Done {}
}

/// Marker trait for the live hasher states.
///
/// Sealed: only the three states defined in this module implement it.
pub trait HandleState: private::Sealed + std::fmt::Debug {
    /// The runtime state this type stands for.
    const STATE: HasherState;

    /// The diagnostic label of this state.
    fn name() -> &'static str {
        Self::STATE.name()
    }
}

impl HandleState for Reset {
    const STATE: HasherState = HasherState::Reset;
}
impl HandleState for Working {
    const STATE: HasherState = HasherState::Working;
}
impl HandleState for Done {
    const STATE: HasherState = HasherState::Done;
}

// ─── The Hasher ──────────────────────────────────────────────────────

/// A digest computation parameterized by its lifecycle state.
///
/// Wraps a [`DynHasher`] whose runtime state always equals `S::STATE`, so
/// the runtime guard never fires through this API.
#[derive(Debug)]
pub struct Hasher<S: HandleState, P: DigestPrimitive = AlgorithmContext> {
    inner: DynHasher<P>,
    _state: PhantomData<S>,
}

impl<S: HandleState, P: DigestPrimitive> Hasher<S, P> {
    /// Returns the state label (e.g. "reset", "working").
    pub fn state_name(&self) -> &'static str {
        S::name()
    }

    /// The algorithm fixed at creation.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.inner.algorithm()
    }

    /// Digest length in bytes.
    pub fn digest_size(&self) -> usize {
        self.inner.digest_size()
    }

    /// Release the primitive context. Consumes the handle.
    pub fn destroy(self) {
        let mut inner = self.inner;
        inner.destroy();
    }

    /// Hand the handle over to runtime-checked code.
    pub fn into_dyn(self) -> DynHasher<P> {
        self.inner
    }

    fn transition_to<T: HandleState>(self) -> Hasher<T, P> {
        debug_assert_eq!(self.inner.state(), T::STATE);
        Hasher {
            inner: self.inner,
            _state: PhantomData,
        }
    }
}

impl<S: HandleState, P: DigestPrimitive> StateView for Hasher<S, P> {
    fn header(&self) -> &hashgate_guard::HasherHeader {
        self.inner.header()
    }
}

// ─── State-Specific Impl Blocks ─────────────────────────────────────

impl Hasher<Reset> {
    /// Create a hasher for `algorithm` using the compiled-in contexts.
    pub fn new(algorithm: HashAlgorithm) -> Result<Self, HasherError> {
        Self::create(algorithm)
    }
}

impl<P: DigestPrimitive> Hasher<Reset, P> {
    /// Create a hasher over primitive `P`, ready for its first update.
    pub fn create(algorithm: HashAlgorithm) -> Result<Self, HasherError> {
        Ok(Self {
            inner: DynHasher::create(algorithm)?,
            _state: PhantomData,
        })
    }

    /// Absorb the first chunk of input (RESET → WORKING).
    ///
    /// On a primitive failure the handle comes back still in `Reset`.
    pub fn update(mut self, data: &[u8]) -> Result<Hasher<Working, P>, (Self, HasherError)> {
        match self.inner.update(data) {
            Ok(()) => Ok(self.transition_to()),
            Err(err) => Err((self, err)),
        }
    }
}

impl<P: DigestPrimitive> Hasher<Working, P> {
    /// Absorb more input.
    pub fn update(&mut self, data: &[u8]) -> Result<(), HasherError> {
        self.inner.update(data)
    }

    /// Produce the digest (WORKING → DONE).
    ///
    /// On failure the handle comes back still in `Working`.
    pub fn finish(mut self) -> Result<(Hasher<Done, P>, Digest), (Self, HasherError)> {
        match self.inner.finish_vec() {
            Ok(digest) => Ok((self.transition_to(), digest)),
            Err(err) => Err((self, err)),
        }
    }

    /// Write the digest into `out` (WORKING → DONE).
    ///
    /// A short buffer is reported without consuming the computation.
    pub fn finish_into(
        mut self,
        out: &mut [u8],
    ) -> Result<(Hasher<Done, P>, usize), (Self, HasherError)> {
        match self.inner.finish(out) {
            Ok(written) => Ok((self.transition_to(), written)),
            Err(err) => Err((self, err)),
        }
    }
}

impl<P: DigestPrimitive> Hasher<Done, P> {
    /// Start a fresh computation (DONE → RESET).
    ///
    /// On failure the handle comes back still in `Done`.
    pub fn reset(mut self) -> Result<Hasher<Reset, P>, (Self, HasherError)> {
        match self.inner.reset() {
            Ok(()) => Ok(self.transition_to()),
            Err(err) => Err((self, err)),
        }
    }
}

/// Recover a typed handle from a runtime-checked one.
///
/// Returns the handle unchanged if its state is not `S`.
impl<S: HandleState, P: DigestPrimitive> TryFrom<DynHasher<P>> for Hasher<S, P> {
    type Error = DynHasher<P>;

    fn try_from(inner: DynHasher<P>) -> Result<Self, Self::Error> {
        if inner.state() == S::STATE {
            Ok(Self {
                inner,
                _state: PhantomData,
            })
        } else {
            Err(inner)
        }
    }
}

impl<S: HandleState, P: DigestPrimitive> From<Hasher<S, P>> for DynHasher<P> {
    fn from(hasher: Hasher<S, P>) -> Self {
        hasher.into_dyn()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
