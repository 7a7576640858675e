//! # Common Handle Header
//!
//! The state-visible prefix shared by every concrete handle type.

use hashgate_core::{HashAlgorithm, HasherState};

/// The common header embedded first in every handle.
///
/// The algorithm is fixed at construction. The state is only changed
/// through [`HasherHeader::set_state`], which traces every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct HasherHeader {
    state: HasherState,
    algorithm: HashAlgorithm,
}

impl HasherHeader {
    /// A header for a freshly allocated handle, in `Uninitialized`.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            state: HasherState::Uninitialized,
            algorithm,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> HasherState {
        self.state
    }

    /// The algorithm fixed at creation.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Record a transition. Callers are responsible for having checked the
    /// source state.
    pub fn set_state(&mut self, next: HasherState) {
        tracing::trace!(
            algorithm = %self.algorithm,
            from = self.state.name(),
            to = next.name(),
            "hasher transition"
        );
        self.state = next;
    }
}

/// Read access to a handle's header without knowing its concrete type.
pub trait StateView {
    /// The embedded header.
    fn header(&self) -> &HasherHeader;

    /// Current lifecycle state.
    fn state(&self) -> HasherState {
        self.header().state()
    }

    /// The algorithm fixed at creation.
    fn algorithm(&self) -> HashAlgorithm {
        self.header().algorithm()
    }
}

impl StateView for HasherHeader {
    fn header(&self) -> &HasherHeader {
        self
    }
}
