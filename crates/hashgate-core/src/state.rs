//! # Hasher Lifecycle States
//!
//! ```text
//! Uninitialized ──(internal reset)──▶ Reset ──update()──▶ Working ──finish()──▶ Done
//!                                       ▲                   │  ▲                  │
//!                                       │                   └──┘ update()         │
//!                                       └──────────────────reset()────────────────┘
//!
//!                 Reset | Working | Done ──destroy()──▶ Destroyed
//! ```
//!
//! `Uninitialized` is transient: creation always completes the first reset
//! before a handle is returned, so callers never observe it.

use serde::{Deserialize, Serialize};

/// Label used for raw state values outside the enumeration.
const UNKNOWN_STATE: &str = "unknown";

/// The lifecycle state of a hasher handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum HasherState {
    /// Context allocated, primitive not yet initialized.
    Uninitialized = 0,
    /// Primitive initialized, no data absorbed since.
    Reset = 1,
    /// At least one update since the last reset.
    Working = 2,
    /// Digest produced; only `reset` or `destroy` are legal.
    Done = 3,
    /// Context released (terminal).
    Destroyed = 4,
}

/// States from which `destroy` (and any read-only query) is legal.
pub const LIVE_STATES: &[HasherState] =
    &[HasherState::Reset, HasherState::Working, HasherState::Done];

impl HasherState {
    /// Every state, in declaration order.
    pub const ALL: [HasherState; 5] = [
        Self::Uninitialized,
        Self::Reset,
        Self::Working,
        Self::Done,
        Self::Destroyed,
    ];

    /// Returns the human-readable label used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Reset => "reset",
            Self::Working => "working",
            Self::Done => "done",
            Self::Destroyed => "destroyed",
        }
    }

    /// The raw discriminant.
    pub fn as_raw(self) -> u8 {
        self as u8
    }

    /// Decode a raw discriminant. Returns `None` for values outside the set.
    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_raw() == raw)
    }

    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Destroyed)
    }
}

impl std::fmt::Display for HasherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Map a state to its diagnostic label.
pub fn state_name(state: HasherState) -> &'static str {
    state.name()
}

/// Map a raw state value to its diagnostic label, falling back to
/// `"unknown"` for values outside the enumeration.
pub fn state_name_raw(raw: u8) -> &'static str {
    HasherState::from_raw(raw).map_or(UNKNOWN_STATE, |s| s.name())
}
