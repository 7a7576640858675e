//! # Error Types: Stable Error-Code Taxonomy
//!
//! Resource and environment failures are returned as `HasherError` values.
//! Contract violations (wrong lifecycle state) never appear here: the guard
//! reports those by aborting.
//!
//! ## Design
//!
//! - Every variant maps to a stable numeric [`ErrorCode`]. The numbering
//!   is part of the public contract and never changes.
//! - [`error_message`] renders a fixed string for any integer code,
//!   including `0` ("no error") and codes outside the table.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by fallible digest operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HasherError {
    /// The underlying cryptographic primitive reported a failure.
    #[error("digest primitive failure: {0}")]
    Primitive(String),

    /// An allocation failed.
    #[error("out of memory: {0}")]
    OutOfMemory(String),

    /// The requested algorithm is not compiled in.
    #[error("unknown algorithm: {requested}")]
    UnknownAlgorithm {
        /// What the caller asked for (name or numeric id).
        requested: String,
    },

    /// The caller-supplied output buffer is shorter than the digest.
    #[error("output buffer too small: need {needed} bytes, got {available}")]
    BufferTooSmall {
        /// Digest length for the handle's algorithm.
        needed: usize,
        /// Length of the supplied buffer.
        available: usize,
    },
}

impl HasherError {
    /// The stable numeric code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Primitive(_) => ErrorCode::PrimitiveError,
            Self::OutOfMemory(_) => ErrorCode::OutOfMemory,
            Self::UnknownAlgorithm { .. } => ErrorCode::UnknownAlgorithm,
            Self::BufferTooSmall { .. } => ErrorCode::BufferTooSmall,
        }
    }
}

impl From<TryReserveError> for HasherError {
    fn from(err: TryReserveError) -> Self {
        Self::OutOfMemory(err.to_string())
    }
}

/// Stable numeric error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorCode {
    /// No error.
    None = 0,
    /// The cryptographic primitive reported failure.
    PrimitiveError = 1,
    /// Allocation failed.
    OutOfMemory = 2,
    /// Requested algorithm not compiled in.
    UnknownAlgorithm = 3,
    /// Output buffer shorter than the digest.
    BufferTooSmall = 4,
}

impl ErrorCode {
    const ALL: [ErrorCode; 5] = [
        Self::None,
        Self::PrimitiveError,
        Self::OutOfMemory,
        Self::UnknownAlgorithm,
        Self::BufferTooSmall,
    ];

    /// The raw integer value.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Decode a raw integer code.
    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_raw() == raw)
    }

    /// Fixed human-readable message.
    pub fn message(&self) -> &'static str {
        match self {
            Self::None => "no error",
            Self::PrimitiveError => "digest primitive reported a failure",
            Self::OutOfMemory => "out of memory",
            Self::UnknownAlgorithm => "unknown algorithm",
            Self::BufferTooSmall => "output buffer too small",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Return the stable message for a raw error code.
///
/// `0` means "no error"; codes outside the table render as
/// `"unknown error"`.
pub fn error_message(code: i32) -> &'static str {
    ErrorCode::from_raw(code).map_or("unknown error", |c| c.message())
}
