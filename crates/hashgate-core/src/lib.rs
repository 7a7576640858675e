//! # hashgate-core: Foundational Types for hashgate
//!
//! Defines the vocabulary shared by the lifecycle guard and the digest
//! engine. Every other crate in the workspace depends on `hashgate-core`;
//! it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One closed `HasherState` enum.** The five lifecycle states are a
//!    closed set with stable labels. Raw values outside the set render as
//!    `"unknown"` so diagnostics never fail on corrupted input.
//!
//! 2. **Algorithms are an enum, not strings.** `HashAlgorithm` carries its
//!    numeric id and output size. Requests for anything not compiled in
//!    surface as `HasherError::UnknownAlgorithm`.
//!
//! 3. **Errors are values.** `HasherError` is returned by every fallible
//!    operation. Each variant maps to a stable numeric `ErrorCode` so callers
//!    that speak in integer codes can still render `error_message(code)`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `hashgate-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod algorithm;
pub mod digest;
pub mod error;
pub mod state;

// Re-export primary types for ergonomic imports.
pub use algorithm::{HashAlgorithm, MAX_DIGEST_SIZE};
pub use digest::Digest;
pub use error::{error_message, ErrorCode, HasherError};
pub use state::{state_name, state_name_raw, HasherState, LIVE_STATES};
