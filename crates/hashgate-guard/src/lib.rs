//! # hashgate-guard: Lifecycle Guard
//!
//! Enforces that every hasher operation runs only in a state that accepts
//! it. A violation is a defect in the caller, not a runtime condition, so
//! the guard does not return an error: it prints a diagnostic naming the
//! actual and acceptable states, then aborts the process.
//!
//! ## Pieces
//!
//! - **Header** (`header.rs`): `HasherHeader` holds the state and algorithm.
//!   Every concrete handle embeds one and exposes it through `StateView`, so
//!   diagnostics never need the algorithm-specific layout.
//!
//! - **Checks** (`check.rs`): `check_state`, `check_state_one_of`, and the
//!   fatal path `unexpected_state`, plus the line writer behind it.

pub mod check;
pub mod header;

pub use check::{
    check_state, check_state_one_of, join_state_names, unexpected_state, write_violation,
};
pub use header::{HasherHeader, StateView};
