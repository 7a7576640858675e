//! # hashgate-engine: Digest Engine
//!
//! Performs incremental digest computation behind lifecycle-guarded
//! handles and translates primitive failures into the stable
//! [`HasherError`](hashgate_core::HasherError) taxonomy.
//!
//! ## Handles
//!
//! - **`Hasher<S>`** (`typestate.rs`): `Reset → Working → Done` encoded in
//!   the type system. Out-of-order calls do not compile.
//!
//! - **`DynHasher`** (`handle.rs`): the same machine checked at runtime.
//!   Out-of-order calls, including any call after `destroy`, abort the
//!   process with a diagnostic naming the actual and expected states.
//!
//! - **Handle-style API** (`api.rs`): `create_hasher`, `update_hasher`,
//!   `finish_hasher`, `reset_hasher`, `destroy_hasher`, `hash_size`,
//!   `error_message` over `DynHasher`.
//!
//! ## Primitive
//!
//! `DigestPrimitive` (`primitive.rs`) is the only boundary to the
//! cryptographic transform. `AlgorithmContext` is the closed set of
//! compiled-in contexts; SHA-256 comes from the RustCrypto `sha2` crate.
//!
//! ## Crate Policy
//!
//! - Contexts are owned by exactly one handle and released exactly once,
//!   on `destroy` or on drop, whichever comes first.
//! - No global mutable state. Every failure is returned by value.
//! - No `unsafe` code.

pub mod api;
pub mod handle;
pub mod lines;
pub mod primitive;
pub mod typestate;

pub use handle::DynHasher;
pub use lines::{digest_lines, split_lines};
pub use primitive::{AlgorithmContext, DigestPrimitive, Sha256Primitive};
pub use typestate::{Done, HandleState, Hasher, Reset, Working};

pub use hashgate_core::{Digest, ErrorCode, HashAlgorithm, HasherError, HasherState};
pub use hashgate_guard::StateView;
