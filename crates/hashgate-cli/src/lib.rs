//! # hashgate-cli: hashgate Command-Line Interface
//!
//! Thin clap front end over the typestate hasher.
//!
//! ## Subcommands
//!
//! - `sum`: digest of each file, one hasher reused across files
//! - `lines`: digest of each line of a file
//! - `compare`: whether two files have the same digest
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from handlers.
//! - Handlers take the resolved [`HashgateConfig`] and an output sink, and
//!   return the process exit code.

pub mod compare;
pub mod config;
pub mod lines;
pub mod read;
pub mod sum;

pub use config::{ConfigError, HashgateConfig};
