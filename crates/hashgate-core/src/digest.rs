//! # Digest Values
//!
//! `Digest` is the owned output of a finished computation: the raw bytes
//! plus the algorithm that produced them, so a digest is self-describing.

use serde::{Deserialize, Serialize};

use crate::algorithm::HashAlgorithm;

/// A finished digest with its algorithm tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Digest {
    /// The algorithm that produced this digest.
    pub algorithm: HashAlgorithm,
    bytes: Vec<u8>,
}

impl Digest {
    /// Wrap raw digest bytes.
    pub fn new(algorithm: HashAlgorithm, bytes: Vec<u8>) -> Self {
        Self { algorithm, bytes }
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.algorithm, self.to_hex())
    }
}
