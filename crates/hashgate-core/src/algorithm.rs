//! # Digest Algorithms
//!
//! Defines `HashAlgorithm`, the closed set of digest algorithms compiled
//! into this build. Each variant fixes its numeric id (used by the
//! handle-style API) and its output length.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HasherError;

/// Largest output length, in bytes, of any compiled-in algorithm.
pub const MAX_DIGEST_SIZE: usize = 32;

/// A digest algorithm supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256: 256-bit digest, 32-byte output.
    Sha256,
}

// Every variant must fit the largest-digest buffer.
const _: () = {
    let mut i = 0;
    while i < HashAlgorithm::ALL.len() {
        assert!(HashAlgorithm::ALL[i].digest_size() <= MAX_DIGEST_SIZE);
        i += 1;
    }
};

impl HashAlgorithm {
    /// Every compiled-in algorithm.
    pub const ALL: [HashAlgorithm; 1] = [Self::Sha256];

    /// Returns the algorithm identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
        }
    }

    /// Stable numeric id used by the handle-style API.
    pub const fn id(&self) -> u32 {
        match self {
            Self::Sha256 => 0,
        }
    }

    /// Output length in bytes.
    pub const fn digest_size(&self) -> usize {
        match self {
            Self::Sha256 => 32,
        }
    }

    /// Resolve a numeric id.
    ///
    /// Ids that do not name a compiled-in algorithm yield
    /// [`HasherError::UnknownAlgorithm`].
    pub fn from_id(id: u32) -> Result<Self, HasherError> {
        Self::ALL
            .into_iter()
            .find(|alg| alg.id() == id)
            .ok_or_else(|| HasherError::UnknownAlgorithm {
                requested: format!("id {id}"),
            })
    }
}

impl FromStr for HashAlgorithm {
    type Err = HasherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "");
        Self::ALL
            .into_iter()
            .find(|alg| alg.as_str() == normalized)
            .ok_or_else(|| HasherError::UnknownAlgorithm {
                requested: s.to_string(),
            })
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn sha256_is_32_bytes() {
        assert_eq!(HashAlgorithm::Sha256.digest_size(), 32);
    }

    #[test]
    fn from_id_resolves_sha256() {
        assert_eq!(HashAlgorithm::from_id(0).unwrap(), HashAlgorithm::Sha256);
    }

    #[test]
    fn from_id_rejects_unknown() {
        let err = HashAlgorithm::from_id(7).unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownAlgorithm);
        assert!(err.to_string().contains("id 7"));
    }

    #[test]
    fn parse_accepts_common_spellings() {
        for s in ["sha256", "SHA256", "sha-256", " Sha-256 "] {
            assert_eq!(s.parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        }
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "md5".parse::<HashAlgorithm>().unwrap_err();
        assert_eq!(err.code(), ErrorCode::UnknownAlgorithm);
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(HashAlgorithm::Sha256.to_string(), "sha256");
    }

    #[test]
    fn serde_lowercase() {
        let json = serde_json::to_string(&HashAlgorithm::Sha256).unwrap();
        assert_eq!(json, "\"sha256\"");
    }

    #[test]
    fn every_algorithm_fits_max_digest_size() {
        for alg in HashAlgorithm::ALL {
            assert!(alg.digest_size() <= MAX_DIGEST_SIZE);
        }
    }
}
