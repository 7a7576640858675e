//! # CLI Configuration
//!
//! Settings come from three layers, later layers winning: built-in
//! defaults, an optional YAML file (`--config`), then command-line flags.
//!
//! ```yaml
//! algorithm: sha256
//! chunk_size: 65536
//! ```

use std::path::{Path, PathBuf};

use hashgate_core::HashAlgorithm;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default read buffer size for file hashing.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Largest accepted read buffer size.
pub const MAX_CHUNK_SIZE: usize = 256 * 1024 * 1024;

/// Errors while loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// The file that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The config file is not valid YAML for [`HashgateConfig`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// `chunk_size` must be positive.
    #[error("chunk_size must be greater than zero")]
    ZeroChunkSize,

    /// `chunk_size` exceeds [`MAX_CHUNK_SIZE`].
    #[error("chunk_size {0} exceeds the maximum of {MAX_CHUNK_SIZE} bytes")]
    ChunkSizeTooLarge(usize),
}

/// Resolved CLI settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HashgateConfig {
    /// Digest algorithm.
    pub algorithm: HashAlgorithm,
    /// Read buffer size in bytes.
    pub chunk_size: usize,
}

impl Default for HashgateConfig {
    fn default() -> Self {
        Self {
            algorithm: HashAlgorithm::Sha256,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl HashgateConfig {
    /// Parse a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config file");
        Self::from_yaml(&text)
    }

    /// Load `path` if given, otherwise start from defaults, then apply
    /// command-line overrides.
    pub fn resolve(
        path: Option<&Path>,
        algorithm: Option<HashAlgorithm>,
        chunk_size: Option<usize>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(algorithm) = algorithm {
            config.algorithm = algorithm;
        }
        if let Some(chunk_size) = chunk_size {
            config.chunk_size = chunk_size;
        }
        config.validate()?;
        Ok(config)
    }

    /// Check invariants the YAML schema cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chunk_size == 0 {
            return Err(ConfigError::ZeroChunkSize);
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::ChunkSizeTooLarge(self.chunk_size));
        }
        Ok(())
    }
}
