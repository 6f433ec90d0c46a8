// crates/testbench-server/src/config.rs
// ============================================================================
// Module: Server Configuration
// Description: Configuration loading and validation for the demo service.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits. An
//! explicit path wins over the `TESTBENCH_CONFIG` environment variable; when
//! neither names a file, built-in defaults apply. Invalid configuration fails
//! closed rather than starting a misconfigured server.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "TESTBENCH_CONFIG";
/// Maximum configuration file size in bytes.
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;
/// Maximum accepted request body size in bytes.
const MAX_BODY_BYTES_CEILING: usize = 1024 * 1024;
/// Maximum length of the greeting fallback name.
const MAX_DEFAULT_NAME_LENGTH: usize = 64;

/// Default bind address for the demo service.
fn default_bind() -> String {
    "127.0.0.1:3000".to_owned()
}

/// Default maximum request body size.
const fn default_max_body_bytes() -> usize {
    16 * 1024
}

/// Default greeting fallback name.
fn default_name() -> String {
    "Guest".to_owned()
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Demo service configuration.
///
/// # Invariants
/// - `validate` has accepted every field before a server is built from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Socket address the server binds to.
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Maximum accepted request body size in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Greeting fallback used when no name is supplied.
    #[serde(default = "default_name")]
    pub default_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            max_body_bytes: default_max_body_bytes(),
            default_name: default_name(),
        }
    }
}

impl ServerConfig {
    /// Loads configuration from the given path, the `TESTBENCH_CONFIG`
    /// environment variable, or built-in defaults, in that order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a named file is unreadable, oversized,
    /// malformed, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved: Option<PathBuf> = match path {
            Some(explicit) => Some(explicit.to_path_buf()),
            None => env::var_os(CONFIG_ENV_VAR).map(PathBuf::from),
        };
        let config = match resolved {
            Some(file) => Self::from_file(&file)?,
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file with a size ceiling.
    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let metadata = fs::metadata(path)
            .map_err(|err| ConfigError::Read(path.display().to_string(), err.to_string()))?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::TooLarge(path.display().to_string()));
        }
        let raw = fs::read_to_string(path)
            .map_err(|err| ConfigError::Read(path.display().to_string(), err.to_string()))?;
        toml::from_str(&raw)
            .map_err(|err| ConfigError::Parse(path.display().to_string(), err.to_string()))
    }

    /// Validates field ranges; rejects anything the server must not run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "bind is not a socket address: {}",
                self.bind
            )));
        }
        if self.max_body_bytes == 0 || self.max_body_bytes > MAX_BODY_BYTES_CEILING {
            return Err(ConfigError::Invalid(format!(
                "max_body_bytes must be within 1..={MAX_BODY_BYTES_CEILING}"
            )));
        }
        if self.default_name.is_empty() || self.default_name.len() > MAX_DEFAULT_NAME_LENGTH {
            return Err(ConfigError::Invalid(format!(
                "default_name must be non-empty and at most {MAX_DEFAULT_NAME_LENGTH} bytes"
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("config read failed for {0}: {1}")]
    Read(String, String),
    /// The config file exceeds the size ceiling.
    #[error("config file too large: {0}")]
    TooLarge(String),
    /// The config file is not valid TOML for this schema.
    #[error("config parse failed for {0}: {1}")]
    Parse(String, String),
    /// A field value is out of range.
    #[error("invalid config: {0}")]
    Invalid(String),
}
