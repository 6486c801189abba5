//! Configuration management and validation.
//!
//! Provides the settings that shape how station files are read and how
//! direction queries treat degenerate coordinates.

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_HAS_HEADER, DEFAULT_LONGITUDE_EPSILON};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Network configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Nudge added to the start longitude when two stations share a longitude
    pub longitude_epsilon: f64,

    /// Field delimiter of station files
    pub delimiter: u8,

    /// Whether the first row of a station file is a header to discard
    pub has_header: bool,

    /// Fail the whole load on the first malformed row instead of skipping it
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            longitude_epsilon: DEFAULT_LONGITUDE_EPSILON,
            delimiter: DEFAULT_DELIMITER,
            has_header: DEFAULT_HAS_HEADER,
            strict: false,
        }
    }
}

impl Config {
    /// Set the longitude nudge used by direction queries
    pub fn with_longitude_epsilon(mut self, epsilon: f64) -> Self {
        self.longitude_epsilon = epsilon;
        self
    }

    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Treat the first row as data rather than a header
    pub fn without_header(mut self) -> Self {
        self.has_header = false;
        self
    }

    /// Enable strict loading
    pub fn with_strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Read a JSON configuration file; missing keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        let config: Config = serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !self.longitude_epsilon.is_finite() || self.longitude_epsilon == 0.0 {
            return Err(Error::configuration(format!(
                "Longitude epsilon must be a finite non-zero value, got {}",
                self.longitude_epsilon
            )));
        }

        if self.delimiter == b'"' || self.delimiter == b'\n' || self.delimiter == b'\r' {
            return Err(Error::configuration(format!(
                "Delimiter {:?} cannot be used as a field separator",
                self.delimiter as char
            )));
        }

        Ok(())
    }
}
