//! Bike-Share Network Library
//!
//! A Rust library for modelling a municipal bike-share network: stations that
//! track bike and dock occupancy, rentals and returns, compass directions
//! between stations, and network-wide rebalancing toward a uniform occupancy
//! ratio.
//!
//! This library provides tools for:
//! - Normalizing raw delimited station records into typed values
//! - Loading station files into an ordered, id-addressable repository
//! - Querying per-station and aggregate occupancy
//! - Renting and returning bikes under per-station eligibility rules
//! - Rebalancing bikes across the whole network

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod record_normalizer;
        pub mod station_repository;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{CompassDirection, Station, StationColumn, StationInfo};
pub use app::services::record_normalizer::FieldValue;
pub use app::services::station_repository::{LoadStats, RebalanceSummary, StationRepository};
pub use config::Config;

/// Result type alias for bike-share operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for bike-share network operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing error
    #[error("CSV parsing error in file '{file}': {message}")]
    CsvParsing {
        file: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// A station row could not be turned into a station
    #[error("Malformed station record on line {line}: {message}")]
    RecordFormat { line: u64, message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Station not found
    #[error("Station not found: id = {id}")]
    StationNotFound { id: i32 },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV parsing error with context
    pub fn csv_parsing(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<csv::Error>,
    ) -> Self {
        Self::CsvParsing {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a record format error for a given input line
    pub fn record_format(line: u64, message: impl Into<String>) -> Self {
        Self::RecordFormat {
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a station not found error
    pub fn station_not_found(id: i32) -> Self {
        Self::StationNotFound { id }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::CsvParsing {
            file: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}
