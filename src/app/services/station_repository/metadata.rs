//! Station loading statistics
//!
//! Tracks how many rows a station file held, how many became stations and
//! why the rest were skipped.

use serde::Serialize;
use std::time::Duration;

/// Statistics about loading one station file
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadStats {
    /// Data rows read (header excluded)
    pub rows_read: usize,

    /// Stations added to the repository
    pub stations_loaded: usize,

    /// Rows that could not become stations
    pub rows_skipped: usize,

    /// Time taken to load the file
    #[serde(with = "duration_secs")]
    pub load_duration: Duration,

    /// One message per skipped row
    pub errors: Vec<String>,
}

impl LoadStats {
    /// Create new empty load statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a row that was skipped
    pub fn record_skip(&mut self, message: impl Into<String>) {
        self.rows_skipped += 1;
        self.errors.push(message.into());
    }

    /// Percentage of rows that were skipped
    pub fn skip_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.rows_skipped as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// Whether every row became a station
    pub fn is_clean(&self) -> bool {
        self.rows_skipped == 0
    }
}

mod duration_secs {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(duration.as_secs_f64())
    }
}
