//! Command-line argument definitions for the bike-share CLI
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::StationColumn;
use crate::config::Config;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the bike-share network tool
///
/// Loads a station file and runs one query or operation against it.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bikeshare",
    version,
    about = "Query, rent from, return to and rebalance a bike-share station network",
    long_about = "Loads a bike-share station file (id,name,latitude,longitude,capacity,\
                  bikes_available,docks_available,is_renting,is_returning) and runs a single \
                  query or operation against it. Mutations apply to the in-memory network \
                  and are reported; the station file itself is never rewritten."
)]
pub struct Args {
    /// Station file to load
    #[arg(
        short = 's',
        long = "stations",
        value_name = "FILE",
        global = true,
        help = "Path to the station file (CSV with a header row)"
    )]
    pub stations_file: Option<PathBuf>,

    /// Path to configuration file
    ///
    /// JSON file with any of: longitude_epsilon, delimiter, has_header, strict.
    /// Command-line flags override values from the file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Field delimiter of the station file
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        global = true,
        help = "Field delimiter of the station file (default ',')"
    )]
    pub delimiter: Option<char>,

    /// Treat the first row of the station file as data
    #[arg(long = "no-header", global = true, help = "Station file has no header row")]
    pub no_header: bool,

    /// Fail on the first malformed station row
    #[arg(
        long = "strict",
        global = true,
        help = "Fail on the first malformed station row instead of skipping it"
    )]
    pub strict: bool,

    /// Longitude nudge for stations sharing a longitude
    #[arg(
        long = "longitude-epsilon",
        value_name = "DEGREES",
        global = true,
        help = "Nudge applied when two stations share a longitude"
    )]
    pub longitude_epsilon: Option<f64>,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress logging except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List every station with its occupancy
    List,
    /// Show name, bikes and docks of one station
    Info(StationArgs),
    /// Sum station columns across the network
    Totals(TotalsArgs),
    /// Show the station with the most bikes available
    MaxBikes,
    /// List stations with at least N docks available
    Docks(DocksArgs),
    /// Show the compass direction from one station to another
    Direction(DirectionArgs),
    /// Rent bikes from a station
    Rent(RentalArgs),
    /// Return bikes to a station
    Return(RentalArgs),
    /// Rebalance bikes across the whole network
    Rebalance,
}

/// A single station id
#[derive(Debug, Clone, Parser)]
pub struct StationArgs {
    /// Station id
    #[arg(value_name = "ID")]
    pub id: i32,
}

/// Arguments for the totals command
#[derive(Debug, Clone, Parser)]
pub struct TotalsArgs {
    /// Columns to total (comma-separated); defaults to bikes and docks
    #[arg(
        long = "column",
        value_name = "COLUMN",
        value_delimiter = ',',
        help = "Columns to total: id, capacity, bikes_available, docks_available"
    )]
    pub columns: Vec<StationColumn>,
}

/// Arguments for the docks command
#[derive(Debug, Clone, Parser)]
pub struct DocksArgs {
    /// Minimum number of docks available
    #[arg(value_name = "N")]
    pub min_docks: u32,
}

/// Arguments for the direction command
#[derive(Debug, Clone, Parser)]
pub struct DirectionArgs {
    /// Station to travel from
    #[arg(value_name = "START_ID")]
    pub start_id: i32,

    /// Station to travel to
    #[arg(value_name = "END_ID")]
    pub end_id: i32,
}

/// Arguments for rent and return
#[derive(Debug, Clone, Parser)]
pub struct RentalArgs {
    /// Station id
    #[arg(value_name = "ID")]
    pub id: i32,

    /// Number of bikes, one transaction each
    #[arg(short = 'n', long = "count", default_value_t = 1, value_name = "COUNT")]
    pub count: u32,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<()> {
        let Some(stations_file) = &self.stations_file else {
            return Err(Error::configuration(
                "No station file given; pass --stations <FILE>".to_string(),
            ));
        };

        if !stations_file.is_file() {
            return Err(Error::configuration(format!(
                "Station file does not exist: {}",
                stations_file.display()
            )));
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(delimiter) = self.delimiter {
            if !delimiter.is_ascii() {
                return Err(Error::configuration(format!(
                    "Delimiter must be a single ASCII character, got '{}'",
                    delimiter
                )));
            }
        }

        if let Some(Commands::Rent(rental) | Commands::Return(rental)) = &self.command {
            if rental.count == 0 {
                return Err(Error::configuration(
                    "Count must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Layer command-line flags over a base configuration
    pub fn apply_to_config(&self, mut config: Config) -> Config {
        if let Some(delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter as u8);
        }
        if self.no_header {
            config = config.without_header();
        }
        if self.strict {
            config = config.with_strict();
        }
        if let Some(epsilon) = self.longitude_epsilon {
            config = config.with_longitude_epsilon(epsilon);
        }
        config
    }

    /// Get logging level based on verbosity
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
