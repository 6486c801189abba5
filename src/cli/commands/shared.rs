//! Shared components for CLI commands
//!
//! Logging setup, configuration layering, network loading and the output
//! renderers used by every command.

use crate::app::models::Station;
use crate::app::services::station_repository::{LoadStats, StationRepository};
use crate::cli::args::{Args, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Set up structured logging
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bikeshare={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Build the configuration: defaults, then the config file, then flags
pub fn load_configuration(args: &Args) -> Result<Config> {
    let base = match &args.config_file {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };

    let config = args.apply_to_config(base);
    config.validate()?;
    Ok(config)
}

/// Load the station file named on the command line
pub async fn load_network(args: &Args, config: &Config) -> Result<(StationRepository, LoadStats)> {
    let path = args
        .stations_file
        .as_deref()
        .ok_or_else(|| Error::configuration("No station file given".to_string()))?;

    info!("Loading stations from {}", path.display());
    let (repository, stats) = StationRepository::load_from_path(path, config).await?;

    if !stats.is_clean() {
        warn!(
            "{} of {} rows skipped ({:.1}%)",
            stats.rows_skipped,
            stats.rows_read,
            stats.skip_rate()
        );
    }

    if repository.is_empty() {
        warn!("Station file {} contains no usable stations", path.display());
    }

    Ok((repository, stats))
}

// =============================================================================
// Rendering
// =============================================================================

/// Render a single record in the requested format
pub fn render_record<T: Serialize>(
    format: OutputFormat,
    record: &T,
    human: impl FnOnce() -> String,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human()),
        OutputFormat::Json => to_json(record),
        OutputFormat::Csv => to_csv(std::slice::from_ref(record)),
    }
}

/// Render a list of flat rows in the requested format
pub fn render_rows<T: Serialize>(
    format: OutputFormat,
    rows: &[T],
    human: impl FnOnce() -> String,
) -> Result<String> {
    match format {
        OutputFormat::Human => Ok(human()),
        OutputFormat::Json => to_json(&rows),
        OutputFormat::Csv => to_csv(rows),
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| Error::data_validation(format!("Failed to serialize JSON output: {}", e)))
}

pub fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(|e| {
            Error::csv_parsing("<stdout>", "Failed to write CSV row".to_string(), Some(e))
        })?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::io("Failed to flush CSV output", e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| Error::data_validation(format!("CSV output is not UTF-8: {}", e)))
}

/// Human-readable station table
pub fn station_table<'a>(stations: impl IntoIterator<Item = &'a Station>) -> String {
    let mut lines = vec![format!(
        "{:>6}  {:<36} {:>6} {:>6}  {}",
        "ID".bold(),
        "NAME".bold(),
        "BIKES".bold(),
        "DOCKS".bold(),
        "STATUS".bold()
    )];

    for station in stations {
        lines.push(format!(
            "{:>6}  {:<36} {:>6} {:>6}  {}",
            station.id,
            station.name,
            station.bikes_available,
            station.docks_available,
            status_label(station)
        ));
    }

    lines.join("\n")
}

/// Short description of a station's rent/return flags
pub fn status_label(station: &Station) -> ColoredString {
    match (station.is_renting, station.is_returning) {
        (true, true) => "open".bright_green(),
        (true, false) => "rent only".yellow(),
        (false, true) => "return only".yellow(),
        (false, false) => "closed".bright_red(),
    }
}
