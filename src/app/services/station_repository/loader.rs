//! Station file loading
//!
//! A station file is delimited text: one header row, then one station per
//! row in the column order of [`crate::constants::columns::ALL`]. Each row
//! goes through the record normalizer and is coerced into a [`Station`].

use super::{LoadStats, StationRepository};
use crate::app::models::Station;
use crate::app::services::record_normalizer::normalize_record;
use crate::config::Config;
use crate::constants::NAME_INDEX;
use crate::{Error, Result};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

impl StationRepository {
    /// Load stations from a file on disk
    pub async fn load_from_path(path: &Path, config: &Config) -> Result<(Self, LoadStats)> {
        debug!("Loading station file: {}", path.display());

        let bytes = tokio::fs::read(path).await.map_err(|e| {
            Error::io(format!("Failed to read station file {}", path.display()), e)
        })?;

        let (repository, stats) = Self::load_from_reader(bytes.as_slice(), config)
            .map_err(|e| match e {
                Error::CsvParsing {
                    message, source, ..
                } => Error::csv_parsing(path.to_string_lossy().to_string(), message, source),
                other => other,
            })?;

        info!(
            "Loaded {} stations from {} ({} rows skipped) in {:.3}s",
            stats.stations_loaded,
            path.display(),
            stats.rows_skipped,
            stats.load_duration.as_secs_f64()
        );

        Ok((repository, stats))
    }

    /// Load stations from any reader
    ///
    /// Malformed rows and duplicate ids are skipped and recorded in the
    /// returned [`LoadStats`], unless `config.strict` is set, in which case
    /// the first one fails the load.
    pub fn load_from_reader<R: Read>(reader: R, config: &Config) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(config.has_header)
            .delimiter(config.delimiter)
            .flexible(true)
            .from_reader(reader);

        let mut repository = StationRepository::new();
        let mut stats = LoadStats::new();
        let mut record = StringRecord::new();

        while reader.read_record(&mut record).map_err(|e| {
            Error::csv_parsing(
                "<reader>".to_string(),
                "Failed to read station record".to_string(),
                Some(e),
            )
        })? {
            let line = record
                .position()
                .map(|position| position.line())
                .unwrap_or(stats.rows_read as u64 + 1);

            if record.iter().all(|field| field.trim().is_empty()) {
                debug!("Skipping blank row on line {}", line);
                continue;
            }
            stats.rows_read += 1;

            let outcome = parse_station_record(&record).and_then(|station| {
                let id = station.id;
                repository.add_station(station).map(|_| id)
            });

            match outcome {
                Ok(id) => {
                    stats.stations_loaded += 1;
                    debug!("Loaded station {} from line {}", id, line);
                }
                Err(e) => {
                    let message = e.to_string();
                    if config.strict {
                        return Err(Error::record_format(line, message));
                    }
                    warn!("Skipping line {}: {}", line, message);
                    stats.record_skip(format!("line {}: {}", line, message));
                }
            }
        }

        stats.load_duration = start_time.elapsed();
        Ok((repository, stats))
    }
}

/// Normalize one raw row and coerce it into a station
///
/// The name is taken verbatim from the row, so names such as `007` keep
/// their leading zeros.
pub fn parse_station_record(record: &StringRecord) -> Result<Station> {
    let fields = normalize_record(record);
    let mut station = Station::try_from(fields.as_slice())?;
    if let Some(raw_name) = record.get(NAME_INDEX) {
        station.name = raw_name.to_string();
    }
    Ok(station)
}
