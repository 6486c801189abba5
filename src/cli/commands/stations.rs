//! Read-only station commands
//!
//! Listing, per-station summaries, totals, threshold searches and compass
//! directions. Each command renders its result as a string in the
//! requested output format.

use super::shared::{render_record, render_rows, station_table};
use crate::app::models::{CompassDirection, StationColumn};
use crate::app::services::station_repository::StationRepository;
use crate::cli::args::{DirectionArgs, DocksArgs, OutputFormat, StationArgs, TotalsArgs};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::debug;

/// One station's name and occupancy
#[derive(Debug, Clone, Serialize)]
pub struct InfoRow {
    pub id: i32,
    pub name: String,
    pub bikes_available: u32,
    pub docks_available: u32,
}

/// Total of one column
#[derive(Debug, Clone, Serialize)]
pub struct TotalRow {
    pub column: StationColumn,
    pub total: i64,
}

/// Direction between two stations
#[derive(Debug, Clone, Serialize)]
pub struct DirectionRow {
    pub start_id: i32,
    pub end_id: i32,
    pub direction: CompassDirection,
}

/// List every station
pub fn run_list(repository: &StationRepository, format: OutputFormat) -> Result<String> {
    render_rows(format, repository.stations(), || {
        station_table(repository.stations())
    })
}

/// Show one station
pub fn run_info(
    repository: &StationRepository,
    args: &StationArgs,
    format: OutputFormat,
) -> Result<String> {
    let info = repository.station_info(args.id)?;
    let row = InfoRow {
        id: args.id,
        name: info.name,
        bikes_available: info.bikes_available,
        docks_available: info.docks_available,
    };

    render_record(format, &row, || {
        format!(
            "{} ({})\n  bikes available: {}\n  docks available: {}",
            row.name.bold(),
            row.id,
            row.bikes_available,
            row.docks_available
        )
    })
}

/// Total station columns; bikes and docks when none are named
pub fn run_totals(
    repository: &StationRepository,
    args: &TotalsArgs,
    format: OutputFormat,
) -> Result<String> {
    let columns = if args.columns.is_empty() {
        vec![StationColumn::BikesAvailable, StationColumn::DocksAvailable]
    } else {
        args.columns.clone()
    };

    let rows: Vec<TotalRow> = columns
        .into_iter()
        .map(|column| TotalRow {
            column,
            total: repository.column_total(column),
        })
        .collect();

    render_rows(format, &rows, || {
        rows.iter()
            .map(|row| format!("{:<16} {}", row.column.as_str(), row.total))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Show the station with the most bikes
pub fn run_max_bikes(repository: &StationRepository, format: OutputFormat) -> Result<String> {
    let id = repository
        .station_with_max_bikes()
        .ok_or_else(|| Error::data_validation("Network has no stations".to_string()))?;
    let station = repository.require_station(id)?;

    let row = InfoRow {
        id,
        name: station.name.clone(),
        bikes_available: station.bikes_available,
        docks_available: station.docks_available,
    };

    render_record(format, &row, || {
        format!(
            "Most bikes: {} ({}) with {} bikes available",
            row.name.bold(),
            row.id,
            row.bikes_available
        )
    })
}

/// List stations with at least N docks
pub fn run_docks(
    repository: &StationRepository,
    args: &DocksArgs,
    format: OutputFormat,
) -> Result<String> {
    let ids = repository.stations_with_at_least_n_docks(args.min_docks);
    debug!(
        "{} stations with at least {} docks",
        ids.len(),
        args.min_docks
    );

    let rows: Vec<InfoRow> = ids
        .iter()
        .filter_map(|&id| repository.get_station(id))
        .map(|station| InfoRow {
            id: station.id,
            name: station.name.clone(),
            bikes_available: station.bikes_available,
            docks_available: station.docks_available,
        })
        .collect();

    render_rows(format, &rows, || {
        if rows.is_empty() {
            return format!("No stations with at least {} docks available", args.min_docks);
        }
        let stations = ids.iter().filter_map(|&id| repository.get_station(id));
        format!(
            "{} stations with at least {} docks available\n{}",
            rows.len(),
            args.min_docks,
            station_table(stations)
        )
    })
}

/// Show the direction from one station to another
pub fn run_direction(
    repository: &StationRepository,
    args: &DirectionArgs,
    longitude_epsilon: f64,
    format: OutputFormat,
) -> Result<String> {
    let direction =
        repository.direction_with_epsilon(args.start_id, args.end_id, longitude_epsilon)?;
    let row = DirectionRow {
        start_id: args.start_id,
        end_id: args.end_id,
        direction,
    };

    render_record(format, &row, || {
        format!(
            "{} -> {}: {}",
            row.start_id,
            row.end_id,
            row.direction.label().bold()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Station;

    fn create_test_repository() -> StationRepository {
        StationRepository::from_stations(vec![
            Station::new(7087, "Danforth/Aldridge", 43.684371, -79.316756, 23, 9, 14, true, true)
                .unwrap(),
            Station::new(7088, "Danforth/Coxwell", 43.683378, -79.322961, 15, 13, 2, false, false)
                .unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_info_json() {
        let repository = create_test_repository();
        let output =
            run_info(&repository, &StationArgs { id: 7087 }, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["id"], 7087);
        assert_eq!(value["name"], "Danforth/Aldridge");
        assert_eq!(value["bikes_available"], 9);
        assert_eq!(value["docks_available"], 14);
    }

    #[test]
    fn test_info_unknown_station() {
        let repository = create_test_repository();
        let result = run_info(&repository, &StationArgs { id: 1 }, OutputFormat::Human);
        assert!(matches!(result, Err(Error::StationNotFound { id: 1 })));
    }

    #[test]
    fn test_totals_csv_defaults_to_bikes_and_docks() {
        let repository = create_test_repository();
        let output = run_totals(
            &repository,
            &TotalsArgs { columns: vec![] },
            OutputFormat::Csv,
        )
        .unwrap();

        assert_eq!(
            output,
            "column,total\nbikes_available,22\ndocks_available,16\n"
        );
    }

    #[test]
    fn test_max_bikes_human() {
        let repository = create_test_repository();
        let output = run_max_bikes(&repository, OutputFormat::Human).unwrap();
        assert!(output.contains("Danforth/Coxwell"));
        assert!(output.contains("(7088)"));
    }

    #[test]
    fn test_docks_json_keeps_order() {
        let repository = create_test_repository();
        let output =
            run_docks(&repository, &DocksArgs { min_docks: 0 }, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let ids: Vec<i64> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![7087, 7088]);
    }

    #[test]
    fn test_direction_csv() {
        let repository = create_test_repository();
        let output = run_direction(
            &repository,
            &DirectionArgs {
                start_id: 7088,
                end_id: 7087,
            },
            0.00001,
            OutputFormat::Csv,
        )
        .unwrap();

        assert_eq!(output, "start_id,end_id,direction\n7088,7087,EAST\n");
    }

    #[test]
    fn test_list_csv_has_every_station() {
        let repository = create_test_repository();
        let output = run_list(&repository, OutputFormat::Csv).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("id,name,latitude,longitude"));
        assert!(lines[1].starts_with("7087,Danforth/Aldridge,"));
        assert!(lines[2].ends_with(",False,False") || lines[2].ends_with(",false,false"));
    }
}
