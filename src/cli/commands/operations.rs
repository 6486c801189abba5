//! Mutating commands: rentals, returns and rebalancing
//!
//! Changes are applied to the loaded network only. The report shows the
//! state of every touched station after the operation.

use super::shared::{render_record, station_table, to_csv, to_json};
use crate::app::models::Station;
use crate::app::services::station_repository::{RebalanceSummary, StationRepository};
use crate::cli::args::{OutputFormat, RentalArgs};
use crate::{Error, Result};
use colored::*;
use serde::Serialize;
use tracing::info;

/// Which way bikes move in a rental command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RentalKind {
    Rent,
    Return,
}

/// Result of a batch of single-bike transactions at one station
#[derive(Debug, Clone, Serialize)]
pub struct RentalReport {
    pub kind: RentalKind,
    pub id: i32,
    pub requested: u32,
    pub succeeded: u32,
    pub bikes_available: u32,
    pub docks_available: u32,
}

impl RentalReport {
    pub fn refused(&self) -> u32 {
        self.requested - self.succeeded
    }
}

/// Station counts before and after a rebalance
#[derive(Debug, Clone, Serialize)]
pub struct StationChange {
    pub id: i32,
    pub name: String,
    pub bikes_before: u32,
    pub docks_before: u32,
    pub bikes_after: u32,
    pub docks_after: u32,
}

#[derive(Serialize)]
struct RebalanceReport<'a> {
    summary: &'a RebalanceSummary,
    stations: &'a [StationChange],
}

/// Rent `count` bikes, stopping at the first refusal
pub fn run_rent(
    repository: &mut StationRepository,
    args: &RentalArgs,
    format: OutputFormat,
) -> Result<String> {
    let report = apply_rentals(repository, args, RentalKind::Rent)?;
    render_rental(&report, format)
}

/// Return `count` bikes, stopping at the first refusal
pub fn run_return(
    repository: &mut StationRepository,
    args: &RentalArgs,
    format: OutputFormat,
) -> Result<String> {
    let report = apply_rentals(repository, args, RentalKind::Return)?;
    render_rental(&report, format)
}

fn apply_rentals(
    repository: &mut StationRepository,
    args: &RentalArgs,
    kind: RentalKind,
) -> Result<RentalReport> {
    repository.require_station(args.id)?;

    let mut succeeded = 0;
    for _ in 0..args.count {
        let accepted = match kind {
            RentalKind::Rent => repository.rent_bike(args.id),
            RentalKind::Return => repository.return_bike(args.id),
        };
        if !accepted {
            break;
        }
        succeeded += 1;
    }

    let station = repository.require_station(args.id)?;
    info!(
        "{:?} at station {}: {} of {} accepted",
        kind, args.id, succeeded, args.count
    );

    Ok(RentalReport {
        kind,
        id: args.id,
        requested: args.count,
        succeeded,
        bikes_available: station.bikes_available,
        docks_available: station.docks_available,
    })
}

fn render_rental(report: &RentalReport, format: OutputFormat) -> Result<String> {
    render_record(format, report, || {
        let verb = match report.kind {
            RentalKind::Rent => "Rented",
            RentalKind::Return => "Returned",
        };
        let outcome = if report.refused() == 0 {
            format!("{} {} of {}", verb, report.succeeded, report.requested).green()
        } else if report.succeeded == 0 {
            format!("{} 0 of {}", verb, report.requested).red()
        } else {
            format!("{} {} of {}", verb, report.succeeded, report.requested).yellow()
        };

        format!(
            "{} at station {}\n  bikes available: {}\n  docks available: {}",
            outcome, report.id, report.bikes_available, report.docks_available
        )
    })
}

/// Rebalance the whole network
pub fn run_rebalance(repository: &mut StationRepository, format: OutputFormat) -> Result<String> {
    let before: Vec<Station> = repository.stations().to_vec();
    let summary = repository.rebalance();

    let changes = summary
        .adjusted_stations
        .iter()
        .map(|&id| -> Result<StationChange> {
            let old = before
                .iter()
                .find(|station| station.id == id)
                .ok_or_else(|| Error::station_not_found(id))?;
            let new = repository.require_station(id)?;
            Ok(StationChange {
                id,
                name: new.name.clone(),
                bikes_before: old.bikes_available,
                docks_before: old.docks_available,
                bikes_after: new.bikes_available,
                docks_after: new.docks_available,
            })
        })
        .collect::<Result<Vec<StationChange>>>()?;

    match format {
        OutputFormat::Json => to_json(&RebalanceReport {
            summary: &summary,
            stations: &changes,
        }),
        OutputFormat::Csv => to_csv(&changes),
        OutputFormat::Human => Ok(rebalance_text(&summary, &changes, repository)),
    }
}

fn rebalance_text(
    summary: &RebalanceSummary,
    changes: &[StationChange],
    repository: &StationRepository,
) -> String {
    let Some(target) = summary.target_percentage else {
        return "Network has no bikes or docks; nothing to rebalance".to_string();
    };

    let mut lines = vec![
        format!("{}", "Rebalance".bold()),
        format!("  target occupancy: {}%", target),
        format!(
            "  excess pool: {}, deficit pool: {}",
            summary.excess_pool, summary.deficit_pool
        ),
        format!(
            "  bikes docked: {}, bikes released: {}",
            summary.bikes_docked, summary.bikes_released
        ),
    ];

    if summary.is_noop() {
        lines.push("  no station changed".dimmed().to_string());
        return lines.join("\n");
    }

    lines.push(String::new());
    for change in changes {
        lines.push(format!(
            "{:>6}  {:<36} {:>3}/{:<3} -> {:>3}/{:<3}",
            change.id,
            change.name,
            change.bikes_before,
            change.docks_before,
            change.bikes_after,
            change.docks_after
        ));
    }

    lines.push(String::new());
    lines.push(station_table(
        changes
            .iter()
            .filter_map(|change| repository.get_station(change.id)),
    ));
    lines.join("\n")
}
