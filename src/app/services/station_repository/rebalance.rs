//! Network-wide rebalancing toward a uniform occupancy ratio
//!
//! The network target is the rounded percentage of all bikes over all bikes
//! plus docks. Stations above the target give up their surplus (bikes move
//! into their own docks), stations below it take up their deficit (docks
//! turn back into bikes).
//!
//! The algorithm is a greedy two-pass heuristic:
//! 1. compute every station's surplus or deficit and sum them into a shared
//!    excess pool and deficit pool without touching any station;
//! 2. walk the stations in repository order, letting each eligible station
//!    apply its adjustment while its pool is still positive.
//!
//! Earlier stations therefore drain a pool before later ones. Each
//! adjustment is rounded independently, so the network bike total is only
//! conserved to within one bike per station.

use super::StationRepository;
use crate::app::models::{Station, StationColumn, round_half_even};
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of one rebalance pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RebalanceSummary {
    /// Network occupancy target in whole percent, `None` for an empty network
    pub target_percentage: Option<i64>,

    /// Sum of all surpluses before any station was adjusted
    pub excess_pool: i64,

    /// Sum of all deficits before any station was adjusted
    pub deficit_pool: i64,

    /// Bikes taken out of circulation at surplus stations
    pub bikes_docked: i64,

    /// Bikes put into circulation at deficit stations
    pub bikes_released: i64,

    /// Ids of stations whose counts changed, in repository order
    pub adjusted_stations: Vec<i32>,
}

impl RebalanceSummary {
    /// Whether no station was changed
    pub fn is_noop(&self) -> bool {
        self.adjusted_stations.is_empty()
    }
}

/// Where one station stands relative to the network target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    /// Above target: this many bikes should be docked
    Surplus(i64),
    /// Below target: this many docks should become bikes
    Deficit(i64),
    /// Exactly on target
    AtTarget,
    /// No bikes and no docks, so no ratio
    Empty,
}

/// Classify a station against a target percentage
pub fn plan_adjustment(station: &Station, target_percentage: i64) -> Adjustment {
    let Some(station_percentage) = station.occupancy_percentage() else {
        return Adjustment::Empty;
    };

    let total = station.occupied_and_free() as f64;
    let bikes = station.bikes_available as f64;
    let target = target_percentage as f64;

    if station_percentage > target_percentage {
        Adjustment::Surplus(round_half_even(-target / 100.0 * total + bikes))
    } else if station_percentage < target_percentage {
        Adjustment::Deficit(round_half_even(target / 100.0 * total - bikes))
    } else {
        Adjustment::AtTarget
    }
}

impl StationRepository {
    /// Redistribute bikes so every station approaches the network occupancy
    ///
    /// Only renting stations give up bikes; only returning stations with a
    /// free dock take them. The repository is mutated in place; the summary
    /// describes what was done.
    pub fn rebalance(&mut self) -> RebalanceSummary {
        let total_bikes = self.column_total(StationColumn::BikesAvailable);
        let total_docks = self.column_total(StationColumn::DocksAvailable);

        if total_bikes + total_docks == 0 {
            debug!("Skipping rebalance: network has no bikes and no docks");
            return RebalanceSummary::default();
        }

        let target_percentage =
            round_half_even(total_bikes as f64 / (total_bikes + total_docks) as f64 * 100.0);

        // First pass: plan every station and fill the pools.
        let plan: Vec<Adjustment> = self
            .stations
            .iter()
            .map(|station| plan_adjustment(station, target_percentage))
            .collect();

        let mut excess_pool = 0;
        let mut deficit_pool = 0;
        for adjustment in &plan {
            match adjustment {
                Adjustment::Surplus(amount) => excess_pool += amount,
                Adjustment::Deficit(amount) => deficit_pool += amount,
                Adjustment::AtTarget | Adjustment::Empty => {}
            }
        }

        let mut summary = RebalanceSummary {
            target_percentage: Some(target_percentage),
            excess_pool,
            deficit_pool,
            ..Default::default()
        };

        debug!(
            "Rebalance target {}%: excess pool {}, deficit pool {}",
            target_percentage, excess_pool, deficit_pool
        );

        // Second pass: apply in order while the shared pools last.
        for (station, adjustment) in self.stations.iter_mut().zip(plan) {
            match adjustment {
                Adjustment::Surplus(amount) if station.is_renting && excess_pool > 0 => {
                    let moved = amount.clamp(0, station.bikes_available as i64);
                    station.bikes_available -= moved as u32;
                    station.docks_available += moved as u32;
                    excess_pool -= moved;
                    summary.bikes_docked += moved;
                    if moved > 0 {
                        summary.adjusted_stations.push(station.id);
                    }
                }
                Adjustment::Deficit(amount)
                    if station.is_returning
                        && station.docks_available > 0
                        && deficit_pool > 0 =>
                {
                    let moved = amount.clamp(0, station.docks_available as i64);
                    station.bikes_available += moved as u32;
                    station.docks_available -= moved as u32;
                    deficit_pool -= moved;
                    summary.bikes_released += moved;
                    if moved > 0 {
                        summary.adjusted_stations.push(station.id);
                    }
                }
                _ => {}
            }
        }

        info!(
            "Rebalanced network to {}%: {} bikes docked, {} bikes released across {} stations",
            target_percentage,
            summary.bikes_docked,
            summary.bikes_released,
            summary.adjusted_stations.len()
        );

        summary
    }
}
