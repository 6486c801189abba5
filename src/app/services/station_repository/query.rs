//! Read-only station queries
//!
//! Summaries, column totals and threshold searches over the repository.
//! Every result that lists stations does so in repository order.

use super::StationRepository;
use crate::Result;
use crate::app::models::{StationColumn, StationInfo};

impl StationRepository {
    /// Name, bikes and docks of one station
    ///
    /// # Examples
    /// ```
    /// # use bikeshare::{Station, StationRepository};
    /// let repository = StationRepository::from_stations(vec![
    ///     Station::new(7087, "Danforth/Aldridge", 43.684371, -79.316756, 23, 9, 14, true, true)
    ///         .unwrap(),
    /// ])
    /// .unwrap();
    ///
    /// let info = repository.station_info(7087).unwrap();
    /// assert_eq!(info.name, "Danforth/Aldridge");
    /// assert_eq!((info.bikes_available, info.docks_available), (9, 14));
    /// ```
    pub fn station_info(&self, id: i32) -> Result<StationInfo> {
        self.require_station(id).map(|station| station.info())
    }

    /// Sum of an integer column across all stations
    pub fn column_total(&self, column: StationColumn) -> i64 {
        self.stations
            .iter()
            .map(|station| column.value_of(station))
            .sum()
    }

    /// Id of the station with the most bikes available
    ///
    /// Ties go to the station that appears first. Returns `None` for an
    /// empty repository.
    pub fn station_with_max_bikes(&self) -> Option<i32> {
        let mut best: Option<(i32, u32)> = None;
        for station in &self.stations {
            match best {
                Some((_, bikes)) if station.bikes_available <= bikes => {}
                _ => best = Some((station.id, station.bikes_available)),
            }
        }
        best.map(|(id, _)| id)
    }

    /// Ids of stations with at least `n` docks available, in repository order
    pub fn stations_with_at_least_n_docks(&self, n: u32) -> Vec<i32> {
        self.stations
            .iter()
            .filter(|station| station.docks_available >= n)
            .map(|station| station.id)
            .collect()
    }

    /// Ids of stations currently open for both rentals and returns
    pub fn fully_operational_station_ids(&self) -> Vec<i32> {
        self.stations
            .iter()
            .filter(|station| station.is_renting && station.is_returning)
            .map(|station| station.id)
            .collect()
    }

    /// Network-wide occupancy as a whole percentage
    ///
    /// Returns `None` when the network has no bikes and no docks.
    pub fn network_occupancy_percentage(&self) -> Option<i64> {
        let bikes = self.column_total(StationColumn::BikesAvailable);
        let docks = self.column_total(StationColumn::DocksAvailable);
        if bikes + docks == 0 {
            return None;
        }
        Some(crate::app::models::round_half_even(
            bikes as f64 / (bikes + docks) as f64 * 100.0,
        ))
    }
}
