//! Station repository for the bike-share network
//!
//! The repository holds every station of a session in caller-supplied order
//! and indexes them by id for O(1) lookups. Queries borrow it immutably;
//! rentals, returns and rebalancing mutate it in place. No operation
//! reorders or removes stations.

use crate::app::models::Station;
use crate::{Error, Result};
use std::collections::HashMap;

pub mod direction;
pub mod loader;
pub mod metadata;
pub mod query;
pub mod rebalance;
pub mod rental;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use metadata::LoadStats;
pub use rebalance::RebalanceSummary;

/// Ordered, id-addressable collection of stations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationRepository {
    /// Stations in insertion order
    pub(crate) stations: Vec<Station>,

    /// Position of each station in `stations`, keyed by id
    pub(crate) index: HashMap<i32, usize>,
}

impl StationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from stations in the given order
    ///
    /// Fails if two stations share an id.
    pub fn from_stations(stations: Vec<Station>) -> Result<Self> {
        let mut repository = Self {
            stations: Vec::with_capacity(stations.len()),
            index: HashMap::with_capacity(stations.len()),
        };
        for station in stations {
            repository.add_station(station)?;
        }
        Ok(repository)
    }

    /// Append a station to the end of the repository
    pub fn add_station(&mut self, station: Station) -> Result<()> {
        if self.index.contains_key(&station.id) {
            return Err(Error::data_validation(format!(
                "Duplicate station id {}",
                station.id
            )));
        }
        self.index.insert(station.id, self.stations.len());
        self.stations.push(station);
        Ok(())
    }

    /// Get a station by id (O(1) lookup)
    pub fn get_station(&self, id: i32) -> Option<&Station> {
        self.index.get(&id).map(|&position| &self.stations[position])
    }

    pub(crate) fn get_station_mut(&mut self, id: i32) -> Option<&mut Station> {
        match self.index.get(&id) {
            Some(&position) => self.stations.get_mut(position),
            None => None,
        }
    }

    /// Get a station by id or fail with `StationNotFound`
    pub fn require_station(&self, id: i32) -> Result<&Station> {
        self.get_station(id)
            .ok_or_else(|| Error::station_not_found(id))
    }

    /// Check if a station exists in the repository
    pub fn contains_station(&self, id: i32) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the total number of stations
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations in repository order
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Iterate over stations in repository order
    pub fn iter(&self) -> std::slice::Iter<'_, Station> {
        self.stations.iter()
    }

    /// Consume the repository, returning stations in order
    pub fn into_stations(self) -> Vec<Station> {
        self.stations
    }
}

impl<'a> IntoIterator for &'a StationRepository {
    type Item = &'a Station;
    type IntoIter = std::slice::Iter<'a, Station>;

    fn into_iter(self) -> Self::IntoIter {
        self.stations.iter()
    }
}
