//! Data models for the bike-share network
//!
//! This module contains the core data structures for representing stations,
//! the summaries returned by queries and the compass labels used for
//! directions between stations.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Station Structure
// =============================================================================

/// A single bike-share dock location
///
/// Position and capacity are fixed for the lifetime of a session; the bike
/// and dock counts move as bikes are rented, returned and rebalanced.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Station {
    /// Unique identifier within the network
    pub id: i32,

    /// Display name (e.g., "Danforth/Aldridge")
    pub name: String,

    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Total docks at the station (informational)
    pub capacity: u32,

    /// Bikes currently available to rent
    pub bikes_available: u32,

    /// Empty docks currently available for returns
    pub docks_available: u32,

    /// Station currently permits rentals
    pub is_renting: bool,

    /// Station currently permits returns
    pub is_returning: bool,
}

impl Station {
    /// Create a new Station with validation
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        capacity: u32,
        bikes_available: u32,
        docks_available: u32,
        is_renting: bool,
        is_returning: bool,
    ) -> Result<Self> {
        let station = Self {
            id,
            name: name.into(),
            latitude,
            longitude,
            capacity,
            bikes_available,
            docks_available,
            is_renting,
            is_returning,
        };

        station.validate()?;
        Ok(station)
    }

    /// Validate coordinates and occupancy counts
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(Error::data_validation(format!(
                "Invalid latitude {} for station {}: must be between -90 and 90 degrees",
                self.latitude, self.id
            )));
        }

        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(Error::data_validation(format!(
                "Invalid longitude {} for station {}: must be between -180 and 180 degrees",
                self.longitude, self.id
            )));
        }

        if self
            .bikes_available
            .checked_add(self.docks_available)
            .is_none()
        {
            return Err(Error::data_validation(format!(
                "Invalid occupancy for station {}: {} bikes plus {} docks exceeds {}",
                self.id,
                self.bikes_available,
                self.docks_available,
                u32::MAX
            )));
        }

        Ok(())
    }

    /// Bikes plus empty docks; conserved by every mutating operation
    pub fn occupied_and_free(&self) -> u32 {
        self.bikes_available + self.docks_available
    }

    /// Occupancy as a whole percentage, or `None` when the station has no
    /// bikes and no docks
    pub fn occupancy_percentage(&self) -> Option<i64> {
        let total = self.occupied_and_free();
        if total == 0 {
            return None;
        }
        Some(round_half_even(
            self.bikes_available as f64 / total as f64 * 100.0,
        ))
    }

    /// Get station location as (latitude, longitude) tuple
    pub fn location(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    /// Summary of name and occupancy
    pub fn info(&self) -> StationInfo {
        StationInfo {
            name: self.name.clone(),
            bikes_available: self.bikes_available,
            docks_available: self.docks_available,
        }
    }
}

/// Round to the nearest integer, ties to even
pub(crate) fn round_half_even(value: f64) -> i64 {
    value.round_ties_even() as i64
}

// =============================================================================
// Query Results
// =============================================================================

/// Name and occupancy of one station
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationInfo {
    pub name: String,
    pub bikes_available: u32,
    pub docks_available: u32,
}

/// Integer-valued station columns that can be totalled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StationColumn {
    Id,
    Capacity,
    BikesAvailable,
    DocksAvailable,
}

impl StationColumn {
    /// Read this column from a station
    pub fn value_of(self, station: &Station) -> i64 {
        match self {
            StationColumn::Id => station.id as i64,
            StationColumn::Capacity => station.capacity as i64,
            StationColumn::BikesAvailable => station.bikes_available as i64,
            StationColumn::DocksAvailable => station.docks_available as i64,
        }
    }

    /// Column name as it appears in station files
    pub fn as_str(self) -> &'static str {
        use crate::constants::columns;
        match self {
            StationColumn::Id => columns::ID,
            StationColumn::Capacity => columns::CAPACITY,
            StationColumn::BikesAvailable => columns::BIKES_AVAILABLE,
            StationColumn::DocksAvailable => columns::DOCKS_AVAILABLE,
        }
    }
}

impl FromStr for StationColumn {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(StationColumn::Id),
            "capacity" => Ok(StationColumn::Capacity),
            "bikes" | "bikes_available" => Ok(StationColumn::BikesAvailable),
            "docks" | "docks_available" => Ok(StationColumn::DocksAvailable),
            other => Err(Error::data_validation(format!(
                "Unknown station column '{}': expected id, capacity, bikes_available or docks_available",
                other
            ))),
        }
    }
}

impl fmt::Display for StationColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Compass Direction
// =============================================================================

/// Coarse 8-way compass label for travel between two stations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    /// Bucket a planar bearing in degrees (as produced by
    /// `atan2(lat_start - lat_end, lon_start - lon_end)`) into a compass label
    pub fn from_degrees(degree: f64) -> Self {
        use crate::constants::sectors::{
            SOUTH_BOUND, SOUTHEAST_BOUND, SOUTHWEST_BOUND, WEST_BOUND,
        };

        if degree > -WEST_BOUND && degree < WEST_BOUND {
            CompassDirection::West
        } else if (WEST_BOUND..=SOUTHWEST_BOUND).contains(&degree) {
            CompassDirection::SouthWest
        } else if degree > SOUTHWEST_BOUND && degree < SOUTH_BOUND {
            CompassDirection::South
        } else if (SOUTH_BOUND..=SOUTHEAST_BOUND).contains(&degree) {
            CompassDirection::SouthEast
        } else if degree > SOUTHEAST_BOUND || degree < -SOUTHEAST_BOUND {
            CompassDirection::East
        } else if (-SOUTHEAST_BOUND..=-SOUTH_BOUND).contains(&degree) {
            CompassDirection::NorthEast
        } else if degree > -SOUTH_BOUND && degree < -SOUTHWEST_BOUND {
            CompassDirection::North
        } else {
            // [-67.5, -22.5]
            CompassDirection::NorthWest
        }
    }

    /// Upper-case label (e.g., "SOUTHWEST")
    pub fn label(self) -> &'static str {
        match self {
            CompassDirection::North => "NORTH",
            CompassDirection::NorthEast => "NORTHEAST",
            CompassDirection::East => "EAST",
            CompassDirection::SouthEast => "SOUTHEAST",
            CompassDirection::South => "SOUTH",
            CompassDirection::SouthWest => "SOUTHWEST",
            CompassDirection::West => "WEST",
            CompassDirection::NorthWest => "NORTHWEST",
        }
    }
}

impl fmt::Display for CompassDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
