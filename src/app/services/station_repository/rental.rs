//! Single-bike rentals and returns
//!
//! Each operation moves one unit between a station's bikes and docks, or
//! leaves the station untouched and reports `false`.

use super::StationRepository;
use tracing::{debug, warn};

impl StationRepository {
    /// Rent one bike from `id`
    ///
    /// Succeeds iff the station is renting and has a bike available.
    pub fn rent_bike(&mut self, id: i32) -> bool {
        let Some(station) = self.get_station_mut(id) else {
            warn!("Rental requested at unknown station {}", id);
            return false;
        };

        let docks = match station.docks_available.checked_add(1) {
            Some(docks) if station.is_renting && station.bikes_available > 0 => docks,
            _ => {
                debug!(
                    "Rental refused at station {} (renting: {}, bikes: {})",
                    id, station.is_renting, station.bikes_available
                );
                return false;
            }
        };

        station.bikes_available -= 1;
        station.docks_available = docks;
        debug!(
            "Rented bike at station {}: {} bikes, {} docks",
            id, station.bikes_available, station.docks_available
        );
        true
    }

    /// Return one bike to `id`
    ///
    /// Succeeds iff the station is accepting returns and has a free dock.
    pub fn return_bike(&mut self, id: i32) -> bool {
        let Some(station) = self.get_station_mut(id) else {
            warn!("Return requested at unknown station {}", id);
            return false;
        };

        let bikes = match station.bikes_available.checked_add(1) {
            Some(bikes) if station.is_returning && station.docks_available > 0 => bikes,
            _ => {
                debug!(
                    "Return refused at station {} (returning: {}, docks: {})",
                    id, station.is_returning, station.docks_available
                );
                return false;
            }
        };

        station.bikes_available = bikes;
        station.docks_available -= 1;
        debug!(
            "Returned bike at station {}: {} bikes, {} docks",
            id, station.bikes_available, station.docks_available
        );
        true
    }
}
