//! Compass direction between two stations
//!
//! Coordinates are treated as planar: the bearing is
//! `atan2(lat_start - lat_end, lon_start - lon_end)`, which is only a fair
//! approximation over the few kilometres a bike-share network spans.

use super::StationRepository;
use crate::Result;
use crate::app::models::CompassDirection;
use crate::constants::DEFAULT_LONGITUDE_EPSILON;
use tracing::debug;

impl StationRepository {
    /// Direction to travel from `start_id` to `end_id`
    pub fn direction(&self, start_id: i32, end_id: i32) -> Result<CompassDirection> {
        self.direction_with_epsilon(start_id, end_id, DEFAULT_LONGITUDE_EPSILON)
    }

    /// Direction to travel from `start_id` to `end_id`, nudging the start
    /// longitude by `longitude_epsilon` when both longitudes are equal
    pub fn direction_with_epsilon(
        &self,
        start_id: i32,
        end_id: i32,
        longitude_epsilon: f64,
    ) -> Result<CompassDirection> {
        let start = self.require_station(start_id)?;
        let end = self.require_station(end_id)?;

        let degree = bearing_degrees(
            start.location(),
            end.location(),
            longitude_epsilon,
        );
        let direction = CompassDirection::from_degrees(degree);

        debug!(
            "Direction {} -> {}: {:.3} degrees ({})",
            start_id, end_id, degree, direction
        );
        Ok(direction)
    }
}

/// Planar bearing in degrees from `start` to `end`, both `(lat, lon)`
///
/// Result lies in `[-180, 180]`.
pub fn bearing_degrees(start: (f64, f64), end: (f64, f64), longitude_epsilon: f64) -> f64 {
    let (lat_start, mut lon_start) = start;
    let (lat_end, lon_end) = end;

    if lon_start == lon_end {
        lon_start += longitude_epsilon;
    }

    (lat_start - lat_end).atan2(lon_start - lon_end).to_degrees()
}
