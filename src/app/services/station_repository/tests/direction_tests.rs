//! Tests for compass directions between stations

use super::*;
use crate::Error;
use crate::app::models::CompassDirection;
use crate::app::services::station_repository::direction::bearing_degrees;

/// A hub at the origin with one neighbour in each compass direction
fn compass_rose() -> StationRepository {
    let neighbours = [
        (1, 1.0, 0.0),
        (2, 1.0, 1.0),
        (3, 0.0, 1.0),
        (4, -1.0, 1.0),
        (5, -1.0, 0.0),
        (6, -1.0, -1.0),
        (7, 0.0, -1.0),
        (8, 1.0, -1.0),
    ];

    let mut stations = vec![create_test_station(0, "Hub", 0.0, 0.0, 5, 5, true, true)];
    stations.extend(neighbours.iter().map(|&(id, lat, lon)| {
        create_test_station(id, &format!("Spoke {}", id), lat, lon, 5, 5, true, true)
    }));
    StationRepository::from_stations(stations).unwrap()
}

#[test]
fn test_compass_rose_from_hub() {
    let repository = compass_rose();

    let expected = [
        (1, CompassDirection::North),
        (2, CompassDirection::NorthEast),
        (3, CompassDirection::East),
        (4, CompassDirection::SouthEast),
        (5, CompassDirection::South),
        (6, CompassDirection::SouthWest),
        (7, CompassDirection::West),
        (8, CompassDirection::NorthWest),
    ];

    for (id, direction) in expected {
        assert_eq!(
            repository.direction(0, id).unwrap(),
            direction,
            "hub -> station {}",
            id
        );
    }
}

#[test]
fn test_direction_reverses() {
    let repository = compass_rose();
    assert_eq!(repository.direction(6, 0).unwrap(), CompassDirection::NorthEast);
    assert_eq!(repository.direction(1, 0).unwrap(), CompassDirection::South);
}

#[test]
fn test_sample_stations_direction() {
    // Coxwell is 0.0062 degrees west and 0.0010 degrees south of Aldridge,
    // a heading about 9 degrees off due west.
    let repository = sample_stations();
    let degree = bearing_degrees(
        (43.684371, -79.316756),
        (43.683378, -79.322961),
        0.00001,
    );
    assert!((degree - 9.09).abs() < 0.01, "degree = {}", degree);
    assert_eq!(repository.direction(7087, 7088).unwrap(), CompassDirection::West);
    assert_eq!(repository.direction(7088, 7087).unwrap(), CompassDirection::East);
}

#[test]
fn test_handout_stations_direction() {
    let repository = handout_stations();
    assert_eq!(repository.direction(7000, 7001).unwrap(), CompassDirection::East);
    assert_eq!(repository.direction(7001, 7000).unwrap(), CompassDirection::West);
}

#[test]
fn test_equal_longitude_is_nudged() {
    let degree = bearing_degrees((0.0, 5.0), (1.0, 5.0), 0.00001);
    assert!(degree < -89.99 && degree > -90.0, "degree = {}", degree);

    let degree = bearing_degrees((0.0, 5.0), (1.0, 5.0), 10.0);
    assert!((degree - (-0.1f64).atan().to_degrees()).abs() < 1e-9);
}

#[test]
fn test_direction_with_large_epsilon() {
    let repository = compass_rose();
    assert_eq!(repository.direction(0, 1).unwrap(), CompassDirection::North);
    assert_eq!(
        repository.direction_with_epsilon(0, 1, 10.0).unwrap(),
        CompassDirection::West
    );
}

#[test]
fn test_direction_to_self() {
    let repository = compass_rose();
    assert_eq!(repository.direction(0, 0).unwrap(), CompassDirection::West);
}

#[test]
fn test_direction_unknown_station() {
    let repository = compass_rose();
    assert!(matches!(
        repository.direction(0, 99),
        Err(Error::StationNotFound { id: 99 })
    ));
    assert!(matches!(
        repository.direction(99, 0),
        Err(Error::StationNotFound { id: 99 })
    ));
}
