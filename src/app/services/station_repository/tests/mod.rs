//! Shared test utilities and fixtures for station repository tests

use crate::app::models::Station;
use crate::app::services::station_repository::StationRepository;

pub mod direction_tests;
pub mod rebalance_tests;

/// Create a test station with the given occupancy and flags
#[allow(clippy::too_many_arguments)]
pub fn create_test_station(
    id: i32,
    name: &str,
    lat: f64,
    lon: f64,
    bikes: u32,
    docks: u32,
    is_renting: bool,
    is_returning: bool,
) -> Station {
    Station::new(
        id,
        name,
        lat,
        lon,
        bikes + docks,
        bikes,
        docks,
        is_renting,
        is_returning,
    )
    .unwrap()
}

/// Station with arbitrary coordinates, only occupancy and flags matter
pub fn occupancy_station(id: i32, bikes: u32, docks: u32, renting: bool, returning: bool) -> Station {
    create_test_station(id, &format!("Station {}", id), 43.65, -79.38, bikes, docks, renting, returning)
}

/// Two stations east of downtown Toronto; the second refuses rentals and returns
pub fn sample_stations() -> StationRepository {
    StationRepository::from_stations(vec![
        Station::new(
            7087,
            "Danforth/Aldridge",
            43.684371,
            -79.316756,
            23,
            9,
            14,
            true,
            true,
        )
        .unwrap(),
        Station::new(
            7088,
            "Danforth/Coxwell",
            43.683378,
            -79.322961,
            15,
            13,
            2,
            false,
            false,
        )
        .unwrap(),
    ])
    .unwrap()
}

/// Two downtown stations, both fully operational
pub fn handout_stations() -> StationRepository {
    StationRepository::from_stations(vec![
        Station::new(
            7000,
            "Ft. York / Capreol Crt.",
            43.639832,
            -79.395954,
            31,
            20,
            11,
            true,
            true,
        )
        .unwrap(),
        Station::new(
            7001,
            "Lower Jarvis St / The Esplanade",
            43.647992,
            -79.370907,
            15,
            5,
            10,
            true,
            true,
        )
        .unwrap(),
    ])
    .unwrap()
}

/// Station file contents matching `sample_stations`
pub const SAMPLE_CSV: &str = "\
station_id,name,lat,lon,capacity,num_bikes_available,num_docks_available,is_renting,is_returning
7087,Danforth/Aldridge,43.684371,-79.316756,23,9,14,True,True
7088,Danforth/Coxwell,43.683378,-79.322961,15,13,2,False,False
";

/// (bikes, docks) of every station in order
pub fn occupancy(repository: &StationRepository) -> Vec<(u32, u32)> {
    repository
        .iter()
        .map(|station| (station.bikes_available, station.docks_available))
        .collect()
}
