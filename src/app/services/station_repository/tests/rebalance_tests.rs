//! Tests for network rebalancing

use super::*;
use crate::app::models::StationColumn;
use crate::app::services::station_repository::rebalance::{Adjustment, plan_adjustment};

#[test]
fn test_rebalance_handout_stations() {
    let mut repository = handout_stations();

    let summary = repository.rebalance();

    assert_eq!(occupancy(&repository), vec![(17, 14), (8, 7)]);
    assert_eq!(summary.target_percentage, Some(54));
    assert_eq!(summary.excess_pool, 3);
    assert_eq!(summary.deficit_pool, 3);
    assert_eq!(summary.bikes_docked, 3);
    assert_eq!(summary.bikes_released, 3);
    assert_eq!(summary.adjusted_stations, vec![7000, 7001]);

    // Everything else about the stations is untouched
    let first = repository.get_station(7000).unwrap();
    assert_eq!(first.name, "Ft. York / Capreol Crt.");
    assert_eq!(first.capacity, 31);
}

#[test]
fn test_rebalance_three_stations() {
    let mut repository = StationRepository::from_stations(vec![
        occupancy_station(1, 10, 0, true, true),
        occupancy_station(2, 0, 10, true, true),
        occupancy_station(3, 3, 7, true, true),
    ])
    .unwrap();

    // 13 / 30 = 43.3% -> 43
    let summary = repository.rebalance();

    assert_eq!(summary.target_percentage, Some(43));
    assert_eq!(summary.excess_pool, 6);
    assert_eq!(summary.deficit_pool, 5);
    assert_eq!(occupancy(&repository), vec![(4, 6), (4, 6), (4, 6)]);
}

#[test]
fn test_rebalance_conserves_station_sums() {
    let mut repository = StationRepository::from_stations(vec![
        occupancy_station(1, 12, 3, true, true),
        occupancy_station(2, 1, 19, true, true),
        occupancy_station(3, 7, 7, false, true),
        occupancy_station(4, 0, 6, true, false),
        occupancy_station(5, 9, 1, true, true),
    ])
    .unwrap();
    let sums_before: Vec<u32> = repository.iter().map(|s| s.occupied_and_free()).collect();
    let bikes_before = repository.column_total(StationColumn::BikesAvailable);

    repository.rebalance();

    let sums_after: Vec<u32> = repository.iter().map(|s| s.occupied_and_free()).collect();
    assert_eq!(sums_before, sums_after);

    let bikes_after = repository.column_total(StationColumn::BikesAvailable);
    assert!(
        (bikes_after - bikes_before).abs() <= repository.station_count() as i64,
        "bikes before {}, after {}",
        bikes_before,
        bikes_after
    );
}

#[test]
fn test_rebalance_balanced_network_is_noop() {
    let mut repository = StationRepository::from_stations(vec![
        occupancy_station(1, 5, 5, true, true),
        occupancy_station(2, 10, 10, true, true),
        occupancy_station(3, 2, 2, true, true),
    ])
    .unwrap();
    let before = repository.clone();

    let first = repository.rebalance();
    assert!(first.is_noop());
    assert_eq!(first.excess_pool, 0);
    assert_eq!(first.deficit_pool, 0);
    assert_eq!(repository, before);

    let second = repository.rebalance();
    assert!(second.is_noop());
    assert_eq!(repository, before);
}

#[test]
fn test_rebalance_twice_settles() {
    let mut repository = handout_stations();

    repository.rebalance();
    let after_first = repository.clone();

    // 25 / 46 -> 54%; 17/31 -> 55% and 8/15 -> 53% both round back to zero moves
    let second = repository.rebalance();
    assert!(second.is_noop());
    assert_eq!(repository, after_first);
}

#[test]
fn test_rebalance_skips_station_that_is_not_renting() {
    let mut repository = handout_stations();
    repository.stations[0].is_renting = false;

    let summary = repository.rebalance();

    // Surplus station keeps its bikes, the deficit station still fills up
    assert_eq!(occupancy(&repository), vec![(20, 11), (8, 7)]);
    assert_eq!(summary.bikes_docked, 0);
    assert_eq!(summary.bikes_released, 3);
    assert_eq!(summary.adjusted_stations, vec![7001]);
}

#[test]
fn test_rebalance_skips_station_that_is_not_returning() {
    let mut repository = handout_stations();
    repository.stations[1].is_returning = false;

    repository.rebalance();

    assert_eq!(occupancy(&repository), vec![(17, 14), (5, 10)]);
}

#[test]
fn test_rebalance_rounds_half_to_even() {
    // Network at 50%; each station is half a bike off target
    let mut repository = StationRepository::from_stations(vec![
        occupancy_station(1, 3, 2, true, true),
        occupancy_station(2, 2, 3, true, true),
    ])
    .unwrap();
    let before = repository.clone();

    let summary = repository.rebalance();
    assert_eq!(summary.target_percentage, Some(50));
    assert!(summary.is_noop());
    assert_eq!(repository, before);

    // One and a half bikes off target rounds up to two
    let mut repository = StationRepository::from_stations(vec![
        occupancy_station(1, 9, 6, true, true),
        occupancy_station(2, 6, 9, true, true),
    ])
    .unwrap();
    repository.rebalance();
    assert_eq!(occupancy(&repository), vec![(7, 8), (8, 7)]);
}

#[test]
fn test_rebalance_leaves_empty_stations_alone() {
    let mut repository = StationRepository::from_stations(vec![
        occupancy_station(1, 0, 0, true, true),
        occupancy_station(2, 10, 0, true, true),
        occupancy_station(3, 0, 10, true, true),
    ])
    .unwrap();

    repository.rebalance();

    assert_eq!(occupancy(&repository), vec![(0, 0), (5, 5), (5, 5)]);
}

#[test]
fn test_rebalance_empty_network() {
    let mut repository = StationRepository::new();
    let summary = repository.rebalance();
    assert_eq!(summary.target_percentage, None);
    assert!(summary.is_noop());

    let mut repository =
        StationRepository::from_stations(vec![occupancy_station(1, 0, 0, true, true)]).unwrap();
    let summary = repository.rebalance();
    assert_eq!(summary.target_percentage, None);
    assert_eq!(occupancy(&repository), vec![(0, 0)]);
}

#[test]
fn test_rebalance_preserves_order() {
    let mut repository = StationRepository::from_stations(vec![
        occupancy_station(30, 1, 9, true, true),
        occupancy_station(10, 9, 1, true, true),
        occupancy_station(20, 5, 5, true, true),
    ])
    .unwrap();

    repository.rebalance();

    let ids: Vec<i32> = repository.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![30, 10, 20]);
    assert_eq!(occupancy(&repository), vec![(5, 5), (5, 5), (5, 5)]);
}

#[test]
fn test_plan_adjustment() {
    let station = occupancy_station(1, 20, 11, true, true);
    assert_eq!(plan_adjustment(&station, 54), Adjustment::Surplus(3));

    let station = occupancy_station(2, 5, 10, true, true);
    assert_eq!(plan_adjustment(&station, 54), Adjustment::Deficit(3));

    let station = occupancy_station(3, 5, 5, true, true);
    assert_eq!(plan_adjustment(&station, 50), Adjustment::AtTarget);

    let station = occupancy_station(4, 0, 0, true, true);
    assert_eq!(plan_adjustment(&station, 50), Adjustment::Empty);
}
