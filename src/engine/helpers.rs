use std::collections::BTreeMap;

use crate::{
    entities::{names_match, Driver, Rider, Trip, TripId},
    error::{not_found_error, Error},
};

pub fn rider_position(riders: &[Rider], name: &str) -> Option<usize> {
    riders.iter().position(|rider| names_match(&rider.name, name))
}

pub fn driver_position(drivers: &[Driver], name: &str) -> Option<usize> {
    drivers.iter().position(|driver| names_match(&driver.name, name))
}

pub fn fetch_rider_position(riders: &[Rider], name: &str) -> Result<usize, Error> {
    rider_position(riders, name)
        .ok_or_else(|| not_found_error(format!("rider {:?} not found", name)))
}

pub fn fetch_driver_position(drivers: &[Driver], name: &str) -> Result<usize, Error> {
    driver_position(drivers, name)
        .ok_or_else(|| not_found_error(format!("driver {:?} not found", name)))
}

pub fn trip_not_found_error(id: TripId) -> Error {
    not_found_error(format!("trip {} not found", id))
}

/// Copies the trips behind `ids`, keeping the order of `ids`.
pub fn fetch_trips(trips: &BTreeMap<TripId, Trip>, ids: &[TripId]) -> Vec<Trip> {
    ids.iter().filter_map(|id| trips.get(id).cloned()).collect()
}
