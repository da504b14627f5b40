mod driver_api;
mod helpers;
mod rider_api;
mod trip_api;

use std::collections::BTreeMap;

use crate::{
    api::API,
    config::Config,
    entities::{Driver, Rider, Trip, TripId, DEFAULT_FARE},
};

/// In-memory registry of riders, drivers and trips.
///
/// Trips are stored once, keyed by id; the open-trips list and every personal
/// history hold ids into that store. Every operation takes `&mut self` or
/// `&self`, so sharing an engine across threads needs an outer lock.
#[derive(Debug)]
pub struct Engine {
    riders: Vec<Rider>,
    drivers: Vec<Driver>,
    trips: BTreeMap<TripId, Trip>,
    open_trips: Vec<TripId>,
    trip_counter: TripId,
    fare: f64,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all, fields(fare = config.base_fare))]
    pub fn new(config: &Config) -> Self {
        Self::with_fare(config.base_fare)
    }

    pub fn with_fare(fare: f64) -> Self {
        Self {
            riders: Vec::new(),
            drivers: Vec::new(),
            trips: BTreeMap::new(),
            open_trips: Vec::new(),
            trip_counter: 1,
            fare,
        }
    }

    pub fn fare(&self) -> f64 {
        self.fare
    }

    /// Hands out the current counter value and advances it. Ids are never reused.
    pub fn next_trip_id(&mut self) -> TripId {
        let id = self.trip_counter;
        self.trip_counter += 1;
        id
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_fare(DEFAULT_FARE)
    }
}

impl API for Engine {}
