use super::helpers::{fetch_rider_position, fetch_trips};
use super::Engine;

use crate::{
    api::RiderAPI,
    entities::{Rider, RiderId, Trip},
    error::{not_found_error, Error},
};

impl RiderAPI for Engine {
    #[tracing::instrument(skip(self, phone_number))]
    fn register_rider(&mut self, name: String, phone_number: String) -> Result<Rider, Error> {
        let rider = Rider::new(name, phone_number);

        self.riders.push(rider.clone());

        tracing::info!(rider_id = %rider.id, "rider registered");

        Ok(rider)
    }

    fn find_rider(&self, id: RiderId) -> Result<Rider, Error> {
        self.riders
            .iter()
            .find(|rider| rider.id == id)
            .cloned()
            .ok_or_else(|| not_found_error(format!("rider {} not found", id)))
    }

    fn find_rider_by_name(&self, name: &str) -> Result<Rider, Error> {
        let index = fetch_rider_position(&self.riders, name)?;

        Ok(self.riders[index].clone())
    }

    fn riders(&self) -> Vec<Rider> {
        self.riders.clone()
    }

    #[tracing::instrument(skip(self))]
    fn ride_history(&self, rider_name: &str) -> Result<Vec<Trip>, Error> {
        let index = fetch_rider_position(&self.riders, rider_name)?;

        Ok(fetch_trips(&self.trips, &self.riders[index].ride_history))
    }
}
