use super::helpers::{
    driver_position, fetch_driver_position, fetch_rider_position, fetch_trips, rider_position,
    trip_not_found_error,
};
use super::Engine;

use crate::{
    api::TripAPI,
    entities::{Trip, TripId},
    error::{invalid_state_error, no_open_trips_error, not_found_error, unavailable_error, Error},
};

impl TripAPI for Engine {
    #[tracing::instrument(skip(self))]
    fn request_ride(
        &mut self,
        rider_name: &str,
        start_location: String,
        destination: String,
    ) -> Result<Trip, Error> {
        let index = fetch_rider_position(&self.riders, rider_name)?;
        let rider_name = self.riders[index].name.clone();

        let id = self.next_trip_id();
        let trip = Trip::new(id, rider_name, start_location, destination, self.fare);

        self.trips.insert(id, trip.clone());
        self.open_trips.push(id);

        tracing::info!(trip_id = id, "ride requested");

        Ok(trip)
    }

    #[tracing::instrument(skip(self))]
    fn accept_ride(&mut self, driver_name: &str, trip_id: TripId) -> Result<Trip, Error> {
        let index = fetch_driver_position(&self.drivers, driver_name)?;
        let driver = &mut self.drivers[index];

        if !driver.is_available() {
            tracing::warn!("driver already has a trip in progress");
            return Err(unavailable_error());
        }

        if self.open_trips.is_empty() {
            tracing::warn!("no open trips to accept");
            return Err(no_open_trips_error());
        }

        if !self.open_trips.contains(&trip_id) {
            tracing::warn!("trip is not among the open trips");
            return Err(trip_not_found_error(trip_id));
        }

        let trip = self
            .trips
            .get_mut(&trip_id)
            .ok_or_else(|| trip_not_found_error(trip_id))?;

        if !trip.is_pending() {
            tracing::warn!(status = %trip.status, "trip was already accepted");
            return Err(invalid_state_error());
        }

        driver.assign(trip_id)?;
        trip.start(driver.name.clone())?;

        tracing::info!(trip_id, "ride accepted");

        Ok(trip.clone())
    }

    /// Resolves `user_name` against riders first and drivers second, then
    /// completes the trip along that party's path.
    ///
    /// The rider path does not touch the driver's availability; only the driver
    /// path frees the driver.
    #[tracing::instrument(skip(self))]
    fn complete_trip(&mut self, user_name: &str, trip_id: TripId) -> Result<Trip, Error> {
        if let Some(index) = rider_position(&self.riders, user_name) {
            return self.complete_as_rider(index, trip_id);
        }

        if let Some(index) = driver_position(&self.drivers, user_name) {
            return self.complete_as_driver(index, trip_id);
        }

        tracing::warn!("no rider or driver with that name");
        Err(not_found_error(format!("user {:?} not found", user_name)))
    }

    fn find_trip(&self, id: TripId) -> Result<Trip, Error> {
        self.trips
            .get(&id)
            .cloned()
            .ok_or_else(|| trip_not_found_error(id))
    }

    fn list_open_trips(&self) -> Vec<Trip> {
        fetch_trips(&self.trips, &self.open_trips)
    }
}

impl Engine {
    fn complete_as_rider(&mut self, rider_index: usize, trip_id: TripId) -> Result<Trip, Error> {
        let position = match self.open_trips.iter().position(|id| *id == trip_id) {
            Some(position) => position,
            None => {
                return match self.trips.get(&trip_id) {
                    Some(trip) if trip.is_completed() => {
                        tracing::warn!(trip_id, "trip is already completed");
                        Err(invalid_state_error())
                    }
                    _ => Err(trip_not_found_error(trip_id)),
                };
            }
        };

        let trip = self
            .trips
            .get_mut(&trip_id)
            .ok_or_else(|| trip_not_found_error(trip_id))?;

        if !trip.is_in_progress() {
            tracing::warn!(trip_id, status = %trip.status, "trip is not in progress");
            return Err(invalid_state_error());
        }

        trip.complete()?;
        self.riders[rider_index].record_ride(trip_id);
        self.open_trips.remove(position);

        tracing::info!(trip_id, "trip completed by rider");

        Ok(trip.clone())
    }

    fn complete_as_driver(&mut self, driver_index: usize, trip_id: TripId) -> Result<Trip, Error> {
        let driver = &mut self.drivers[driver_index];

        if !driver.has_accepted(trip_id) {
            tracing::warn!(trip_id, "trip is not in the driver's history");
            return Err(trip_not_found_error(trip_id));
        }

        let trip = self
            .trips
            .get_mut(&trip_id)
            .ok_or_else(|| trip_not_found_error(trip_id))?;

        if !trip.is_in_progress() {
            tracing::warn!(trip_id, status = %trip.status, "trip is not in progress");
            return Err(invalid_state_error());
        }

        driver.free()?;
        trip.complete()?;
        self.open_trips.retain(|id| *id != trip_id);

        tracing::info!(trip_id, "trip completed by driver");

        Ok(trip.clone())
    }
}
