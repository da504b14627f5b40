use super::helpers::{fetch_driver_position, fetch_trips};
use super::Engine;

use crate::{
    api::DriverAPI,
    entities::{Driver, DriverId, Trip},
    error::{not_found_error, Error},
};

impl DriverAPI for Engine {
    #[tracing::instrument(skip(self, phone_number))]
    fn register_driver(&mut self, name: String, phone_number: String) -> Result<Driver, Error> {
        let driver = Driver::new(name, phone_number);

        self.drivers.push(driver.clone());

        tracing::info!(driver_id = %driver.id, "driver registered");

        Ok(driver)
    }

    fn find_driver(&self, id: DriverId) -> Result<Driver, Error> {
        self.drivers
            .iter()
            .find(|driver| driver.id == id)
            .cloned()
            .ok_or_else(|| not_found_error(format!("driver {} not found", id)))
    }

    fn find_driver_by_name(&self, name: &str) -> Result<Driver, Error> {
        let index = fetch_driver_position(&self.drivers, name)?;

        Ok(self.drivers[index].clone())
    }

    fn drivers(&self) -> Vec<Driver> {
        self.drivers.clone()
    }

    #[tracing::instrument(skip(self))]
    fn trip_history(&self, driver_name: &str) -> Result<Vec<Trip>, Error> {
        let index = fetch_driver_position(&self.drivers, driver_name)?;

        Ok(fetch_trips(&self.trips, &self.drivers[index].trip_history))
    }
}
