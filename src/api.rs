use crate::entities::{Driver, DriverId, Rider, RiderId, Trip, TripId};
use crate::error::Error;

pub trait RiderAPI {
    fn register_rider(&mut self, name: String, phone_number: String) -> Result<Rider, Error>;
    fn find_rider(&self, id: RiderId) -> Result<Rider, Error>;
    fn find_rider_by_name(&self, name: &str) -> Result<Rider, Error>;
    fn riders(&self) -> Vec<Rider>;

    /// Completed trips of the first rider named `rider_name`, in completion order.
    fn ride_history(&self, rider_name: &str) -> Result<Vec<Trip>, Error>;
}

pub trait DriverAPI {
    fn register_driver(&mut self, name: String, phone_number: String) -> Result<Driver, Error>;
    fn find_driver(&self, id: DriverId) -> Result<Driver, Error>;
    fn find_driver_by_name(&self, name: &str) -> Result<Driver, Error>;
    fn drivers(&self) -> Vec<Driver>;

    /// Every trip the driver accepted, including the one still in progress.
    fn trip_history(&self, driver_name: &str) -> Result<Vec<Trip>, Error>;
}

pub trait TripAPI {
    fn request_ride(
        &mut self,
        rider_name: &str,
        start_location: String,
        destination: String,
    ) -> Result<Trip, Error>;
    fn accept_ride(&mut self, driver_name: &str, trip_id: TripId) -> Result<Trip, Error>;
    fn complete_trip(&mut self, user_name: &str, trip_id: TripId) -> Result<Trip, Error>;
    fn find_trip(&self, id: TripId) -> Result<Trip, Error>;
    fn list_open_trips(&self) -> Vec<Trip>;
}

pub trait API: RiderAPI + DriverAPI + TripAPI {}
