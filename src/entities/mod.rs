mod driver;
mod rider;
mod trip;

pub use driver::{Driver, DriverId, Status as DriverStatus};
pub use rider::{Rider, RiderId};
pub use trip::{Status as TripStatus, Trip, TripId, DEFAULT_FARE};

/// Case-insensitive name comparison used for every rider and driver lookup.
pub fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
