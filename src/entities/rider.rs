use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TripId;

pub type RiderId = Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rider {
    pub id: RiderId,
    pub name: String,
    pub phone_number: String,
    pub ride_history: Vec<TripId>,
}

impl Rider {
    pub fn new(name: String, phone_number: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone_number,
            ride_history: Vec::new(),
        }
    }

    pub fn record_ride(&mut self, trip_id: TripId) {
        self.ride_history.push(trip_id);
    }
}
