use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TripId;
use crate::error::{invalid_state_error, unavailable_error, Error};

pub type DriverId = Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub phone_number: String,
    pub status: Status,
    pub trip_history: Vec<TripId>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Available,
    Assigned { trip_id: TripId },
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Available => "available".into(),
            Self::Assigned { trip_id: _ } => "assigned".into(),
        }
    }
}

impl Driver {
    pub fn new(name: String, phone_number: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone_number,
            status: Status::Available,
            trip_history: Vec::new(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, Status::Available)
    }

    /// Takes on `trip_id` and records it in the trip history.
    #[tracing::instrument(skip(self), fields(driver_id = %self.id))]
    pub fn assign(&mut self, trip_id: TripId) -> Result<(), Error> {
        match self.status {
            Status::Available => {
                self.status = Status::Assigned { trip_id };
                self.trip_history.push(trip_id);
                Ok(())
            }
            _ => Err(unavailable_error()),
        }
    }

    #[tracing::instrument(skip(self), fields(driver_id = %self.id))]
    pub fn free(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Assigned { trip_id: _ } => {
                self.status = Status::Available;
                Ok(())
            }
            _ => Err(invalid_state_error()),
        }
    }

    pub fn has_accepted(&self, trip_id: TripId) -> bool {
        self.trip_history.contains(&trip_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> Driver {
        Driver::new("Bo".into(), "4445556666".into())
    }

    #[test]
    fn new_driver_is_available() {
        let driver = driver();

        assert!(driver.is_available());
        assert!(driver.trip_history.is_empty());
        assert_eq!(driver.status.name(), "available");
    }

    #[test]
    fn assign_records_history_and_blocks_second_assignment() {
        let mut driver = driver();

        driver.assign(1).unwrap();
        assert!(!driver.is_available());
        assert_eq!(driver.status, Status::Assigned { trip_id: 1 });
        assert!(driver.has_accepted(1));

        let err = driver.assign(2).unwrap_err();
        assert!(err.is_unavailable_error());
        assert_eq!(driver.trip_history, vec![1]);
    }

    #[test]
    fn free_restores_availability() {
        let mut driver = driver();
        driver.assign(1).unwrap();

        driver.free().unwrap();
        assert!(driver.is_available());
        assert!(driver.has_accepted(1));

        assert!(driver.free().unwrap_err().is_invalid_state_error());
    }

    #[test]
    fn drivers_get_distinct_ids() {
        assert_ne!(driver().id, driver().id);
    }
}
