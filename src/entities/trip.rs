use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{invalid_state_error, Error};

pub type TripId = u32;

/// Fare charged for every trip unless the engine is configured otherwise.
pub const DEFAULT_FARE: f64 = 20.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub status: Status,
    pub rider_name: String,
    pub driver_name: Option<String>,
    pub start_location: String,
    pub destination: String,
    pub fare: f64,
    pub requested_at: DateTime<Utc>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
pub enum Status {
    Pending,
    InProgress,
    Completed,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Pending => "pending".into(),
            Self::InProgress => "in_progress".into(),
            Self::Completed => "completed".into(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Pending => "Pending",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
        };

        f.write_str(label)
    }
}

impl Trip {
    pub fn new(
        id: TripId,
        rider_name: String,
        start_location: String,
        destination: String,
        fare: f64,
    ) -> Self {
        Self {
            id,
            status: Status::Pending,
            rider_name,
            driver_name: None,
            start_location,
            destination,
            fare,
            requested_at: Utc::now(),
            accepted_at: None,
            completed_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.status, Status::Pending)
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self.status, Status::InProgress)
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.status, Status::Completed)
    }

    #[tracing::instrument(skip(self), fields(trip_id = self.id))]
    pub fn start(&mut self, driver_name: String) -> Result<(), Error> {
        match self.status {
            Status::Pending => {
                self.driver_name = Some(driver_name);
                self.status = Status::InProgress;
                self.accepted_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(invalid_state_error()),
        }
    }

    #[tracing::instrument(skip(self), fields(trip_id = self.id))]
    pub fn complete(&mut self) -> Result<(), Error> {
        match self.status {
            Status::InProgress => {
                self.status = Status::Completed;
                self.completed_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(invalid_state_error()),
        }
    }
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trip ID: {}, Rider: {}, Driver: {}, From: {}, To: {}, Fare: {:.2}, Status: {}",
            self.id,
            self.rider_name,
            self.driver_name.as_deref().unwrap_or(""),
            self.start_location,
            self.destination,
            self.fare,
            self.status,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending_trip() -> Trip {
        Trip::new(1, "Ana".into(), "A".into(), "B".into(), DEFAULT_FARE)
    }

    #[test]
    fn new_trip_is_pending_without_driver() {
        let trip = pending_trip();

        assert!(trip.is_pending());
        assert_eq!(trip.driver_name, None);
        assert_eq!(trip.fare, 20.0);
        assert!(trip.accepted_at.is_none());
    }

    #[test]
    fn status_advances_in_order() {
        let mut trip = pending_trip();

        trip.start("Bo".into()).unwrap();
        assert!(trip.is_in_progress());
        assert_eq!(trip.driver_name.as_deref(), Some("Bo"));
        assert!(trip.accepted_at.is_some());

        trip.complete().unwrap();
        assert!(trip.is_completed());
        assert!(trip.completed_at.is_some());
    }

    #[test]
    fn pending_trip_cannot_complete() {
        let mut trip = pending_trip();

        let err = trip.complete().unwrap_err();
        assert!(err.is_invalid_state_error());
        assert!(trip.is_pending());
    }

    #[test]
    fn transitions_are_not_reversible() {
        let mut trip = pending_trip();
        trip.start("Bo".into()).unwrap();

        assert!(trip.start("Cy".into()).unwrap_err().is_invalid_state_error());
        assert_eq!(trip.driver_name.as_deref(), Some("Bo"));

        trip.complete().unwrap();
        assert!(trip.complete().unwrap_err().is_invalid_state_error());
        assert!(trip.start("Cy".into()).unwrap_err().is_invalid_state_error());
        assert!(trip.is_completed());
    }

    #[test]
    fn status_serializes_tagged_by_name() {
        let json = serde_json::to_value(Status::InProgress).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "in_progress" }));
        assert_eq!(Status::InProgress.name(), "in_progress");
    }

    #[test]
    fn display_renders_one_line() {
        let trip = pending_trip();

        assert_eq!(
            trip.to_string(),
            "Trip ID: 1, Rider: Ana, Driver: , From: A, To: B, Fare: 20.00, Status: Pending"
        );
    }
}
