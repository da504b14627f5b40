//! Text menu front end. Reads one answer per line and talks to the registry
//! only through the [`API`] traits.

mod input;

pub use input::{is_valid_phone_number, parse_trip_id, PHONE_NUMBER_DIGITS};

use std::io::{self, BufRead, Write};

use crate::{
    api::API,
    config::OutputFormat,
    entities::{Trip, TripId},
    error::Error,
};

const MENU: &str = "\
Welcome to the Ride-Sharing System!
User Menu:
1. Register as Rider
2. Register as Driver
3. Request a Ride (Riders only)
4. Accept a Ride (Drivers only)
5. Complete a Trip
6. View Ride History (Riders only)
7. View Trip History (Drivers only)
8. Display All Trips
9. Exit";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Role {
    Rider,
    Driver,
}

pub struct Console<'a, R, W> {
    api: &'a mut dyn API,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(api: &'a mut dyn API, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            api,
            input,
            output,
            format,
        }
    }

    /// Runs the menu until the user picks exit or the input ends.
    #[tracing::instrument(name = "Console::run", skip_all)]
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;

            let choice = match self.read_line()? {
                Some(choice) => choice,
                None => break,
            };

            match choice.as_str() {
                "1" => self.register(Role::Rider)?,
                "2" => self.register(Role::Driver)?,
                "3" => self.request_ride()?,
                "4" => self.accept_ride()?,
                "5" => self.complete_trip()?,
                "6" => self.ride_history()?,
                "7" => self.trip_history()?,
                "8" => self.display_open_trips()?,
                "9" => break,
                _ => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }

        self.output.flush()
    }

    fn register(&mut self, role: Role) -> io::Result<()> {
        let name = match self.prompt("Enter Name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };

        let mut phone_number = match self.prompt("Enter Phone Number (10 digits): ")? {
            Some(phone_number) => phone_number,
            None => return Ok(()),
        };

        while !is_valid_phone_number(&phone_number) {
            let retry = self.prompt("Invalid phone number. Please enter again (10 digits): ")?;
            phone_number = match retry {
                Some(phone_number) => phone_number,
                None => return Ok(()),
            };
        }

        let result = match role {
            Role::Rider => self
                .api
                .register_rider(name, phone_number)
                .map(|_| "Rider registered successfully!"),
            Role::Driver => self
                .api
                .register_driver(name, phone_number)
                .map(|_| "Driver registered successfully!"),
        };

        match result {
            Ok(message) => writeln!(self.output, "{}", message),
            Err(err) => self.report(&err),
        }
    }

    fn request_ride(&mut self) -> io::Result<()> {
        if self.api.riders().is_empty() {
            return writeln!(self.output, "No registered riders.");
        }

        let name = match self.prompt("Enter your name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };

        if self.api.find_rider_by_name(&name).is_err() {
            return writeln!(self.output, "Rider not found.");
        }

        let start_location = match self.prompt("Enter Start Location: ")? {
            Some(start_location) => start_location,
            None => return Ok(()),
        };
        let destination = match self.prompt("Enter Destination: ")? {
            Some(destination) => destination,
            None => return Ok(()),
        };

        match self.api.request_ride(&name, start_location, destination) {
            Ok(trip) => writeln!(
                self.output,
                "Ride requested successfully! Trip ID: {}",
                trip.id
            ),
            Err(err) => self.report(&err),
        }
    }

    fn accept_ride(&mut self) -> io::Result<()> {
        if self.api.drivers().is_empty() {
            return writeln!(self.output, "No registered drivers.");
        }

        let name = match self.prompt("Enter your name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };

        let driver = match self.api.find_driver_by_name(&name) {
            Ok(driver) => driver,
            Err(_) => return writeln!(self.output, "Driver not found."),
        };

        if !driver.is_available() {
            return writeln!(self.output, "Driver is not available.");
        }

        let open_trips = self.api.list_open_trips();
        if open_trips.is_empty() {
            return writeln!(self.output, "No ride requests available.");
        }

        writeln!(self.output, "Available Ride Requests:")?;
        for trip in open_trips.iter().filter(|trip| trip.is_pending()) {
            writeln!(
                self.output,
                "Trip ID: {}, From: {}, To: {}",
                trip.id, trip.start_location, trip.destination
            )?;
        }

        let trip_id = match self.prompt_trip_id("Enter Trip ID to accept: ")? {
            Some(trip_id) => trip_id,
            None => return Ok(()),
        };

        match self.api.accept_ride(&name, trip_id) {
            Ok(_) => writeln!(self.output, "Ride accepted successfully!"),
            Err(err) => self.report(&err),
        }
    }

    fn complete_trip(&mut self) -> io::Result<()> {
        let name = match self.prompt("Enter your name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };

        if self.api.find_rider_by_name(&name).is_err()
            && self.api.find_driver_by_name(&name).is_err()
        {
            return writeln!(self.output, "User not found.");
        }

        let trip_id = match self.prompt_trip_id("Enter Trip ID to complete: ")? {
            Some(trip_id) => trip_id,
            None => return Ok(()),
        };

        match self.api.complete_trip(&name, trip_id) {
            Ok(_) => writeln!(self.output, "Trip completed successfully!"),
            Err(err) => self.report(&err),
        }
    }

    fn ride_history(&mut self) -> io::Result<()> {
        let name = match self.prompt("Enter your name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };

        match self.api.ride_history(&name) {
            Ok(trips) => {
                writeln!(self.output, "Ride History:")?;
                self.write_trips(&trips)
            }
            Err(_) => writeln!(self.output, "Rider not found."),
        }
    }

    fn trip_history(&mut self) -> io::Result<()> {
        let name = match self.prompt("Enter your name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };

        match self.api.trip_history(&name) {
            Ok(trips) => {
                writeln!(self.output, "Trip History:")?;
                self.write_trips(&trips)
            }
            Err(_) => writeln!(self.output, "Driver not found."),
        }
    }

    fn display_open_trips(&mut self) -> io::Result<()> {
        let trips = self.api.list_open_trips();

        if trips.is_empty() {
            return writeln!(self.output, "No trips available.");
        }

        self.write_trips(&trips)
    }

    fn write_trips(&mut self, trips: &[Trip]) -> io::Result<()> {
        for trip in trips {
            match self.format {
                OutputFormat::Text => writeln!(self.output, "{}", trip)?,
                OutputFormat::Json => writeln!(self.output, "{}", serde_json::to_string(trip)?)?,
            }
        }

        Ok(())
    }

    fn report(&mut self, err: &Error) -> io::Result<()> {
        tracing::warn!(code = err.code, "{}", err.message);

        let message = if err.is_format_error() {
            "Invalid Trip ID format.".to_string()
        } else if err.is_invalid_state_error() {
            "Trip is not in a state that allows this operation.".to_string()
        } else if err.is_unavailable_error() {
            "Driver is not available.".to_string()
        } else if err.is_no_open_trips_error() {
            "No ride requests available.".to_string()
        } else {
            format!("Error: {}", err.message)
        };

        writeln!(self.output, "{}", message)
    }

    fn prompt_trip_id(&mut self, question: &str) -> io::Result<Option<TripId>> {
        let answer = match self.prompt(question)? {
            Some(answer) => answer,
            None => return Ok(None),
        };

        match parse_trip_id(&answer) {
            Ok(trip_id) => Ok(Some(trip_id)),
            Err(err) => {
                self.report(&err)?;
                Ok(None)
            }
        }
    }

    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        self.read_line()
    }

    /// Next line without surrounding whitespace, or `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::api::{DriverAPI, RiderAPI, TripAPI};
    use crate::engine::Engine;

    fn run(engine: &mut Engine, format: OutputFormat, lines: &[&str]) -> String {
        let input = Cursor::new(lines.join("\n"));
        let mut output = Vec::new();

        Console::new(engine, input, &mut output, format)
            .run()
            .unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn full_session_through_the_menu() {
        let mut engine = Engine::default();

        let output = run(
            &mut engine,
            OutputFormat::Text,
            &[
                "1", "Ana", "1112223333", // rider
                "2", "Bo", "555", "4445556666", // driver, first phone rejected
                "3", "ana", "A", "B", // request
                "4", "Bo", "1", // accept
                "5", "Bo", "1", // complete as driver
                "7", "Bo", // trip history
                "9",
            ],
        );

        assert!(output.contains("Rider registered successfully!"));
        assert!(output.contains("Invalid phone number. Please enter again (10 digits): "));
        assert!(output.contains("Driver registered successfully!"));
        assert!(output.contains("Ride requested successfully! Trip ID: 1"));
        assert!(output.contains("Trip ID: 1, From: A, To: B"));
        assert!(output.contains("Ride accepted successfully!"));
        assert!(output.contains("Trip completed successfully!"));
        assert!(output.contains(
            "Trip ID: 1, Rider: Ana, Driver: Bo, From: A, To: B, Fare: 20.00, Status: Completed"
        ));

        assert_eq!(engine.find_driver_by_name("Bo").unwrap().phone_number, "4445556666");
        assert!(engine.find_driver_by_name("Bo").unwrap().is_available());
    }

    #[test]
    fn reports_missing_users_and_trips() {
        let mut engine = Engine::default();

        let output = run(
            &mut engine,
            OutputFormat::Text,
            &["3", "4", "8", "5", "Zed", "6", "Zed", "7", "Zed", "0"],
        );

        assert!(output.contains("No registered riders."));
        assert!(output.contains("No registered drivers."));
        assert!(output.contains("No trips available."));
        assert!(output.contains("User not found."));
        assert!(output.contains("Rider not found."));
        assert!(output.contains("Driver not found."));
        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn rejects_malformed_trip_id() {
        let mut engine = Engine::default();
        engine.register_rider("Ana".into(), "1112223333".into()).unwrap();
        engine.register_driver("Bo".into(), "4445556666".into()).unwrap();
        engine.request_ride("Ana", "A".into(), "B".into()).unwrap();

        let output = run(&mut engine, OutputFormat::Text, &["4", "Bo", "first", "9"]);

        assert!(output.contains("Invalid Trip ID format."));
        assert!(engine.find_trip(1).unwrap().is_pending());
    }

    #[test]
    fn busy_driver_is_turned_away_before_choosing_a_trip() {
        let mut engine = Engine::default();
        engine.register_rider("Ana".into(), "1112223333".into()).unwrap();
        engine.register_driver("Bo".into(), "4445556666".into()).unwrap();
        engine.request_ride("Ana", "A".into(), "B".into()).unwrap();
        engine.request_ride("Ana", "C".into(), "D".into()).unwrap();
        engine.accept_ride("Bo", 1).unwrap();

        let output = run(&mut engine, OutputFormat::Text, &["4", "Bo", "9"]);

        assert!(output.contains("Driver is not available."));
        assert!(!output.contains("Enter Trip ID to accept: "));
    }

    #[test]
    fn completing_pending_trip_is_reported() {
        let mut engine = Engine::default();
        engine.register_rider("Ana".into(), "1112223333".into()).unwrap();
        engine.request_ride("Ana", "A".into(), "B".into()).unwrap();

        let output = run(&mut engine, OutputFormat::Text, &["5", "Ana", "1", "9"]);

        assert!(output.contains("Trip is not in a state that allows this operation."));
        assert_eq!(engine.list_open_trips().len(), 1);
    }

    #[test]
    fn json_output_writes_one_object_per_trip() {
        let mut engine = Engine::default();
        engine.register_rider("Ana".into(), "1112223333".into()).unwrap();
        engine.request_ride("Ana", "A".into(), "B".into()).unwrap();
        engine.request_ride("Ana", "C".into(), "D".into()).unwrap();

        let output = run(&mut engine, OutputFormat::Json, &["8", "9"]);

        let trips: Vec<serde_json::Value> = output
            .lines()
            .filter(|line| line.starts_with('{'))
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0]["id"], 1);
        assert_eq!(trips[1]["destination"], "D");
        assert_eq!(trips[0]["status"]["name"], "pending");
        assert_eq!(trips[0]["driver_name"], serde_json::Value::Null);
    }

    #[test]
    fn stops_at_end_of_input() {
        let mut engine = Engine::default();

        let output = run(&mut engine, OutputFormat::Text, &["1", "Ana"]);

        assert!(output.contains("Enter Phone Number (10 digits): "));
        assert!(output.ends_with(&format!("{}\n", MENU)));
        assert!(engine.riders().is_empty());
    }
}
