use crate::entities::TripId;
use crate::error::{format_error, Error};

pub const PHONE_NUMBER_DIGITS: usize = 10;

/// Exactly ten ASCII digits, nothing else.
pub fn is_valid_phone_number(input: &str) -> bool {
    input.len() == PHONE_NUMBER_DIGITS && input.chars().all(|c| c.is_ascii_digit())
}

pub fn parse_trip_id(input: &str) -> Result<TripId, Error> {
    input.trim().parse().map_err(|_| format_error(input))
}
