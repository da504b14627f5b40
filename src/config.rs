use std::env;
use std::str::FromStr;

use crate::entities::DEFAULT_FARE;
use crate::error::{config_error, Error};

const BASE_FARE_VAR: &str = "RIDESHARE_BASE_FARE";
const OUTPUT_VAR: &str = "RIDESHARE_OUTPUT";
const LOG_FILTER_VAR: &str = "RUST_LOG";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(config_error(format!(
                "{} must be `text` or `json`, got {:?}",
                OUTPUT_VAR, other
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_fare: f64,
    pub output: OutputFormat,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_fare: DEFAULT_FARE,
            output: OutputFormat::Text,
            log_filter: "info".into(),
        }
    }
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_fare = match lookup(BASE_FARE_VAR) {
            Some(raw) => parse_fare(&raw)?,
            None => defaults.base_fare,
        };

        let output = match lookup(OUTPUT_VAR) {
            Some(raw) => raw.parse()?,
            None => defaults.output,
        };

        let log_filter = lookup(LOG_FILTER_VAR).unwrap_or(defaults.log_filter);

        Ok(Self {
            base_fare,
            output,
            log_filter,
        })
    }
}

fn parse_fare(raw: &str) -> Result<f64, Error> {
    let fare: f64 = raw
        .trim()
        .parse()
        .map_err(|_| config_error(format!("{} is not a number: {:?}", BASE_FARE_VAR, raw)))?;

    if !fare.is_finite() || fare < 0.0 {
        return Err(config_error(format!(
            "{} must be finite and non-negative, got {}",
            BASE_FARE_VAR, fare
        )));
    }

    Ok(fare)
}
