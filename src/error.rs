use std::env;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl Error {
    pub fn is_internal_error(&self) -> bool {
        (1..=99).contains(&self.code)
    }

    pub fn is_not_found_error(&self) -> bool {
        self.code == 100
    }

    pub fn is_unavailable_error(&self) -> bool {
        self.code == 101
    }

    pub fn is_no_open_trips_error(&self) -> bool {
        self.code == 102
    }

    pub fn is_invalid_state_error(&self) -> bool {
        self.code == 103
    }

    pub fn is_format_error(&self) -> bool {
        self.code == 104
    }
}

pub fn not_found_error(message: impl Into<String>) -> Error {
    Error {
        code: 100,
        message: message.into(),
    }
}

pub fn unavailable_error() -> Error {
    Error {
        code: 101,
        message: "driver is not available".into(),
    }
}

pub fn no_open_trips_error() -> Error {
    Error {
        code: 102,
        message: "no ride requests available".into(),
    }
}

pub fn invalid_state_error() -> Error {
    Error {
        code: 103,
        message: "trip is not in a valid state for this operation".into(),
    }
}

pub fn format_error(input: &str) -> Error {
    Error {
        code: 104,
        message: format!("invalid trip id format: {:?}", input),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn config_error(message: impl Into<String>) -> Error {
    Error {
        code: 2,
        message: message.into(),
    }
}
