//! Error types.

use thiserror::Error;

/// Reasons a string is not accepted as an ISO `YYYY-MM-DD` date.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseDateError {
    #[error("date is empty")]
    Empty,

    #[error("expected a date in YYYY-MM-DD format, found {0:?}")]
    Malformed(String),

    #[error("year {0} is not supported (years start from 0001)")]
    YearOutOfRange(i32),

    #[error("month {0} is not in 1..=12")]
    MonthOutOfRange(i32),

    #[error("{year:04}-{month:02} has no day {day}")]
    NoSuchDay { year: i32, month: i32, day: i32 },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid start date: {0}")]
    StartDate(#[source] ParseDateError),

    #[error("invalid end date: {0}")]
    EndDate(#[source] ParseDateError),

    #[error("end date precedes start date")]
    OutOfRange,

    #[error("date {0} is outside the supported range")]
    UnsupportedDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid configuration value for `{field}`: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
