// std imports
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

// local imports
use wildcard::PatternError;

/// Error is an error which may occur in the library or the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("value {value} is out of range {min}..={max}")]
    OutOfRange { value: i128, min: i128, max: i128 },
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("empty input")]
    EmptyInput,
    #[error("unknown value {value:?}, use any of {known:?}")]
    UnknownVariant { value: String, known: Vec<String> },
    #[error("cannot recognize time {0:?}")]
    UnrecognizedTime(String),
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
