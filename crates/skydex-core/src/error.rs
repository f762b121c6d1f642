use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: malformed row: {reason}")]
    MalformedRow { line: usize, reason: String },

    #[error("line {line}: invalid delay-minutes value {value:?}")]
    InvalidMinutes { line: usize, value: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn malformed_row(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedRow {
            line,
            reason: reason.into(),
        }
    }

    pub fn invalid_minutes(line: usize, value: impl Into<String>) -> Self {
        Error::InvalidMinutes {
            line,
            value: value.into(),
        }
    }
}
