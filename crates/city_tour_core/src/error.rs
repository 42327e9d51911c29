use std::path::PathBuf;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("input not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("edge {edge} references city id {id} but only {city_count} cities exist")]
    IndexOutOfRange {
        edge: usize,
        id: usize,
        city_count: usize,
    },
    #[error("edge {edge} has non-finite weight {weight}")]
    NonFiniteWeight { edge: usize, weight: f64 },
    #[error("help requested")]
    HelpRequested,
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
