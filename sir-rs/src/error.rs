use std::fmt::{self, Display};
use std::io;

/// Crate-wide error type. Host-protocol failures wrap the underlying
/// io/serde/csv errors; model failures carry a message describing the
/// rejected parameter.
#[derive(Debug)]
pub enum SirError {
    Io(io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
    Parameter(String),
}

impl From<io::Error> for SirError {
    fn from(error: io::Error) -> Self {
        SirError::Io(error)
    }
}

impl From<serde_json::Error> for SirError {
    fn from(error: serde_json::Error) -> Self {
        SirError::Json(error)
    }
}

impl From<csv::Error> for SirError {
    fn from(error: csv::Error) -> Self {
        SirError::Csv(error)
    }
}

impl std::error::Error for SirError {}

impl Display for SirError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SirError::Io(error) => write!(f, "io error: {error}"),
            SirError::Json(error) => write!(f, "json error: {error}"),
            SirError::Csv(error) => write!(f, "csv error: {error}"),
            SirError::Parameter(message) => write!(f, "invalid parameter: {message}"),
        }
    }
}
