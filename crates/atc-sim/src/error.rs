use atc_airport::AirportError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// The input airport failed its start-consistency check.
    #[error("invalid start configuration: {0}")]
    InvalidStart(#[from] AirportError),
}

pub type SimResult<T> = Result<T, SimError>;
