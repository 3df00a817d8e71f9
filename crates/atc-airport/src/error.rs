use atc_core::AtcError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AirportError {
    /// Every gate slot is taken.  Ordinary scarcity — retry next tick.
    #[error("all {0} gates are occupied")]
    GatesFull(usize),

    /// No vacant runway meets the airframe's length/surface threshold.
    /// Ordinary scarcity — retry next tick or hold.
    #[error("no free compatible runway")]
    NoCompatibleRunway,

    /// The constructed graph violates a start-consistency invariant.
    #[error("inconsistent airport: {0}")]
    Inconsistent(String),

    #[error(transparent)]
    Core(#[from] AtcError),
}

pub type AirportResult<T> = Result<T, AirportError>;
