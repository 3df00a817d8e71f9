//! `atc-aircraft` — the aircraft entity for the `atc` airport simulator.
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`state`]    | `AircraftState` (31 tags), `StateFamily`, predicates    |
//! | [`aircraft`] | `Aircraft`, `AircraftSpec`, `Fuel`, `Passengers`        |
//!
//! The state handlers themselves live in `atc-sim`; this crate owns what an
//! aircraft *is* (identity, physical state, FSM tag, protocol counters) and
//! the tick-level physics (`burn_fuel`, `descend`, `ascend`).

pub mod aircraft;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use aircraft::{Aircraft, AircraftSpec, Fuel, Passengers};
pub use state::{AircraftState, StateFamily};
