//! `atc-airport` — the shared resource pool of the `atc` airport simulator.
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`location`]| `Location` — taxi-chain waypoint arena node              |
//! | [`runway`]  | `Runway` — occupancy slots and compatibility matching    |
//! | [`airport`] | `Airport` — arenas, gates, altitude slots, allocator     |
//! | [`builder`] | `AirportBuilder` — the loader-facing construction seam   |
//! | [`error`]   | `AirportError`                                           |
//!
//! # Ownership model
//!
//! The airport owns every entity: aircraft, locations, runways, gate slots.
//! Entities refer to each other through typed IDs (`atc-core`), never through
//! owning references, so the whole relational graph is a plain `Clone`
//! ([`Airport::clone_graph`]).
//!
//! # Error tiers
//!
//! Structural misuse (releasing a gate the caller does not hold, occupying a
//! non-vacant altitude slot) is a programming error and panics immediately.
//! Simulated-world scarcity (gates full, no compatible runway) is an ordinary
//! `Err` the caller retries on a later tick.

pub mod airport;
pub mod builder;
pub mod error;
pub mod location;
pub mod runway;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use airport::Airport;
pub use builder::AirportBuilder;
pub use error::{AirportError, AirportResult};
pub use location::Location;
pub use runway::Runway;
